// Core algorithm exports
pub mod engine;
pub mod scoring;
pub mod validator;

pub use engine::ScoreEngine;
pub use scoring::score;
pub use validator::{accept, validate, FilterError};
