//! Match Probability - compatibility scoring for Lume match filters
//!
//! This library turns a user's filter choices (age range, income floor, height
//! range, race, and two yes/no preferences) into a probability between 0 and 1.
//! It validates the raw submission first and reports per-field errors for the
//! form to display.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::core::{accept, score, validate, FilterError, ScoreEngine};
pub use models::{
    AgeRange, ContractViolation, FilterForm, FilterInput, HeightRange, RaceCategory,
    ScoreResult, ValidationResult,
};
