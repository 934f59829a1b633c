// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AgeRange, ContractViolation, FilterInput, HeightRange, RaceCategory};
pub use requests::{FilterForm, IncomeValue};
pub use responses::{ScoreResult, ValidationResult};
