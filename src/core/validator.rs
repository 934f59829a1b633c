use thiserror::Error;
use crate::models::{
    AgeRange, ContractViolation, FilterForm, FilterInput, HeightRange, ValidationResult,
};

pub const AGE_RANGE_FIELD: &str = "ageRange";
pub const INCOME_FIELD: &str = "incomeFloor";
pub const HEIGHT_RANGE_FIELD: &str = "heightRange";
pub const RACE_FIELD: &str = "race";

pub const AGE_RANGE_MESSAGE: &str = "Please select both minimum and maximum age.";
pub const INCOME_MESSAGE: &str = "Please select income.";
pub const HEIGHT_RANGE_MESSAGE: &str = "Please select both minimum and maximum height.";
pub const RACE_MESSAGE: &str = "Please select a race.";

/// Why a form could not be turned into a scorable `FilterInput`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("validation failed: {0}")]
    Invalid(ValidationResult),

    #[error(transparent)]
    ContractViolation(#[from] ContractViolation),
}

/// Check a submission for structural completeness.
///
/// Every check runs; the result holds one message per failing field.
pub fn validate(form: &FilterForm) -> ValidationResult {
    let mut result = ValidationResult::new();

    if pair(&form.age_range).is_none() {
        result.insert(AGE_RANGE_FIELD, AGE_RANGE_MESSAGE);
    }

    if form.income_floor.as_ref().and_then(|income| income.amount()).is_none() {
        result.insert(INCOME_FIELD, INCOME_MESSAGE);
    }

    if pair(&form.height_range).is_none() {
        result.insert(HEIGHT_RANGE_FIELD, HEIGHT_RANGE_MESSAGE);
    }

    if !form.race.is_set() {
        result.insert(RACE_FIELD, RACE_MESSAGE);
    }

    result
}

/// Validate a submission and build the `FilterInput` it describes.
///
/// Structural problems come back as [`FilterError::Invalid`]. Values that are
/// present but outside their domain (a reversed range, an income above the
/// slider maximum, NaN) are caller bugs and come back as
/// [`FilterError::ContractViolation`].
pub fn accept(form: &FilterForm) -> Result<FilterInput, FilterError> {
    let errors = validate(form);
    if !errors.is_valid() {
        tracing::debug!(
            "Filter validation failed for fields: {:?}",
            errors.fields().collect::<Vec<_>>()
        );
        return Err(FilterError::Invalid(errors));
    }

    let (age_min, age_max) = pair(&form.age_range)
        .ok_or_else(|| ContractViolation::new(AGE_RANGE_FIELD, "expected two values"))?;
    let (height_min, height_max) = pair(&form.height_range)
        .ok_or_else(|| ContractViolation::new(HEIGHT_RANGE_FIELD, "expected two values"))?;
    let income = form
        .income_floor
        .as_ref()
        .and_then(|income| income.amount())
        .ok_or_else(|| ContractViolation::new(INCOME_FIELD, "missing amount"))?;

    let input = FilterInput::new(
        AgeRange::new(age_min, age_max)?,
        income,
        HeightRange::new(height_min, height_max)?,
        form.race,
        form.marital_preference,
        form.weight_preference,
    )?;

    Ok(input)
}

#[inline]
fn pair<T: Copy>(values: &[T]) -> Option<(T, T)> {
    match values {
        [min, max] => Some((*min, *max)),
        _ => None,
    }
}
