use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 85;
pub const MAX_INCOME: f64 = 500_000.0;
pub const MIN_HEIGHT_FT: f64 = 4.0;
pub const MAX_HEIGHT_FT: f64 = 7.0;

/// A value handed to the core that lies outside its declared domain.
///
/// This is a caller bug rather than a user mistake, so it is never folded
/// into a `ValidationResult`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("contract violation on {field}: {reason}")]
pub struct ContractViolation {
    pub field: &'static str,
    pub reason: String,
}

impl ContractViolation {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Race preference picked from the filter form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaceCategory {
    White,
    Black,
    Asian,
    Any,
    /// Placeholder option, nothing chosen yet
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl RaceCategory {
    /// Look up a category by its form value; `None` for anything outside the set
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "white" => Some(RaceCategory::White),
            "black" => Some(RaceCategory::Black),
            "asian" => Some(RaceCategory::Asian),
            "any" => Some(RaceCategory::Any),
            "" => Some(RaceCategory::Unset),
            _ => None,
        }
    }

    pub fn is_set(self) -> bool {
        self != RaceCategory::Unset
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RaceCategory::White => "white",
            RaceCategory::Black => "black",
            RaceCategory::Asian => "asian",
            RaceCategory::Any => "any",
            RaceCategory::Unset => "",
        }
    }
}

/// Preferred age range in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Result<Self, ContractViolation> {
        if min < MIN_AGE || max > MAX_AGE {
            return Err(ContractViolation::new(
                "ageRange",
                format!("({min}, {max}) outside {MIN_AGE}..={MAX_AGE}"),
            ));
        }
        if min > max {
            return Err(ContractViolation::new(
                "ageRange",
                format!("minimum {min} exceeds maximum {max}"),
            ));
        }
        Ok(Self { min, max })
    }
}

/// Preferred height range in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeightRange {
    pub min: f64,
    pub max: f64,
}

impl HeightRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ContractViolation> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ContractViolation::new("heightRange", "not a finite number"));
        }
        if min < MIN_HEIGHT_FT || max > MAX_HEIGHT_FT {
            return Err(ContractViolation::new(
                "heightRange",
                format!("({min}, {max}) outside {MIN_HEIGHT_FT}..={MAX_HEIGHT_FT}"),
            ));
        }
        if min > max {
            return Err(ContractViolation::new(
                "heightRange",
                format!("minimum {min} exceeds maximum {max}"),
            ));
        }
        Ok(Self { min, max })
    }
}

/// Validated filter preferences for a single evaluation.
///
/// Fields are private: a `FilterInput` can only come out of [`FilterInput::new`]
/// or the validator, so holding one means every value is inside its domain and
/// a race has been chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterInput {
    age_range: AgeRange,
    income_floor: f64,
    height_range: HeightRange,
    race_category: RaceCategory,
    marital_preference: bool,
    weight_preference: bool,
}

impl FilterInput {
    pub fn new(
        age_range: AgeRange,
        income_floor: f64,
        height_range: HeightRange,
        race_category: RaceCategory,
        marital_preference: bool,
        weight_preference: bool,
    ) -> Result<Self, ContractViolation> {
        if !income_floor.is_finite() {
            return Err(ContractViolation::new("incomeFloor", "not a finite number"));
        }
        if !(0.0..=MAX_INCOME).contains(&income_floor) {
            return Err(ContractViolation::new(
                "incomeFloor",
                format!("{income_floor} outside 0..={MAX_INCOME}"),
            ));
        }
        if !race_category.is_set() {
            return Err(ContractViolation::new("race", "race category is unset"));
        }

        Ok(Self {
            age_range,
            income_floor,
            height_range,
            race_category,
            marital_preference,
            weight_preference,
        })
    }

    pub fn age_range(&self) -> AgeRange {
        self.age_range
    }

    pub fn income_floor(&self) -> f64 {
        self.income_floor
    }

    pub fn height_range(&self) -> HeightRange {
        self.height_range
    }

    pub fn race_category(&self) -> RaceCategory {
        self.race_category
    }

    pub fn marital_preference(&self) -> bool {
        self.marital_preference
    }

    pub fn weight_preference(&self) -> bool {
        self.weight_preference
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> Result<FilterInput, ContractViolation> {
        FilterInput::new(
            AgeRange::new(18, 85)?,
            70_000.0,
            HeightRange::new(4.5, 6.0)?,
            RaceCategory::Any,
            false,
            false,
        )
    }

    #[test]
    fn test_valid_input() {
        let input = sample_input().unwrap();
        assert_eq!(input.age_range(), AgeRange { min: 18, max: 85 });
        assert_eq!(input.income_floor(), 70_000.0);
        assert_eq!(input.race_category(), RaceCategory::Any);
    }

    #[test]
    fn test_age_range_bounds() {
        assert!(AgeRange::new(17, 30).is_err());
        assert!(AgeRange::new(18, 86).is_err());
        assert!(AgeRange::new(40, 30).is_err());
        assert!(AgeRange::new(30, 30).is_ok());
    }

    #[test]
    fn test_height_range_rejects_nan() {
        let err = HeightRange::new(f64::NAN, 6.0).unwrap_err();
        assert_eq!(err.field, "heightRange");
        assert!(HeightRange::new(3.9, 6.0).is_err());
        assert!(HeightRange::new(6.5, 6.0).is_err());
    }

    #[test]
    fn test_income_out_of_range() {
        let age = AgeRange::new(20, 30).unwrap();
        let height = HeightRange::new(5.0, 6.0).unwrap();
        for income in [-1.0, 500_001.0, f64::INFINITY] {
            let err = FilterInput::new(age, income, height, RaceCategory::Black, false, false)
                .unwrap_err();
            assert_eq!(err.field, "incomeFloor");
        }
    }

    #[test]
    fn test_unset_race_is_contract_violation() {
        let age = AgeRange::new(20, 30).unwrap();
        let height = HeightRange::new(5.0, 6.0).unwrap();
        let err = FilterInput::new(age, 0.0, height, RaceCategory::Unset, false, false)
            .unwrap_err();
        assert_eq!(err.to_string(), "contract violation on race: race category is unset");
    }

    #[test]
    fn test_race_category_serde() {
        let race: RaceCategory = serde_json::from_str("\"asian\"").unwrap();
        assert_eq!(race, RaceCategory::Asian);
        let unset: RaceCategory = serde_json::from_str("\"\"").unwrap();
        assert_eq!(unset, RaceCategory::Unset);
        assert_eq!(serde_json::to_string(&RaceCategory::Any).unwrap(), "\"any\"");
    }

    #[test]
    fn test_filter_input_serializes_camel_case() {
        let json = serde_json::to_value(sample_input().unwrap()).unwrap();
        assert_eq!(json["ageRange"]["min"], 18);
        assert_eq!(json["incomeFloor"], 70_000.0);
        assert_eq!(json["raceCategory"], "any");
        assert_eq!(json["maritalPreference"], false);
    }
}
