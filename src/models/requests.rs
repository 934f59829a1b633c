use serde::{Deserialize, Deserializer, Serialize};
use crate::models::domain::RaceCategory;

/// Raw filter submission as collected by the form.
///
/// Everything may be missing or half-filled; the validator decides whether the
/// submission can be scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterForm {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub age_range: Vec<u8>,
    #[serde(default, alias = "incomeRange")]
    pub income_floor: Option<IncomeValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub height_range: Vec<f64>,
    #[serde(default, alias = "raceCategory", deserialize_with = "race_or_unset")]
    pub race: RaceCategory,
    #[serde(default, alias = "maritalStatus")]
    pub marital_preference: bool,
    #[serde(default, alias = "obese")]
    pub weight_preference: bool,
}

impl FilterForm {
    /// The form's initial state: every slider at its default, no race chosen
    pub fn initial() -> Self {
        Self {
            age_range: vec![18, 85],
            income_floor: Some(IncomeValue::Amount(70_000.0)),
            height_range: vec![4.5, 6.0],
            race: RaceCategory::Unset,
            marital_preference: false,
            weight_preference: false,
        }
    }
}

/// Income as sent by the client: a bare amount, or the single-handle slider's
/// one-element list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncomeValue {
    Amount(f64),
    Slider(Vec<f64>),
}

impl IncomeValue {
    pub fn amount(&self) -> Option<f64> {
        match self {
            IncomeValue::Amount(amount) => Some(*amount),
            IncomeValue::Slider(values) => values.first().copied(),
        }
    }
}

/// Treat an explicit `null` range like a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` and names outside the category set both count as no race chosen
fn race_or_unset<'de, D>(deserializer: D) -> Result<RaceCategory, D::Error>
where
    D: Deserializer<'de>,
{
    let name = Option::<String>::deserialize(deserializer)?;
    let race = name
        .as_deref()
        .and_then(RaceCategory::from_name)
        .unwrap_or_default();
    if race == RaceCategory::Unset {
        if let Some(name) = name.as_deref().filter(|n| !n.is_empty()) {
            tracing::debug!("Unknown race category '{}' treated as unset", name);
        }
    }
    Ok(race)
}
