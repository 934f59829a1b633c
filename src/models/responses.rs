use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use crate::models::domain::FilterInput;

/// Field-level validation errors, keyed by form field name.
///
/// An empty result means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn insert(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Scored submission: the filters that were scored plus the probability
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    #[serde(flatten)]
    pub input: FilterInput,
    pub probability: f64,
}

impl ScoreResult {
    /// Probability on the 0-100 scale the form displays
    pub fn percentage(&self) -> f64 {
        self.probability * 100.0
    }
}
