use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw cell value as delivered by the table service.
///
/// Some upstream columns are typed as text even though they carry numbers
/// (`"Public Debt (% of GDP)": "72.4"`), so both shapes are kept and resolved
/// lazily by [`FieldValue::as_number`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Finite numeric reading of the cell, or `None` when it cannot be used.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Number(value) => *value,
            FieldValue::Text(raw) => raw.trim().parse::<f64>().ok()?,
        };

        value.is_finite().then_some(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One observation year for a country. Null cells are simply not present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    pub year: i32,
    #[serde(default)]
    pub values: BTreeMap<String, FieldValue>,
}

impl IndicatorRecord {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    /// Numeric value for `key`; missing, empty or non-numeric cells read as `None`.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(FieldValue::as_number)
    }
}

/// Population of one age bucket, split by sex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(default)]
    pub year: Option<i32>,
    pub age_group: String,
    pub male: f64,
    pub female: f64,
}

impl PopulationRecord {
    pub fn new(age_group: impl Into<String>, male: f64, female: f64) -> Self {
        Self {
            year: None,
            age_group: age_group.into(),
            male,
            female,
        }
    }

    pub fn in_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn total(&self) -> f64 {
        self.male + self.female
    }
}

/// Everything the engine needs about one country.
///
/// `population` is only consulted by the demographic domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountrySeries {
    #[serde(default)]
    pub indicators: Vec<IndicatorRecord>,
    #[serde(default)]
    pub population: Vec<PopulationRecord>,
}

impl CountrySeries {
    pub fn new(indicators: Vec<IndicatorRecord>) -> Self {
        Self {
            indicators,
            population: Vec::new(),
        }
    }

    pub fn with_population(mut self, population: Vec<PopulationRecord>) -> Self {
        self.population = population;
        self
    }
}

/// Per-call input: the primary country and an optional comparison country.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringContext {
    pub primary: CountrySeries,
    #[serde(default)]
    pub comparison: Option<CountrySeries>,
}

impl ScoringContext {
    pub fn new(primary: CountrySeries) -> Self {
        Self {
            primary,
            comparison: None,
        }
    }

    pub fn compared_with(mut self, comparison: CountrySeries) -> Self {
        self.comparison = Some(comparison);
        self
    }
}
