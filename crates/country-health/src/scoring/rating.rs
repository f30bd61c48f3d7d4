use super::rules::Indicator;
use serde::Serialize;

/// Categorical assessment of a single indicator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Healthy,
    Warning,
    Unhealthy,
}

impl Rating {
    pub const fn ordered() -> [Self; 3] {
        [Self::Healthy, Self::Warning, Self::Unhealthy]
    }

    /// Points contributed to the grade average.
    pub const fn score(self) -> u8 {
        match self {
            Self::Healthy => 3,
            Self::Warning => 2,
            Self::Unhealthy => 1,
        }
    }

    /// Marker colour shown next to the indicator.
    pub const fn dot_color(self) -> &'static str {
        match self {
            Self::Healthy => "#22c55e",
            Self::Warning => "#eab308",
            Self::Unhealthy => "#ef4444",
        }
    }
}

/// Rated indicator ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorResult {
    pub indicator: Indicator,
    pub label: &'static str,
    pub value: String,
    pub rating: Rating,
    pub detail: &'static str,
    pub color: &'static str,
    /// Observation year the value was taken from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl IndicatorResult {
    pub fn observed_in(mut self, year: Option<i32>) -> Self {
        self.year = year;
        self
    }
}
