//! Rule-based health scoring.
//!
//! Both domains share one engine: the [`Domain`] tag selects the indicator
//! table, the year column of the upstream rows, how values are anchored in
//! time, and the wording of the grade summaries.

pub mod dependency;
mod engine;
pub mod grade;
pub mod latest;
mod rating;
pub mod rules;

#[cfg(test)]
mod tests;

pub use dependency::{AgeBucket, AgeStructure};
pub use engine::{Assessment, ScoringEngine, ScoringOutcome};
pub use grade::{compute_grade, Grade, GradeLetter};
pub use latest::{latest_value, Observation};
pub use rating::{IndicatorResult, Rating};
pub use rules::{Band, Bound, Indicator, Source};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Demographic,
    Economic,
}

impl Domain {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Demographic => "Demographic",
            Self::Economic => "Economic",
        }
    }

    pub const fn indicators(self) -> [Indicator; 6] {
        match self {
            Self::Demographic => Indicator::demographic(),
            Self::Economic => Indicator::economic(),
        }
    }

    /// Column holding the observation year in upstream rows.
    pub const fn year_field(self) -> &'static str {
        match self {
            Self::Demographic => "Time",
            Self::Economic => "year",
        }
    }

    /// Column whose latest observation pins the snapshot year, if any.
    ///
    /// Demographic indicators describe one snapshot and are all read from the
    /// latest record carrying a life expectancy. Economic indicators are
    /// resolved independently.
    pub const fn anchor_field(self) -> Option<&'static str> {
        match self {
            Self::Demographic => Some("LEx"),
            Self::Economic => None,
        }
    }

    pub const fn grade_summary(self, letter: GradeLetter) -> &'static str {
        match (self, letter) {
            (Self::Demographic, GradeLetter::A) => "Strong overall health",
            (Self::Economic, GradeLetter::A) => "Strong economic health",
            (_, GradeLetter::B) => "Good with minor concerns",
            (Self::Demographic, GradeLetter::C) => "Mixed signals",
            (Self::Economic, GradeLetter::C) => "Mixed economic signals",
            (_, GradeLetter::D) => "Several areas of concern",
            (Self::Demographic, GradeLetter::F) => "Critical challenges",
            (Self::Economic, GradeLetter::F) => "Critical economic challenges",
        }
    }
}
