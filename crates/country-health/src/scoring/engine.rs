use super::dependency::AgeStructure;
use super::grade::{compute_grade, Grade};
use super::latest::{latest_record, latest_value};
use super::rating::IndicatorResult;
use super::rules::{Indicator, Source};
use super::Domain;
use crate::records::{CountrySeries, IndicatorRecord, ScoringContext};
use serde::Serialize;
use tracing::debug;

/// Stateless scorer for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringEngine {
    domain: Domain,
}

/// Rated indicators and the grade they reduce to. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub indicators: Vec<IndicatorResult>,
    pub grade: Grade,
}

/// Result of one scoring call, including the optional comparison side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringOutcome {
    pub domain: Domain,
    pub indicators: Vec<IndicatorResult>,
    pub grade: Option<Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_indicators: Option<Vec<IndicatorResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_grade: Option<Grade>,
}

impl ScoringOutcome {
    pub fn has_grade(&self) -> bool {
        self.grade.is_some()
    }
}

impl ScoringEngine {
    pub const fn new(domain: Domain) -> Self {
        Self { domain }
    }

    pub const fn demographic() -> Self {
        Self::new(Domain::Demographic)
    }

    pub const fn economic() -> Self {
        Self::new(Domain::Economic)
    }

    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Score the primary country and, when supplied, the comparison country.
    /// Each side is scored on its own data only.
    pub fn score(&self, context: &ScoringContext) -> ScoringOutcome {
        let (indicators, grade) = split(self.assess(&context.primary));

        let (comparison_indicators, comparison_grade) = match &context.comparison {
            Some(series) => {
                let (indicators, grade) = split(self.assess(series));
                (Some(indicators), grade)
            }
            None => (None, None),
        };

        ScoringOutcome {
            domain: self.domain,
            indicators,
            grade,
            comparison_indicators,
            comparison_grade,
        }
    }

    /// Rate every resolvable indicator of `series`; `None` when nothing resolves.
    pub fn assess(&self, series: &CountrySeries) -> Option<Assessment> {
        let indicators = self.rate_indicators(series);
        let grade = compute_grade(self.domain, &indicators)?;

        debug!(
            domain = self.domain.label(),
            indicators = indicators.len(),
            grade = grade.letter.letter(),
            average = grade.average,
            "assessed country series"
        );

        Some(Assessment { indicators, grade })
    }

    fn rate_indicators(&self, series: &CountrySeries) -> Vec<IndicatorResult> {
        let anchor = match self.domain.anchor_field() {
            Some(key) => match latest_record(&series.indicators, key) {
                Some(record) => Some(record),
                None => {
                    debug!(
                        domain = self.domain.label(),
                        anchor = key,
                        records = series.indicators.len(),
                        "no anchor observation; nothing to score"
                    );
                    return Vec::new();
                }
            },
            None => None,
        };

        self.domain
            .indicators()
            .into_iter()
            .filter_map(|indicator| {
                let (value, year) = resolve(indicator, series, anchor)?;
                Some(indicator.rate(value).observed_in(year))
            })
            .collect()
    }
}

/// Raw value and observation year for `indicator`, or `None` when absent.
fn resolve(
    indicator: Indicator,
    series: &CountrySeries,
    anchor: Option<&IndicatorRecord>,
) -> Option<(f64, Option<i32>)> {
    match (indicator.source(), anchor) {
        (Source::Field(key), Some(record)) => record
            .number(key)
            .map(|value| (value, Some(record.year))),
        (Source::Field(key), None) => {
            latest_value(&series.indicators, key).map(|obs| (obs.value, Some(obs.year)))
        }
        (Source::BirthsLessDeaths { births, deaths }, anchor) => {
            let record = anchor?;
            natural_growth(record, births, deaths).map(|value| (value, Some(record.year)))
        }
        (Source::AgeStructure, _) => {
            let structure = AgeStructure::from_population(&series.population);
            structure.ratio().map(|ratio| (ratio, structure.year))
        }
    }
}

fn natural_growth(record: &IndicatorRecord, births: &str, deaths: &str) -> Option<f64> {
    Some(record.number(births)? - record.number(deaths)?)
}

fn split(assessment: Option<Assessment>) -> (Vec<IndicatorResult>, Option<Grade>) {
    match assessment {
        Some(Assessment { indicators, grade }) => (indicators, Some(grade)),
        None => (Vec::new(), None),
    }
}
