//! Demographic and economic health scoring for country statistics.
//!
//! The crate turns indicator time series delivered by an external table
//! service into per-indicator ratings and an aggregate letter grade. The
//! [`scoring`] module is a pure, synchronous transformation; [`ingest`] is the
//! boundary where raw JSON/CSV rows become typed records.

pub mod config;
pub mod error;
pub mod ingest;
pub mod records;
pub mod scoring;
pub mod telemetry;

pub use records::{CountrySeries, FieldValue, IndicatorRecord, PopulationRecord, ScoringContext};
pub use scoring::{
    Assessment, Domain, Grade, GradeLetter, Indicator, IndicatorResult, Rating, ScoringEngine,
    ScoringOutcome,
};
