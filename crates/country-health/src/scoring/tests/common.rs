use crate::records::{CountrySeries, IndicatorRecord, PopulationRecord};
use crate::scoring::{Indicator, IndicatorResult, Rating};

pub(super) const GDP_GROWTH: &str = "GDP Growth (% Annual)";
pub(super) const GDP_PER_CAPITA: &str = "GDP per Capita (Current USD)";
pub(super) const INFLATION: &str = "Inflation (CPI %)";
pub(super) const UNEMPLOYMENT: &str = "Unemployment Rate (%)";
pub(super) const PUBLIC_DEBT: &str = "Public Debt (% of GDP)";
pub(super) const CURRENT_ACCOUNT: &str = "Current Account Balance (% GDP)";

pub(super) fn rating(indicator: Indicator, value: f64) -> Rating {
    indicator.rate(value).rating
}

pub(super) fn find(indicators: &[IndicatorResult], indicator: Indicator) -> Option<&IndicatorResult> {
    indicators.iter().find(|result| result.indicator == indicator)
}

/// Demographic snapshot for a mature economy: every indicator resolves.
pub(super) fn demographic_record(year: i32) -> IndicatorRecord {
    IndicatorRecord::new(year)
        .with("LEx", 76.2)
        .with("InfantDeaths", 4.1)
        .with("TFR", 1.5)
        .with("MedianAgePop", 31.0)
        .with("CBR", 12.0)
        .with("CDR", 8.0)
}

/// Working-age 1,000 against 700 dependants: a 70% dependency ratio.
pub(super) fn population() -> Vec<PopulationRecord> {
    vec![
        PopulationRecord::new("0-4", 100.0, 100.0),
        PopulationRecord::new("10-14", 100.0, 100.0),
        PopulationRecord::new("20-24", 250.0, 250.0),
        PopulationRecord::new("45-49", 250.0, 250.0),
        PopulationRecord::new("60-64", 50.0, 50.0),
        PopulationRecord::new("100+", 100.0, 100.0),
    ]
}

pub(super) fn demographic_series() -> CountrySeries {
    CountrySeries::new(vec![
        demographic_record(2023),
        demographic_record(2019).with("LEx", 60.0),
    ])
    .with_population(population())
}

pub(super) fn economic_record(year: i32) -> IndicatorRecord {
    IndicatorRecord::new(year)
        .with(GDP_GROWTH, 2.4)
        .with(GDP_PER_CAPITA, 48_000.0)
        .with(INFLATION, 2.1)
        .with(UNEMPLOYMENT, "3.9")
        .with(PUBLIC_DEBT, "55.0")
        .with(CURRENT_ACCOUNT, 1.1)
}

pub(super) fn economic_series() -> CountrySeries {
    CountrySeries::new(vec![economic_record(2022), economic_record(2021)])
}
