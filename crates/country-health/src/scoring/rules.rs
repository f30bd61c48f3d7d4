//! Band tables for every scored indicator.
//!
//! Each table is ordered by ascending upper bound and the first band that
//! admits a value wins. The final band is always [`Bound::Unbounded`], so any
//! finite value lands in exactly one band.

use super::rating::{IndicatorResult, Rating};
use super::Domain;
use serde::Serialize;

use self::Bound::{AtMost, Below, Unbounded};
use super::rating::Rating::{Healthy, Unhealthy, Warning};

/// Upper edge of a band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Admits `value < limit`.
    Below(f64),
    /// Admits `value <= limit`.
    AtMost(f64),
    Unbounded,
}

impl Bound {
    pub fn admits(self, value: f64) -> bool {
        match self {
            Below(limit) => value < limit,
            AtMost(limit) => value <= limit,
            Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub upper: Bound,
    pub rating: Rating,
    pub detail: &'static str,
}

impl Band {
    const fn new(upper: Bound, rating: Rating, detail: &'static str) -> Self {
        Self {
            upper,
            rating,
            detail,
        }
    }
}

const LIFE_EXPECTANCY: &[Band] = &[
    Band::new(Below(65.0), Unhealthy, "Significant health challenges"),
    Band::new(Below(75.0), Warning, "Below global average"),
    Band::new(Unbounded, Healthy, "Strong healthcare outcomes"),
];

const INFANT_MORTALITY: &[Band] = &[
    Band::new(Below(10.0), Healthy, "Low infant mortality"),
    Band::new(Below(30.0), Warning, "Moderate infant mortality"),
    Band::new(Unbounded, Unhealthy, "High infant mortality"),
];

const FERTILITY_RATE: &[Band] = &[
    Band::new(Below(1.3), Unhealthy, "Population decline risk"),
    Band::new(Below(1.8), Warning, "Below replacement level"),
    Band::new(AtMost(2.5), Healthy, "Near replacement level"),
    Band::new(AtMost(4.0), Warning, "Above replacement level"),
    Band::new(Unbounded, Unhealthy, "Unsustainable growth pressure"),
];

const MEDIAN_AGE: &[Band] = &[
    Band::new(Below(20.0), Unhealthy, "Very young — high youth dependency"),
    Band::new(Below(25.0), Warning, "Young population"),
    Band::new(AtMost(38.0), Healthy, "Balanced age structure"),
    Band::new(AtMost(45.0), Warning, "Aging population"),
    Band::new(Unbounded, Unhealthy, "Severe aging — shrinking workforce"),
];

const NATURAL_GROWTH: &[Band] = &[
    Band::new(Below(0.0), Unhealthy, "Population shrinking naturally"),
    Band::new(Below(2.0), Warning, "Near-zero growth"),
    Band::new(AtMost(15.0), Healthy, "Sustainable growth rate"),
    Band::new(AtMost(25.0), Warning, "Rapid growth"),
    Band::new(Unbounded, Unhealthy, "Very rapid population growth"),
];

const DEPENDENCY_RATIO: &[Band] = &[
    Band::new(Below(60.0), Healthy, "Low burden on workforce"),
    Band::new(Below(80.0), Warning, "Moderate dependency burden"),
    Band::new(Unbounded, Unhealthy, "High dependency — workforce strain"),
];

const GDP_GROWTH: &[Band] = &[
    Band::new(Below(0.0), Unhealthy, "Economy contracting"),
    Band::new(AtMost(2.0), Warning, "Slow growth"),
    Band::new(Unbounded, Healthy, "Economy expanding"),
];

const GDP_PER_CAPITA: &[Band] = &[
    Band::new(Below(5_000.0), Unhealthy, "Low income"),
    Band::new(Below(20_000.0), Warning, "Middle income"),
    Band::new(Unbounded, Healthy, "High standard of living"),
];

// Deflation is unhealthy; 0 <= v < 1 is a warning with the price-stability text.
const INFLATION: &[Band] = &[
    Band::new(Below(0.0), Unhealthy, "Deflation risk"),
    Band::new(Below(1.0), Warning, "Price stability"),
    Band::new(AtMost(3.0), Healthy, "Price stability"),
    Band::new(AtMost(6.0), Warning, "Elevated inflation"),
    Band::new(Unbounded, Unhealthy, "High inflation"),
];

const UNEMPLOYMENT: &[Band] = &[
    Band::new(Below(5.0), Healthy, "Strong labor market"),
    Band::new(AtMost(10.0), Warning, "Moderate unemployment"),
    Band::new(Unbounded, Unhealthy, "High unemployment"),
];

const PUBLIC_DEBT: &[Band] = &[
    Band::new(Below(60.0), Healthy, "Fiscally sustainable"),
    Band::new(AtMost(90.0), Warning, "Elevated debt levels"),
    Band::new(Unbounded, Unhealthy, "High debt burden"),
];

const CURRENT_ACCOUNT: &[Band] = &[
    Band::new(Below(-3.0), Unhealthy, "Significant trade deficit"),
    Band::new(AtMost(0.0), Warning, "Mild deficit"),
    Band::new(Unbounded, Healthy, "Trade surplus"),
];

/// Where the engine reads an indicator's raw value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// A single numeric column of the indicator series.
    Field(&'static str),
    /// Crude birth rate minus crude death rate, both from the anchor record.
    BirthsLessDeaths {
        births: &'static str,
        deaths: &'static str,
    },
    /// Derived from the age-bucketed population series.
    AgeStructure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    LifeExpectancy,
    InfantMortality,
    FertilityRate,
    MedianAge,
    NaturalGrowth,
    DependencyRatio,
    GdpGrowth,
    GdpPerCapita,
    Inflation,
    Unemployment,
    PublicDebt,
    CurrentAccount,
}

impl Indicator {
    pub const fn demographic() -> [Self; 6] {
        [
            Self::LifeExpectancy,
            Self::InfantMortality,
            Self::FertilityRate,
            Self::MedianAge,
            Self::NaturalGrowth,
            Self::DependencyRatio,
        ]
    }

    pub const fn economic() -> [Self; 6] {
        [
            Self::GdpGrowth,
            Self::GdpPerCapita,
            Self::Inflation,
            Self::Unemployment,
            Self::PublicDebt,
            Self::CurrentAccount,
        ]
    }

    pub const fn domain(self) -> Domain {
        match self {
            Self::LifeExpectancy
            | Self::InfantMortality
            | Self::FertilityRate
            | Self::MedianAge
            | Self::NaturalGrowth
            | Self::DependencyRatio => Domain::Demographic,
            Self::GdpGrowth
            | Self::GdpPerCapita
            | Self::Inflation
            | Self::Unemployment
            | Self::PublicDebt
            | Self::CurrentAccount => Domain::Economic,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LifeExpectancy => "Life Expectancy",
            Self::InfantMortality => "Infant Mortality",
            Self::FertilityRate => "Fertility Rate",
            Self::MedianAge => "Median Age",
            Self::NaturalGrowth => "Natural Growth",
            Self::DependencyRatio => "Dependency Ratio",
            Self::GdpGrowth => "GDP Growth",
            Self::GdpPerCapita => "GDP per Capita",
            Self::Inflation => "Inflation",
            Self::Unemployment => "Unemployment",
            Self::PublicDebt => "Public Debt",
            Self::CurrentAccount => "Current Account",
        }
    }

    pub const fn source(self) -> Source {
        match self {
            Self::LifeExpectancy => Source::Field("LEx"),
            Self::InfantMortality => Source::Field("InfantDeaths"),
            Self::FertilityRate => Source::Field("TFR"),
            Self::MedianAge => Source::Field("MedianAgePop"),
            Self::NaturalGrowth => Source::BirthsLessDeaths {
                births: "CBR",
                deaths: "CDR",
            },
            Self::DependencyRatio => Source::AgeStructure,
            Self::GdpGrowth => Source::Field("GDP Growth (% Annual)"),
            Self::GdpPerCapita => Source::Field("GDP per Capita (Current USD)"),
            Self::Inflation => Source::Field("Inflation (CPI %)"),
            Self::Unemployment => Source::Field("Unemployment Rate (%)"),
            Self::PublicDebt => Source::Field("Public Debt (% of GDP)"),
            Self::CurrentAccount => Source::Field("Current Account Balance (% GDP)"),
        }
    }

    pub const fn bands(self) -> &'static [Band] {
        match self {
            Self::LifeExpectancy => LIFE_EXPECTANCY,
            Self::InfantMortality => INFANT_MORTALITY,
            Self::FertilityRate => FERTILITY_RATE,
            Self::MedianAge => MEDIAN_AGE,
            Self::NaturalGrowth => NATURAL_GROWTH,
            Self::DependencyRatio => DEPENDENCY_RATIO,
            Self::GdpGrowth => GDP_GROWTH,
            Self::GdpPerCapita => GDP_PER_CAPITA,
            Self::Inflation => INFLATION,
            Self::Unemployment => UNEMPLOYMENT,
            Self::PublicDebt => PUBLIC_DEBT,
            Self::CurrentAccount => CURRENT_ACCOUNT,
        }
    }

    pub fn band_for(self, value: f64) -> &'static Band {
        let bands = self.bands();
        bands
            .iter()
            .find(|band| band.upper.admits(value))
            .unwrap_or(&bands[bands.len() - 1])
    }

    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::LifeExpectancy | Self::MedianAge => format!("{} yrs", fixed(value, 1)),
            Self::InfantMortality => format!("{} per 1k", fixed(value, 1)),
            Self::FertilityRate => format!("{} TFR", fixed(value, 2)),
            Self::NaturalGrowth => format!("{}{} per 1k", positive_sign(value), fixed(value, 1)),
            Self::DependencyRatio => format!("{}%", fixed(value, 0)),
            Self::GdpGrowth | Self::Inflation | Self::Unemployment => {
                format!("{}%", fixed(value, 1))
            }
            Self::GdpPerCapita if value >= 1_000.0 => format!("${}K", fixed(value / 1_000.0, 1)),
            Self::GdpPerCapita => format!("${}", fixed(value, 0)),
            Self::PublicDebt => format!("{}% GDP", fixed(value, 0)),
            Self::CurrentAccount => {
                format!("{}{}% GDP", positive_sign(value), fixed(value, 1))
            }
        }
    }

    pub fn rate(self, value: f64) -> IndicatorResult {
        let band = self.band_for(value);
        IndicatorResult {
            indicator: self,
            label: self.label(),
            value: self.format_value(value),
            rating: band.rating,
            detail: band.detail,
            color: band.rating.dot_color(),
            year: None,
        }
    }
}

/// Fixed-point text with exact ties rounded away from zero (`62.5` gives `63`).
/// `{:.N}` alone rounds such ties to even.
fn fixed(value: f64, digits: usize) -> String {
    const GUARD: usize = 24;

    let exact = format!("{:.*}", digits + GUARD, value.abs());
    let tail = &exact[exact.len() - GUARD..];
    let is_tie = tail.starts_with('5') && tail.bytes().skip(1).all(|digit| digit == b'0');
    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let scale = 10f64.powi(digits as i32);
    let magnitude = (value.abs() * scale).ceil() / scale;
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{:.*}", digits, magnitude)
}

fn positive_sign(value: f64) -> &'static str {
    if value > 0.0 {
        "+"
    } else {
        ""
    }
}
