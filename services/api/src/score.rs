use crate::infra::detect_format;
use clap::Args;
use country_health::config::AppConfig;
use country_health::error::AppError;
use country_health::ingest::RecordReader;
use country_health::{
    CountrySeries, Domain, Grade, IndicatorResult, Rating, ScoringContext, ScoringEngine,
    ScoringOutcome,
};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct DemographicArgs {
    /// Indicator export (JSON array or CSV) with a `Time` column
    #[arg(long)]
    pub(crate) indicators: PathBuf,
    /// Age-bucketed population export used for the dependency ratio
    #[arg(long)]
    pub(crate) population: Option<PathBuf>,
    /// Indicator export for a second country to score alongside
    #[arg(long)]
    pub(crate) compare_indicators: Option<PathBuf>,
    /// Population export for the comparison country
    #[arg(long, requires = "compare_indicators")]
    pub(crate) compare_population: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct EconomicArgs {
    /// Indicator export (JSON array or CSV) with a `year` column
    #[arg(long)]
    pub(crate) indicators: PathBuf,
    /// Indicator export for a second country to score alongside
    #[arg(long)]
    pub(crate) compare_indicators: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct OutputArgs {
    /// Heading for the primary country's score card
    #[arg(long, default_value = "Primary")]
    pub(crate) label: String,
    /// Heading for the comparison country's score card
    #[arg(long, default_value = "Comparison")]
    pub(crate) compare_label: String,
    /// Print the scoring outcome as JSON instead of score cards
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demographic_score(args: DemographicArgs) -> Result<(), AppError> {
    let DemographicArgs {
        indicators,
        population,
        compare_indicators,
        compare_population,
        output,
    } = args;

    let reader = record_reader()?;
    let domain = Domain::Demographic;
    let primary = load_series(&reader, domain, &indicators, population.as_deref())?;
    let comparison = compare_indicators
        .map(|path| load_series(&reader, domain, &path, compare_population.as_deref()))
        .transpose()?;

    emit(domain, primary, comparison, &output)
}

pub(crate) fn run_economic_score(args: EconomicArgs) -> Result<(), AppError> {
    let EconomicArgs {
        indicators,
        compare_indicators,
        output,
    } = args;

    let reader = record_reader()?;
    let domain = Domain::Economic;
    let primary = load_series(&reader, domain, &indicators, None)?;
    let comparison = compare_indicators
        .map(|path| load_series(&reader, domain, &path, None))
        .transpose()?;

    emit(domain, primary, comparison, &output)
}

fn record_reader() -> Result<RecordReader, AppError> {
    let config = AppConfig::load()?;
    Ok(RecordReader::new(config.ingest.max_records))
}

fn load_series(
    reader: &RecordReader,
    domain: Domain,
    indicators: &Path,
    population: Option<&Path>,
) -> Result<CountrySeries, AppError> {
    let records = reader.indicators_from_path(indicators, detect_format(indicators), domain)?;
    let series = CountrySeries::new(records);

    match population {
        Some(path) => {
            let rows = reader.population_from_path(path, detect_format(path))?;
            Ok(series.with_population(rows))
        }
        None => Ok(series),
    }
}

fn emit(
    domain: Domain,
    primary: CountrySeries,
    comparison: Option<CountrySeries>,
    output: &OutputArgs,
) -> Result<(), AppError> {
    let mut context = ScoringContext::new(primary);
    if let Some(series) = comparison {
        context = context.compared_with(series);
    }

    let outcome = ScoringEngine::new(domain).score(&context);

    if output.json {
        let json = serde_json::to_string_pretty(&outcome).map_err(std::io::Error::from)?;
        println!("{json}");
    } else {
        print!(
            "{}",
            ScoreCards::new(&outcome, &output.label, &output.compare_label)
        );
    }

    Ok(())
}

/// Text score cards for an outcome: the primary country, then the comparison.
pub(crate) struct ScoreCards<'a> {
    outcome: &'a ScoringOutcome,
    label: &'a str,
    compare_label: &'a str,
}

impl<'a> ScoreCards<'a> {
    pub(crate) fn new(outcome: &'a ScoringOutcome, label: &'a str, compare_label: &'a str) -> Self {
        Self {
            outcome,
            label,
            compare_label,
        }
    }
}

impl fmt::Display for ScoreCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let domain = self.outcome.domain;
        write_card(
            f,
            domain,
            self.label,
            &self.outcome.indicators,
            self.outcome.grade.as_ref(),
        )?;

        if let Some(indicators) = &self.outcome.comparison_indicators {
            writeln!(f)?;
            write_card(
                f,
                domain,
                self.compare_label,
                indicators,
                self.outcome.comparison_grade.as_ref(),
            )?;
        }

        Ok(())
    }
}

fn write_card(
    f: &mut fmt::Formatter<'_>,
    domain: Domain,
    label: &str,
    indicators: &[IndicatorResult],
    grade: Option<&Grade>,
) -> fmt::Result {
    writeln!(f, "{} health: {}", domain.label(), label)?;

    let Some(grade) = grade else {
        return writeln!(f, "No data available");
    };

    writeln!(
        f,
        "Grade {} ({:.2}) {}",
        grade.letter.letter(),
        grade.average,
        grade.summary
    )?;

    for result in indicators {
        let year = result
            .year
            .map(|year| format!(" ({year})"))
            .unwrap_or_default();
        writeln!(
            f,
            "  {} {:<18} {:>12}  {}{}",
            marker(result.rating),
            result.label,
            result.value,
            result.detail,
            year
        )?;
    }

    Ok(())
}

fn marker(rating: Rating) -> &'static str {
    match rating {
        Rating::Healthy => "[+]",
        Rating::Warning => "[~]",
        Rating::Unhealthy => "[!]",
    }
}
