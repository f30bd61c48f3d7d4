use crate::score::{run_demographic_score, run_economic_score, DemographicArgs, EconomicArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use country_health::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Country Health Scorer",
    about = "Score demographic and economic health of countries from indicator exports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a score card for indicator exports on disk
    Score {
        #[command(subcommand)]
        command: ScoreCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ScoreCommand {
    /// Score life expectancy, fertility, age structure and related indicators
    Demographics(DemographicArgs),
    /// Score growth, income, inflation, labor, debt and trade indicators
    Economics(EconomicArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score {
            command: ScoreCommand::Demographics(args),
        } => run_demographic_score(args),
        Command::Score {
            command: ScoreCommand::Economics(args),
        } => run_economic_score(args),
    }
}
