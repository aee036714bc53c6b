use crate::demo::{run_assess, run_demo, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use skillpoints::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "skillpoints-api",
    about = "Score skilled migration profiles and serve the points API",
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
    /// Score a single profile from form labels
    Assess(AssessArgs),
    /// Walk through the sample profiles and their eligibility
    Demo,
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
        Command::Assess(args) => run_assess(args).await,
        Command::Demo => run_demo(),
    }
}
