use crate::demo::{run_assess, run_demo, run_questions, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sale_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Sale Readiness",
    about = "Score how ready a small business is for sale, from the command line or over HTTP",
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
    /// Print the questionnaire with its answer options
    Questions,
    /// Score a saved answer file (CSV `question,answer` rows or a JSON object)
    Assess(AssessArgs),
    /// Walk the questionnaire with a canned owner profile and print the report
    Demo(DemoArgs),
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
        Command::Questions => run_questions(),
        Command::Assess(args) => run_assess(args),
        Command::Demo(args) => run_demo(args),
    }
}
