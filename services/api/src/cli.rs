use crate::demo::{run_appraise, run_demo, AppraiseArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use feaso::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "feaso",
    about = "Appraise residential development sites for yield, ResCode compliance and feasibility",
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
    /// Appraise a site and its scenarios from a JSON request file
    Appraise(AppraiseArgs),
    /// Run the calculators against a built-in sample site
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
        Command::Appraise(args) => run_appraise(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn appraise_requires_input_path() {
        let parsed = Cli::try_parse_from(["feaso", "appraise"]);
        assert!(parsed.is_err());

        let parsed = Cli::try_parse_from(["feaso", "appraise", "--input", "site.json"])
            .expect("input flag accepted");
        assert!(matches!(parsed.command, Some(Command::Appraise(_))));
    }

    #[test]
    fn serve_is_the_default_command() {
        let parsed = Cli::try_parse_from(["feaso"]).expect("no arguments accepted");
        assert!(parsed.command.is_none());
    }
}
