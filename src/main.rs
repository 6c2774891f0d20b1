use add_rust_skill::cli::Cli;
use add_rust_skill::commands::{self, Outcome};
use add_rust_skill::ui;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::panic;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Diagnostics go to stderr so status lines on stdout stay clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("add_rust_skill=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match panic::catch_unwind(run) {
        Ok(Ok(outcome)) => outcome.exit_code(),
        Ok(Err(err)) => {
            tracing::debug!(error = ?err, "installation failed");
            ui::error(commands::error_report(&err));
            ExitCode::FAILURE
        }
        Err(_) => {
            ui::error("Installation aborted unexpectedly.");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(Outcome::Success);
        }
        Err(err) => {
            tracing::debug!(%err, "argument parsing failed");
            return Ok(commands::usage());
        }
    };

    commands::execute(cli)
}
