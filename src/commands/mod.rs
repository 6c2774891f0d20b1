use crate::cli::Cli;
use crate::target::Target;
use crate::ui;
use anyhow::Result;
use std::process::ExitCode;

mod install;

/// How a run ended when no unexpected error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

pub fn execute(cli: Cli) -> Result<Outcome> {
    let Some(target) = cli.target.as_deref().and_then(Target::from_key) else {
        return Ok(usage());
    };

    install::execute(target)
}

/// Render an error and its causes one per line, skipping causes whose
/// text the previous line already carries.
pub fn error_report(err: &anyhow::Error) -> String {
    let mut lines: Vec<String> = vec![err.to_string()];
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if lines.last().is_some_and(|previous| previous.contains(&text)) {
            continue;
        }
        lines.push(text);
    }
    lines.join("\n")
}

/// Print invocation help listing every registered target.
pub fn usage() -> Outcome {
    ui::error("Invalid or missing target environment.");
    ui::plain("\nUsage:");
    ui::plain(format!("  {} <target>", env!("CARGO_PKG_NAME")));
    ui::plain("\nAvailable targets:");
    for target in Target::ALL {
        ui::plain(format!(
            "  - {} ({})",
            ui::bold(target.key()),
            target.display_name()
        ));
    }
    Outcome::Failure
}
