use crate::installer::Installer;
use crate::target::Target;
use crate::ui;
use crate::util::dirs;
use anyhow::{Context, Result};

use super::Outcome;

const UNEXPECTED: &str = "An unexpected error occurred during installation";

pub fn execute(target: Target) -> Result<Outcome> {
    ui::info(format!(
        "Starting rust-skills installation for {}...",
        ui::bold(target.display_name())
    ));

    let installer = Installer::new(dirs::source_dir()?, target.destination()?);

    if let Err(err) = installer.check_source() {
        ui::error(&err);
        ui::error("Please run this command from the root of the \"rust-skills\" repository.");
        return Ok(Outcome::Failure);
    }
    if let Err(err) = installer.check_overlap() {
        ui::error(&err);
        return Ok(Outcome::Failure);
    }

    installer.prepare_destination().context(UNEXPECTED)?;
    ui::info(format!(
        "Target directory is '{}'",
        installer.destination().display()
    ));

    ui::info(format!(
        "Copying skills from '{}'",
        installer.source().display()
    ));
    let report = installer.copy().context(UNEXPECTED)?;
    ui::info(format!(
        "Copied {} file(s), {} folder(s) and {} link(s)",
        report.files, report.directories, report.links
    ));

    if report.files == 0 && report.links == 0 {
        ui::warn(format!(
            "No skill files found in '{}'",
            installer.source().display()
        ));
    }
    if report.skipped > 0 {
        ui::warn(format!(
            "Skipped {} special file(s) that are neither regular files, directories nor links",
            report.skipped
        ));
    }

    ui::success(format!(
        "Successfully installed skills for {}.",
        ui::bold(target.display_name())
    ));
    Ok(Outcome::Success)
}
