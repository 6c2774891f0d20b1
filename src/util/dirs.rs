use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the bundled directory holding the skills to install
pub const SKILLS_DIR_NAME: &str = "skills";

/// Get the home directory
pub fn home_dir() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .context("Failed to get home directory")
        .map(|bd| bd.home_dir().to_path_buf())
}

/// Get the bundled skills directory
///
/// Prefers `skills/` beside the running executable, falling back to
/// `skills/` in the current working directory (the repository root). The
/// returned path is not guaranteed to exist.
pub fn source_dir() -> Result<PathBuf> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = env::current_dir().context("Failed to read current working directory")?;

    Ok(locate_source_dir(exe_dir.as_deref(), &cwd))
}

fn locate_source_dir(exe_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    if let Some(bundled) = exe_dir.map(|dir| dir.join(SKILLS_DIR_NAME)) {
        if bundled.is_dir() {
            return bundled;
        }
    }
    cwd.join(SKILLS_DIR_NAME)
}
