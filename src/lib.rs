// Public API
pub mod cli;
pub mod commands;
pub mod ui;

// Core domain types
mod installer;
mod target;
mod util;

// Re-export main types
pub use installer::{InstallError, InstallReport, Installer};
pub use target::Target;
