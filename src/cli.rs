use clap::Parser;

/// Install the rust-skills collection for a coding assistant
///
/// Copies the bundled `skills` directory into the skills directory of the
/// selected application. Existing files with the same name are overwritten;
/// other installed skills are left in place.
#[derive(Parser, Debug)]
#[command(name = "add-rust-skill", author, version, about, long_about = None)]
pub struct Cli {
    /// Application to install skills for (opencode, claude)
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,
}
