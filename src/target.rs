use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::util::dirs;

/// An application that reads skills from its own configuration directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// OpenCode: ~/.config/opencode/skills
    Opencode,
    /// Claude Code: ~/.claude/skills
    Claude,
}

impl Target {
    /// Every registered target, in the order usage lists them
    pub const ALL: [Target; 2] = [Target::Opencode, Target::Claude];

    /// Look up a target by its command-line identifier
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|target| target.key() == key)
    }

    /// Command-line identifier
    pub fn key(self) -> &'static str {
        match self {
            Target::Opencode => "opencode",
            Target::Claude => "claude",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Target::Opencode => "OpenCode",
            Target::Claude => "Claude Code",
        }
    }

    /// Skills directory relative to the home directory
    pub fn relative_dir(self) -> &'static [&'static str] {
        match self {
            Target::Opencode => &[".config", "opencode", "skills"],
            Target::Claude => &[".claude", "skills"],
        }
    }

    /// Skills directory under an explicit home directory
    pub fn destination_in(self, home: &Path) -> PathBuf {
        self.relative_dir()
            .iter()
            .fold(home.to_path_buf(), |path, part| path.join(part))
    }

    /// Skills directory under the invoking user's home directory
    pub fn destination(self) -> Result<PathBuf> {
        Ok(self.destination_in(&dirs::home_dir()?))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
