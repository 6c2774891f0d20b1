use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Source skills directory not found at '{}'", path.display())]
    SourceMissing { path: PathBuf },

    #[error("Failed to resolve '{}'", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Source and target must not be the same directory: '{}'", path.display())]
    SameDirectory { path: PathBuf },

    #[error(
        "Source '{}' and target '{}' must not contain one another",
        source_dir.display(),
        destination.display()
    )]
    NestedDirectory {
        source_dir: PathBuf,
        destination: PathBuf,
    },

    #[error("Failed to create target directory '{}'", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read source directory")]
    Walk {
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create directory '{}'", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy '{}' to '{}'", from.display(), to.display())]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to link '{}' to '{}'", from.display(), to.display())]
    CopyLink {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Entry '{}' is outside source directory '{}'", entry.display(), root.display())]
    StripPrefix { entry: PathBuf, root: PathBuf },
}

/// Summary of a completed copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub files: usize,
    pub directories: usize,
    pub links: usize,
    pub skipped: usize,
}

/// Copies the contents of a source directory into a destination directory.
///
/// The copy is a merge: files sharing a relative path are overwritten and
/// files only present in the destination are left alone. Symlinks are
/// recreated as symlinks, never followed.
#[derive(Debug, Clone)]
pub struct Installer {
    source: PathBuf,
    destination: PathBuf,
}

impl Installer {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn check_source(&self) -> Result<(), InstallError> {
        if self.source.is_dir() {
            Ok(())
        } else {
            Err(InstallError::SourceMissing {
                path: self.source.clone(),
            })
        }
    }

    /// Refuse a source and destination that are the same directory or nest
    /// inside one another. Must run after `check_source`.
    pub fn check_overlap(&self) -> Result<(), InstallError> {
        let source = self
            .source
            .canonicalize()
            .map_err(|source| InstallError::Resolve {
                path: self.source.clone(),
                source,
            })?;
        let destination =
            resolve(&self.destination).map_err(|source| InstallError::Resolve {
                path: self.destination.clone(),
                source,
            })?;

        if source == destination {
            return Err(InstallError::SameDirectory { path: source });
        }
        if destination.starts_with(&source) || source.starts_with(&destination) {
            return Err(InstallError::NestedDirectory {
                source_dir: source,
                destination,
            });
        }
        Ok(())
    }

    pub fn prepare_destination(&self) -> Result<(), InstallError> {
        fs::create_dir_all(&self.destination).map_err(|source| InstallError::CreateDestination {
            path: self.destination.clone(),
            source,
        })
    }

    pub fn copy(&self) -> Result<InstallReport, InstallError> {
        let mut report = InstallReport::default();

        for entry in WalkDir::new(&self.source).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|source| InstallError::Walk { source })?;
            let relative =
                entry
                    .path()
                    .strip_prefix(&self.source)
                    .map_err(|_| InstallError::StripPrefix {
                        entry: entry.path().to_path_buf(),
                        root: self.source.clone(),
                    })?;
            let target = self.destination.join(relative);
            let file_type = entry.file_type();

            if file_type.is_symlink() && copy_link(entry.path(), &target)? {
                debug!(from = %entry.path().display(), to = %target.display(), "linked");
                report.links += 1;
            } else if file_type.is_dir() {
                fs::create_dir_all(&target).map_err(|source| InstallError::CreateDirectory {
                    path: target.clone(),
                    source,
                })?;
                debug!(path = %target.display(), "directory ready");
                report.directories += 1;
            } else if file_type.is_file() {
                fs::copy(entry.path(), &target).map_err(|source| InstallError::CopyFile {
                    from: entry.path().to_path_buf(),
                    to: target.clone(),
                    source,
                })?;
                debug!(from = %entry.path().display(), to = %target.display(), "copied");
                report.files += 1;
            } else {
                warn!(path = %entry.path().display(), "skipping entry that is not a file, directory or link");
                report.skipped += 1;
            }
        }

        Ok(report)
    }

    /// Run every step: source check, overlap check, destination preparation, copy.
    pub fn install(&self) -> Result<InstallReport, InstallError> {
        self.check_source()?;
        self.check_overlap()?;
        self.prepare_destination()?;
        self.copy()
    }
}

/// Canonicalize the longest existing ancestor of `path` and append the rest.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let mut existing = path;
    let mut missing = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(resolved) => {
                return Ok(missing
                    .iter()
                    .rev()
                    .fold(resolved, |acc: PathBuf, part| acc.join(part)));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                match (existing.file_name(), existing.parent()) {
                    (Some(name), Some(parent)) => {
                        missing.push(name.to_os_string());
                        existing = parent;
                    }
                    _ => return Err(err),
                }
            }
            Err(err) => return Err(err),
        }
    }
}

/// Recreate the symlink at `from` as `to`, replacing a file or link already there.
#[cfg(unix)]
fn copy_link(from: &Path, to: &Path) -> Result<bool, InstallError> {
    let link_err = |source| InstallError::CopyLink {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let original = fs::read_link(from).map_err(link_err)?;
    if let Ok(existing) = fs::symlink_metadata(to) {
        if !existing.is_dir() {
            fs::remove_file(to).map_err(link_err)?;
        }
    }
    std::os::unix::fs::symlink(&original, to).map_err(link_err)?;
    Ok(true)
}

#[cfg(not(unix))]
fn copy_link(_from: &Path, _to: &Path) -> Result<bool, InstallError> {
    Ok(false)
}
