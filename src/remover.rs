use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::path_list::{write_path_line, PathList};
use crate::prune_error::{FailedPath, PruneError};

/// What removing a single listed path is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Only an empty directory is removed, like `rmdir`
    #[default]
    EmptyOnly,
    /// The path and everything below it is removed, like `rm -rf`.
    /// A path that does not exist still counts as a failure.
    RecursiveForce,
}

#[derive(Debug)]
pub enum RemovalOutcome {
    Removed,
    Failed(PruneError),
}

/// Tally of one batch run. Not reflected in the exit status.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub attempted: usize,
    pub removed: Vec<PathBuf>,
    pub failed: Vec<FailedPath>,
}

pub struct BatchPathRemover {
    policy: RemovalPolicy,
}

impl BatchPathRemover {
    pub fn new(policy: RemovalPolicy) -> Self {
        log::debug!("Instantiating batch remover with {:?} policy", policy);
        Self { policy }
    }

    /// Attempts every path in list order, writing `Failed to remove: <path>` to `out`
    /// for each one that could not be removed. Never stops early.
    pub fn run<W: Write>(&self, paths: &PathList, out: &mut W) -> BatchReport {
        let mut report = BatchReport::default();

        for path in paths {
            report.attempted += 1;
            match self.remove_one(path) {
                RemovalOutcome::Removed => {
                    log::debug!("Removed {}", path.display());
                    report.removed.push(path.to_owned());
                }
                RemovalOutcome::Failed(error) => {
                    log::warn!("{}", error);
                    if let Err(e) = write_path_line(out, "Failed to remove: ", path) {
                        log::error!("Could not write failure report: {}", e);
                    }
                    report.failed.push(FailedPath {
                        path: path.to_owned(),
                        error,
                    });
                }
            }
        }

        log::info!(
            "Removed {} of {} paths, {} failed",
            report.removed.len(),
            report.attempted,
            report.failed.len()
        );
        report
    }

    pub fn remove_one(&self, path: &Path) -> RemovalOutcome {
        log::debug!("Attempting to remove {}", path.display());
        let removed = match self.policy {
            RemovalPolicy::EmptyOnly => {
                fs::remove_dir(path).map_err(|e| PruneError::removal(path, e))
            }
            RemovalPolicy::RecursiveForce => {
                remove_recursive(path).map_err(|e| PruneError::removal(path, e))
            }
        };
        match removed {
            Ok(()) => RemovalOutcome::Removed,
            Err(error) => RemovalOutcome::Failed(error),
        }
    }
}

fn remove_recursive(path: &Path) -> io::Result<()> {
    /* symlink_metadata so a link is removed itself, not followed */
    let metadata = fs::symlink_metadata(path)?;
    if !metadata.is_dir() {
        return fs::remove_file(path);
    }

    fs_extra::dir::remove(path).map_err(|e| {
        let message = e.to_string();
        match e.kind {
            fs_extra::error::ErrorKind::Io(err) => err,
            _ => io::Error::new(io::ErrorKind::Other, message),
        }
    })
}
