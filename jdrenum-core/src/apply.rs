use crate::plan::PlannedRename;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What happened to one planned folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    /// Already had the target name; the filesystem was not touched.
    Skipped {
        #[serde(serialize_with = "lossy_path")]
        path: PathBuf,
    },
    /// Dry run: the rename that would have been performed.
    WouldRename {
        #[serde(serialize_with = "lossy_path")]
        from: PathBuf,
        #[serde(serialize_with = "lossy_path")]
        to: PathBuf,
    },
    Renamed {
        #[serde(serialize_with = "lossy_path")]
        from: PathBuf,
        #[serde(serialize_with = "lossy_path")]
        to: PathBuf,
    },
    /// The filesystem refused the rename. The rest of the batch still runs.
    Failed {
        #[serde(serialize_with = "lossy_path")]
        from: PathBuf,
        #[serde(serialize_with = "lossy_path")]
        to: PathBuf,
        error: String,
    },
}

/// Folder names need not be UTF-8; reports show them with U+FFFD instead.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl RenameOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Carry out `plan` in order.
///
/// No directories are created and no existence checks are made beyond what
/// `fs::rename` itself does. A failed rename is recorded and the next
/// folder is processed.
///
/// A target that another folder of the batch still occupies (e.g. `20.01 X`
/// moving to `20.02 X` before `20.02 X` has moved on) is reached in two
/// steps: the folder is parked under a temporary name and moved into place
/// once the rest of the batch has run. Outcomes keep plan order.
pub fn apply_renames(plan: &[PlannedRename], dry_run: bool) -> Vec<RenameOutcome> {
    if dry_run {
        return plan.iter().map(planned_outcome).collect();
    }

    // Paths still held by a folder of this batch that has yet to move away.
    let mut occupied: HashSet<PathBuf> = plan
        .iter()
        .filter(|rename| !rename.is_noop())
        .map(|rename| rename.from.clone())
        .collect();

    let mut outcomes = Vec::with_capacity(plan.len());
    let mut parked = Vec::new();
    for (index, rename) in plan.iter().enumerate() {
        if rename.is_noop() {
            outcomes.push(planned_outcome(rename));
            continue;
        }

        if occupied.contains(&rename.to) {
            let temp = temp_path(&rename.from);
            match move_folder(&rename.from, &temp) {
                Ok(()) => {
                    occupied.remove(&rename.from);
                    parked.push((index, temp));
                    // Settled once the batch has run.
                    outcomes.push(RenameOutcome::Skipped {
                        path: rename.from.clone(),
                    });
                },
                Err(e) => outcomes.push(failed(rename, e.to_string())),
            }
            continue;
        }

        match move_folder(&rename.from, &rename.to) {
            Ok(()) => {
                occupied.remove(&rename.from);
                outcomes.push(renamed(rename));
            },
            Err(e) => outcomes.push(failed(rename, e.to_string())),
        }
    }

    for (index, temp) in parked {
        let rename = &plan[index];
        let result = if occupied.contains(&rename.to) {
            // The folder holding the target failed to move.
            Err(format!("{} could not be vacated", rename.to.display()))
        } else {
            move_folder(&temp, &rename.to).map_err(|e| e.to_string())
        };

        outcomes[index] = match result {
            Ok(()) => renamed(rename),
            Err(error) => {
                match move_folder(&temp, &rename.from) {
                    Ok(()) => {
                        occupied.insert(rename.from.clone());
                    },
                    Err(e) => warn!(
                        temp = %temp.display(),
                        error = %e,
                        "could not restore parked folder"
                    ),
                }
                failed(rename, error)
            },
        };
    }

    outcomes
}

fn planned_outcome(rename: &PlannedRename) -> RenameOutcome {
    if rename.is_noop() {
        debug!(path = %rename.from.display(), "already has correct name");
        RenameOutcome::Skipped {
            path: rename.from.clone(),
        }
    } else {
        RenameOutcome::WouldRename {
            from: rename.from.clone(),
            to: rename.to.clone(),
        }
    }
}

fn move_folder(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)?;
    debug!(from = %from.display(), to = %to.display(), "renamed");
    Ok(())
}

/// `20.01 X` parks as `20.01 X.<pid>.jdrenum.tmp` next to itself.
fn temp_path(from: &Path) -> PathBuf {
    let mut name = from.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}.jdrenum.tmp", std::process::id()));
    from.with_file_name(name)
}

fn renamed(rename: &PlannedRename) -> RenameOutcome {
    RenameOutcome::Renamed {
        from: rename.from.clone(),
        to: rename.to.clone(),
    }
}

fn failed(rename: &PlannedRename, error: String) -> RenameOutcome {
    warn!(
        from = %rename.from.display(),
        to = %rename.to.display(),
        error = %error,
        "rename failed"
    );
    RenameOutcome::Failed {
        from: rename.from.clone(),
        to: rename.to.clone(),
        error,
    }
}
