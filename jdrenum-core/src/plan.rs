use crate::config::RenumberConfig;
use crate::error::{RenumberError, Result};
use crate::name::format_name;
use crate::scanner::MatchedFolder;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

/// One folder's current and target location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
    pub from_decimal: u64,
    pub to_decimal: u64,
}

impl PlannedRename {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Largest decimal that fits in `digits` digits.
pub fn max_decimal(digits: usize) -> u64 {
    u32::try_from(digits)
        .ok()
        .and_then(|digits| 10u64.checked_pow(digits))
        .map_or(u64::MAX, |capacity| capacity - 1)
}

/// Reject a renumbering whose last number would not fit in `digits` digits.
///
/// Only meaningful when `start > 0`. Runs before anything is renamed.
pub fn check_capacity(start: u64, count: usize, digits: usize) -> Result<()> {
    if start == 0 || count == 0 {
        return Ok(());
    }

    let last = u64::try_from(count - 1)
        .ok()
        .and_then(|offset| start.checked_add(offset));
    match last {
        Some(last) if last <= max_decimal(digits) => Ok(()),
        Some(last) => Err(RenumberError::Overflow { digits, last }),
        None => Err(RenumberError::Overflow {
            digits,
            last: u64::MAX,
        }),
    }
}

/// Work out the target of every matched folder.
///
/// Folders are ordered by their current decimal; equal decimals keep the
/// order discovery found them in. With `start > 0` they are numbered
/// `start, start + 1, ...` in that order, otherwise each keeps its decimal.
pub fn plan_renames(
    mut folders: Vec<MatchedFolder>,
    config: &RenumberConfig,
) -> Result<Vec<PlannedRename>> {
    // sort_by_key is stable
    folders.sort_by_key(|folder| folder.decimal);

    let prefix = config.effective_target_prefix();
    let plan: Vec<PlannedRename> = (0u64..)
        .zip(folders)
        .map(|(index, folder)| {
            let to_decimal = if config.renumbering() {
                config.start.saturating_add(index)
            } else {
                folder.decimal
            };
            let new_name = format_name(prefix, to_decimal, config.digits, &folder.remainder);
            let to = folder
                .path
                .parent()
                .map_or_else(|| PathBuf::from(&new_name), |parent| parent.join(&new_name));

            PlannedRename {
                from: folder.path,
                to,
                from_decimal: folder.decimal,
                to_decimal,
            }
        })
        .collect();

    check_duplicate_targets(&plan)?;

    debug!(
        planned = plan.len(),
        changes = plan.iter().filter(|p| !p.is_noop()).count(),
        "rename plan built"
    );
    Ok(plan)
}

/// Two folders of one batch must never end up in the same place.
///
/// A folder that keeps its name still occupies it, so no-ops take part too.
/// Targets that are merely vacated later in the batch are fine; the executor
/// stages those.
fn check_duplicate_targets(plan: &[PlannedRename]) -> Result<()> {
    let mut seen: HashMap<&PathBuf, &PathBuf> = HashMap::new();
    for rename in plan {
        if let Some(first) = seen.insert(&rename.to, &rename.from) {
            return Err(RenumberError::DuplicateTarget {
                first: first.clone(),
                second: rename.from.clone(),
                target: rename.to.clone(),
            });
        }
    }
    Ok(())
}
