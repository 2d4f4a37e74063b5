use crate::apply::apply_renames;
use crate::config::RenumberConfig;
use crate::error::{RenumberError, Result};
use crate::output::RenumberResult;
use crate::plan::{check_capacity, plan_renames};
use crate::scanner::discover;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Renumber operation - returns structured data
///
/// Runs discovery, the capacity check and the renames strictly in that
/// order. Anything that fails before the first rename leaves the tree
/// untouched; individual rename failures end up in the result instead.
pub fn renumber_operation(config: &RenumberConfig) -> Result<RenumberResult> {
    validate_config(config)?;

    let root = resolve_root(&config.root);
    debug!(
        root = %root.display(),
        source = %config.source_prefix,
        target = %config.effective_target_prefix(),
        start = config.start,
        digits = config.digits,
        dry_run = config.dry_run,
        "starting renumber"
    );

    let folders = discover(&root, &config.source_prefix)?;
    let matched = folders.len();

    if config.renumbering() {
        check_capacity(config.start, matched, config.digits)?;
    }

    let plan = plan_renames(folders, config)?;
    let outcomes = apply_renames(&plan, config.dry_run);

    let result = RenumberResult {
        source_prefix: config.source_prefix.clone(),
        target_prefix: config.effective_target_prefix().to_string(),
        start: config.start,
        digits: config.digits,
        root,
        dry_run: config.dry_run,
        matched,
        outcomes,
    };

    info!(
        matched,
        renamed = result.renamed(),
        skipped = result.skipped(),
        failed = result.failed(),
        dry_run = config.dry_run,
        "renumber finished"
    );
    Ok(result)
}

/// Checks that need no filesystem access.
fn validate_config(config: &RenumberConfig) -> Result<()> {
    if config.digits < 1 {
        return Err(RenumberError::InvalidDigitWidth(config.digits));
    }
    if config.source_prefix.is_empty() {
        return Err(RenumberError::EmptySourcePrefix);
    }
    Ok(())
}

fn resolve_root(root: &Path) -> PathBuf {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| root.to_path_buf(), |cwd| cwd.join(root))
    };
    absolute.canonicalize().unwrap_or(absolute)
}
