use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a renumbering run as a whole.
///
/// Per-folder rename failures are not errors: they are reported as
/// [`RenameOutcome::Failed`](crate::apply::RenameOutcome::Failed) and the
/// batch keeps going.
#[derive(Debug, Error)]
pub enum RenumberError {
    #[error("digit count must be at least 1 (got {0})")]
    InvalidDigitWidth(usize),

    #[error("source prefix must not be empty")]
    EmptySourcePrefix,

    #[error("error walking directory {}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("renumbering would exceed xx.{} (last number would be {last})", nines(.digits))]
    Overflow { digits: usize, last: u64 },

    #[error(
        "{} and {} would both be renamed to {}",
        .first.display(),
        .second.display(),
        .target.display()
    )]
    DuplicateTarget {
        first: PathBuf,
        second: PathBuf,
        target: PathBuf,
    },
}

pub type Result<T, E = RenumberError> = std::result::Result<T, E>;

fn nines(digits: &usize) -> String {
    "9".repeat(*digits)
}
