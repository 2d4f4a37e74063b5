use crate::error::{RenumberError, Result};
use crate::name::parse_name;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A directory whose name matched the source prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFolder {
    pub path: PathBuf,
    pub decimal: u64,
    /// Everything after the first space of the name, never re-parsed.
    pub remainder: OsString,
}

/// Collect every directory under `root` named `source_prefix.DECIMAL REST`.
///
/// The walk is depth-first with entries sorted by file name, so the order of
/// the returned folders (the encounter order) is stable from run to run.
/// The root itself is never matched. Any walk error aborts the whole scan.
pub fn discover(root: &Path, source_prefix: &str) -> Result<Vec<MatchedFolder>> {
    let mut folders = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|source| RenumberError::Traversal {
            path: source
                .path()
                .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        if let Some(parsed) = parse_name(entry.file_name(), source_prefix) {
            debug!(
                path = %entry.path().display(),
                decimal = parsed.decimal,
                "matched folder"
            );
            folders.push(MatchedFolder {
                path: entry.path().to_path_buf(),
                decimal: parsed.decimal,
                remainder: parsed.remainder.to_os_string(),
            });
        }
    }

    debug!(
        root = %root.display(),
        matches = folders.len(),
        "discovery finished"
    );
    Ok(folders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(folders: &[MatchedFolder]) -> Vec<String> {
        folders
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_discover_skips_files_and_non_matching_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join("10.01 Projects")).unwrap();
        fs::create_dir(root.join("10.xx Broken")).unwrap();
        fs::create_dir(root.join("11.01 Other")).unwrap();
        fs::create_dir(root.join("NoSpace")).unwrap();
        fs::write(root.join("10.02 Notes"), "a file, not a folder").unwrap();

        let folders = discover(root, "10").unwrap();
        assert_eq!(names(&folders), vec!["10.01 Projects"]);
        assert_eq!(folders[0].decimal, 1);
        assert_eq!(folders[0].remainder, "Projects");
    }

    #[test]
    fn test_discover_finds_nested_folders() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("10-19 Area").join("10.03 Deep")).unwrap();
        fs::create_dir_all(root.join("10.01 Top").join("inner").join("10.02 Deeper")).unwrap();

        let folders = discover(root, "10").unwrap();
        assert_eq!(names(&folders), vec!["10.03 Deep", "10.01 Top", "10.02 Deeper"]);
    }

    #[test]
    fn test_discover_never_matches_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("10.01 Root");
        fs::create_dir(&root).unwrap();
        fs::create_dir(root.join("10.02 Child")).unwrap();

        let folders = discover(&root, "10").unwrap();
        assert_eq!(names(&folders), vec!["10.02 Child"]);
    }

    #[test]
    fn test_discover_missing_root_is_a_traversal_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = discover(&missing, "10").unwrap_err();
        assert!(matches!(err, RenumberError::Traversal { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }

    // macOS refuses names that are not UTF-8.
    #[cfg(target_os = "linux")]
    #[test]
    fn test_discover_matches_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir(root.join(OsStr::from_bytes(b"10.01 Caf\xe9"))).unwrap();
        fs::create_dir(root.join("10.02 Plain")).unwrap();

        let folders = discover(root, "10").unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].remainder.as_bytes(), b"Caf\xe9");
        assert_eq!(folders[1].remainder, "Plain");
    }
}
