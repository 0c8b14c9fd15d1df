//! Finds the subdirectories of a pass(1) style store that are candidates for pruning.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::prune_error::PruneError;

const GPG_EXTENSION: &str = "gpg";

/// Immediate subdirectories of `root` that are non-empty and hold only regular `.gpg` files
///
/// `root` is canonicalized, so the returned paths are absolute.
pub fn find_gpg_only_dirs(root: &Path) -> Result<Vec<PathBuf>, PruneError> {
    let root = fs::canonicalize(root).map_err(|e| PruneError::scan(root, e))?;
    let mut result = Vec::new();

    for subdir in immediate_subdirs(&root)? {
        let entries = match children(subdir.path()) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping {}", e);
                continue;
            }
        };
        let all_gpg = entries.iter().all(|entry| {
            entry.path().is_file()
                && entry.path().extension().is_some_and(|ext| ext == GPG_EXTENSION)
        });
        if !entries.is_empty() && all_gpg {
            result.push(subdir.into_path());
        }
    }

    result.sort();
    Ok(result)
}

/// Immediate subdirectories of `root` with a dotted name holding exactly one entry,
/// whose name ends in `.gpg`
pub fn find_single_gpg_dirs(root: &Path) -> Result<Vec<PathBuf>, PruneError> {
    let mut result = Vec::new();

    for subdir in immediate_subdirs(root)? {
        if !subdir.file_name().to_string_lossy().contains('.') {
            continue;
        }
        let entries = match children(subdir.path()) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping {}", e);
                continue;
            }
        };
        if let [only] = entries.as_slice() {
            if only.file_name().to_string_lossy().ends_with(".gpg") {
                log::debug!(
                    "{} holds the single entry {}",
                    subdir.path().display(),
                    only.file_name().to_string_lossy()
                );
                result.push(subdir.into_path());
            }
        }
    }

    result.sort();
    Ok(result)
}

fn immediate_subdirs(root: &Path) -> Result<Vec<DirEntry>, PruneError> {
    Ok(children(root)?
        .into_iter()
        .filter(|entry| entry.path().is_dir())
        .collect())
}

/// Entries directly under `dir`. Symlinks are listed as themselves; callers use
/// `Path::is_dir`/`is_file` so links to directories and files count as their targets.
fn children(dir: &Path) -> Result<Vec<DirEntry>, PruneError> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| {
            entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_owned();
                PruneError::scan(&path, e.into())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    fn store() -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        /* only .gpg files */
        fs::create_dir(root.join("bank")).unwrap();
        File::create(root.join("bank/card.gpg")).unwrap();
        File::create(root.join("bank/pin.gpg")).unwrap();
        /* mixed content */
        fs::create_dir(root.join("mixed")).unwrap();
        File::create(root.join("mixed/a.gpg")).unwrap();
        File::create(root.join("mixed/notes.txt")).unwrap();
        /* empty */
        fs::create_dir(root.join("empty")).unwrap();
        /* dotted, single .gpg */
        fs::create_dir(root.join("example.com")).unwrap();
        File::create(root.join("example.com/login.gpg")).unwrap();
        /* dotted, two entries */
        fs::create_dir(root.join("two.org")).unwrap();
        File::create(root.join("two.org/a.gpg")).unwrap();
        File::create(root.join("two.org/b.gpg")).unwrap();
        /* undotted, single .gpg */
        fs::create_dir(root.join("solo")).unwrap();
        File::create(root.join("solo/only.gpg")).unwrap();
        /* dotted, nested dir instead of a file */
        fs::create_dir_all(root.join("nest.net/sub")).unwrap();
        /* a top-level file is never reported */
        File::create(root.join("top.gpg")).unwrap();
        tmp
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn gpg_only_dirs() {
        let tmp = store();
        let found = find_gpg_only_dirs(tmp.path()).unwrap();
        assert_eq!(names(&found), vec!["bank", "example.com", "solo", "two.org"]);
        assert!(found.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn single_gpg_dirs() {
        let tmp = store();
        let found = find_single_gpg_dirs(tmp.path()).unwrap();
        assert_eq!(found, vec![tmp.path().join("example.com")]);
    }

    #[test]
    fn missing_root_is_scan_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing");
        assert!(find_gpg_only_dirs(&missing).is_err());
        assert!(find_single_gpg_dirs(&missing).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_count_as_their_targets() {
        use std::os::unix::fs::symlink;

        let tmp = tempfile::tempdir().unwrap();
        let store = tmp.path().join("s");
        fs::create_dir_all(store.join("bank")).unwrap();
        File::create(store.join("bank/a.gpg")).unwrap();
        File::create(store.join("real.gpg")).unwrap();
        symlink("../real.gpg", store.join("bank/b.gpg")).unwrap();
        fs::create_dir(tmp.path().join("elsewhere.com")).unwrap();
        File::create(tmp.path().join("elsewhere.com/x.gpg")).unwrap();
        symlink(tmp.path().join("elsewhere.com"), store.join("linked.com")).unwrap();
        symlink(store.join("missing"), store.join("dangling.org")).unwrap();

        let only = find_gpg_only_dirs(&store).unwrap();
        assert_eq!(names(&only), vec!["bank", "linked.com"]);

        let single = find_single_gpg_dirs(&store).unwrap();
        assert_eq!(single, vec![store.join("linked.com")]);
    }
}
