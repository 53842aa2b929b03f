//! File system helpers

use std::{fs, path::Path};

/// Create `path`'s parent directory (and its ancestors) if missing.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a").join("b").join("players.csv");

        ensure_parent_dir(&target).unwrap();

        assert!(target.parent().unwrap().is_dir());
        assert!(!target.exists());
    }

    #[test]
    fn test_ensure_parent_dir_existing_is_ok() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("players.csv");

        ensure_parent_dir(&target).unwrap();
        ensure_parent_dir(&target).unwrap();
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("players.csv")).is_ok());
    }
}
