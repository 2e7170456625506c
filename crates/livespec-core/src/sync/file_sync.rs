//! File and directory sync primitives
//!
//! Every primitive reports a [`SyncOutcome`] instead of returning an error,
//! so one failing path never stops a batch.

use livespec_fs::NormalizedPath;
use livespec_fs::io;

use super::SyncOutcome;
use crate::Error;

/// Create `path` with `content` unless it already exists.
///
/// An existing file is left alone when `skip_existing` is set and
/// overwritten otherwise.
pub fn write_if_absent(path: &NormalizedPath, content: &str, skip_existing: bool) -> SyncOutcome {
    let existed = path.exists();
    if existed && skip_existing {
        return SyncOutcome::Skipped;
    }

    match io::write_text(path, content) {
        Ok(()) if existed => SyncOutcome::Updated,
        Ok(()) => SyncOutcome::Created,
        Err(source) => SyncOutcome::Failed(Error::FileWriteFailed {
            path: path.clone(),
            source,
        }),
    }
}

/// Write `content` to `path` only when it differs from what is on disk.
pub fn write_if_changed(path: &NormalizedPath, content: &str) -> SyncOutcome {
    if !path.exists() {
        return match io::write_text(path, content) {
            Ok(()) => SyncOutcome::Created,
            Err(source) => SyncOutcome::Failed(Error::FileWriteFailed {
                path: path.clone(),
                source,
            }),
        };
    }

    let current = match io::read_bytes(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            return SyncOutcome::Failed(Error::FileReadFailed {
                path: path.clone(),
                source,
            });
        }
    };

    if current == content.as_bytes() {
        return SyncOutcome::Skipped;
    }

    match io::write_text(path, content) {
        Ok(()) => SyncOutcome::Updated,
        Err(source) => SyncOutcome::Failed(Error::FileWriteFailed {
            path: path.clone(),
            source,
        }),
    }
}

/// Create a directory and its parents if missing.
///
/// Returns `None` for a directory that already exists; such directories
/// are not reported.
pub fn ensure_dir(path: &NormalizedPath) -> Option<SyncOutcome> {
    if path.is_dir() {
        return None;
    }

    Some(match io::create_dir_all(path) {
        Ok(()) => SyncOutcome::Created,
        Err(source) => SyncOutcome::Failed(Error::DirectoryCreateFailed {
            path: path.clone(),
            source,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, NormalizedPath) {
        let temp = TempDir::new().unwrap();
        let root = NormalizedPath::new(temp.path());
        (temp, root)
    }

    #[test]
    fn test_write_if_absent_creates() {
        let (_temp, root) = setup();

        for skip in [true, false] {
            let path = root.join(if skip { "skip.md" } else { "force.md" });
            assert!(matches!(
                write_if_absent(&path, "hello", skip),
                SyncOutcome::Created
            ));
            assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "hello");
        }
    }

    #[test]
    fn test_write_if_absent_skips_existing() {
        let (_temp, root) = setup();
        let path = root.join("file.md");
        fs::write(path.to_native(), "original").unwrap();

        assert!(matches!(
            write_if_absent(&path, "new", true),
            SyncOutcome::Skipped
        ));
        assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "original");
    }

    #[test]
    fn test_write_if_absent_overwrites_existing() {
        let (_temp, root) = setup();
        let path = root.join("file.md");
        fs::write(path.to_native(), "original").unwrap();

        assert!(matches!(
            write_if_absent(&path, "new", false),
            SyncOutcome::Updated
        ));
        assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "new");
    }

    #[test]
    fn test_write_if_absent_reports_failure() {
        let (_temp, root) = setup();
        fs::write(root.join("blocker").to_native(), "file").unwrap();

        let outcome = write_if_absent(&root.join("blocker/spec.md"), "x", true);
        assert!(matches!(
            outcome,
            SyncOutcome::Failed(Error::FileWriteFailed { .. })
        ));
    }

    #[test]
    fn test_write_if_changed_sequence() {
        let (_temp, root) = setup();
        let path = root.join("spec.md");

        assert!(matches!(write_if_changed(&path, "v1"), SyncOutcome::Created));
        assert!(matches!(write_if_changed(&path, "v1"), SyncOutcome::Skipped));
        assert!(matches!(write_if_changed(&path, "v2"), SyncOutcome::Updated));
        assert!(matches!(write_if_changed(&path, "v2"), SyncOutcome::Skipped));
        assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "v2");
    }

    #[test]
    fn test_write_if_changed_is_byte_exact() {
        let (_temp, root) = setup();
        let path = root.join("spec.md");
        fs::write(path.to_native(), "line\n").unwrap();

        assert!(matches!(write_if_changed(&path, "line"), SyncOutcome::Updated));
        assert_eq!(fs::read_to_string(path.to_native()).unwrap(), "line");
    }

    #[test]
    fn test_write_if_changed_read_failure() {
        let (_temp, root) = setup();
        let path = root.join("dir.md");
        fs::create_dir(path.to_native()).unwrap();

        assert!(matches!(
            write_if_changed(&path, "x"),
            SyncOutcome::Failed(Error::FileReadFailed { .. })
        ));
    }

    #[test]
    fn test_ensure_dir() {
        let (_temp, root) = setup();
        let dir = root.join("a/b/c");

        assert!(matches!(ensure_dir(&dir), Some(SyncOutcome::Created)));
        assert!(dir.is_dir());
        assert!(ensure_dir(&dir).is_none());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let (_temp, root) = setup();
        let path = root.join("taken");
        fs::write(path.to_native(), "file").unwrap();

        assert!(matches!(
            ensure_dir(&path),
            Some(SyncOutcome::Failed(Error::DirectoryCreateFailed { .. }))
        ));
    }
}
