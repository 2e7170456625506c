//! Managed-section injection into root instruction files

use livespec_blocks::{has_start_marker, upsert_section};
use livespec_fs::NormalizedPath;
use livespec_fs::io;

use super::SyncOutcome;
use crate::Error;

/// Put `section` into the file at `path`.
///
/// - missing file: `Skipped`, the file is never created;
/// - no start marker: the section is prepended, `Updated`;
/// - marker present and `skip_existing`: `Skipped`, file untouched;
/// - marker present otherwise: the region is replaced, `Updated`.
///
/// A start marker without an end marker after it leaves the file untouched
/// and yields `Failed(MalformedMarkerRegion)`.
pub fn inject_section(path: &NormalizedPath, section: &str, skip_existing: bool) -> SyncOutcome {
    if !path.exists() {
        return SyncOutcome::Skipped;
    }

    let content = match io::read_text(path) {
        Ok(content) => content,
        Err(source) => {
            return SyncOutcome::Failed(Error::FileReadFailed {
                path: path.clone(),
                source,
            });
        }
    };

    if skip_existing && has_start_marker(&content) {
        return SyncOutcome::Skipped;
    }

    let new_content = match upsert_section(&content, section) {
        Ok(new_content) => new_content,
        Err(_) => {
            return SyncOutcome::Failed(Error::MalformedMarkerRegion { path: path.clone() });
        }
    };

    match io::write_text(path, &new_content) {
        Ok(()) => SyncOutcome::Updated,
        Err(source) => SyncOutcome::Failed(Error::FileWriteFailed {
            path: path.clone(),
            source,
        }),
    }
}

/// Whether the file exists and carries the start marker.
pub fn has_section(path: &NormalizedPath) -> bool {
    io::read_text(path)
        .map(|content| has_start_marker(&content))
        .unwrap_or(false)
}
