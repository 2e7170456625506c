//! Version stamp handling
//!
//! The installed `livespec/livespec.md` carries a comment of the form
//! `<!-- livespec-version: X.Y.Z -->`. Comparing it with the running binary's
//! version decides whether a project needs an update.

use std::path::Path;
use std::sync::LazyLock;

use livespec_fs::NormalizedPath;
use regex::Regex;
use serde::Serialize;

use crate::layout::ProjectLayout;

static VERSION_STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*livespec-version:\s*([\d.]+)\s*-->").expect("valid version stamp regex")
});

/// The version of this build.
pub fn current_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Find the version stamp in a piece of text.
pub fn parse_version_stamp(content: &str) -> Option<&str> {
    VERSION_STAMP
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Read the version stamp from a file.
///
/// Returns `None` when the file is missing, unreadable or carries no stamp.
pub fn extract_version(path: &NormalizedPath) -> Option<String> {
    let content = livespec_fs::io::read_text(path).ok()?;
    parse_version_stamp(&content).map(str::to_string)
}

/// Installed version compared with the running one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionStatus {
    pub out_of_date: bool,
    /// Stamp found in the installed spec file
    pub current: Option<String>,
    /// Version this build would install
    pub latest: String,
}

/// Compare the installed stamp under `root` with [`current_version`].
///
/// Versions are compared as plain strings. Any difference, including a
/// missing stamp, counts as out of date.
pub fn needs_update(root: &Path) -> VersionStatus {
    compare_version(root, current_version())
}

/// Compare the installed stamp under `root` with `latest`.
pub fn compare_version(root: &Path, latest: &str) -> VersionStatus {
    let current = extract_version(&ProjectLayout::new(root).spec_file());

    VersionStatus {
        out_of_date: current.as_deref() != Some(latest),
        current,
        latest: latest.to_string(),
    }
}
