//! Per-run outcome accounting

use livespec_fs::NormalizedPath;
use serde::Serialize;

use crate::Error;

/// What happened to one path.
#[derive(Debug)]
pub enum SyncOutcome {
    Created,
    Skipped,
    Updated,
    Failed(Error),
}

impl SyncOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Skipped => "skipped",
            Self::Updated => "updated",
            Self::Failed(_) => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Accumulated result of an initialize or update run.
///
/// A path lands in at most one of `created`, `skipped` or `updated`.
/// Errors are kept as display strings in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    pub created: Vec<NormalizedPath>,
    pub skipped: Vec<NormalizedPath>,
    pub updated: Vec<NormalizedPath>,
    pub errors: Vec<String>,
}

impl SyncResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one outcome into the result.
    ///
    /// A path already recorded in this run is ignored.
    pub fn record(&mut self, path: NormalizedPath, outcome: SyncOutcome) {
        if let SyncOutcome::Failed(error) = outcome {
            self.record_error(error);
            return;
        }

        if self.contains(&path) {
            tracing::debug!(
                path = %path,
                outcome = outcome.as_str(),
                "path already recorded, ignoring"
            );
            return;
        }

        tracing::debug!(path = %path, outcome = outcome.as_str(), "sync");
        match outcome {
            SyncOutcome::Created => self.created.push(path),
            SyncOutcome::Skipped => self.skipped.push(path),
            SyncOutcome::Updated => self.updated.push(path),
            SyncOutcome::Failed(_) => {}
        }
    }

    /// Record an error that is not tied to a single sync outcome.
    pub fn record_error(&mut self, error: Error) {
        tracing::warn!(error = %error, "sync error");
        self.errors.push(error.to_string());
    }

    /// Whether `path` is in any of the outcome lists.
    pub fn contains(&self, path: &NormalizedPath) -> bool {
        self.created.contains(path) || self.skipped.contains(path) || self.updated.contains(path)
    }

    /// No errors were recorded.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of paths created or updated.
    pub fn total_changes(&self) -> usize {
        self.created.len() + self.updated.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path(p: &str) -> NormalizedPath {
        NormalizedPath::new(p)
    }

    #[test]
    fn test_record_buckets() {
        let mut result = SyncResult::new();
        result.record(path("/a"), SyncOutcome::Created);
        result.record(path("/b"), SyncOutcome::Skipped);
        result.record(path("/c"), SyncOutcome::Updated);

        assert_eq!(result.created, vec![path("/a")]);
        assert_eq!(result.skipped, vec![path("/b")]);
        assert_eq!(result.updated, vec![path("/c")]);
        assert!(result.is_success());
        assert_eq!(result.total_changes(), 2);
    }

    #[test]
    fn test_duplicate_path_is_ignored() {
        let mut result = SyncResult::new();
        result.record(path("/a"), SyncOutcome::Created);
        result.record(path("/a"), SyncOutcome::Updated);

        assert_eq!(result.created, vec![path("/a")]);
        assert!(result.updated.is_empty());
    }

    #[test]
    fn test_failure_goes_to_errors() {
        let mut result = SyncResult::new();
        result.record(
            path("/a"),
            SyncOutcome::Failed(Error::UnknownTool { id: "vim".into() }),
        );

        assert!(!result.is_success());
        assert_eq!(result.errors, vec!["Unknown tool: vim".to_string()]);
        assert!(!result.contains(&path("/a")));
    }

    #[test]
    fn test_serializes_paths_as_strings() {
        let mut result = SyncResult::new();
        result.record(path("/repo/livespec"), SyncOutcome::Created);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "created": ["/repo/livespec"],
                "skipped": [],
                "updated": [],
                "errors": [],
            })
        );
    }
}
