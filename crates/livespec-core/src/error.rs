//! Error types for livespec-core

use livespec_fs::NormalizedPath;

/// Result type for livespec-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scaffolding or updating a project.
///
/// Only `TemplateNotFound` is ever returned as `Err` from
/// [`initialize`](crate::initialize) or [`update`](crate::update); every other
/// variant is folded into the run's [`SyncResult`](crate::SyncResult).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to create directory: {source}")]
    DirectoryCreateFailed {
        path: NormalizedPath,
        #[source]
        source: livespec_fs::Error,
    },

    #[error("Failed to write file: {source}")]
    FileWriteFailed {
        path: NormalizedPath,
        #[source]
        source: livespec_fs::Error,
    },

    #[error("Failed to read file: {source}")]
    FileReadFailed {
        path: NormalizedPath,
        #[source]
        source: livespec_fs::Error,
    },

    /// Embedded template missing (packaging defect)
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Start marker without a following end marker
    #[error("Malformed livespec section in {path}: start marker has no matching end marker")]
    MalformedMarkerRegion { path: NormalizedPath },

    #[error("Unknown tool: {id}")]
    UnknownTool { id: String },
}
