//! Well-known names of the livespec project layout.

use std::path::Path;

/// Standard livespec directory and file names.
///
/// ```text
/// <root>/
///   CLAUDE.md, AGENTS.md          (root instruction files, user-owned)
///   livespec/
///     livespec.md
///     projects/<name>/project.md
///     plans/active/
///     plans/archived/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivespecPath {
    /// The `livespec` base directory
    BaseDir,
    /// The primary specification file inside the base directory
    SpecFile,
    /// The project registry directory
    ProjectsDir,
    /// The per-project specification file
    ProjectFile,
    /// The plan-tracking parent directory
    PlansDir,
    /// Plans in progress
    ActivePlansDir,
    /// Completed plans
    ArchivedPlansDir,
    /// Root `CLAUDE.md`
    ClaudeMd,
    /// Root `AGENTS.md`
    AgentsMd,
}

impl LivespecPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BaseDir => "livespec",
            Self::SpecFile => "livespec.md",
            Self::ProjectsDir => "projects",
            Self::ProjectFile => "project.md",
            Self::PlansDir => "plans",
            Self::ActivePlansDir => "active",
            Self::ArchivedPlansDir => "archived",
            Self::ClaudeMd => "CLAUDE.md",
            Self::AgentsMd => "AGENTS.md",
        }
    }
}

impl AsRef<Path> for LivespecPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for LivespecPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for LivespecPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
