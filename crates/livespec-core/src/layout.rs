//! Paths of a livespec project

use std::path::Path;

use livespec_fs::{LivespecPath, NormalizedPath};

/// Resolves the well-known livespec paths under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: NormalizedPath,
}

impl ProjectLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: NormalizedPath::new(root),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// `<root>/livespec`
    pub fn base_dir(&self) -> NormalizedPath {
        self.root.join(LivespecPath::BaseDir.as_str())
    }

    /// `<root>/livespec/livespec.md`
    pub fn spec_file(&self) -> NormalizedPath {
        self.base_dir().join(LivespecPath::SpecFile.as_str())
    }

    pub fn projects_dir(&self) -> NormalizedPath {
        self.base_dir().join(LivespecPath::ProjectsDir.as_str())
    }

    pub fn project_dir(&self, name: &str) -> NormalizedPath {
        self.projects_dir().join(name)
    }

    /// `<root>/livespec/projects/<name>/project.md`
    pub fn project_file(&self, name: &str) -> NormalizedPath {
        self.project_dir(name).join(LivespecPath::ProjectFile.as_str())
    }

    pub fn plans_dir(&self) -> NormalizedPath {
        self.base_dir().join(LivespecPath::PlansDir.as_str())
    }

    pub fn active_plans_dir(&self) -> NormalizedPath {
        self.plans_dir().join(LivespecPath::ActivePlansDir.as_str())
    }

    pub fn archived_plans_dir(&self) -> NormalizedPath {
        self.plans_dir().join(LivespecPath::ArchivedPlansDir.as_str())
    }

    /// `<root>/CLAUDE.md`
    pub fn claude_md(&self) -> NormalizedPath {
        self.root.join(LivespecPath::ClaudeMd.as_str())
    }

    /// `<root>/AGENTS.md`
    pub fn agents_md(&self) -> NormalizedPath {
        self.root.join(LivespecPath::AgentsMd.as_str())
    }

    /// Directories created by a fresh init, parents first.
    pub fn scaffold_dirs(&self, project_name: &str) -> [NormalizedPath; 6] {
        [
            self.base_dir(),
            self.projects_dir(),
            self.project_dir(project_name),
            self.plans_dir(),
            self.active_plans_dir(),
            self.archived_plans_dir(),
        ]
    }
}
