//! Probing a directory before deciding what to run

use std::path::Path;

use serde::Serialize;

use crate::layout::ProjectLayout;
use crate::options::DEFAULT_PROJECT_NAME;
use crate::sync::has_section;

/// Presence flags for the root instruction files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RootFiles {
    pub claude_md: bool,
    pub agents_md: bool,
}

impl RootFiles {
    pub fn any(&self) -> bool {
        self.claude_md || self.agents_md
    }
}

/// Which of `CLAUDE.md` and `AGENTS.md` exist under `root`.
pub fn detect_root_files(root: &Path) -> RootFiles {
    let layout = ProjectLayout::new(root);
    RootFiles {
        claude_md: layout.claude_md().is_file(),
        agents_md: layout.agents_md().is_file(),
    }
}

/// Which root instruction files already carry the livespec section.
pub fn detect_sections(root: &Path) -> RootFiles {
    let layout = ProjectLayout::new(root);
    RootFiles {
        claude_md: has_section(&layout.claude_md()),
        agents_md: has_section(&layout.agents_md()),
    }
}

/// The directory's own name, or `my-project` when it has none.
pub fn default_project_name(root: &Path) -> String {
    root.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string())
}
