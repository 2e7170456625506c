//! Options for initialize and update runs

use std::path::PathBuf;

/// Project name used when none is given.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

/// Options for [`initialize`](crate::initialize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Project root; defaults to the current directory
    pub root: PathBuf,
    /// Name of the directory under `livespec/projects/`
    pub project_name: String,
    /// Leave existing files and sections alone (default `true`)
    pub skip_existing: bool,
    pub inject_claude_md: bool,
    pub inject_agents_md: bool,
    /// Tool identifiers to provision
    pub tools: Vec<String>,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            skip_existing: true,
            inject_claude_md: false,
            inject_agents_md: false,
            tools: Vec::new(),
        }
    }
}

impl InitOptions {
    /// Defaults for a given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    pub fn with_skip_existing(mut self, skip_existing: bool) -> Self {
        self.skip_existing = skip_existing;
        self
    }

    pub fn with_claude_md(mut self, inject: bool) -> Self {
        self.inject_claude_md = inject;
        self
    }

    pub fn with_agents_md(mut self, inject: bool) -> Self {
        self.inject_agents_md = inject;
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }
}

/// Options for [`update`](crate::update).
///
/// There is no skip-existing policy: files are compared by content and
/// sections are always refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    pub root: PathBuf,
    pub inject_claude_md: bool,
    pub inject_agents_md: bool,
    pub tools: Vec<String>,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            inject_claude_md: false,
            inject_agents_md: false,
            tools: Vec::new(),
        }
    }
}

impl UpdateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_claude_md(mut self, inject: bool) -> Self {
        self.inject_claude_md = inject;
        self
    }

    pub fn with_agents_md(mut self, inject: bool) -> Self {
        self.inject_agents_md = inject;
        self
    }

    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools = tools.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_defaults() {
        let options = InitOptions::default();
        assert_eq!(options.root, PathBuf::from("."));
        assert_eq!(options.project_name, "my-project");
        assert!(options.skip_existing);
        assert!(!options.inject_claude_md);
        assert!(!options.inject_agents_md);
        assert!(options.tools.is_empty());
    }

    #[test]
    fn test_init_builder() {
        let options = InitOptions::new("/repo")
            .with_project_name("app")
            .with_skip_existing(false)
            .with_claude_md(true)
            .with_tools(["claude", "gemini"]);

        assert_eq!(options.root, PathBuf::from("/repo"));
        assert_eq!(options.project_name, "app");
        assert!(!options.skip_existing);
        assert!(options.inject_claude_md);
        assert!(!options.inject_agents_md);
        assert_eq!(options.tools, vec!["claude", "gemini"]);
    }

    #[test]
    fn test_update_builder() {
        let options = UpdateOptions::new("/repo")
            .with_agents_md(true)
            .with_tools(vec!["cursor".to_string()]);

        assert!(!options.inject_claude_md);
        assert!(options.inject_agents_md);
        assert_eq!(options.tools, vec!["cursor"]);
    }
}
