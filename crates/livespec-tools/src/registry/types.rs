//! Core types for the tool registry

use livespec_fs::NormalizedPath;
use serde::Serialize;

/// How a rendered command template is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandFormat {
    /// The rendered markdown, verbatim.
    Markdown,
    /// The rendered markdown as the `prompt` string of a TOML document.
    Toml,
}

/// One command file a tool reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandFile {
    /// File name inside the tool's command directory
    pub file_name: &'static str,
    /// Name of the template rendered into this file
    pub template: &'static str,
    pub format: CommandFormat,
}

impl CommandFile {
    pub const fn markdown(file_name: &'static str, template: &'static str) -> Self {
        Self {
            file_name,
            template,
            format: CommandFormat::Markdown,
        }
    }

    pub const fn toml(file_name: &'static str, template: &'static str) -> Self {
        Self {
            file_name,
            template,
            format: CommandFormat::Toml,
        }
    }
}

/// Where a given AI assistant expects its livespec command files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// Machine identifier (e.g., "claude", "copilot")
    pub id: &'static str,
    /// Display name (e.g., "Claude Code")
    pub name: &'static str,
    /// Command directory relative to the project root
    pub command_dir: &'static str,
    /// Command files, primary first. Never empty.
    pub commands: &'static [CommandFile],
    /// How users invoke the primary command
    pub invocation: &'static str,
}

impl ToolDescriptor {
    /// The primary command file, used to detect an installation.
    pub fn primary_command(&self) -> &CommandFile {
        &self.commands[0]
    }

    /// Absolute command directory for a project root.
    pub fn command_dir_path(&self, root: &NormalizedPath) -> NormalizedPath {
        root.join(self.command_dir)
    }

    /// Absolute path of one command file for a project root.
    pub fn command_path(&self, root: &NormalizedPath, command: &CommandFile) -> NormalizedPath {
        self.command_dir_path(root).join(command.file_name)
    }

    /// Absolute path of the primary command file for a project root.
    pub fn primary_command_path(&self, root: &NormalizedPath) -> NormalizedPath {
        self.command_path(root, self.primary_command())
    }

    /// Whether the primary command file exists under `root`.
    ///
    /// Pure existence probe; the file's content is not inspected.
    pub fn is_installed(&self, root: &NormalizedPath) -> bool {
        self.primary_command_path(root).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMANDS: &[CommandFile] = &[
        CommandFile::markdown("main.md", "commands/main.md"),
        CommandFile::toml("extra.toml", "commands/extra.md"),
    ];

    const TOOL: ToolDescriptor = ToolDescriptor {
        id: "test",
        name: "Test Tool",
        command_dir: ".test/commands",
        commands: COMMANDS,
        invocation: "/test",
    };

    #[test]
    fn test_primary_command_is_first() {
        assert_eq!(TOOL.primary_command().file_name, "main.md");
        assert_eq!(TOOL.primary_command().format, CommandFormat::Markdown);
    }

    #[test]
    fn test_paths() {
        let root = NormalizedPath::new("/repo");
        assert_eq!(TOOL.command_dir_path(&root).as_str(), "/repo/.test/commands");
        assert_eq!(
            TOOL.primary_command_path(&root).as_str(),
            "/repo/.test/commands/main.md"
        );
        assert_eq!(
            TOOL.command_path(&root, &COMMANDS[1]).as_str(),
            "/repo/.test/commands/extra.toml"
        );
    }

    #[test]
    fn test_not_installed_under_missing_root() {
        let root = NormalizedPath::new("/nonexistent/root");
        assert!(!TOOL.is_installed(&root));
    }
}
