//! Built-in tool table - the single place supported tools are declared.

use super::{CommandFile, ToolDescriptor};

/// Template names of the command files, shared by every tool.
pub mod templates {
    /// The main `/livespec` command
    pub const COMMAND: &str = "commands/livespec.md";
    /// The `/livespec-housekeeping` command
    pub const HOUSEKEEPING: &str = "commands/livespec-housekeeping.md";
}

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 5;

/// Tool selected when the user skips prompts.
pub const DEFAULT_TOOL: &str = "claude";

const MARKDOWN_COMMANDS: &[CommandFile] = &[
    CommandFile::markdown("livespec.md", templates::COMMAND),
    CommandFile::markdown("livespec-housekeeping.md", templates::HOUSEKEEPING),
];

const COPILOT_COMMANDS: &[CommandFile] = &[
    CommandFile::markdown("livespec.prompt.md", templates::COMMAND),
    CommandFile::markdown("livespec-housekeeping.prompt.md", templates::HOUSEKEEPING),
];

const GEMINI_COMMANDS: &[CommandFile] = &[
    CommandFile::toml("livespec.toml", templates::COMMAND),
    CommandFile::toml("livespec-housekeeping.toml", templates::HOUSEKEEPING),
];

/// All built-in tools, in presentation order.
pub static BUILTIN_TOOLS: [ToolDescriptor; BUILTIN_COUNT] = [
    ToolDescriptor {
        id: "claude",
        name: "Claude Code",
        command_dir: ".claude/commands",
        commands: MARKDOWN_COMMANDS,
        invocation: "/livespec",
    },
    ToolDescriptor {
        id: "copilot",
        name: "GitHub Copilot",
        command_dir: ".github/prompts",
        commands: COPILOT_COMMANDS,
        invocation: "/livespec",
    },
    ToolDescriptor {
        id: "cursor",
        name: "Cursor",
        command_dir: ".cursor/prompts",
        commands: MARKDOWN_COMMANDS,
        invocation: "/livespec",
    },
    ToolDescriptor {
        id: "windsurf",
        name: "Windsurf",
        command_dir: ".windsurf/workflows",
        commands: MARKDOWN_COMMANDS,
        invocation: "/livespec",
    },
    ToolDescriptor {
        id: "gemini",
        name: "Gemini CLI",
        command_dir: ".gemini/commands",
        commands: GEMINI_COMMANDS,
        invocation: "/livespec",
    },
];
