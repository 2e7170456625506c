//! AI tool integrations for livespec.
//!
//! Each supported assistant expects its slash-command files in a fixed
//! directory. This crate holds that knowledge as a static table of
//! [`ToolDescriptor`]s; it does no I/O beyond existence probes.

pub mod registry;

pub use registry::{
    BUILTIN_COUNT, BUILTIN_TOOLS, CommandFile, CommandFormat, DEFAULT_TOOL, ToolDescriptor,
    ToolRegistry, templates,
};
