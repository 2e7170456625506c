//! Tool registry: the static tool table and identifier lookup.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, BUILTIN_TOOLS, DEFAULT_TOOL, templates};
pub use store::ToolRegistry;
pub use types::{CommandFile, CommandFormat, ToolDescriptor};
