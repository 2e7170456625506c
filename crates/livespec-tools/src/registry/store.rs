//! Tool registry lookup

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{BUILTIN_TOOLS, ToolDescriptor};

static BUILTINS: LazyLock<ToolRegistry> = LazyLock::new(|| ToolRegistry::new(&BUILTIN_TOOLS));

/// Read-only index of tool descriptors by identifier.
///
/// Keeps the declaration order of the underlying table for listing.
pub struct ToolRegistry {
    tools: &'static [ToolDescriptor],
    by_id: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build a registry over a static tool table.
    pub fn new(tools: &'static [ToolDescriptor]) -> Self {
        let by_id = tools
            .iter()
            .enumerate()
            .map(|(index, tool)| (tool.id, index))
            .collect();
        Self { tools, by_id }
    }

    /// The process-wide registry of built-in tools.
    pub fn builtins() -> &'static ToolRegistry {
        &BUILTINS
    }

    /// Get a descriptor by identifier.
    pub fn get(&self, id: &str) -> Option<&'static ToolDescriptor> {
        let tools = self.tools;
        self.by_id.get(id).map(|&index| &tools[index])
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over all descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'static, ToolDescriptor> {
        self.tools.iter()
    }
}
