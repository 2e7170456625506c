//! Tool command file provisioning shared by initialize and update

use livespec_fs::NormalizedPath;
use livespec_tools::{ToolDescriptor, ToolRegistry};

use crate::sync::{SyncOutcome, SyncResult, ensure_dir};
use crate::{Error, Result, template};

/// A tool with its command files rendered and ready to write.
pub(crate) struct RenderedTool {
    pub tool: &'static ToolDescriptor,
    pub files: Vec<(NormalizedPath, String)>,
}

/// Look up tool identifiers in the built-in registry.
///
/// Duplicates are dropped, first occurrence wins. Unknown identifiers are
/// recorded as errors.
pub(crate) fn resolve_tools(
    ids: &[String],
    result: &mut SyncResult,
) -> Vec<&'static ToolDescriptor> {
    let registry = ToolRegistry::builtins();
    let mut tools: Vec<&'static ToolDescriptor> = Vec::with_capacity(ids.len());

    for id in ids {
        match registry.get(id) {
            Some(tool) if tools.iter().any(|t| t.id == tool.id) => {
                tracing::debug!(tool = %id, "duplicate tool, ignoring");
            }
            Some(tool) => tools.push(tool),
            None => result.record_error(Error::UnknownTool { id: id.clone() }),
        }
    }

    tools
}

/// Render every command file of `tools` without touching the filesystem.
pub(crate) fn render_tools(
    root: &NormalizedPath,
    tools: &[&'static ToolDescriptor],
) -> Result<Vec<RenderedTool>> {
    tools
        .iter()
        .map(|&tool| {
            let files = tool
                .commands
                .iter()
                .map(|command| {
                    Ok((
                        tool.command_path(root, command),
                        template::render_command(command)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(RenderedTool { tool, files })
        })
        .collect()
}

/// Ensure the tool's command directory, then write each file with `write`.
///
/// When the directory cannot be created the tool's files are skipped.
pub(crate) fn provision_tool(
    root: &NormalizedPath,
    rendered: RenderedTool,
    result: &mut SyncResult,
    write: impl Fn(&NormalizedPath, &str) -> SyncOutcome,
) {
    let dir = rendered.tool.command_dir_path(root);
    match ensure_dir(&dir) {
        Some(SyncOutcome::Failed(error)) => {
            tracing::warn!(tool = rendered.tool.id, "skipping command files");
            result.record_error(error);
            return;
        }
        Some(outcome) => result.record(dir, outcome),
        None => {}
    }

    for (path, content) in rendered.files {
        let outcome = write(&path, &content);
        result.record(path, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_dedupes_and_reports_unknown() {
        let mut result = SyncResult::new();
        let tools = resolve_tools(&ids(&["gemini", "vim", "claude", "gemini"]), &mut result);

        let resolved: Vec<_> = tools.iter().map(|t| t.id).collect();
        assert_eq!(resolved, vec!["gemini", "claude"]);
        assert_eq!(result.errors, vec!["Unknown tool: vim".to_string()]);
    }

    #[test]
    fn test_render_tools_paths() {
        let root = NormalizedPath::new("/repo");
        let mut result = SyncResult::new();
        let tools = resolve_tools(&ids(&["copilot"]), &mut result);

        let rendered = render_tools(&root, &tools).unwrap();
        let paths: Vec<_> = rendered[0].files.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/repo/.github/prompts/livespec.prompt.md",
                "/repo/.github/prompts/livespec-housekeeping.prompt.md",
            ]
        );
    }
}
