//! Refreshing an existing installation

use std::path::Path;

use livespec_fs::NormalizedPath;
use livespec_tools::ToolRegistry;

use crate::layout::ProjectLayout;
use crate::options::UpdateOptions;
use crate::provision::{provision_tool, render_tools, resolve_tools};
use crate::sync::{SyncResult, inject_section, write_if_changed};
use crate::{Result, template};

/// Bring an installed project up to date with this build.
///
/// Rewrites `livespec/livespec.md` and the listed tools' command files when
/// their content differs, and always replaces the requested root sections.
/// Project specs and plans are never touched.
pub fn update(options: &UpdateOptions) -> Result<SyncResult> {
    let layout = ProjectLayout::new(&options.root);
    let mut result = SyncResult::new();

    let spec = template::render(template::names::SPEC)?;
    let section = if options.inject_claude_md || options.inject_agents_md {
        Some(template::render_section()?)
    } else {
        None
    };
    let tools = resolve_tools(&options.tools, &mut result);
    let rendered_tools = render_tools(layout.root(), &tools)?;

    tracing::info!(root = %layout.root(), tools = tools.len(), "updating livespec");

    let spec_file = layout.spec_file();
    let outcome = write_if_changed(&spec_file, &spec);
    result.record(spec_file, outcome);

    if let Some(section) = &section {
        for (enabled, path) in [
            (options.inject_claude_md, layout.claude_md()),
            (options.inject_agents_md, layout.agents_md()),
        ] {
            if enabled {
                let outcome = inject_section(&path, section, false);
                result.record(path, outcome);
            }
        }
    }

    for rendered in rendered_tools {
        provision_tool(layout.root(), rendered, &mut result, write_if_changed);
    }

    tracing::info!(
        created = result.created.len(),
        updated = result.updated.len(),
        skipped = result.skipped.len(),
        errors = result.errors.len(),
        "update finished"
    );
    Ok(result)
}

/// Identifiers of the tools whose primary command file exists under `root`,
/// in registry order.
pub fn detect_installed_tools(root: &Path) -> Vec<&'static str> {
    let root = NormalizedPath::new(root);
    ToolRegistry::builtins()
        .iter()
        .filter(|tool| tool.is_installed(&root))
        .map(|tool| tool.id)
        .collect()
}

/// Whether `livespec/` and `livespec/livespec.md` both exist under `root`.
pub fn is_initialized(root: &Path) -> bool {
    let layout = ProjectLayout::new(root);
    layout.base_dir().exists() && layout.spec_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        assert!(!is_initialized(temp.path()));

        fs::create_dir(temp.path().join("livespec")).unwrap();
        assert!(!is_initialized(temp.path()));

        fs::write(temp.path().join("livespec/livespec.md"), "# spec").unwrap();
        assert!(is_initialized(temp.path()));
    }

    #[test]
    fn test_detect_installed_tools_needs_primary_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".gemini/commands")).unwrap();
        fs::create_dir_all(temp.path().join(".claude/commands")).unwrap();
        fs::write(temp.path().join(".gemini/commands/livespec.toml"), "").unwrap();
        fs::write(
            temp.path().join(".claude/commands/livespec-housekeeping.md"),
            "",
        )
        .unwrap();

        assert_eq!(detect_installed_tools(temp.path()), vec!["gemini"]);
    }
}
