//! Fresh project initialization

use crate::layout::ProjectLayout;
use crate::options::InitOptions;
use crate::provision::{provision_tool, render_tools, resolve_tools};
use crate::sync::{SyncResult, ensure_dir, inject_section, write_if_absent};
use crate::{Result, template};

/// Scaffold the livespec tree, inject root sections and provision tools.
///
/// Steps run in order and never stop early: per-path failures are collected
/// in the returned [`SyncResult`]. Templates are rendered before anything is
/// written, so the only `Err` is a missing embedded template and it leaves
/// the filesystem untouched.
pub fn initialize(options: &InitOptions) -> Result<SyncResult> {
    let layout = ProjectLayout::new(&options.root);
    let mut result = SyncResult::new();

    let spec = template::render(template::names::SPEC)?;
    let project = template::render(template::names::PROJECT)?;
    let section = if options.inject_claude_md || options.inject_agents_md {
        Some(template::render_section()?)
    } else {
        None
    };
    let tools = resolve_tools(&options.tools, &mut result);
    let rendered_tools = render_tools(layout.root(), &tools)?;

    tracing::info!(
        root = %layout.root(),
        project = %options.project_name,
        tools = tools.len(),
        "initializing livespec"
    );

    for dir in layout.scaffold_dirs(&options.project_name) {
        if let Some(outcome) = ensure_dir(&dir) {
            result.record(dir, outcome);
        }
    }

    let spec_file = layout.spec_file();
    let outcome = write_if_absent(&spec_file, &spec, options.skip_existing);
    result.record(spec_file, outcome);

    let project_file = layout.project_file(&options.project_name);
    let outcome = write_if_absent(&project_file, &project, options.skip_existing);
    result.record(project_file, outcome);

    if let Some(section) = &section {
        for (enabled, path) in [
            (options.inject_claude_md, layout.claude_md()),
            (options.inject_agents_md, layout.agents_md()),
        ] {
            if enabled {
                let outcome = inject_section(&path, section, options.skip_existing);
                result.record(path, outcome);
            }
        }
    }

    for rendered in rendered_tools {
        provision_tool(layout.root(), rendered, &mut result, |path, content| {
            write_if_absent(path, content, options.skip_existing)
        });
    }

    tracing::info!(
        created = result.created.len(),
        updated = result.updated.len(),
        skipped = result.skipped.len(),
        errors = result.errors.len(),
        "initialize finished"
    );
    Ok(result)
}
