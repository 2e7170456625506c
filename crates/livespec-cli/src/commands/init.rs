//! Init command implementation
//!
//! Sets up livespec in a directory that has no installation yet.

use std::path::Path;

use colored::Colorize;
use livespec_core::{InitOptions, default_project_name, detect_root_files, initialize};
use livespec_tools::{DEFAULT_TOOL, ToolRegistry};

use super::{RunOptions, print_cancelled, print_errors, print_json, print_summary};
use crate::error::{CliError, Result};
use crate::interactive;

/// Run a fresh initialization in `root`.
///
/// Existing root instruction files get the livespec section unless the user
/// deselects them. Tools come from `--tool`, the prompt, or default to
/// Claude Code.
pub fn run_init(root: &Path, options: &RunOptions) -> Result<()> {
    if let Some(name) = &options.project_name {
        validate_project_name(name)?;
    }

    let found = detect_root_files(root);
    let targets = if options.interactive && found.any() {
        match interactive::select_injection_targets(found)? {
            Some(targets) => targets,
            None => {
                print_cancelled();
                return Ok(());
            }
        }
    } else {
        found
    };

    let tools = if !options.tools.is_empty() {
        options.tools.clone()
    } else if options.interactive {
        match interactive::select_tools()? {
            Some(tools) => tools,
            None => {
                print_cancelled();
                return Ok(());
            }
        }
    } else {
        vec![DEFAULT_TOOL.to_string()]
    };

    let project_name = options
        .project_name
        .clone()
        .unwrap_or_else(|| default_project_name(root));

    if !options.json {
        println!(
            "{} Creating livespec directory structure in {}...",
            "=>".blue().bold(),
            root.display().to_string().cyan()
        );
    }

    let init_options = InitOptions::new(root)
        .with_project_name(&project_name)
        .with_claude_md(targets.claude_md)
        .with_agents_md(targets.agents_md)
        .with_tools(&tools);
    let result = initialize(&init_options)?;

    if options.json {
        return print_json("init", None, Some(&result));
    }

    print_summary(&result);
    print_errors(&result);

    println!();
    println!("{}", "Next steps".bold());
    for (number, step) in next_steps(&tools).iter().enumerate() {
        println!("  {}. {}", number + 1, step);
    }
    println!();
    println!("{} Done!", "OK".green().bold());

    Ok(())
}

/// A project name becomes one directory under `livespec/projects/`.
fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::user("Project name must not be empty"));
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(CliError::user(format!(
            "Invalid project name '{}': must be a single directory name",
            name
        )));
    }
    Ok(())
}

/// Follow-up instructions after a fresh init.
fn next_steps(tools: &[String]) -> Vec<String> {
    let registry = ToolRegistry::builtins();

    // Tools sharing an invocation are listed on one line, first use first
    let mut by_invocation: Vec<(&str, Vec<&str>)> = Vec::new();
    for tool in tools.iter().filter_map(|id| registry.get(id)) {
        match by_invocation
            .iter_mut()
            .find(|(invocation, _)| *invocation == tool.invocation)
        {
            Some((_, names)) if names.contains(&tool.name) => {}
            Some((_, names)) => names.push(tool.name),
            None => by_invocation.push((tool.invocation, vec![tool.name])),
        }
    }

    let mut steps = Vec::with_capacity(by_invocation.len() + 2);
    for (invocation, names) in by_invocation {
        steps.push(format!(
            "Run {} in {} to configure projects",
            invocation,
            names.join(", ")
        ));
    }
    steps.push("Add specs in livespec/projects/".to_string());
    steps.push("Read livespec/livespec.md for the full workflow".to_string());
    steps
}
