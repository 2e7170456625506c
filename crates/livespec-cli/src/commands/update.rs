//! Update command implementation
//!
//! Refreshes an existing installation when its version stamp is stale.

use std::path::Path;

use colored::Colorize;
use livespec_core::{
    UpdateOptions, VersionStatus, detect_installed_tools, detect_sections, needs_update, update,
};

use super::{RunOptions, print_cancelled, print_errors, print_json, print_summary};
use crate::error::Result;
use crate::interactive;

/// Update the installation in `root`.
///
/// Refreshes the spec file, the sections already present in root
/// instruction files and the command files of installed tools.
pub fn run_update(root: &Path, options: &RunOptions) -> Result<()> {
    let status = needs_update(root);

    if !status.out_of_date && !options.force {
        if options.json {
            return print_json("update", Some(&status), None);
        }
        println!(
            "{} Already up to date (v{}).",
            "OK".green().bold(),
            status.latest
        );
        return Ok(());
    }

    let message = version_message(&status);
    if status.out_of_date && options.interactive {
        if !interactive::confirm_update(&message)? {
            print_cancelled();
            return Ok(());
        }
    } else if !options.json {
        println!("{} {}", "=>".blue().bold(), message);
    }

    let sections = detect_sections(root);
    let tools = detect_installed_tools(root);
    tracing::debug!(?sections, ?tools, "refreshing installation");

    let update_options = UpdateOptions::new(root)
        .with_claude_md(sections.claude_md)
        .with_agents_md(sections.agents_md)
        .with_tools(tools);
    let result = update(&update_options)?;

    if options.json {
        return print_json("update", Some(&status), Some(&result));
    }

    print_summary(&result);
    print_errors(&result);

    let changed = result.total_changes();
    if changed > 0 {
        println!(
            "{} Updated {} files to v{}.",
            "OK".green().bold(),
            changed,
            status.latest
        );
        println!();
        println!(
            "Run {} with your AI to update project configuration.",
            "/livespec".cyan()
        );
    } else {
        println!("{} All files unchanged.", "OK".green().bold());
    }

    Ok(())
}

/// One-line description of the pending update.
fn version_message(status: &VersionStatus) -> String {
    match (&status.current, status.out_of_date) {
        (_, false) => format!("Force updating v{}", status.latest),
        (Some(current), true) => {
            format!("Update available: v{} → v{}", current, status.latest)
        }
        (None, true) => format!(
            "Version not found in livespec.md. Latest: v{}",
            status.latest
        ),
    }
}
