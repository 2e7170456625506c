//! Command implementations

pub mod init;
pub mod list;
pub mod update;

pub use init::run_init;
pub use list::run_list_tools;
pub use update::run_update;

use colored::Colorize;
use livespec_core::{SyncResult, VersionStatus};
use serde::Serialize;

use crate::error::Result;

/// Flags shared by the init and update flows.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Prompt the user; off with `--yes` or without a terminal
    pub interactive: bool,
    pub force: bool,
    pub json: bool,
    pub project_name: Option<String>,
    pub tools: Vec<String>,
}

/// Machine-readable summary printed with `--json`.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a VersionStatus>,
    result: Option<&'a SyncResult>,
}

fn print_json(
    action: &'static str,
    version: Option<&VersionStatus>,
    result: Option<&SyncResult>,
) -> Result<()> {
    let report = RunReport {
        action,
        version,
        result,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_summary(result: &SyncResult) {
    println!(
        "   {} created, {} updated, {} unchanged",
        result.created.len().to_string().green(),
        result.updated.len().to_string().yellow(),
        result.skipped.len().to_string().dimmed()
    );
}

fn print_errors(result: &SyncResult) {
    if result.errors.is_empty() {
        return;
    }

    eprintln!("{}", "Errors:".red().bold());
    for error in &result.errors {
        eprintln!("  - {}", error);
    }
}

fn print_cancelled() {
    println!("{}", "Cancelled.".yellow());
}
