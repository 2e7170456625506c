//! livespec CLI
//!
//! Sets up living specifications for AI-native development in a project,
//! and keeps an existing setup current.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use livespec_core::is_initialized;

use cli::Cli;
use commands::RunOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("failed to set up logging: {}", e)))?;
    tracing::debug!("Verbose mode enabled");

    if cli.list_tools {
        return commands::run_list_tools(cli.json);
    }

    let root = resolve_root(&cli.dir)?;
    let options = RunOptions {
        interactive: !cli.yes && std::io::stdin().is_terminal(),
        force: cli.force,
        json: cli.json,
        project_name: cli.project_name,
        tools: cli.tools,
    };

    if is_initialized(&root) {
        commands::run_update(&root, &options)
    } else {
        commands::run_init(&root, &options)
    }
}

/// Absolute form of the target directory, which must exist.
fn resolve_root(dir: &Path) -> Result<PathBuf> {
    let root = std::path::absolute(dir)?;
    if !root.is_dir() {
        return Err(CliError::user(format!(
            "Not a directory: {}",
            root.display()
        )));
    }
    Ok(root)
}
