//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// livespec - Living specification management for AI-native development
///
/// Initializes livespec in a project, or updates an existing installation
/// when the installed version differs from this one.
#[derive(Parser, Debug)]
#[command(name = "livespec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Skip prompts and use defaults
    #[arg(short, long)]
    pub yes: bool,

    /// Force update even if versions match
    #[arg(short, long)]
    pub force: bool,

    /// Project directory
    #[arg(short, long, env = "LIVESPEC_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Project name for a fresh init (default: directory name)
    #[arg(short = 'n', long)]
    pub project_name: Option<String>,

    /// Tool to set up on a fresh init (repeatable)
    #[arg(short = 't', long = "tool", value_name = "ID")]
    pub tools: Vec<String>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,

    /// List supported tools and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
