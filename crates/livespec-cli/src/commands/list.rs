//! List command implementation

use colored::Colorize;
use livespec_tools::ToolRegistry;

use crate::error::Result;

/// Print the supported tools and where their command files go.
pub fn run_list_tools(json: bool) -> Result<()> {
    let registry = ToolRegistry::builtins();

    if json {
        let tools: Vec<_> = registry.iter().collect();
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    println!("{}", "Available Tools".bold());
    println!();

    for tool in registry.iter() {
        let files: Vec<&str> = tool.commands.iter().map(|c| c.file_name).collect();
        println!(
            "  {:<10} {:<16} {}/{{{}}}",
            tool.id.green(),
            tool.name,
            tool.command_dir.dimmed(),
            files.join(",")
        );
    }

    println!();
    println!(
        "{} {} tools available. Use {} to set one up.",
        "Total:".dimmed(),
        registry.len(),
        "livespec --tool <id>".cyan()
    );

    Ok(())
}
