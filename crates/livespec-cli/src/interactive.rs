//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based interactive selection. Every prompt
//! returns `None` when the user cancels with Esc or `q`.

use dialoguer::{MultiSelect, Select};
use livespec_core::RootFiles;
use livespec_tools::{DEFAULT_TOOL, ToolRegistry};

use crate::error::Result;

/// A root instruction file offered for injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootFile {
    ClaudeMd,
    AgentsMd,
}

impl RootFile {
    fn label(self) -> &'static str {
        match self {
            Self::ClaudeMd => "CLAUDE.md",
            Self::AgentsMd => "AGENTS.md",
        }
    }

    fn select(self, targets: &mut RootFiles) {
        match self {
            Self::ClaudeMd => targets.claude_md = true,
            Self::AgentsMd => targets.agents_md = true,
        }
    }
}

/// The files in `found`, in prompt order.
fn offered_files(found: RootFiles) -> Vec<RootFile> {
    let mut choices = Vec::with_capacity(2);
    if found.claude_md {
        choices.push(RootFile::ClaudeMd);
    }
    if found.agents_md {
        choices.push(RootFile::AgentsMd);
    }
    choices
}

/// Targets for the chosen indices into `choices`.
fn targets_for(choices: &[RootFile], selected: &[usize]) -> RootFiles {
    let mut targets = RootFiles::default();
    for &index in selected {
        choices[index].select(&mut targets);
    }
    targets
}

/// Ask which existing root files get the livespec section.
///
/// Only files present in `found` are offered, all preselected.
pub fn select_injection_targets(found: RootFiles) -> Result<Option<RootFiles>> {
    let choices = offered_files(found);
    let labels: Vec<&str> = choices.iter().map(|file| file.label()).collect();
    let defaults = vec![true; choices.len()];

    let Some(selected) = MultiSelect::new()
        .with_prompt("Set up livespec in (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact_opt()?
    else {
        return Ok(None);
    };

    Ok(Some(targets_for(&choices, &selected)))
}

/// Ask which tools get the `/livespec` command files.
pub fn select_tools() -> Result<Option<Vec<String>>> {
    let tools: Vec<_> = ToolRegistry::builtins().iter().collect();
    let labels: Vec<String> = tools
        .iter()
        .map(|tool| format!("{} ({})", tool.name, tool.command_dir))
        .collect();
    let defaults: Vec<bool> = tools.iter().map(|tool| tool.id == DEFAULT_TOOL).collect();

    let selected = MultiSelect::new()
        .with_prompt("Set up /livespec command for (space to toggle, enter to confirm)")
        .items(&labels)
        .defaults(&defaults)
        .interact_opt()?;

    Ok(selected.map(|indices| {
        indices
            .into_iter()
            .map(|index| tools[index].id.to_string())
            .collect()
    }))
}

/// Ask whether to go ahead with an update.
pub fn confirm_update(message: &str) -> Result<bool> {
    let choice = Select::new()
        .with_prompt(format!("{}. What would you like to do?", message))
        .items(&["Update base files", "Cancel"])
        .default(0)
        .interact_opt()?;

    Ok(choice == Some(0))
}
