//! Embedded templates and their rendering
//!
//! Templates are compiled into the binary. Rendering replaces the first
//! `{{VERSION}}` placeholder and, for tool command files, applies the
//! command file's on-disk format.

use livespec_tools::{CommandFile, CommandFormat, templates};

use crate::version::current_version;
use crate::{Error, Result};

/// Placeholder replaced with the version at render time.
pub const VERSION_PLACEHOLDER: &str = "{{VERSION}}";

/// Names of the non-command templates.
pub mod names {
    /// The primary spec file, carries the version stamp
    pub const SPEC: &str = "livespec.md";
    /// Per-project spec skeleton
    pub const PROJECT: &str = "project.md";
    /// Body of the managed section in root instruction files
    pub const SECTION: &str = "AGENTS-SECTION.md";
}

const TEMPLATES: &[(&str, &str)] = &[
    (names::SPEC, include_str!("../templates/livespec.md")),
    (names::PROJECT, include_str!("../templates/project.md")),
    (names::SECTION, include_str!("../templates/AGENTS-SECTION.md")),
    (templates::COMMAND, include_str!("../templates/commands/livespec.md")),
    (
        templates::HOUSEKEEPING,
        include_str!("../templates/commands/livespec-housekeeping.md"),
    ),
];

/// Names of all embedded templates.
pub fn template_names() -> impl Iterator<Item = &'static str> {
    TEMPLATES.iter().map(|(name, _)| *name)
}

/// Raw text of a template, placeholders untouched.
pub fn raw(name: &str) -> Result<&'static str> {
    TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, text)| *text)
        .ok_or_else(|| Error::TemplateNotFound {
            name: name.to_string(),
        })
}

/// Render a template with the version of this build.
pub fn render(name: &str) -> Result<String> {
    render_with_version(name, current_version())
}

/// Render a template with an explicit version.
///
/// Only the first placeholder is substituted.
pub fn render_with_version(name: &str, version: &str) -> Result<String> {
    Ok(raw(name)?.replacen(VERSION_PLACEHOLDER, version, 1))
}

/// The managed section for root instruction files, markers included.
pub fn render_section() -> Result<String> {
    Ok(livespec_blocks::wrap_section(&render(names::SECTION)?))
}

/// Render a tool command file in its on-disk format.
pub fn render_command(command: &CommandFile) -> Result<String> {
    let body = render(command.template)?;
    Ok(match command.format {
        CommandFormat::Markdown => body,
        CommandFormat::Toml => toml_prompt(&body),
    })
}

/// Wrap markdown as the `prompt` of a TOML command file.
///
/// Uses a multi-line basic string; backslashes and runs of three quotes are
/// escaped so any markdown survives.
fn toml_prompt(body: &str) -> String {
    let escaped = body
        .trim_end()
        .replace('\\', "\\\\")
        .replace("\"\"\"", "\"\"\\\"");
    format!("prompt = \"\"\"\n{}\n\"\"\"\n", escaped)
}
