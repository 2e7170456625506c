//! Core engine for livespec
//!
//! Scaffolds the `livespec/` tree in a project, keeps a managed section in
//! the project's root instruction files (`CLAUDE.md`, `AGENTS.md`) and
//! provisions command files for AI coding tools.
//!
//! - **initialize**: first-time setup; existing files are kept by default
//! - **update**: refresh the spec file, sections and tool commands of an
//!   installed project, writing only what changed
//! - **version**: compare the installed version stamp with this build
//!
//! Per-path failures never abort a run. They are collected in the returned
//! [`SyncResult`] next to the created, updated and skipped paths.
//!
//! # Example
//!
//! ```no_run
//! use livespec_core::{InitOptions, initialize};
//!
//! let options = InitOptions::new(".")
//!     .with_project_name("my-app")
//!     .with_tools(["claude"]);
//! let result = initialize(&options)?;
//! println!("created {} paths", result.created.len());
//! # Ok::<(), livespec_core::Error>(())
//! ```

pub mod detect;
pub mod error;
pub mod init;
pub mod layout;
pub mod options;
mod provision;
pub mod sync;
pub mod template;
pub mod update;
pub mod version;

pub use detect::{RootFiles, default_project_name, detect_root_files, detect_sections};
pub use error::{Error, Result};
pub use init::initialize;
pub use layout::ProjectLayout;
pub use options::{DEFAULT_PROJECT_NAME, InitOptions, UpdateOptions};
pub use sync::{
    SyncOutcome, SyncResult, ensure_dir, has_section, inject_section, write_if_absent,
    write_if_changed,
};
pub use template::{render, render_command, render_section, render_with_version};
pub use update::{detect_installed_tools, is_initialized, update};
pub use version::{VersionStatus, current_version, extract_version, needs_update};
