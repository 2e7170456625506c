//! Shared test utilities for the livespec workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`project`]: [`TestProject`] temporary project directory

pub mod project;

pub use project::TestProject;
