//! Marker-delimited section handling for livespec.
//!
//! A consuming project's root instruction files (`CLAUDE.md`, `AGENTS.md`)
//! may carry one livespec-owned region:
//!
//! ```text
//! <!-- LIVESPEC:START -->
//! managed content
//! <!-- LIVESPEC:END -->
//! ```
//!
//! Everything outside the region belongs to the project and is preserved
//! byte-for-byte. This crate works on in-memory text only; reading and
//! writing files is the caller's job.

pub mod error;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use parser::{END_MARKER, MarkerRegion, START_MARKER, find_region, has_start_marker};
pub use writer::{prepend_section, replace_region, upsert_section, wrap_section};
