//! Sync primitives and result accounting
//!
//! - **file_sync**: create or refresh files and directories
//! - **injector**: manage the livespec section inside root instruction files
//! - **report**: `SyncOutcome` and the per-run `SyncResult`

mod file_sync;
mod injector;
mod report;

pub use file_sync::{ensure_dir, write_if_absent, write_if_changed};
pub use injector::{has_section, inject_section};
pub use report::{SyncOutcome, SyncResult};
