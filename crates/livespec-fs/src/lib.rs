//! Filesystem primitives for livespec
//!
//! Provides normalized path handling, the well-known layout names of a
//! livespec project, and atomic text I/O.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::LivespecPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
