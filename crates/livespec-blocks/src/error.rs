//! Error types for livespec-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("start marker at byte {start} has no matching end marker")]
    MalformedRegion { start: usize },
}
