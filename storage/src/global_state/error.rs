use thiserror::Error;

/// An internal fault raised by the backing store.
///
/// The in-memory backend never produces one, but the channel is part of
/// every read signature so that alternative backends can surface exhaustion
/// and tests can inject faults.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The backing store failed to produce or accept a record.
    #[error("storage fault: {0}")]
    Storage(String),
}
