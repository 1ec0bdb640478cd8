use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Whitespace-only submissions are ignored.
    #[error("message is empty")]
    EmptyMessage,

    /// The chat worker has shut down.
    #[error("chat service is closed")]
    Closed,

    #[error("invalid response rule: {0}")]
    InvalidRule(String),
}
