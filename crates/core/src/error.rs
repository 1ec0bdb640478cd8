//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Generation over validated inputs cannot fail; these variants cover
/// degenerate configuration (caught before generation starts) and session
/// updates that name something that does not exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Generator configuration or a lookup table was rejected, or a session
    /// update carried an out-of-range value (e.g. a slider past its max).
    #[error("invalid configuration or value: {0}")]
    Validation(String),

    /// Generation was asked to break a relationship between records, such as
    /// drawing deals without any contacts to reference.
    #[error("dataset invariant broken: {0}")]
    InvariantViolation(String),

    /// Text that should name a record id did not parse as one.
    #[error("not a record id: {0}")]
    InvalidId(String),

    /// A session update named a workflow, deal, module or parameter that
    /// the current state does not contain.
    #[error("no such {0}")]
    NotFound(String),
}

impl DomainError {
    /// Shorthand for [`DomainError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_record() {
        assert_eq!(DomainError::not_found("deal 7").to_string(), "no such deal 7");
        assert_eq!(
            DomainError::validation("score_range: min 90 > max 10").to_string(),
            "invalid configuration or value: score_range: min 90 > max 10"
        );
        assert_eq!(DomainError::invalid_id("abc").to_string(), "not a record id: abc");
    }
}
