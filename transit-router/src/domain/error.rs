//! Domain error types.
//!
//! These errors represent validation failures in timetable input. They are
//! distinct from I/O and HTTP errors.

use super::TimeError;

/// Domain-level errors for validation of timetable data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Identifier failed validation
    #[error("invalid {kind} id: {reason}")]
    InvalidId {
        kind: &'static str,
        reason: &'static str,
    },

    /// Transport mode is neither bus nor train
    #[error("unknown transport mode: {0}")]
    UnknownMode(String),

    /// Clock time failed to parse
    #[error(transparent)]
    Time(#[from] TimeError),
}
