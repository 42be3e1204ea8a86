// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures the domain can express on its own terms. `Validation` comes out
/// of value-object constructors (malformed ids, empty comment bodies,
/// oversized input); `Conflict` is a uniqueness violation such as
/// subscribing to the same creator twice; `NotFound` is an absent row;
/// `Persistence` wraps storage faults the domain cannot interpret further.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
