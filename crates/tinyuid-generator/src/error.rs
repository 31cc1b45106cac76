use thiserror::Error;

/// Errors returned by id generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid id length {length}; expected at least 1")]
    InvalidLength { length: usize },
}
