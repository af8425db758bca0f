use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdbushError {
    /// The node size must be at least 1.
    #[error("Invalid node size {0}: must be at least 1.")]
    InvalidNodeSize(usize),

    /// The compact id storage addresses at most `u32::MAX` points.
    #[error("Cannot index {0} points: at most 4294967295 are supported.")]
    TooManyPoints(usize),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, KdbushError>;
