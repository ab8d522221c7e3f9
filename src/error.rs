//! Error types shared by every module in the crate.

use thiserror::Error;

/// Result type for index construction, updates and queries.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the hashing utilities, the segment tree and the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A position fell outside `[0, len)` (after converting to 0-based).
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Construction-time misconfiguration: bad capacity, base or modulus.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The value has no multiplicative inverse modulo `modulus`.
    #[error("{value} has no inverse modulo {modulus}")]
    Domain { value: u64, modulus: u64 },

    /// Malformed textual operation or input header.
    #[error("parse error: {0}")]
    Parse(String),
}
