//! Configuration errors.
//!
//! These can only surface while a search is being set up. Once candidates
//! are being generated nothing can fail.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Target digest is not valid hexadecimal
    #[error("invalid target digest '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    /// Target digest has the wrong size for the selected algorithm
    #[error("{algorithm} digests are {expected} bytes, target has {actual}")]
    DigestLength {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown digest algorithm: {0}. Valid: md5, sha256, double_sha256")]
    UnknownAlgorithm(String),

    #[error("unknown charset: {0}. Valid: lower, upper, digits, alnum, hex")]
    UnknownCharset(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
