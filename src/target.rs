//! Target digest - the hash being searched for.

use crate::digest::DigestAlgorithm;
use crate::error::{Error, Result};

/// Known digest, fixed before the search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    algorithm: DigestAlgorithm,
    digest: Vec<u8>,
    /// Plaintext the digest was computed from, when known
    plaintext: Option<String>,
}

impl Target {
    /// Hash a known plaintext to get the target.
    pub fn from_plaintext(algorithm: DigestAlgorithm, plaintext: &str) -> Self {
        let digest = algorithm.create().digest(plaintext.as_bytes());
        Self {
            algorithm,
            digest,
            plaintext: Some(plaintext.to_string()),
        }
    }

    /// Parse a hex digest. Case and surrounding whitespace are ignored.
    pub fn from_hex(algorithm: DigestAlgorithm, input: &str) -> Result<Self> {
        let digest = hex::decode(input.trim()).map_err(|e| Error::InvalidHex {
            input: input.to_string(),
            reason: e.to_string(),
        })?;

        if digest.len() != algorithm.output_len() {
            return Err(Error::DigestLength {
                algorithm: algorithm.as_str(),
                expected: algorithm.output_len(),
                actual: digest.len(),
            });
        }

        Ok(Self {
            algorithm,
            digest,
            plaintext: None,
        })
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn plaintext(&self) -> Option<&str> {
        self.plaintext.as_deref()
    }

    /// Lowercase hex form
    pub fn hex(&self) -> String {
        hex::encode(&self.digest)
    }
}
