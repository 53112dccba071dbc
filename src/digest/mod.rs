//! Digest functions applied to candidates.
//!
//! Every digest function is pure and total: same bytes in, same
//! fixed-length digest out.

mod double_sha256;
mod md5;
mod sha256;

pub use double_sha256::DoubleSha256Digest;
pub use md5::Md5Digest;
pub use sha256::Sha256Digest;

use crate::error::{Error, Result};

/// Trait for hashing candidate bytes
pub trait DigestFunction: Send + Sync {
    /// Human-readable name for this digest
    fn name(&self) -> &'static str;

    /// Digest size in bytes
    fn output_len(&self) -> usize;

    /// Hash `input`
    fn digest(&self, input: &[u8]) -> Vec<u8>;

    /// Hash `input` and return lowercase hex
    fn hex_digest(&self, input: &[u8]) -> String {
        hex::encode(self.digest(input))
    }
}

/// Available digest algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha256,
    DoubleSha256,
}

impl DigestAlgorithm {
    /// Create a boxed digest instance
    pub fn create(&self) -> Box<dyn DigestFunction> {
        match self {
            DigestAlgorithm::Md5 => Box::new(Md5Digest),
            DigestAlgorithm::Sha256 => Box::new(Sha256Digest),
            DigestAlgorithm::DoubleSha256 => Box::new(DoubleSha256Digest),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::DoubleSha256 => "double_sha256",
        }
    }

    pub fn output_len(&self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha256 | DigestAlgorithm::DoubleSha256 => 32,
        }
    }

    pub fn all() -> Vec<DigestAlgorithm> {
        vec![
            DigestAlgorithm::Md5,
            DigestAlgorithm::Sha256,
            DigestAlgorithm::DoubleSha256,
        ]
    }

    pub fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .collect();

        match normalized.as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "doublesha256" | "sha256d" => Ok(DigestAlgorithm::DoubleSha256),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(DigestAlgorithm::from_str("MD5").unwrap(), DigestAlgorithm::Md5);
        assert_eq!(DigestAlgorithm::from_str("sha-256").unwrap(), DigestAlgorithm::Sha256);
        assert_eq!(DigestAlgorithm::from_str("sha_256").unwrap(), DigestAlgorithm::Sha256);
        assert_eq!(
            DigestAlgorithm::from_str("sha256d").unwrap(),
            DigestAlgorithm::DoubleSha256
        );
        assert_eq!(
            DigestAlgorithm::from_str("double-sha256").unwrap(),
            DigestAlgorithm::DoubleSha256
        );
        assert!(matches!(
            DigestAlgorithm::from_str("crc32"),
            Err(Error::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for algorithm in DigestAlgorithm::all() {
            assert_eq!(DigestAlgorithm::from_str(algorithm.as_str()).unwrap(), algorithm);
        }
    }

    #[test]
    fn test_created_matches_algorithm() {
        for algorithm in DigestAlgorithm::all() {
            let function = algorithm.create();
            assert_eq!(function.name(), algorithm.as_str());
            assert_eq!(function.output_len(), algorithm.output_len());
            assert_eq!(function.digest(b"abc").len(), algorithm.output_len());
        }
    }

    #[test]
    fn test_hex_digest() {
        assert_eq!(
            DigestAlgorithm::Md5.create().hex_digest(b"abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }
}
