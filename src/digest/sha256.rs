//! SHA256 - 32-byte digest.

use sha2::{Digest, Sha256};
use super::DigestFunction;

pub struct Sha256Digest;

impl DigestFunction for Sha256Digest {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn output_len(&self) -> usize {
        32
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        Sha256::digest(input).to_vec()
    }
}
