//! Double SHA256 - SHA256(SHA256(input)).

use sha2::{Digest, Sha256};
use super::DigestFunction;

pub struct DoubleSha256Digest;

impl DigestFunction for DoubleSha256Digest {
    fn name(&self) -> &'static str {
        "double_sha256"
    }

    fn output_len(&self) -> usize {
        32
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        let first = Sha256::digest(input);
        Sha256::digest(first).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hash_of_hash() {
        let once = Sha256::digest(b"password");
        let twice = Sha256::digest(once);
        assert_eq!(DoubleSha256Digest.digest(b"password"), twice.to_vec());
        assert_ne!(DoubleSha256Digest.digest(b"password"), once.to_vec());
    }
}
