//! MD5 - 16-byte digest.

use md5::{Digest, Md5};
use super::DigestFunction;

pub struct Md5Digest;

impl DigestFunction for Md5Digest {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn output_len(&self) -> usize {
        16
    }

    fn digest(&self, input: &[u8]) -> Vec<u8> {
        Md5::digest(input).to_vec()
    }
}
