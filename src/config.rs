//! Search configuration.

use crate::alphabet::Alphabet;
use crate::digest::DigestAlgorithm;
use crate::error::Result;
use crate::target::Target;

/// Plaintext whose digest the demonstration run searches for.
pub const DEFAULT_PLAINTEXT: &str = "abc";

/// Longest candidate tried by default.
pub const DEFAULT_MAX_LENGTH: usize = 3;

/// Where the target digest comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// Hash this plaintext with the configured algorithm
    Plaintext(String),
    /// Use this hex digest as-is
    Digest(String),
}

/// Everything a search run needs, fixed before it starts.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub target: TargetSpec,
    pub alphabet: Alphabet,
    pub max_length: usize,
    pub algorithm: DigestAlgorithm,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: TargetSpec::Plaintext(DEFAULT_PLAINTEXT.to_string()),
            alphabet: Alphabet::lowercase(),
            max_length: DEFAULT_MAX_LENGTH,
            algorithm: DigestAlgorithm::Md5,
        }
    }
}

impl SearchConfig {
    pub fn with_target(mut self, target: TargetSpec) -> Self {
        self.target = target;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_algorithm(mut self, algorithm: DigestAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Compute or parse the target digest.
    pub fn resolve_target(&self) -> Result<Target> {
        match &self.target {
            TargetSpec::Plaintext(plaintext) => Ok(Target::from_plaintext(self.algorithm, plaintext)),
            TargetSpec::Digest(hex) => Target::from_hex(self.algorithm, hex),
        }
    }
}
