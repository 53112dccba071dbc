//! hashbrute - exhaustive candidate search against a known password digest.
//!
//! Enumerates every string over an alphabet up to a bounded length, shortest
//! first, hashes each one and stops at the first candidate whose digest
//! equals the target.
//!
//! ```
//! use hashbrute::{SearchConfig, SearchOutcome, Searcher};
//!
//! let searcher = Searcher::new(&SearchConfig::default()).unwrap();
//! let outcome = searcher.run(None);
//! assert_eq!(outcome.candidate(), Some("abc"));
//! assert!(matches!(outcome, SearchOutcome::Found { .. }));
//! ```

pub mod alphabet;
pub mod benchmark;
pub mod candidates;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod output;
pub mod search;
pub mod target;

pub use alphabet::{Alphabet, Charset};
pub use config::{SearchConfig, TargetSpec};
pub use digest::DigestAlgorithm;
pub use error::Error;
pub use search::{SearchOutcome, Searcher};
pub use target::Target;

/// Default progress bar style for CLI operations.
pub fn default_progress_style() -> indicatif::ProgressStyle {
    indicatif::ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
        .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
        .progress_chars("#>-")
}
