//! Output handlers for search runs.

mod console;
mod json;
mod multi;

pub use console::ConsoleOutput;
pub use json::JsonOutput;
pub use multi::MultiOutput;

use anyhow::Result;
use crate::search::{SearchOutcome, Searcher};
use crate::target::Target;

/// Output trait for reporting a search run.
pub trait Output: Send + Sync {
    /// Announce the target before the search begins.
    fn target(&self, target: &Target) -> Result<()>;

    /// Report the terminal outcome (called exactly once per run).
    fn outcome(&self, searcher: &Searcher, outcome: &SearchOutcome) -> Result<()>;

    /// Flush any buffered output.
    fn flush(&self) -> Result<()>;
}
