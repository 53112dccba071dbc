//! Console output handler.

use anyhow::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;

use super::Output;
use crate::search::{SearchOutcome, Searcher};
use crate::target::Target;

/// Console output - human-readable lines on stdout or a file.
pub struct ConsoleOutput {
    writer: Mutex<Box<dyn Write + Send>>,
    verbose: bool,
}

impl ConsoleOutput {
    /// Create console output to stdout.
    pub fn new() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            verbose: false,
        }
    }

    pub fn to_file(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(Box::new(BufWriter::new(file))),
            verbose: false,
        })
    }

    /// Also report attempt counts and search space.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for ConsoleOutput {
    fn target(&self, target: &Target) -> Result<()> {
        let mut w = self.lock();

        match target.plaintext() {
            Some(plaintext) => writeln!(
                w,
                "Target hash ({} of '{}'): {}",
                target.algorithm(),
                plaintext,
                target.hex()
            )?,
            None => writeln!(w, "Target hash ({}): {}", target.algorithm(), target.hex())?,
        }

        Ok(())
    }

    fn outcome(&self, searcher: &Searcher, outcome: &SearchOutcome) -> Result<()> {
        let mut w = self.lock();

        match outcome {
            SearchOutcome::Found { candidate, .. } => writeln!(w, "Password found: {}", candidate)?,
            SearchOutcome::Exhausted { .. } => writeln!(
                w,
                "Password not found within length {}",
                searcher.max_length()
            )?,
        }

        if self.verbose {
            writeln!(w, "---")?;
            writeln!(w, "Attempts: {}", outcome.attempts())?;
            match searcher.search_space() {
                Some(total) => writeln!(w, "Search space: {}", total)?,
                None => writeln!(w, "Search space: > {}", u64::MAX)?,
            }
        }

        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.lock().flush()?;
        Ok(())
    }
}
