//! JSON output handler - one document per run.

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use super::Output;
use crate::search::{SearchOutcome, Searcher};
use crate::target::Target;

#[derive(Serialize)]
struct Report<'a> {
    algorithm: &'static str,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    plaintext: Option<&'a str>,
    alphabet: String,
    max_length: usize,
    search_space: Option<u64>,
    result: &'a SearchOutcome,
}

/// JSON output - written once the outcome is known.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn to_file(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: Mutex::new(Box::new(BufWriter::new(file))),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for JsonOutput {
    // stdout carries a single document, so the target goes to the log
    // here and into the report at the end.
    fn target(&self, target: &Target) -> Result<()> {
        info!(
            algorithm = target.algorithm().as_str(),
            target = %target.hex(),
            plaintext = target.plaintext(),
            "target digest"
        );
        Ok(())
    }

    fn outcome(&self, searcher: &Searcher, outcome: &SearchOutcome) -> Result<()> {
        let target = searcher.target();
        let report = Report {
            algorithm: target.algorithm().as_str(),
            target: target.hex(),
            plaintext: target.plaintext(),
            alphabet: searcher.alphabet().to_string(),
            max_length: searcher.max_length(),
            search_space: searcher.search_space(),
            result: outcome,
        };

        let mut w = self.lock();
        serde_json::to_writer_pretty(&mut *w, &report)?;
        writeln!(w)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.lock().flush()?;
        Ok(())
    }
}
