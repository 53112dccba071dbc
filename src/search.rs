//! Brute-force search - hash candidates until one matches the target.
//!
//! A search is a two-state machine. It starts in [`SearchState::Searching`]
//! and moves to [`SearchState::Done`] on the first candidate whose digest
//! equals the target, or once the candidate sequence runs out. Nothing is
//! generated or hashed after that.

use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::alphabet::Alphabet;
use crate::candidates::{search_space, Candidates};
use crate::config::SearchConfig;
use crate::digest::DigestFunction;
use crate::error::Result;
use crate::target::Target;

/// Candidates hashed between progress bar updates.
const PROGRESS_INTERVAL: u64 = 4096;

/// Terminal result of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A candidate hashed to the target
    Found { candidate: String, attempts: u64 },
    /// Every candidate was tried without a match
    Exhausted { attempts: u64 },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn candidate(&self) -> Option<&str> {
        match self {
            SearchOutcome::Found { candidate, .. } => Some(candidate),
            SearchOutcome::Exhausted { .. } => None,
        }
    }

    /// Number of digests computed.
    pub fn attempts(&self) -> u64 {
        match self {
            SearchOutcome::Found { attempts, .. } | SearchOutcome::Exhausted { attempts } => *attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Searching,
    Done(SearchOutcome),
}

/// Step-by-step search over any candidate sequence and digest function.
pub struct Search<'t, I, F> {
    candidates: I,
    target: &'t [u8],
    digest: F,
    attempts: u64,
    length: usize,
    state: SearchState,
}

impl<'t, I, F> Search<'t, I, F>
where
    I: Iterator<Item = String>,
    F: FnMut(&[u8]) -> Vec<u8>,
{
    pub fn new<C>(candidates: C, target: &'t [u8], digest: F) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self {
            candidates: candidates.into_iter(),
            target,
            digest,
            attempts: 0,
            length: 0,
            state: SearchState::Searching,
        }
    }

    /// Try one candidate. Does nothing once the search is done.
    pub fn step(&mut self) -> &SearchState {
        if let SearchState::Done(_) = self.state {
            return &self.state;
        }

        let Some(candidate) = self.candidates.next() else {
            self.state = SearchState::Done(SearchOutcome::Exhausted {
                attempts: self.attempts,
            });
            return &self.state;
        };

        let length = candidate.chars().count();
        if length != self.length {
            debug!(length, attempts = self.attempts, "trying candidates of new length");
            self.length = length;
        }

        self.attempts += 1;
        if (self.digest)(candidate.as_bytes()) == self.target {
            self.state = SearchState::Done(SearchOutcome::Found {
                candidate,
                attempts: self.attempts,
            });
        }

        &self.state
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Step until done.
    pub fn finish(mut self, progress: Option<&ProgressBar>) -> SearchOutcome {
        let mut reported = 0u64;

        loop {
            if let SearchState::Done(outcome) = self.step() {
                if let Some(pb) = progress {
                    pb.inc(outcome.attempts() - reported);
                }
                return outcome.clone();
            }

            if let Some(pb) = progress {
                if self.attempts - reported >= PROGRESS_INTERVAL {
                    pb.inc(self.attempts - reported);
                    reported = self.attempts;
                }
            }
        }
    }
}

/// Run a complete search and return its outcome.
pub fn search<C, F>(
    candidates: C,
    target: &[u8],
    digest: F,
    progress: Option<&ProgressBar>,
) -> SearchOutcome
where
    C: IntoIterator<Item = String>,
    F: FnMut(&[u8]) -> Vec<u8>,
{
    Search::new(candidates, target, digest).finish(progress)
}

/// Configured searcher: target, alphabet, length bound and digest function.
pub struct Searcher {
    target: Target,
    alphabet: Alphabet,
    max_length: usize,
    function: Box<dyn DigestFunction>,
}

impl Searcher {
    /// Resolve the target and digest function from `config`.
    ///
    /// An empty alphabet or zero max length is not an error; the search
    /// simply has nothing to try.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let target = config.resolve_target()?;

        if config.alphabet.is_empty() || config.max_length == 0 {
            warn!(
                alphabet_len = config.alphabet.len(),
                max_length = config.max_length,
                "search space is empty"
            );
        }

        Ok(Self {
            target,
            alphabet: config.alphabet.clone(),
            max_length: config.max_length,
            function: config.algorithm.create(),
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Candidates in the worst case, `None` if it overflows `u64`.
    pub fn search_space(&self) -> Option<u64> {
        search_space(self.alphabet.len(), self.max_length)
    }

    /// Step-by-step search for callers driving the state machine themselves.
    pub fn start(&self) -> Search<'_, Candidates<'_>, impl FnMut(&[u8]) -> Vec<u8> + '_> {
        let function = &*self.function;
        Search::new(
            Candidates::new(&self.alphabet, self.max_length),
            self.target.digest(),
            move |bytes: &[u8]| function.digest(bytes),
        )
    }

    pub fn run(&self, progress: Option<&ProgressBar>) -> SearchOutcome {
        info!(
            algorithm = self.function.name(),
            target = %self.target.hex(),
            alphabet_len = self.alphabet.len(),
            max_length = self.max_length,
            search_space = ?self.search_space(),
            "starting search"
        );

        let outcome = self.start().finish(progress);

        match &outcome {
            SearchOutcome::Found { candidate, attempts } => {
                info!(%candidate, attempts, "match found")
            }
            SearchOutcome::Exhausted { attempts } => info!(attempts, "search space exhausted"),
        }

        outcome
    }
}
