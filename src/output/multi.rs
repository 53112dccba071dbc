use anyhow::Result;

use super::Output;
use crate::search::{SearchOutcome, Searcher};
use crate::target::Target;

/// Fan out to several outputs, e.g. console plus a JSON report file.
pub struct MultiOutput {
    outputs: Vec<Box<dyn Output>>,
}

impl MultiOutput {
    pub fn new(outputs: Vec<Box<dyn Output>>) -> Self {
        Self { outputs }
    }
}

impl Output for MultiOutput {
    fn target(&self, target: &Target) -> Result<()> {
        for output in &self.outputs {
            output.target(target)?;
        }
        Ok(())
    }

    fn outcome(&self, searcher: &Searcher, outcome: &SearchOutcome) -> Result<()> {
        for output in &self.outputs {
            output.outcome(searcher, outcome)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    struct CountingOutput {
        target_count: Arc<AtomicU64>,
        outcome_count: Arc<AtomicU64>,
    }

    impl Output for CountingOutput {
        fn target(&self, _target: &Target) -> Result<()> {
            self.target_count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn outcome(&self, _searcher: &Searcher, _outcome: &SearchOutcome) -> Result<()> {
            self.outcome_count.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn flush(&self) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_multi_output_fans_out() {
        let target_count = Arc::new(AtomicU64::new(0));
        let outcome_count = Arc::new(AtomicU64::new(0));

        let outputs: Vec<Box<dyn Output>> = (0..2)
            .map(|_| {
                Box::new(CountingOutput {
                    target_count: Arc::clone(&target_count),
                    outcome_count: Arc::clone(&outcome_count),
                }) as Box<dyn Output>
            })
            .collect();
        let multi = MultiOutput::new(outputs);

        let searcher = Searcher::new(&SearchConfig::default().with_max_length(1)).unwrap();
        multi.target(searcher.target()).unwrap();
        let outcome = searcher.run(None);
        multi.outcome(&searcher, &outcome).unwrap();
        multi.flush().unwrap();

        assert_eq!(target_count.load(Ordering::Relaxed), 2);
        assert_eq!(outcome_count.load(Ordering::Relaxed), 2);
    }
}
