use tracing::trace;

use crate::error::{Result, SamplerError};
use crate::token::{sort_descending, Distribution, Partition};

/// Nucleus filtering: keeps the smallest prefix of tokens (by descending
/// probability) whose cumulative probability reaches the threshold `p`.
///
/// A token is retained while the mass accumulated *before* it is still below
/// `p`, so the token that crosses the threshold is kept. The most probable
/// token is always retained, even for `p <= 0`.
#[derive(Debug, Clone, Copy)]
pub struct NucleusFilter {
    p: f64,
}

impl NucleusFilter {
    /// Create a nucleus filter with the given cumulative probability threshold.
    pub fn new(p: f64) -> Self {
        Self { p }
    }

    pub fn top_p(&self) -> f64 {
        self.p
    }

    /// Partition `distribution` into candidates and eliminated tokens.
    pub fn filter(&self, distribution: &Distribution) -> Result<Partition> {
        if distribution.is_empty() {
            return Err(SamplerError::InvalidInput(
                "cannot filter an empty distribution".to_string(),
            ));
        }

        let mut sorted = distribution.entries().to_vec();
        sort_descending(&mut sorted);

        // Accumulated mass can round to >= 1.0 before the tail is reached,
        // so a full threshold keeps everything explicitly.
        if self.p >= 1.0 {
            return Ok(Partition {
                candidates: sorted,
                eliminated: Vec::new(),
            });
        }

        let mut cumulative = 0.0f64;
        let mut cutoff = sorted.len();
        for (i, token) in sorted.iter().enumerate() {
            // Negated comparison so a NaN threshold stops after the top token.
            if i > 0 && !(cumulative < self.p) {
                cutoff = i;
                break;
            }
            cumulative += token.probability;
        }

        trace!(top_p = self.p, cutoff, cumulative, "nucleus cutoff");

        let eliminated = sorted.split_off(cutoff);
        Ok(Partition {
            candidates: sorted,
            eliminated,
        })
    }
}

/// Convenience wrapper around [`NucleusFilter`].
pub fn filter(distribution: &Distribution, top_p: f64) -> Result<Partition> {
    NucleusFilter::new(top_p).filter(distribution)
}
