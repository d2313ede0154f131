use rand::Rng;
use tracing::warn;

use crate::error::{Result, SamplerError};
use crate::token::ScoredToken;

/// Draws one token from a candidate set, weighted by renormalized probability.
///
/// The random source is supplied by the caller so that tests and drivers can
/// use a seeded or mocked generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateSampler;

impl CandidateSampler {
    pub fn new() -> Self {
        Self
    }

    /// Select a token from `candidates`, consuming exactly one draw from `rng`.
    pub fn sample<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [ScoredToken],
        rng: &mut R,
    ) -> Result<&'a ScoredToken> {
        if candidates.is_empty() {
            return Err(SamplerError::InvalidInput(
                "cannot sample from an empty candidate set".to_string(),
            ));
        }

        let total: f64 = candidates.iter().map(|c| c.probability).sum();
        if !(total > 0.0) || !total.is_finite() {
            return Err(SamplerError::InvalidInput(format!(
                "candidate probability mass must be positive, got {total}"
            )));
        }

        let weights: Vec<f64> = candidates.iter().map(|c| c.probability / total).collect();
        let r: f64 = rng.gen();
        Ok(&candidates[pick(&weights, r)])
    }
}

/// Walk `weights` subtracting from `r` until it falls inside one of them.
/// Falls back to the first index when rounding leaves `r` past the end.
pub(crate) fn pick(weights: &[f64], r: f64) -> usize {
    let mut remaining = r;
    for (i, &w) in weights.iter().enumerate() {
        if remaining < w {
            return i;
        }
        remaining -= w;
    }
    warn!(r, "sampling walk exhausted, falling back to first candidate");
    0
}

/// Convenience wrapper around [`CandidateSampler`] returning the token text.
pub fn sample<R: Rng + ?Sized>(candidates: &[ScoredToken], rng: &mut R) -> Result<String> {
    CandidateSampler::new()
        .sample(candidates, rng)
        .map(|c| c.token.clone())
}
