use crate::error::{Result, SamplerError};
use crate::token::{Distribution, ScoredToken};

/// Converts scaled scores into a normalized probability distribution.
///
/// The maximum score is subtracted before exponentiating so that large
/// scores (for example after dividing by a tiny temperature) cannot overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributionBuilder;

impl DistributionBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Pair each token with the softmax of its score.
    ///
    /// Fails with [`SamplerError::InvalidInput`] if the inputs are empty,
    /// differ in length, contain NaN, or have no finite score.
    pub fn build<S: AsRef<str>>(
        &self,
        scaled_scores: &[f64],
        tokens: &[S],
    ) -> Result<Distribution> {
        if scaled_scores.is_empty() || tokens.is_empty() {
            return Err(SamplerError::InvalidInput(
                "scores and tokens must be non-empty".to_string(),
            ));
        }
        if scaled_scores.len() != tokens.len() {
            return Err(SamplerError::InvalidInput(format!(
                "scores length ({}) does not match tokens length ({})",
                scaled_scores.len(),
                tokens.len()
            )));
        }

        let probs = softmax(scaled_scores)?;

        let entries = tokens
            .iter()
            .zip(probs)
            .map(|(tok, probability)| ScoredToken::new(tok.as_ref(), probability))
            .collect();
        Ok(Distribution::from_entries(entries))
    }
}

/// Numerically stable softmax over a non-empty slice.
pub fn softmax(scores: &[f64]) -> Result<Vec<f64>> {
    if scores.iter().any(|s| s.is_nan()) {
        return Err(SamplerError::InvalidInput("scores contain NaN".to_string()));
    }

    let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !max_score.is_finite() {
        return Err(SamplerError::InvalidInput(
            "scores contain no finite maximum".to_string(),
        ));
    }

    let exps: Vec<f64> = scores.iter().map(|s| (s - max_score).exp()).collect();
    let sum: f64 = exps.iter().sum();
    Ok(exps.iter().map(|e| e / sum).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temperature::scale;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const TOKENS: [&str; 3] = ["a", "b", "c"];
    const SCORES: [f64; 3] = [-1.0, -2.0, -5.0];

    fn build(scores: &[f64]) -> Distribution {
        DistributionBuilder::new().build(scores, &TOKENS).unwrap()
    }

    #[test]
    fn test_known_values() {
        let d = build(&SCORES);
        // exp(0), exp(-1), exp(-4) normalized
        assert_abs_diff_eq!(d.probability_of("a").unwrap(), 0.72139, epsilon = 1e-4);
        assert_abs_diff_eq!(d.probability_of("b").unwrap(), 0.26539, epsilon = 1e-4);
        assert_abs_diff_eq!(d.probability_of("c").unwrap(), 0.01321, epsilon = 1e-4);
    }

    #[test]
    fn test_sums_to_one_and_positive() {
        let scores: Vec<f64> = (0..38).map(|i| -((i * 7 % 13) as f64) * 0.4 - 1.0).collect();
        let tokens: Vec<String> = (0..38).map(|i| format!("t{i}")).collect();
        for &t in &[0.01, 0.3, 1.0, 2.0, 50.0] {
            let d = DistributionBuilder::new()
                .build(&scale(&scores, t), &tokens)
                .unwrap();
            assert_relative_eq!(d.total(), 1.0, max_relative = 1e-6);
            assert!(d.iter().all(|e| e.probability > 0.0 && e.probability <= 1.0));
        }
    }

    #[test]
    fn test_large_scores_do_not_overflow() {
        let d = build(&[1000.0, 999.0, 10.0]);
        assert!(d.iter().all(|e| e.probability.is_finite()));
        assert_relative_eq!(d.total(), 1.0, max_relative = 1e-6);
    }

    #[test]
    fn test_preserves_rank_order() {
        let scores = [0.3, -2.0, 1.7, -0.1];
        let tokens = ["w", "x", "y", "z"];
        for &t in &[0.05, 0.5, 1.0, 4.0] {
            let d = DistributionBuilder::new()
                .build(&scale(&scores, t), &tokens)
                .unwrap();
            let sorted = d.sorted_descending();
            let order: Vec<&str> = sorted.iter().map(|e| e.token.as_str()).collect();
            assert_eq!(order, vec!["y", "w", "z", "x"]);
        }
    }

    #[test]
    fn test_low_temperature_concentrates_on_argmax() {
        let d = build(&scale(&SCORES, 0.01));
        assert_abs_diff_eq!(d.probability_of("a").unwrap(), 1.0, epsilon = 1e-12);
        assert!(d.probability_of("b").unwrap() < 1e-12);
        assert!(d.probability_of("c").unwrap() < 1e-12);
    }

    #[test]
    fn test_subnormal_temperature_is_one_hot() {
        let d = build(&scale(&SCORES, 1e-310));
        assert_eq!(d.probability_of("a"), Some(1.0));
        assert_eq!(d.probability_of("b"), Some(0.0));
        assert_eq!(d.probability_of("c"), Some(0.0));
    }

    #[test]
    fn test_high_temperature_approaches_uniform() {
        let d = build(&scale(&SCORES, 10_000.0));
        for e in d.iter() {
            assert_abs_diff_eq!(e.probability, 1.0 / 3.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_negative_infinity_gets_zero_mass() {
        let d = build(&[0.0, f64::NEG_INFINITY, 0.0]);
        assert_eq!(d.probability_of("b"), Some(0.0));
        assert_relative_eq!(d.probability_of("a").unwrap(), 0.5);
    }

    #[test]
    fn test_length_mismatch() {
        let err = DistributionBuilder::new().build(&[1.0, 2.0], &TOKENS).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_input() {
        let tokens: [&str; 0] = [];
        assert!(DistributionBuilder::new().build(&[], &tokens).is_err());
    }

    #[test]
    fn test_nan_and_all_infinite_rejected() {
        assert!(softmax(&[0.0, f64::NAN]).is_err());
        assert!(softmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY]).is_err());
    }
}
