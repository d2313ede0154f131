use tracing::debug;

/// Temperatures at or below zero (and NaN) are replaced by this floor.
pub const MIN_TEMPERATURE: f64 = 0.01;

/// Scales raw scores by dividing by a temperature value.
///
/// Higher temperatures produce more uniform distributions (more random),
/// while lower temperatures sharpen the distribution (more deterministic).
#[derive(Debug, Clone, Copy)]
pub struct ScoreScaler {
    temperature: f64,
}

impl ScoreScaler {
    /// Create a scaler for the given temperature. Non-positive values are
    /// clamped to [`MIN_TEMPERATURE`].
    pub fn new(temperature: f64) -> Self {
        let effective = effective_temperature(temperature);
        if effective != temperature {
            debug!(requested = temperature, effective, "temperature clamped");
        }
        Self {
            temperature: effective,
        }
    }

    /// The temperature actually used for division.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Divide every score by the temperature, preserving length and order.
    ///
    /// Finite scores always map to finite values: a temperature small enough
    /// to overflow the largest-magnitude score is raised until that quotient
    /// stays within half of the `f64` range.
    pub fn scale(&self, scores: &[f64]) -> Vec<f64> {
        let max_abs = scores
            .iter()
            .filter(|s| s.is_finite())
            .fold(0.0f64, |m, s| m.max(s.abs()));
        let temperature = self.temperature.max(max_abs / (f64::MAX / 2.0));
        scores.iter().map(|s| s / temperature).collect()
    }
}

/// Clamp a requested temperature to a usable divisor.
pub fn effective_temperature(temperature: f64) -> f64 {
    // `!(t > 0)` also catches NaN.
    if !(temperature > 0.0) {
        MIN_TEMPERATURE
    } else {
        temperature
    }
}

/// Convenience wrapper around [`ScoreScaler`].
pub fn scale(scores: &[f64], temperature: f64) -> Vec<f64> {
    ScoreScaler::new(temperature).scale(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_divides_elementwise() {
        let r = scale(&[-1.0, -2.0, 4.0], 2.0);
        assert_eq!(r, vec![-0.5, -1.0, 2.0]);
    }

    #[test]
    fn test_unit_temperature_is_identity() {
        let scores = [-1.5, 0.25, 3.0];
        assert_eq!(scale(&scores, 1.0), scores.to_vec());
    }

    #[test]
    fn test_zero_and_negative_temperature_clamp() {
        assert_eq!(ScoreScaler::new(0.0).temperature(), MIN_TEMPERATURE);
        assert_eq!(ScoreScaler::new(-3.0).temperature(), MIN_TEMPERATURE);
        assert_eq!(ScoreScaler::new(f64::NAN).temperature(), MIN_TEMPERATURE);

        let r = scale(&[-1.0, -2.0], 0.0);
        assert_relative_eq!(r[0], -100.0);
        assert_relative_eq!(r[1], -200.0);
    }

    #[test]
    fn test_subnormal_temperature_stays_finite() {
        let r = scale(&[-1.0, -2.0, -5.0], 1e-310);
        assert!(r.iter().all(|s| s.is_finite()));
        assert!(r[0] > r[1] && r[1] > r[2]);
    }

    #[test]
    fn test_infinite_scores_pass_through() {
        let r = scale(&[0.0, f64::NEG_INFINITY], 1e-310);
        assert_eq!(r[0], 0.0);
        assert_eq!(r[1], f64::NEG_INFINITY);
    }

    #[test]
    fn test_empty_scores() {
        assert!(scale(&[], 0.7).is_empty());
    }
}
