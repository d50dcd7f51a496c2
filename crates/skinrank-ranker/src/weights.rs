//! Weights for the condition likelihood heuristic.

use serde::Serialize;

/// The two-component weight vector.
/// Weights sum to 1.0 and are fixed; callers cannot override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    /// Share of the condition's symptoms present in the query
    pub symptom_match: f64,
    /// Static severity constant of the condition
    pub severity: f64,
}

pub const HEURISTIC_WEIGHTS: ScoreWeights = ScoreWeights {
    symptom_match: 0.7,
    severity:      0.3,
};

impl ScoreWeights {
    /// Validate that the weights sum to ~1.0
    pub fn validate(&self) -> bool {
        ((self.symptom_match + self.severity) - 1.0).abs() < 1e-9
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.symptom_match, self.severity]
    }
}

/// Fraction of a condition's symptoms that were matched.
/// A condition with no symptoms has a fraction of 0, never NaN.
pub fn match_fraction(match_count: usize, total_symptoms: usize) -> f64 {
    if total_symptoms == 0 {
        return 0.0;
    }
    match_count as f64 / total_symptoms as f64
}

/// Likelihood score for one condition. Higher means more likely.
///
/// score = match_fraction × 0.7 + severity × 0.3
pub fn heuristic(match_count: usize, total_symptoms: usize, severity: f64) -> f64 {
    let components = [match_fraction(match_count, total_symptoms), severity];
    components
        .iter()
        .zip(HEURISTIC_WEIGHTS.as_array().iter())
        .map(|(c, w)| c * w)
        .sum()
}
