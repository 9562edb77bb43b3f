//! The user's three-way priority split: skills / compensation / culture.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("{axis} weight must be finite and non-negative, got {value}")]
    Invalid { axis: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightAxis {
    Skills,
    Compensation,
    Culture,
}

impl WeightAxis {
    pub const ALL: [WeightAxis; 3] = [
        WeightAxis::Skills,
        WeightAxis::Compensation,
        WeightAxis::Culture,
    ];

    pub fn index(self) -> usize {
        match self {
            WeightAxis::Skills => 0,
            WeightAxis::Compensation => 1,
            WeightAxis::Culture => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeightAxis::Skills => "skills",
            WeightAxis::Compensation => "compensation",
            WeightAxis::Culture => "culture",
        }
    }
}

/// Relative importance of the three re-ranking axes. Any non-negative triple
/// is accepted; consumers normalize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub compensation: f64,
    pub culture: f64,
}

impl Default for MatchWeights {
    /// The centroid split.
    fn default() -> Self {
        Self::new(33.0, 33.0, 34.0)
    }
}

impl MatchWeights {
    pub fn new(skills: f64, compensation: f64, culture: f64) -> Self {
        Self {
            skills,
            compensation,
            culture,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.skills, self.compensation, self.culture]
    }

    pub fn get(&self, axis: WeightAxis) -> f64 {
        self.as_array()[axis.index()]
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        for axis in WeightAxis::ALL {
            let value = self.get(axis);
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::Invalid {
                    axis: axis.label(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Fractions summing to 1, or `None` when there is nothing to normalize.
    /// Negative or non-finite entries count as zero.
    pub fn normalized(&self) -> Option<[f64; 3]> {
        let parts = self
            .as_array()
            .map(|w| if w.is_finite() { w.max(0.0) } else { 0.0 });
        let total: f64 = parts.iter().sum();
        if total <= 0.0 {
            return None;
        }
        Some(parts.map(|w| w / total))
    }

    /// Whole percentages summing to exactly 100. The first two are rounded and
    /// the third absorbs the residual; an empty triple becomes 33/33/34.
    pub fn to_percentages(&self) -> [u32; 3] {
        let [a, b, _] = self.normalized().unwrap_or([1.0 / 3.0; 3]);
        let first = ((a * 100.0).round() as u32).min(100);
        let second = ((b * 100.0).round() as u32).min(100 - first);
        [first, second, 100 - first - second]
    }

    pub fn from_percentages([a, b, c]: [u32; 3]) -> Self {
        Self::new(a as f64, b as f64, c as f64)
    }

    /// Same split expressed as whole percentages.
    pub fn rounded(&self) -> Self {
        Self::from_percentages(self.to_percentages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_centroid_split() {
        let weights = MatchWeights::default();
        assert_eq!(weights.to_percentages(), [33, 33, 34]);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let err = MatchWeights::new(10.0, -1.0, 5.0).validate().unwrap_err();
        assert_eq!(
            err,
            WeightsError::Invalid {
                axis: "compensation",
                value: -1.0
            }
        );
        assert!(MatchWeights::new(f64::NAN, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn test_normalized_all_zero_is_none() {
        assert_eq!(MatchWeights::new(0.0, 0.0, 0.0).normalized(), None);
        let fractions = MatchWeights::new(2.0, 1.0, 1.0).normalized().unwrap();
        assert!((fractions[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_percentages_always_sum_to_100() {
        for weights in [
            MatchWeights::new(1.0, 1.0, 1.0),
            MatchWeights::new(0.0, 0.0, 0.0),
            MatchWeights::new(0.995, 0.005, 0.0),
            MatchWeights::new(49.5, 49.5, 1.0),
            MatchWeights::new(7.0, 0.0, 3.0),
        ] {
            let p = weights.to_percentages();
            assert_eq!(p.iter().sum::<u32>(), 100, "{weights:?}");
        }
        assert_eq!(MatchWeights::new(7.0, 0.0, 3.0).to_percentages(), [70, 0, 30]);
    }

    #[test]
    fn test_axis_serializes_snake_case() {
        let json = serde_json::to_string(&WeightAxis::Compensation).unwrap();
        assert_eq!(json, "\"compensation\"");
    }
}
