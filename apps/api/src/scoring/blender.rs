//! Score Blender: folds sub-factors into their parent dimensions, then reduces
//! an ordered list of `(dimension, score, weight)` contributions to one score.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Dimension, MatchDetail};
use crate::scoring::config::EngineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub dimension: Dimension,
    pub score: f64,
    pub weight: f64,
}

/// Which sub-factor blends apply to this pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlendContext {
    /// Certification data was supplied and the job declares certification requirements.
    pub certifications_apply: bool,
    /// The job declares regulatory domains.
    pub regulatory_applies: bool,
}

pub fn mix(primary: f64, secondary: f64, share: f64) -> f64 {
    primary * (1.0 - share) + secondary * share
}

/// `round(Σ score × weight)`, clamped to 0–100.
pub fn blend(contributions: &[Contribution]) -> u32 {
    let total: f64 = contributions.iter().map(|c| c.score * c.weight).sum();
    if !total.is_finite() {
        return 0;
    }
    total.round().clamp(0.0, 100.0) as u32
}

/// Builds the top-level contribution list from raw detail scores.
pub fn contributions(
    details: &BTreeMap<Dimension, MatchDetail>,
    config: &EngineConfig,
    context: BlendContext,
) -> Vec<Contribution> {
    let raw = |dimension: Dimension| details.get(&dimension).map_or(0.0, |d| d.score as f64);
    let shares = &config.shares;

    config
        .weights
        .entries()
        .into_iter()
        .map(|(dimension, weight)| {
            let score = match dimension {
                Dimension::Skills if context.certifications_apply => mix(
                    raw(Dimension::Skills),
                    raw(Dimension::Certifications),
                    shares.certifications_in_skills,
                ),
                Dimension::Industry if context.regulatory_applies => mix(
                    raw(Dimension::Industry),
                    raw(Dimension::Regulatory),
                    shares.regulatory_in_industry,
                ),
                Dimension::Culture => mix(
                    raw(Dimension::Culture),
                    shares.culture_base_score,
                    shares.culture_base_share,
                ),
                other => raw(other),
            };
            Contribution {
                dimension,
                score,
                weight,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_details(score: u32) -> BTreeMap<Dimension, MatchDetail> {
        Dimension::ALL
            .iter()
            .map(|d| (*d, MatchDetail::new(score, "")))
            .collect()
    }

    fn find(contribs: &[Contribution], dimension: Dimension) -> Contribution {
        *contribs.iter().find(|c| c.dimension == dimension).unwrap()
    }

    #[test]
    fn test_blend_is_weighted_sum() {
        let contribs = [
            Contribution {
                dimension: Dimension::Skills,
                score: 95.0,
                weight: 0.22,
            },
            Contribution {
                dimension: Dimension::Salary,
                score: 100.0,
                weight: 0.78,
            },
        ];
        assert_eq!(blend(&contribs), 99);
        assert_eq!(blend(&[]), 0);
    }

    #[test]
    fn test_all_100_blends_to_100() {
        let config = EngineConfig::default();
        let contribs = contributions(&all_details(100), &config, BlendContext::default());
        assert_eq!(contribs.len(), 16);
        assert_eq!(blend(&contribs), 100);
    }

    #[test]
    fn test_certifications_fold_into_skills_only_when_applicable() {
        let mut details = all_details(100);
        details.insert(Dimension::Certifications, MatchDetail::new(50, ""));
        let config = EngineConfig::default();

        let without = contributions(&details, &config, BlendContext::default());
        assert_eq!(find(&without, Dimension::Skills).score, 100.0);

        let with = contributions(
            &details,
            &config,
            BlendContext {
                certifications_apply: true,
                ..BlendContext::default()
            },
        );
        assert!((find(&with, Dimension::Skills).score - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_culture_layers_on_neutral_base() {
        let mut details = all_details(100);
        details.insert(Dimension::Culture, MatchDetail::new(0, ""));
        let contribs = contributions(&details, &EngineConfig::default(), BlendContext::default());
        assert!((find(&contribs, Dimension::Culture).score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_regulatory_blend() {
        let mut details = all_details(100);
        details.insert(Dimension::Regulatory, MatchDetail::new(30, ""));
        let contribs = contributions(
            &details,
            &EngineConfig::default(),
            BlendContext {
                regulatory_applies: true,
                ..BlendContext::default()
            },
        );
        assert!((find(&contribs, Dimension::Industry).score - 86.0).abs() < 1e-9);
    }
}
