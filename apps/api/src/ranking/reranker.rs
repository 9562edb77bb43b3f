//! Weighted Re-Ranker: collapses a breakdown onto the user's three axes and
//! orders a result set by it.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::{CandidateProfile, CompanyProfile, Dimension, JobPosting, MatchBreakdown};
use crate::ranking::weights::MatchWeights;
use crate::scoring::CompatibilityEngine;

/// Three-axis view of a breakdown. Culture is the mean of the raw culture and
/// traits details. Display and sorting only; `overall_score` is untouched.
/// An all-zero weight triple falls back to `overall_score`.
pub fn calculate_weighted_score(breakdown: &MatchBreakdown, weights: &MatchWeights) -> u32 {
    let Some([skills_w, compensation_w, culture_w]) = weights.normalized() else {
        return breakdown.overall_score;
    };

    let score = |dimension| breakdown.score(dimension).unwrap_or(0) as f64;
    let culture_combined = (score(Dimension::Culture) + score(Dimension::Traits)) / 2.0;

    let weighted = score(Dimension::Skills) * skills_w
        + score(Dimension::Salary) * compensation_w
        + culture_combined * culture_w;

    weighted.round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateInput {
    pub candidate_id: Uuid,
    pub candidate: Option<CandidateProfile>,
    #[serde(default)]
    pub candidate_cert_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub candidate_id: Uuid,
    pub weighted_score: u32,
    pub breakdown: MatchBreakdown,
}

/// Ordering: valid before invalid, then weighted score, then overall score,
/// both descending. Input order breaks remaining ties.
fn rank_order(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    a.breakdown
        .is_invalid()
        .cmp(&b.breakdown.is_invalid())
        .then_with(|| b.weighted_score.cmp(&a.weighted_score))
        .then_with(|| b.breakdown.overall_score.cmp(&a.breakdown.overall_score))
}

/// Scores every candidate against one job in parallel. Each pair is
/// independent, so one degenerate candidate only yields its own invalid entry.
pub fn rank_candidates(
    engine: &CompatibilityEngine,
    job: &JobPosting,
    company: Option<&CompanyProfile>,
    candidates: &[CandidateInput],
    weights: &MatchWeights,
) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .par_iter()
        .map(|input| {
            let breakdown = engine.calculate_match(
                Some(job),
                input.candidate.as_ref(),
                company,
                input.candidate_cert_ids.as_deref(),
            );
            RankedCandidate {
                candidate_id: input.candidate_id,
                weighted_score: calculate_weighted_score(&breakdown, weights),
                breakdown,
            }
        })
        .collect();

    ranked.sort_by(rank_order);

    debug!(
        candidates = ranked.len(),
        top_score = ranked.first().map(|r| r.weighted_score),
        "candidates ranked"
    );
    ranked
}
