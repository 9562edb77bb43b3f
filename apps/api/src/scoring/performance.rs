//! Verification-derived dimensions: performance minimums and the trait score.

use crate::models::job::PerformanceMinimums;
use crate::models::MatchDetail;
use crate::scoring::verification::VerificationBoost;

const PENALTY_PER_POINT: f64 = 15.0;

/// Average over the axes the job actually requires of
/// `100 − 15 × max(0, required − verified)`, floored at 0.
pub fn score_performance(minimums: &PerformanceMinimums, boost: &VerificationBoost) -> MatchDetail {
    let verified = &boost.performance_scores;
    let axes = [
        ("communication", minimums.communication, verified.communication),
        ("problem solving", minimums.problem_solving, verified.problem_solving),
        ("reliability", minimums.reliability, verified.reliability),
        ("collaboration", minimums.collaboration, verified.collaboration),
    ];

    let mut short = Vec::new();
    let scores: Vec<f64> = axes
        .iter()
        .filter_map(|(name, required, actual)| {
            let required = (*required)?;
            let gap = (required - actual).max(0.0);
            if gap > 0.0 {
                short.push(*name);
            }
            Some((100.0 - PENALTY_PER_POINT * gap).max(0.0))
        })
        .collect();

    if scores.is_empty() {
        return MatchDetail::new(100, "No performance minimums");
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    let reason = if short.is_empty() {
        format!("Meets all {} performance minimums", scores.len())
    } else {
        format!("Below minimum on {}", short.join(", "))
    };
    MatchDetail::rounded(average, reason)
}

/// Mean verified trait level scaled to 0–100 and boosted by the traits
/// multiplier. 50 without verifications.
pub fn score_traits(boost: &VerificationBoost) -> MatchDetail {
    let base = boost.performance_scores.mean() * 10.0;
    MatchDetail::rounded(
        (base * boost.traits_multiplier).min(100.0),
        format!(
            "Verified traits {:.1}/10 (x{:.2})",
            boost.performance_scores.mean(),
            boost.traits_multiplier
        ),
    )
}
