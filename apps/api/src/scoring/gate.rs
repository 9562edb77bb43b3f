//! Dealbreaker Gate: the certification hard gate (pre-blend) and the
//! informational dealbreaker list (post-blend).

use std::collections::BTreeMap;

use crate::models::{Dimension, JobPosting, MatchBreakdown, MatchDetail};

pub const MISSING_CERTIFICATIONS: &str = "Missing required certifications";

/// Dimensions whose zero score is reported as a dealbreaker, with the message.
const POST_BLEND_DEALBREAKERS: [(Dimension, &str); 4] = [
    (Dimension::Salary, "Salary expectations exceed budget"),
    (Dimension::WorkStyle, "Work style dealbreaker"),
    (Dimension::TeamFit, "Team fit dealbreaker"),
    (Dimension::Language, "Required language proficiency not met"),
];

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Pass,
    Disqualified { reason: &'static str },
}

/// Hard gate: required certifications are declared, certification data was
/// supplied, and the certification scorer returned 0.
pub fn certification_gate(
    job: &JobPosting,
    candidate_cert_ids: Option<&[String]>,
    certifications: &MatchDetail,
) -> GateDecision {
    if !job.required_certifications.is_empty()
        && candidate_cert_ids.is_some()
        && certifications.score == 0
    {
        GateDecision::Disqualified {
            reason: MISSING_CERTIFICATIONS,
        }
    } else {
        GateDecision::Pass
    }
}

/// Short-circuit breakdown: only the certification dimension was evaluated,
/// every other dimension is zeroed and no blend weights apply.
pub fn disqualified_breakdown(
    reason: &str,
    certifications: MatchDetail,
    missing: &[&str],
) -> MatchBreakdown {
    let mut details: BTreeMap<Dimension, MatchDetail> = Dimension::ALL
        .iter()
        .map(|d| (*d, MatchDetail::new(0, format!("Not evaluated: {reason}"))))
        .collect();
    details.insert(Dimension::Certifications, certifications);

    MatchBreakdown {
        overall_score: 0,
        details,
        deal_breakers: vec![reason.to_string()],
        recommendations: vec![format!(
            "Obtain required certifications: {}",
            missing.join(", ")
        )],
    }
}

/// Named dealbreakers for every designated dimension that scored 0. These are
/// informational; the overall score is still the full weighted sum.
pub fn collect_deal_breakers(details: &BTreeMap<Dimension, MatchDetail>) -> Vec<String> {
    POST_BLEND_DEALBREAKERS
        .iter()
        .filter(|(dimension, _)| details.get(dimension).is_some_and(|d| d.score == 0))
        .map(|(_, message)| message.to_string())
        .collect()
}
