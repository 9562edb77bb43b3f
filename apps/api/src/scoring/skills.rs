//! Skills dimension: level-aware comparison of candidate skills against the
//! job's required/preferred skill list.

use crate::models::job::{JobSkillRequirement, RequirementPriority};
use crate::models::{CandidateProfile, MatchDetail};
use crate::scoring::verification::VerificationBoost;

/// Agreement rate from which the assessed level replaces the claimed level.
const ASSESSED_LEVEL_AGREEMENT: f64 = 0.7;
/// Agreement rate from which a per-skill score earns the verified bonus.
const VERIFIED_BONUS_AGREEMENT: f64 = 0.8;
const VERIFIED_BONUS: f64 = 1.1;

const REQUIRED_WEIGHT: f64 = 2.0;
const PREFERRED_WEIGHT: f64 = 1.0;

/// Score for a level difference (candidate − required).
///
/// Over-qualification decays gently, under-qualification sharply.
pub fn level_diff_score(diff: i32) -> f64 {
    match diff {
        0 => 100.0,
        1 => 95.0,
        2 => 90.0,
        d if d >= 3 => 85.0,
        -1 => 70.0,
        -2 => 40.0,
        _ => 10.0,
    }
}

fn priority_weight(priority: RequirementPriority) -> f64 {
    match priority {
        RequirementPriority::Required => REQUIRED_WEIGHT,
        RequirementPriority::Preferred => PREFERRED_WEIGHT,
    }
}

/// Per-skill score for one requirement; 0 when the candidate lacks the skill.
fn requirement_score(
    requirement: &JobSkillRequirement,
    candidate: &CandidateProfile,
    boost: &VerificationBoost,
) -> f64 {
    let Some(skill) = candidate.skill(&requirement.name) else {
        return 0.0;
    };

    let stat = boost.skill_stat(&requirement.name);

    let effective_level = match stat {
        Some(s) if s.level_agreement_rate >= ASSESSED_LEVEL_AGREEMENT => {
            s.avg_assessed_level.round() as i32
        }
        _ => skill.level as i32,
    };

    let score = level_diff_score(effective_level - requirement.required_level as i32);

    match stat {
        Some(s) if s.level_agreement_rate >= VERIFIED_BONUS_AGREEMENT => {
            (score * VERIFIED_BONUS).min(100.0)
        }
        _ => score,
    }
}

pub fn score_skills(
    requirements: &[JobSkillRequirement],
    candidate: &CandidateProfile,
    boost: &VerificationBoost,
) -> MatchDetail {
    if requirements.is_empty() {
        return MatchDetail::new(100, "No skill requirements");
    }

    let mut weighted_total = 0.0;
    let mut weighted_max = 0.0;
    let mut missing_required = Vec::new();
    let mut matched = 0usize;

    for requirement in requirements {
        let weight = priority_weight(requirement.weight);
        let score = requirement_score(requirement, candidate, boost);

        weighted_total += score * weight;
        weighted_max += 100.0 * weight;

        if candidate.skill(&requirement.name).is_some() {
            matched += 1;
        } else if requirement.weight == RequirementPriority::Required {
            missing_required.push(requirement.name.as_str());
        }
    }

    let base = 100.0 * weighted_total / weighted_max;
    let boosted = (base * boost.skills_multiplier).min(100.0);

    let mut reason = format!("{matched}/{} skills matched", requirements.len());
    if !missing_required.is_empty() {
        reason.push_str(&format!("; missing required: {}", missing_required.join(", ")));
    }
    if boost.skills_multiplier > 1.0 {
        reason.push_str(&format!(
            "; verification boost x{:.2}",
            boost.skills_multiplier
        ));
    }

    MatchDetail::rounded(boosted, reason)
}
