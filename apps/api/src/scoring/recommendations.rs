//! Builds human-readable next steps from the weak dimensions of a breakdown.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::job::RequirementPriority;
use crate::models::{CandidateProfile, CompanyProfile, Dimension, JobPosting, MatchDetail};
use crate::scoring::config::BlendWeights;
use crate::scoring::logistics::timezone_gap_hours;
use crate::scoring::requirements::{unmet_languages, CERT_DATA_MISSING};

const WEAK_THRESHOLD: u32 = 60;
const MAX_RECOMMENDATIONS: usize = 5;

pub const STRONG_MATCH: &str = "Strong match across all evaluated dimensions";

/// Scoring inputs needed to name concrete gaps.
pub struct RecommendationInputs<'a> {
    pub job: &'a JobPosting,
    pub company: Option<&'a CompanyProfile>,
    pub candidate: &'a CandidateProfile,
}

/// One line per weak dimension, heaviest blend weight first.
pub fn build_recommendations(
    details: &BTreeMap<Dimension, MatchDetail>,
    weights: &BlendWeights,
    inputs: &RecommendationInputs<'_>,
) -> Vec<String> {
    let mut weak: Vec<(Dimension, &MatchDetail)> = details
        .iter()
        .filter(|(dimension, detail)| {
            detail.score < WEAK_THRESHOLD
                && !matches!(dimension, Dimension::Traits | Dimension::Perks)
        })
        .map(|(dimension, detail)| (*dimension, detail))
        .collect();

    if weak.is_empty() {
        return vec![STRONG_MATCH.to_string()];
    }

    weak.sort_by(|(a, _), (b, _)| {
        weights
            .weight_of(*b)
            .partial_cmp(&weights.weight_of(*a))
            .unwrap_or(Ordering::Equal)
    });

    weak.into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(dimension, detail)| recommendation_for(dimension, detail, inputs))
        .collect()
}

fn recommendation_for(
    dimension: Dimension,
    detail: &MatchDetail,
    inputs: &RecommendationInputs<'_>,
) -> String {
    let RecommendationInputs {
        job,
        company,
        candidate,
    } = inputs;

    match dimension {
        Dimension::Skills => {
            let missing: Vec<&str> = job
                .skills
                .iter()
                .filter(|s| s.weight == RequirementPriority::Required)
                .filter(|s| candidate.skill(&s.name).is_none())
                .map(|s| s.name.as_str())
                .collect();
            if missing.is_empty() {
                "Build depth in the required skills to reach the requested levels".to_string()
            } else {
                format!("Develop required skills: {}", missing.join(", "))
            }
        }
        Dimension::Certifications if detail.reason == CERT_DATA_MISSING => {
            "Provide certification records so requirements can be checked".to_string()
        }
        Dimension::Certifications => {
            format!("Pursue the listed certifications ({})", detail.reason)
        }
        Dimension::Language => {
            let unmet = unmet_languages(&job.languages, &candidate.languages);
            format!("Reach the required proficiency in: {}", unmet.join(", "))
        }
        Dimension::Timezone => match timezone_gap_hours(job, *company, candidate) {
            Some(gap) => format!("Plan for a {gap:.1}h working-hours gap with the team"),
            None => "Share a timezone so working-hours overlap can be assessed".to_string(),
        },
        Dimension::Salary => {
            "Salary expectation is above the role's budget; discuss flexibility".to_string()
        }
        Dimension::Visa => "Confirm sponsorship options before proceeding".to_string(),
        Dimension::WorkMode => "Discuss the role's work mode with the candidate".to_string(),
        other => format!("Review {}: {}", dimension_label(other), detail.reason),
    }
}

fn dimension_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Skills => "skills",
        Dimension::Certifications => "certifications",
        Dimension::Seniority => "seniority",
        Dimension::Salary => "salary",
        Dimension::Industry => "industry fit",
        Dimension::Regulatory => "regulatory experience",
        Dimension::CompanySize => "company size",
        Dimension::Culture => "culture alignment",
        Dimension::Traits => "verified traits",
        Dimension::Perks => "perks",
        Dimension::WorkMode => "work mode",
        Dimension::WorkStyle => "work style",
        Dimension::TeamFit => "team fit",
        Dimension::Performance => "performance",
        Dimension::Language => "language",
        Dimension::Timezone => "timezone",
        Dimension::Visa => "visa",
        Dimension::Relocation => "relocation",
        Dimension::ManagementFit => "management fit",
    }
}
