//! Weighted categorical matcher shared by work style, team fit and management fit.

use std::collections::BTreeMap;

use crate::models::facets::{Facet, FacetLabel};
use crate::models::{CandidateProfile, CompanyProfile, HiringManagerPreferences, JobPosting, MatchDetail};
use crate::scoring::config::FacetWeights;

const EXACT_MATCH: f64 = 100.0;
const NO_OPINION: f64 = 50.0;
const DEFAULT_KEY_WEIGHT: f64 = 1.0;
/// Work style / team fit with nothing declared: unknown, not satisfied.
const UNKNOWN_FIT: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct FacetOutcome<K> {
    /// Weighted average, 0–100. `None` when there was nothing to compare.
    pub score: Option<f64>,
    pub mismatched: Vec<K>,
    pub dealbreakers_hit: Vec<K>,
}

/// Folds a facet list into a key map. Later entries win.
pub fn facet_map<F: Facet>(facets: &[F]) -> BTreeMap<F::Key, F> {
    facets.iter().map(|f| (f.key(), *f)).collect()
}

/// Company defaults overlaid with job-specific overrides (job wins).
pub fn merge_requirements<F: Facet>(defaults: &[F], overrides: &[F]) -> BTreeMap<F::Key, F> {
    let mut merged = facet_map(defaults);
    merged.extend(overrides.iter().map(|f| (f.key(), *f)));
    merged
}

/// For every required key: exact match earns `weight × 100`, no candidate
/// opinion earns `weight × 50`, a different value earns nothing and is recorded.
pub fn match_facets<F: Facet>(
    candidate: &BTreeMap<F::Key, F>,
    requirements: &BTreeMap<F::Key, F>,
    weights: &BTreeMap<F::Key, f64>,
    dealbreakers: &[F::Key],
) -> FacetOutcome<F::Key> {
    let mut earned = 0.0;
    let mut possible = 0.0;
    let mut mismatched = Vec::new();

    for (key, required) in requirements {
        let weight = weights.get(key).copied().unwrap_or(DEFAULT_KEY_WEIGHT);
        possible += weight;

        match candidate.get(key) {
            Some(preferred) if preferred == required => earned += weight * EXACT_MATCH,
            Some(_) => mismatched.push(*key),
            None => earned += weight * NO_OPINION,
        }
    }

    let dealbreakers_hit = mismatched
        .iter()
        .filter(|k| dealbreakers.contains(*k))
        .copied()
        .collect();

    FacetOutcome {
        score: (possible > 0.0).then(|| earned / possible),
        mismatched,
        dealbreakers_hit,
    }
}

fn labels<K: FacetLabel>(keys: &[K]) -> String {
    keys.iter().map(|k| k.label()).collect::<Vec<_>>().join(", ")
}

fn outcome_detail<K: FacetLabel>(
    outcome: FacetOutcome<K>,
    area: &str,
    when_empty: MatchDetail,
) -> MatchDetail {
    if !outcome.dealbreakers_hit.is_empty() {
        return MatchDetail::new(
            0,
            format!("{area} dealbreaker: {}", labels(&outcome.dealbreakers_hit)),
        );
    }

    let Some(score) = outcome.score else {
        return when_empty;
    };

    let reason = if outcome.mismatched.is_empty() {
        format!("{area} requirements compatible")
    } else {
        format!("{area} mismatch on {}", labels(&outcome.mismatched))
    };
    MatchDetail::rounded(score, reason)
}

pub fn score_work_style(
    job: &JobPosting,
    company: Option<&CompanyProfile>,
    candidate: &CandidateProfile,
    weights: &FacetWeights,
) -> MatchDetail {
    let defaults = company.map(|c| c.work_style_defaults.as_slice()).unwrap_or(&[]);
    let requirements = merge_requirements(defaults, &job.work_style_requirements);

    let outcome = match_facets(
        &facet_map(&candidate.work_style),
        &requirements,
        &weights.work_style,
        &job.work_style_dealbreakers,
    );
    outcome_detail(
        outcome,
        "Work style",
        MatchDetail::new(UNKNOWN_FIT, "No work style requirements declared"),
    )
}

pub fn score_team_fit(
    job: &JobPosting,
    company: Option<&CompanyProfile>,
    candidate: &CandidateProfile,
    weights: &FacetWeights,
) -> MatchDetail {
    let defaults = company.map(|c| c.team_structure.as_slice()).unwrap_or(&[]);
    let requirements = merge_requirements(defaults, &job.team_requirements);

    let outcome = match_facets(
        &facet_map(&candidate.team_preferences),
        &requirements,
        &weights.team,
        &job.team_dealbreakers,
    );
    outcome_detail(
        outcome,
        "Team",
        MatchDetail::new(UNKNOWN_FIT, "No team requirements declared"),
    )
}

pub fn score_management_fit(
    hiring_manager: Option<&HiringManagerPreferences>,
    candidate: &CandidateProfile,
    weights: &FacetWeights,
) -> MatchDetail {
    let no_constraint = || MatchDetail::new(100, "No hiring manager preferences");
    let Some(hiring_manager) = hiring_manager else {
        return no_constraint();
    };

    let outcome = match_facets(
        &facet_map(&candidate.management_preferences),
        &facet_map(&hiring_manager.management),
        &weights.management,
        &[],
    );
    outcome_detail(outcome, "Management", no_constraint())
}
