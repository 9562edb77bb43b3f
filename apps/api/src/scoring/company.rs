//! Company-side dimensions: industry, regulatory experience, company size and
//! culture alignment.

use crate::models::{CandidateProfile, CompanyProfile, JobPosting, MatchDetail};

const INDUSTRY_MISMATCH: u32 = 50;
const REGULATORY_FLOOR: f64 = 30.0;
const REGULATORY_SPAN: f64 = 70.0;
const SIZE_MISMATCH: u32 = 60;

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn overlap(left: &[String], right: &[String]) -> usize {
    left.iter()
        .filter(|l| {
            let l = normalize(l);
            right.iter().any(|r| normalize(r) == l)
        })
        .count()
}

pub fn score_industry(company: Option<&CompanyProfile>, candidate: &CandidateProfile) -> MatchDetail {
    let industries = match company {
        Some(c) if !c.industries.is_empty() => &c.industries,
        _ => return MatchDetail::new(100, "No company industries declared"),
    };

    if overlap(industries, &candidate.interested_industries) > 0 {
        MatchDetail::new(100, "Company industry matches candidate interests")
    } else {
        MatchDetail::new(INDUSTRY_MISMATCH, "Company industry outside candidate interests")
    }
}

pub fn score_regulatory(job: &JobPosting, candidate: &CandidateProfile) -> MatchDetail {
    if job.regulatory_domains.is_empty() {
        return MatchDetail::new(100, "No regulatory domain requirements");
    }
    if candidate.regulatory_experience.is_empty() {
        return MatchDetail::rounded(REGULATORY_FLOOR, "No regulatory experience");
    }

    let matched = overlap(&job.regulatory_domains, &candidate.regulatory_experience);
    let required = job.regulatory_domains.len();
    MatchDetail::rounded(
        REGULATORY_FLOOR + REGULATORY_SPAN * matched as f64 / required as f64,
        format!("{matched}/{required} regulatory domains covered"),
    )
}

pub fn score_company_size(
    company: Option<&CompanyProfile>,
    candidate: &CandidateProfile,
) -> MatchDetail {
    let Some(size) = company.and_then(|c| c.size) else {
        return MatchDetail::new(100, "Company size unknown");
    };
    if candidate.preferred_company_sizes.is_empty() {
        return MatchDetail::new(100, "No company size preference");
    }
    if candidate.preferred_company_sizes.contains(&size) {
        MatchDetail::new(100, "Company size matches preference")
    } else {
        MatchDetail::new(SIZE_MISMATCH, "Company size outside preference")
    }
}

/// Compares each candidate preference list with the company's single tag on
/// the same axis. An axis counts only when both sides have data.
pub fn score_culture_alignment(
    company: Option<&CompanyProfile>,
    candidate: &CandidateProfile,
) -> MatchDetail {
    let Some(company) = company else {
        return MatchDetail::new(100, "No company culture data");
    };

    let prefs = &candidate.culture;
    let axes = [
        (&prefs.focus_types, company.focus_type.as_deref()),
        (&prefs.mission_orientations, company.mission_orientation.as_deref()),
        (&prefs.work_styles, company.work_style.as_deref()),
    ];

    let (compared, matched) = axes
        .iter()
        .filter_map(|(wanted, actual)| match actual {
            Some(actual) if !wanted.is_empty() => {
                let actual = normalize(actual);
                Some(wanted.iter().any(|w| normalize(w) == actual))
            }
            _ => None,
        })
        .fold((0usize, 0usize), |(compared, matched), hit| {
            (compared + 1, matched + usize::from(hit))
        });

    if compared == 0 {
        return MatchDetail::new(100, "No comparable culture data");
    }

    MatchDetail::rounded(
        100.0 * matched as f64 / compared as f64,
        format!("{matched}/{compared} culture axes aligned"),
    )
}
