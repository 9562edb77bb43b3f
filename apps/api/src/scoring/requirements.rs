//! Gating dimensions: certifications and languages. A missing required item
//! zeroes the dimension.

use crate::models::candidate::CandidateLanguage;
use crate::models::job::{LanguageRequirement, RequirementPriority};
use crate::models::{JobPosting, MatchDetail};

const CERT_REQUIRED_BASE: f64 = 80.0;
const CERT_PREFERRED_SPAN: f64 = 20.0;
const CERT_UNKNOWN: u32 = 50;
pub const CERT_DATA_MISSING: &str = "Certification data not provided";

const LANGUAGE_REQUIRED_BASE: f64 = 70.0;
const LANGUAGE_PREFERRED_SPAN: f64 = 30.0;

fn holds(cert_ids: &[String], cert: &str) -> bool {
    cert_ids.iter().any(|c| c.trim().eq_ignore_ascii_case(cert.trim()))
}

/// Fraction of `wanted` found by `has`. An empty list counts as fully met.
fn fraction_met<T>(wanted: &[T], has: impl Fn(&T) -> bool) -> f64 {
    if wanted.is_empty() {
        return 1.0;
    }
    wanted.iter().filter(|w| has(*w)).count() as f64 / wanted.len() as f64
}

/// Required certifications that the candidate does not hold.
pub fn missing_certifications<'a>(job: &'a JobPosting, cert_ids: &[String]) -> Vec<&'a str> {
    job.required_certifications
        .iter()
        .filter(|c| !holds(cert_ids, c))
        .map(String::as_str)
        .collect()
}

pub fn score_certifications(job: &JobPosting, cert_ids: Option<&[String]>) -> MatchDetail {
    if !job.has_certification_requirements() {
        return MatchDetail::new(100, "No certification requirements");
    }

    let Some(cert_ids) = cert_ids else {
        return MatchDetail::new(CERT_UNKNOWN, CERT_DATA_MISSING);
    };

    let preferred = fraction_met(&job.preferred_certifications, |c| holds(cert_ids, c));

    if job.required_certifications.is_empty() {
        return MatchDetail::rounded(
            100.0 * preferred,
            format!("{:.0}% of preferred certifications held", preferred * 100.0),
        );
    }

    let missing = missing_certifications(job, cert_ids);
    if !missing.is_empty() {
        return MatchDetail::new(
            0,
            format!("Missing required certifications: {}", missing.join(", ")),
        );
    }

    MatchDetail::rounded(
        CERT_REQUIRED_BASE + CERT_PREFERRED_SPAN * preferred,
        format!(
            "All required certifications held; {:.0}% of preferred",
            preferred * 100.0
        ),
    )
}

fn speaks(candidate: &[CandidateLanguage], requirement: &LanguageRequirement) -> bool {
    candidate.iter().any(|l| {
        l.language.trim().eq_ignore_ascii_case(requirement.language.trim())
            && l.proficiency >= requirement.min_proficiency
    })
}

/// Required languages the candidate does not speak at the minimum level.
pub fn unmet_languages<'a>(
    requirements: &'a [LanguageRequirement],
    candidate: &[CandidateLanguage],
) -> Vec<&'a str> {
    requirements
        .iter()
        .filter(|r| r.priority == RequirementPriority::Required && !speaks(candidate, r))
        .map(|r| r.language.as_str())
        .collect()
}

pub fn score_languages(
    requirements: &[LanguageRequirement],
    candidate: &[CandidateLanguage],
) -> MatchDetail {
    if requirements.is_empty() {
        return MatchDetail::new(100, "No language requirements");
    }

    let unmet = unmet_languages(requirements, candidate);
    if !unmet.is_empty() {
        return MatchDetail::new(
            0,
            format!("Required language proficiency not met: {}", unmet.join(", ")),
        );
    }

    let preferred: Vec<&LanguageRequirement> = requirements
        .iter()
        .filter(|r| r.priority == RequirementPriority::Preferred)
        .collect();
    let fraction = fraction_met(&preferred, |r| speaks(candidate, r));

    MatchDetail::rounded(
        LANGUAGE_REQUIRED_BASE + LANGUAGE_PREFERRED_SPAN * fraction,
        format!(
            "Required languages met; {:.0}% of preferred languages",
            fraction * 100.0
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::LanguageProficiency;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn job_with_certs(required: &[&str], preferred: &[&str]) -> JobPosting {
        JobPosting {
            required_certifications: ids(required),
            preferred_certifications: ids(preferred),
            ..JobPosting::default()
        }
    }

    fn lang(language: &str, proficiency: LanguageProficiency) -> CandidateLanguage {
        CandidateLanguage {
            language: language.to_string(),
            proficiency,
        }
    }

    fn lang_req(
        language: &str,
        min: LanguageProficiency,
        priority: RequirementPriority,
    ) -> LanguageRequirement {
        LanguageRequirement {
            language: language.to_string(),
            min_proficiency: min,
            priority,
        }
    }

    #[test]
    fn test_no_cert_requirements_scores_100() {
        let detail = score_certifications(&JobPosting::default(), None);
        assert_eq!(detail.score, 100);
    }

    #[test]
    fn test_missing_required_cert_scores_zero() {
        let job = job_with_certs(&["CPA", "CFA"], &[]);
        let held = ids(&["cpa"]);
        let detail = score_certifications(&job, Some(held.as_slice()));
        assert_eq!(detail.score, 0);
        assert!(detail.reason.contains("CFA"));
    }

    #[test]
    fn test_required_met_plus_preferred_fraction() {
        let job = job_with_certs(&["CPA"], &["CIA", "CISA"]);
        let held = ids(&["CPA", "CISA"]);
        assert_eq!(score_certifications(&job, Some(held.as_slice())).score, 90);

        let only_required = job_with_certs(&["CPA"], &[]);
        assert_eq!(score_certifications(&only_required, Some(held.as_slice())).score, 100);
    }

    #[test]
    fn test_preferred_only_is_plain_fraction() {
        let job = job_with_certs(&[], &["A", "B", "C", "D"]);
        let held = ids(&["a"]);
        assert_eq!(score_certifications(&job, Some(held.as_slice())).score, 25);
    }

    #[test]
    fn test_unknown_cert_data_is_neutral() {
        let job = job_with_certs(&["CPA"], &[]);
        assert_eq!(score_certifications(&job, None).score, 50);
    }

    #[test]
    fn test_language_scale_is_ordered() {
        assert!(LanguageProficiency::Basic < LanguageProficiency::Conversational);
        assert!(LanguageProficiency::Fluent < LanguageProficiency::Native);
    }

    #[test]
    fn test_required_language_below_minimum_scores_zero() {
        let reqs = vec![lang_req(
            "German",
            LanguageProficiency::Professional,
            RequirementPriority::Required,
        )];
        let candidate = vec![lang("german", LanguageProficiency::Conversational)];
        let detail = score_languages(&reqs, &candidate);
        assert_eq!(detail.score, 0);
        assert!(detail.reason.contains("German"));
    }

    #[test]
    fn test_language_preferred_fraction() {
        let reqs = vec![
            lang_req("English", LanguageProficiency::Fluent, RequirementPriority::Required),
            lang_req("French", LanguageProficiency::Basic, RequirementPriority::Preferred),
            lang_req("Spanish", LanguageProficiency::Basic, RequirementPriority::Preferred),
        ];
        let candidate = vec![
            lang("English", LanguageProficiency::Native),
            lang("French", LanguageProficiency::Conversational),
        ];
        assert_eq!(score_languages(&reqs, &candidate).score, 85);
    }

    #[test]
    fn test_no_language_requirements_scores_100() {
        assert_eq!(score_languages(&[], &[]).score, 100);
    }
}
