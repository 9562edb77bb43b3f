//! Compatibility Engine: composition root.
//!
//! Verification Booster → Dimension Scorers → Dealbreaker Gate → Score Blender
//! → `MatchBreakdown`. Every call is a pure function of its inputs plus the
//! engine's immutable configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{
    CandidateProfile, CompanyProfile, Dimension, HiringManagerPreferences, JobPosting,
    MatchBreakdown, MatchDetail,
};
use crate::scoring::blender::{blend, contributions, BlendContext};
use crate::scoring::company::{
    score_company_size, score_culture_alignment, score_industry, score_regulatory,
};
use crate::scoring::config::EngineConfig;
use crate::scoring::facet_match::{score_management_fit, score_team_fit, score_work_style};
use crate::scoring::gate::{
    certification_gate, collect_deal_breakers, disqualified_breakdown, GateDecision,
};
use crate::scoring::logistics::{
    score_salary, score_seniority, score_timezone, score_visa_relocation, score_work_mode,
};
use crate::scoring::performance::{score_performance, score_traits};
use crate::scoring::recommendations::{build_recommendations, RecommendationInputs};
use crate::scoring::requirements::{missing_certifications, score_certifications, score_languages};
use crate::scoring::search::SearchCriteria;
use crate::scoring::skills::score_skills;
use crate::scoring::verification::compute_verification_boost;

#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    config: Arc<EngineConfig>,
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new(Arc::new(EngineConfig::default()))
    }
}

impl CompatibilityEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// Scores one candidate against one job. A missing job or candidate yields
    /// the degenerate `MatchBreakdown::invalid()` rather than an error.
    pub fn calculate_match(
        &self,
        job: Option<&JobPosting>,
        candidate: Option<&CandidateProfile>,
        company: Option<&CompanyProfile>,
        candidate_cert_ids: Option<&[String]>,
    ) -> MatchBreakdown {
        match (job, candidate) {
            (Some(job), Some(candidate)) => {
                self.score_pair(job, candidate, company, candidate_cert_ids, None)
            }
            _ => {
                warn!(
                    has_job = job.is_some(),
                    has_candidate = candidate.is_some(),
                    "match requested with missing input"
                );
                MatchBreakdown::invalid()
            }
        }
    }

    /// Same contract, driven by free-form search criteria and optional hiring
    /// manager preferences.
    pub fn calculate_candidate_match(
        &self,
        criteria: Option<&SearchCriteria>,
        candidate: Option<&CandidateProfile>,
        company: Option<&CompanyProfile>,
        candidate_cert_ids: Option<&[String]>,
        hiring_manager: Option<&HiringManagerPreferences>,
    ) -> MatchBreakdown {
        match (criteria, candidate) {
            (Some(criteria), Some(candidate)) => {
                let job = criteria.to_job_posting();
                self.score_pair(&job, candidate, company, candidate_cert_ids, hiring_manager)
            }
            _ => {
                warn!(
                    has_criteria = criteria.is_some(),
                    has_candidate = candidate.is_some(),
                    "candidate match requested with missing input"
                );
                MatchBreakdown::invalid()
            }
        }
    }

    fn score_pair(
        &self,
        job: &JobPosting,
        candidate: &CandidateProfile,
        company: Option<&CompanyProfile>,
        candidate_cert_ids: Option<&[String]>,
        hiring_manager: Option<&HiringManagerPreferences>,
    ) -> MatchBreakdown {
        let config = self.config.as_ref();
        let boost = compute_verification_boost(candidate.verification.as_ref());

        let certifications = score_certifications(job, candidate_cert_ids);
        if let GateDecision::Disqualified { reason } =
            certification_gate(job, candidate_cert_ids, &certifications)
        {
            let missing = missing_certifications(job, candidate_cert_ids.unwrap_or_default());
            info!(missing = missing.len(), "candidate disqualified: {reason}");
            return disqualified_breakdown(reason, certifications, &missing);
        }

        let (visa, relocation) = score_visa_relocation(job, candidate);

        let details: BTreeMap<Dimension, MatchDetail> = BTreeMap::from([
            (Dimension::Skills, score_skills(&job.skills, candidate, &boost)),
            (Dimension::Certifications, certifications),
            (Dimension::Seniority, score_seniority(job, candidate)),
            (Dimension::Salary, score_salary(job, candidate)),
            (Dimension::Industry, score_industry(company, candidate)),
            (Dimension::Regulatory, score_regulatory(job, candidate)),
            (Dimension::CompanySize, score_company_size(company, candidate)),
            (Dimension::Culture, score_culture_alignment(company, candidate)),
            (Dimension::Traits, score_traits(&boost)),
            (Dimension::Perks, MatchDetail::new(100, "Perks not evaluated")),
            (Dimension::WorkMode, score_work_mode(job, candidate)),
            (
                Dimension::WorkStyle,
                score_work_style(job, company, candidate, &config.facets),
            ),
            (
                Dimension::TeamFit,
                score_team_fit(job, company, candidate, &config.facets),
            ),
            (
                Dimension::Performance,
                score_performance(&job.performance_minimums, &boost),
            ),
            (
                Dimension::Language,
                score_languages(&job.languages, &candidate.languages),
            ),
            (Dimension::Timezone, score_timezone(job, company, candidate)),
            (Dimension::Visa, visa),
            (Dimension::Relocation, relocation),
            (
                Dimension::ManagementFit,
                score_management_fit(hiring_manager, candidate, &config.facets),
            ),
        ]);

        let context = BlendContext {
            certifications_apply: candidate_cert_ids.is_some()
                && job.has_certification_requirements(),
            regulatory_applies: !job.regulatory_domains.is_empty(),
        };
        let overall_score = blend(&contributions(&details, config, context));
        let deal_breakers = collect_deal_breakers(&details);
        let recommendations = build_recommendations(
            &details,
            &config.weights,
            &RecommendationInputs {
                job,
                company,
                candidate,
            },
        );

        debug!(
            overall_score,
            deal_breakers = deal_breakers.len(),
            skills_multiplier = boost.skills_multiplier,
            "match scored"
        );

        MatchBreakdown {
            overall_score,
            details,
            deal_breakers,
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{CandidateLanguage, Skill};
    use crate::models::facets::{Collaboration, Pace, TeamFacet, WorkStyleFacet};
    use crate::models::job::{
        JobSkillRequirement, LanguageProficiency, LanguageRequirement, RequirementPriority,
    };
    use crate::models::VerificationStats;
    use crate::scoring::gate::MISSING_CERTIFICATIONS;

    fn engine() -> CompatibilityEngine {
        CompatibilityEngine::default()
    }

    fn react_job() -> JobPosting {
        JobPosting {
            skills: vec![JobSkillRequirement {
                name: "React".to_string(),
                required_level: 3,
                weight: RequirementPriority::Required,
            }],
            ..JobPosting::default()
        }
    }

    fn react_candidate(level: u8) -> CandidateProfile {
        CandidateProfile {
            skills: vec![Skill {
                name: "React".to_string(),
                level,
                years: Some(4.0),
            }],
            ..CandidateProfile::default()
        }
    }

    #[test]
    fn test_missing_input_is_invalid() {
        let job = react_job();
        let invalid = engine().calculate_match(Some(&job), None, None, None);
        assert!(invalid.is_invalid());
        assert_eq!(invalid.overall_score, 0);
        assert_eq!(invalid.deal_breakers, vec!["Invalid data".to_string()]);

        let candidate = react_candidate(4);
        assert!(engine()
            .calculate_match(None, Some(&candidate), None, None)
            .is_invalid());
    }

    #[test]
    fn test_single_skill_example() {
        let breakdown =
            engine().calculate_match(Some(&react_job()), Some(&react_candidate(4)), None, None);

        assert_eq!(breakdown.score(Dimension::Skills), Some(95));
        for dimension in [
            Dimension::Certifications,
            Dimension::Industry,
            Dimension::Salary,
            Dimension::Seniority,
            Dimension::CompanySize,
            Dimension::Culture,
            Dimension::Language,
            Dimension::Timezone,
            Dimension::Performance,
            Dimension::ManagementFit,
        ] {
            assert_eq!(breakdown.score(dimension), Some(100), "{dimension:?}");
        }
        // work style and team fit stay at the neutral-unknown 50:
        // 95×.22 + 100×.65 + 50×.13 = 92.4
        assert_eq!(breakdown.score(Dimension::WorkStyle), Some(50));
        assert_eq!(breakdown.score(Dimension::TeamFit), Some(50));
        assert_eq!(breakdown.overall_score, 92);
        assert!(breakdown.deal_breakers.is_empty());
    }

    #[test]
    fn test_single_skill_example_with_satisfied_work_style() {
        let mut job = react_job();
        job.work_style_requirements = vec![WorkStyleFacet::Pace(Pace::Fast)];
        job.team_requirements = vec![TeamFacet::Collaboration(Collaboration::Pairing)];
        let mut candidate = react_candidate(4);
        candidate.work_style = job.work_style_requirements.clone();
        candidate.team_preferences = job.team_requirements.clone();

        let breakdown = engine().calculate_match(Some(&job), Some(&candidate), None, None);
        // round(95×.22 + 100×.78) = round(98.9)
        assert_eq!(breakdown.overall_score, 99);
        assert_eq!(breakdown.recommendations.len(), 1);
    }

    #[test]
    fn test_missing_sole_required_cert_is_hard_gate() {
        let job = JobPosting {
            required_certifications: vec!["AWS-SAA".to_string()],
            ..react_job()
        };
        let held = vec!["GCP-ACE".to_string()];
        let mut candidate = react_candidate(5);
        candidate.verification = Some(VerificationStats {
            total_verifications: 5,
            ..VerificationStats::default()
        });

        let breakdown = engine().calculate_match(
            Some(&job),
            Some(&candidate),
            None,
            Some(held.as_slice()),
        );
        assert_eq!(breakdown.overall_score, 0);
        assert_eq!(breakdown.deal_breakers, vec![MISSING_CERTIFICATIONS.to_string()]);
        assert_eq!(breakdown.score(Dimension::Skills), Some(0));
        assert!(!breakdown.is_invalid());
    }

    #[test]
    fn test_missing_cert_without_cert_data_is_not_gated() {
        let job = JobPosting {
            required_certifications: vec!["AWS-SAA".to_string()],
            ..react_job()
        };
        let breakdown = engine().calculate_match(Some(&job), Some(&react_candidate(4)), None, None);
        assert!(breakdown.overall_score > 0);
        assert_eq!(breakdown.score(Dimension::Certifications), Some(50));
    }

    #[test]
    fn test_certifications_blend_into_skills() {
        let job = JobPosting {
            required_certifications: vec!["CKA".to_string()],
            preferred_certifications: vec!["CKS".to_string()],
            ..react_job()
        };
        let held = vec!["CKA".to_string()];
        let breakdown = engine().calculate_match(
            Some(&job),
            Some(&react_candidate(3)),
            None,
            Some(held.as_slice()),
        );
        // skills 100, certs 80: skillsFinal = 94; 94×.22 + 100×.65 + 50×.13 = 92.18
        assert_eq!(breakdown.score(Dimension::Certifications), Some(80));
        assert_eq!(breakdown.overall_score, 92);
    }

    #[test]
    fn test_language_dealbreaker_is_informational() {
        let job = JobPosting {
            languages: vec![LanguageRequirement {
                language: "Japanese".to_string(),
                min_proficiency: LanguageProficiency::Professional,
                priority: RequirementPriority::Required,
            }],
            ..react_job()
        };
        let mut candidate = react_candidate(4);
        candidate.languages = vec![CandidateLanguage {
            language: "Japanese".to_string(),
            proficiency: LanguageProficiency::Basic,
        }];

        let breakdown = engine().calculate_match(Some(&job), Some(&candidate), None, None);
        assert_eq!(
            breakdown.deal_breakers,
            vec!["Required language proficiency not met".to_string()]
        );
        // 95×.22 + 100×.60 + 50×.13 + 0×.05 = 87.4
        assert_eq!(breakdown.overall_score, 87);
        assert!(breakdown.recommendations.iter().any(|r| r.contains("Japanese")));
    }

    #[test]
    fn test_candidate_match_uses_hiring_manager() {
        use crate::models::facets::{ManagementFacet, ManagementStyle};

        let criteria = SearchCriteria {
            required_skills: vec!["React".to_string()],
            ..SearchCriteria::default()
        };
        let hm = HiringManagerPreferences {
            management: vec![ManagementFacet::Style(ManagementStyle::HandsOn)],
        };
        let mut candidate = react_candidate(3);
        candidate.management_preferences = vec![ManagementFacet::Style(ManagementStyle::HandsOff)];

        let breakdown = engine().calculate_candidate_match(
            Some(&criteria),
            Some(&candidate),
            None,
            None,
            Some(&hm),
        );
        assert_eq!(breakdown.score(Dimension::Skills), Some(100));
        assert_eq!(breakdown.score(Dimension::ManagementFit), Some(0));

        assert!(engine()
            .calculate_candidate_match(None, Some(&candidate), None, None, None)
            .is_invalid());
    }
}
