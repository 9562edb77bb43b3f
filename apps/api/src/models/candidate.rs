use serde::{Deserialize, Serialize};

use crate::models::facets::{ManagementFacet, TeamFacet, WorkStyleFacet};
use crate::models::job::{CompanySize, LanguageProficiency, Seniority, WorkMode};

/// A self-reported skill. Names are compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    /// 1 (beginner) – 5 (expert)
    pub level: u8,
    #[serde(default)]
    pub years: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateLanguage {
    pub language: String,
    pub proficiency: LanguageProficiency,
}

/// Third-party corroboration of a claimed skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifiedSkillStat {
    pub skill: String,
    pub avg_assessed_level: f64,
    /// 0.0 – 1.0: share of verifiers agreeing with the claimed level.
    pub level_agreement_rate: f64,
    pub verification_count: u32,
}

/// Aggregate of every verification a candidate has received.
/// Performance averages are on a 0–10 scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VerificationStats {
    pub total_verifications: u32,
    #[serde(default)]
    pub skill_stats: Vec<VerifiedSkillStat>,
    #[serde(default)]
    pub avg_communication: Option<f64>,
    #[serde(default)]
    pub avg_problem_solving: Option<f64>,
    #[serde(default)]
    pub avg_reliability: Option<f64>,
    #[serde(default)]
    pub avg_collaboration: Option<f64>,
}

/// Candidate-side culture preferences. Each list is compared against the
/// company's single declared tag for the same axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CulturePreferences {
    #[serde(default)]
    pub focus_types: Vec<String>,
    #[serde(default)]
    pub mission_orientations: Vec<String>,
    #[serde(default)]
    pub work_styles: Vec<String>,
}

/// Candidate profile as supplied by the profile store.
///
/// Every field is optional or defaults to empty: scorers degrade to a neutral
/// score instead of failing when a facet is missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CandidateProfile {
    pub skills: Vec<Skill>,
    pub languages: Vec<CandidateLanguage>,
    pub timezone: Option<String>,
    pub salary_min: Option<u32>,
    pub accepted_work_modes: Vec<WorkMode>,
    pub desired_seniority: Vec<Seniority>,
    pub preferred_company_sizes: Vec<CompanySize>,
    pub interested_industries: Vec<String>,
    pub regulatory_experience: Vec<String>,
    pub requires_sponsorship: bool,
    pub willing_to_relocate: bool,
    pub work_style: Vec<WorkStyleFacet>,
    pub team_preferences: Vec<TeamFacet>,
    pub management_preferences: Vec<ManagementFacet>,
    pub culture: CulturePreferences,
    pub verification: Option<VerificationStats>,
}

impl CandidateProfile {
    /// Case-insensitive skill lookup.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_lookup_ignores_case() {
        let candidate = CandidateProfile {
            skills: vec![Skill {
                name: "React".to_string(),
                level: 4,
                years: Some(3.0),
            }],
            ..CandidateProfile::default()
        };
        assert_eq!(candidate.skill("react").map(|s| s.level), Some(4));
        assert_eq!(candidate.skill(" REACT ").map(|s| s.level), Some(4));
        assert!(candidate.skill("vue").is_none());
    }

    #[test]
    fn test_empty_json_deserializes_to_defaults() {
        let candidate: CandidateProfile = serde_json::from_str("{}").unwrap();
        assert!(candidate.skills.is_empty());
        assert!(candidate.verification.is_none());
        assert!(!candidate.requires_sponsorship);
    }
}
