//! Adapts free-form search criteria into the job-shaped scoring contract.

use serde::{Deserialize, Serialize};

use crate::models::facets::{TeamFacet, WorkStyleFacet};
use crate::models::job::{
    JobSkillRequirement, LanguageRequirement, OverlapMode, PerformanceMinimums,
    RequirementPriority, Seniority, WorkMode,
};
use crate::models::JobPosting;

/// Level assumed for skills named without one.
pub const DEFAULT_SKILL_LEVEL: u8 = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchCriteria {
    /// Skill names searched for as hard requirements.
    pub required_skills: Vec<String>,
    /// Skill names that are nice to have.
    pub preferred_skills: Vec<String>,
    /// Level applied to `required_skills` / `preferred_skills`.
    pub min_skill_level: Option<u8>,
    /// Fully specified skill requirements; these win over the name lists.
    pub skills: Vec<JobSkillRequirement>,
    pub required_certifications: Vec<String>,
    pub preferred_certifications: Vec<String>,
    pub regulatory_domains: Vec<String>,
    pub languages: Vec<LanguageRequirement>,
    pub timezone: Option<String>,
    pub overlap_mode: Option<OverlapMode>,
    pub offers_sponsorship: bool,
    pub offers_relocation: bool,
    pub work_style: Vec<WorkStyleFacet>,
    pub team: Vec<TeamFacet>,
    pub performance_minimums: PerformanceMinimums,
    pub salary_max: Option<u32>,
    pub work_mode: Option<WorkMode>,
    pub seniority: Option<Seniority>,
}

impl SearchCriteria {
    pub fn to_job_posting(&self) -> JobPosting {
        let level = self
            .min_skill_level
            .unwrap_or(DEFAULT_SKILL_LEVEL)
            .clamp(1, 5);

        let mut skills = self.skills.clone();
        let named = self
            .required_skills
            .iter()
            .map(|name| (name, RequirementPriority::Required))
            .chain(
                self.preferred_skills
                    .iter()
                    .map(|name| (name, RequirementPriority::Preferred)),
            );
        for (name, weight) in named {
            let name = name.trim();
            if name.is_empty() || skills.iter().any(|s| s.name.eq_ignore_ascii_case(name)) {
                continue;
            }
            skills.push(JobSkillRequirement {
                name: name.to_string(),
                required_level: level,
                weight,
            });
        }

        JobPosting {
            skills,
            required_certifications: self.required_certifications.clone(),
            preferred_certifications: self.preferred_certifications.clone(),
            regulatory_domains: self.regulatory_domains.clone(),
            languages: self.languages.clone(),
            timezone: self.timezone.clone(),
            overlap_mode: self.overlap_mode,
            offers_sponsorship: self.offers_sponsorship,
            offers_relocation: self.offers_relocation,
            work_style_requirements: self.work_style.clone(),
            work_style_dealbreakers: vec![],
            team_requirements: self.team.clone(),
            team_dealbreakers: vec![],
            performance_minimums: self.performance_minimums.clone(),
            salary_max: self.salary_max,
            work_mode: self.work_mode,
            seniority: self.seniority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_skills_get_default_level() {
        let criteria = SearchCriteria {
            required_skills: vec!["Rust".to_string()],
            preferred_skills: vec!["Go".to_string(), " ".to_string()],
            ..SearchCriteria::default()
        };
        let job = criteria.to_job_posting();
        assert_eq!(job.skills.len(), 2);
        assert_eq!(job.skills[0].required_level, DEFAULT_SKILL_LEVEL);
        assert_eq!(job.skills[0].weight, RequirementPriority::Required);
        assert_eq!(job.skills[1].weight, RequirementPriority::Preferred);
    }

    #[test]
    fn test_explicit_skills_win_over_names() {
        let criteria = SearchCriteria {
            skills: vec![JobSkillRequirement {
                name: "Rust".to_string(),
                required_level: 5,
                weight: RequirementPriority::Preferred,
            }],
            required_skills: vec!["rust".to_string()],
            min_skill_level: Some(9),
            ..SearchCriteria::default()
        };
        let job = criteria.to_job_posting();
        assert_eq!(job.skills.len(), 1);
        assert_eq!(job.skills[0].required_level, 5);
    }

    #[test]
    fn test_criteria_fields_carry_over() {
        let criteria = SearchCriteria {
            salary_max: Some(150_000),
            work_mode: Some(WorkMode::Remote),
            overlap_mode: Some(OverlapMode::Overlap4Plus),
            ..SearchCriteria::default()
        };
        let job = criteria.to_job_posting();
        assert_eq!(job.salary_max, Some(150_000));
        assert_eq!(job.work_mode, Some(WorkMode::Remote));
        assert_eq!(job.overlap_mode, Some(OverlapMode::Overlap4Plus));
    }
}
