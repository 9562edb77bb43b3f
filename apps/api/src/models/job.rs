use serde::{Deserialize, Serialize};

use crate::models::facets::{ManagementFacet, TeamFacet, TeamKey, WorkStyleFacet, WorkStyleKey};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementPriority {
    #[default]
    Required,
    Preferred,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobSkillRequirement {
    pub name: String,
    /// 1 – 5
    pub required_level: u8,
    #[serde(default)]
    pub weight: RequirementPriority,
}

/// Ordered proficiency scale: `basic < conversational < professional < fluent < native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageProficiency {
    Basic,
    Conversational,
    Professional,
    Fluent,
    Native,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageRequirement {
    pub language: String,
    pub min_proficiency: LanguageProficiency,
    #[serde(default)]
    pub priority: RequirementPriority,
}

/// How much working-hours overlap the team expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapMode {
    #[default]
    AsyncFirst,
    FullOverlap,
    #[serde(rename = "overlap_4_plus")]
    Overlap4Plus,
    #[serde(rename = "overlap_2_plus")]
    Overlap2Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
    Principal,
    Executive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    Micro,
    #[serde(rename = "11-50")]
    Small,
    #[serde(rename = "51-200")]
    Medium,
    #[serde(rename = "201-1000")]
    Large,
    #[serde(rename = "1000+")]
    Enterprise,
}

/// Minimum verified performance per axis, 0–10. `None` means not required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerformanceMinimums {
    pub communication: Option<f64>,
    pub problem_solving: Option<f64>,
    pub reliability: Option<f64>,
    pub collaboration: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JobPosting {
    pub skills: Vec<JobSkillRequirement>,
    pub required_certifications: Vec<String>,
    pub preferred_certifications: Vec<String>,
    pub regulatory_domains: Vec<String>,
    pub languages: Vec<LanguageRequirement>,
    pub timezone: Option<String>,
    pub overlap_mode: Option<OverlapMode>,
    pub offers_sponsorship: bool,
    pub offers_relocation: bool,
    pub work_style_requirements: Vec<WorkStyleFacet>,
    pub work_style_dealbreakers: Vec<WorkStyleKey>,
    pub team_requirements: Vec<TeamFacet>,
    pub team_dealbreakers: Vec<TeamKey>,
    pub performance_minimums: PerformanceMinimums,
    pub salary_max: Option<u32>,
    pub work_mode: Option<WorkMode>,
    pub seniority: Option<Seniority>,
}

impl JobPosting {
    pub fn has_certification_requirements(&self) -> bool {
        !self.required_certifications.is_empty() || !self.preferred_certifications.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyProfile {
    pub industries: Vec<String>,
    pub size: Option<CompanySize>,
    pub default_timezone: Option<String>,
    pub work_style_defaults: Vec<WorkStyleFacet>,
    pub team_structure: Vec<TeamFacet>,
    pub focus_type: Option<String>,
    pub mission_orientation: Option<String>,
    pub work_style: Option<String>,
}

/// Preferences declared by the hiring manager; only used for management fit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HiringManagerPreferences {
    pub management: Vec<ManagementFacet>,
}
