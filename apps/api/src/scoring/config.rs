//! Immutable scoring configuration, built once at start-up and passed into the
//! engine explicitly.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::facets::{ManagementKey, TeamKey, WorkStyleKey};
use crate::models::Dimension;

/// Top-level blend weights. Must sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BlendWeights {
    pub skills: f64,
    pub seniority: f64,
    pub salary: f64,
    pub industry: f64,
    pub company_size: f64,
    pub culture: f64,
    pub perks: f64,
    pub work_mode: f64,
    pub work_style: f64,
    pub team_fit: f64,
    pub performance: f64,
    pub language: f64,
    pub timezone: f64,
    pub visa: f64,
    pub relocation: f64,
    pub management_fit: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            skills: 0.22,
            seniority: 0.07,
            salary: 0.09,
            industry: 0.05,
            company_size: 0.04,
            culture: 0.05,
            perks: 0.02,
            work_mode: 0.04,
            work_style: 0.07,
            team_fit: 0.06,
            performance: 0.04,
            language: 0.05,
            timezone: 0.05,
            visa: 0.03,
            relocation: 0.03,
            management_fit: 0.09,
        }
    }
}

impl BlendWeights {
    /// Weight per blended dimension, in the fixed blend order.
    pub fn entries(&self) -> [(Dimension, f64); 16] {
        [
            (Dimension::Skills, self.skills),
            (Dimension::Seniority, self.seniority),
            (Dimension::Salary, self.salary),
            (Dimension::Industry, self.industry),
            (Dimension::CompanySize, self.company_size),
            (Dimension::Culture, self.culture),
            (Dimension::Perks, self.perks),
            (Dimension::WorkMode, self.work_mode),
            (Dimension::WorkStyle, self.work_style),
            (Dimension::TeamFit, self.team_fit),
            (Dimension::Performance, self.performance),
            (Dimension::Language, self.language),
            (Dimension::Timezone, self.timezone),
            (Dimension::Visa, self.visa),
            (Dimension::Relocation, self.relocation),
            (Dimension::ManagementFit, self.management_fit),
        ]
    }

    pub fn weight_of(&self, dimension: Dimension) -> f64 {
        self.entries()
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }
}

/// Shares used when folding a sub-factor into its parent dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SubFactorShares {
    /// Share of certifications inside skills, when certification data applies.
    pub certifications_in_skills: f64,
    /// Assumed-neutral base that culture alignment is layered onto.
    pub culture_base_score: f64,
    pub culture_base_share: f64,
    /// Share of regulatory experience inside industry, when the job declares domains.
    pub regulatory_in_industry: f64,
}

impl Default for SubFactorShares {
    fn default() -> Self {
        Self {
            certifications_in_skills: 0.3,
            culture_base_score: 100.0,
            culture_base_share: 0.6,
            regulatory_in_industry: 0.2,
        }
    }
}

/// Per-key weights for the categorical matchers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FacetWeights {
    pub work_style: BTreeMap<WorkStyleKey, f64>,
    pub team: BTreeMap<TeamKey, f64>,
    pub management: BTreeMap<ManagementKey, f64>,
}

impl Default for FacetWeights {
    fn default() -> Self {
        Self {
            work_style: BTreeMap::from([
                (WorkStyleKey::Pace, 1.5),
                (WorkStyleKey::Autonomy, 1.0),
                (WorkStyleKey::Schedule, 1.5),
                (WorkStyleKey::Communication, 1.0),
            ]),
            team: BTreeMap::from([
                (TeamKey::TeamSize, 1.0),
                (TeamKey::Collaboration, 1.5),
                (TeamKey::Structure, 1.0),
            ]),
            management: BTreeMap::from([
                (ManagementKey::Style, 1.5),
                (ManagementKey::CheckIns, 1.0),
                (ManagementKey::Feedback, 1.0),
                (ManagementKey::Recognition, 1.0),
            ]),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: BlendWeights,
    pub shares: SubFactorShares,
    pub facets: FacetWeights,
}

impl EngineConfig {
    /// Loads a JSON override file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config '{}'", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid engine config '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some((dimension, weight)) = self
            .weights
            .entries()
            .into_iter()
            .find(|(_, w)| !w.is_finite() || *w < 0.0)
        {
            bail!("Blend weight for {dimension:?} must be a non-negative number, got {weight}");
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            bail!("Blend weights must sum to 1.0, got {sum:.6}");
        }

        let shares = [
            self.shares.certifications_in_skills,
            self.shares.culture_base_share,
            self.shares.regulatory_in_industry,
        ];
        if shares.iter().any(|s| !(0.0..=1.0).contains(s)) {
            bail!("Sub-factor shares must lie within 0.0..=1.0");
        }

        let facet_weights = self
            .facets
            .work_style
            .values()
            .chain(self.facets.team.values())
            .chain(self.facets.management.values());
        for weight in facet_weights {
            if !weight.is_finite() || *weight < 0.0 {
                bail!("Facet weights must be non-negative numbers, got {weight}");
            }
        }

        Ok(())
    }
}
