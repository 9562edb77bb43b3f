use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const INVALID_DATA: &str = "Invalid data";

/// One independently scored facet of compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Skills,
    Certifications,
    Seniority,
    Salary,
    Industry,
    Regulatory,
    CompanySize,
    Culture,
    Traits,
    Perks,
    WorkMode,
    WorkStyle,
    TeamFit,
    Performance,
    Language,
    Timezone,
    Visa,
    Relocation,
    ManagementFit,
}

impl Dimension {
    pub const ALL: [Dimension; 19] = [
        Dimension::Skills,
        Dimension::Certifications,
        Dimension::Seniority,
        Dimension::Salary,
        Dimension::Industry,
        Dimension::Regulatory,
        Dimension::CompanySize,
        Dimension::Culture,
        Dimension::Traits,
        Dimension::Perks,
        Dimension::WorkMode,
        Dimension::WorkStyle,
        Dimension::TeamFit,
        Dimension::Performance,
        Dimension::Language,
        Dimension::Timezone,
        Dimension::Visa,
        Dimension::Relocation,
        Dimension::ManagementFit,
    ];
}

/// Uniform output of every dimension scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub score: u32, // 0 – 100
    pub reason: String,
}

impl MatchDetail {
    pub fn new(score: u32, reason: impl Into<String>) -> Self {
        Self {
            score: score.min(100),
            reason: reason.into(),
        }
    }

    /// Builds a detail from a fractional score, rounding and clamping to 0–100.
    pub fn rounded(score: f64, reason: impl Into<String>) -> Self {
        let score = if score.is_finite() {
            score.round().clamp(0.0, 100.0) as u32
        } else {
            0
        };
        Self::new(score, reason)
    }
}

/// Result of scoring one candidate × job pair. A value object: built once,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub overall_score: u32, // 0 – 100
    pub details: BTreeMap<Dimension, MatchDetail>,
    pub deal_breakers: Vec<String>,
    pub recommendations: Vec<String>,
}

impl MatchBreakdown {
    /// Degenerate breakdown for a missing job or candidate.
    pub fn invalid() -> Self {
        Self {
            overall_score: 0,
            details: BTreeMap::new(),
            deal_breakers: vec![INVALID_DATA.to_string()],
            recommendations: vec![],
        }
    }

    /// True for the degenerate breakdown returned on missing input, as
    /// opposed to a genuine low score.
    pub fn is_invalid(&self) -> bool {
        self.details.is_empty() && self.deal_breakers.iter().any(|d| d == INVALID_DATA)
    }

    pub fn score(&self, dimension: Dimension) -> Option<u32> {
        self.details.get(&dimension).map(|d| d.score)
    }
}
