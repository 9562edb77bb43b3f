//! Verification Booster: turns third-party verification records into
//! multipliers and a performance vector.

use serde::{Deserialize, Serialize};

use crate::models::{VerificationStats, VerifiedSkillStat};

const MAX_TIER: u32 = 5;
const SKILLS_STEP: f64 = 0.05;
const TRAITS_STEP: f64 = 0.06;
const CORROBORATED_SKILL_BONUS: f64 = 1.05;
const CORROBORATED_AGREEMENT: f64 = 0.8;
const CORROBORATED_MIN_COUNT: u32 = 2;
const NEUTRAL_AXIS: f64 = 5.0;

/// Verified performance on four axes, 0–10 each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub communication: f64,
    pub problem_solving: f64,
    pub reliability: f64,
    pub collaboration: f64,
}

impl Default for PerformanceScores {
    fn default() -> Self {
        Self {
            communication: NEUTRAL_AXIS,
            problem_solving: NEUTRAL_AXIS,
            reliability: NEUTRAL_AXIS,
            collaboration: NEUTRAL_AXIS,
        }
    }
}

impl PerformanceScores {
    pub fn mean(&self) -> f64 {
        (self.communication + self.problem_solving + self.reliability + self.collaboration) / 4.0
    }
}

/// Derived per scoring call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationBoost {
    pub skills_multiplier: f64,
    pub traits_multiplier: f64,
    pub performance_scores: PerformanceScores,
    pub verified_skills: Vec<VerifiedSkillStat>,
}

impl Default for VerificationBoost {
    fn default() -> Self {
        Self {
            skills_multiplier: 1.0,
            traits_multiplier: 1.0,
            performance_scores: PerformanceScores::default(),
            verified_skills: vec![],
        }
    }
}

impl VerificationBoost {
    /// Case-insensitive lookup of a verified skill stat.
    pub fn skill_stat(&self, name: &str) -> Option<&VerifiedSkillStat> {
        self.verified_skills
            .iter()
            .find(|s| s.skill.eq_ignore_ascii_case(name.trim()))
    }
}

/// Computes the boost. Saturates at five verifications, so the skills
/// multiplier never exceeds 1.25 × 1.05 and the traits multiplier 1.30.
pub fn compute_verification_boost(stats: Option<&VerificationStats>) -> VerificationBoost {
    let stats = match stats {
        Some(s) if s.total_verifications > 0 => s,
        _ => return VerificationBoost::default(),
    };

    let tier = stats.total_verifications.min(MAX_TIER) as f64;

    let has_corroborated_skill = stats.skill_stats.iter().any(|s| {
        s.level_agreement_rate >= CORROBORATED_AGREEMENT
            && s.verification_count >= CORROBORATED_MIN_COUNT
    });

    let mut skills_multiplier = 1.0 + SKILLS_STEP * tier;
    if has_corroborated_skill {
        skills_multiplier *= CORROBORATED_SKILL_BONUS;
    }

    VerificationBoost {
        skills_multiplier,
        traits_multiplier: 1.0 + TRAITS_STEP * tier,
        performance_scores: PerformanceScores {
            communication: axis(stats.avg_communication),
            problem_solving: axis(stats.avg_problem_solving),
            reliability: axis(stats.avg_reliability),
            collaboration: axis(stats.avg_collaboration),
        },
        verified_skills: stats.skill_stats.clone(),
    }
}

fn axis(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 10.0))
        .unwrap_or(NEUTRAL_AXIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(skill: &str, agreement: f64, count: u32) -> VerifiedSkillStat {
        VerifiedSkillStat {
            skill: skill.to_string(),
            avg_assessed_level: 4.0,
            level_agreement_rate: agreement,
            verification_count: count,
        }
    }

    #[test]
    fn test_no_verifications_is_neutral() {
        assert_eq!(compute_verification_boost(None), VerificationBoost::default());

        let empty = VerificationStats::default();
        let boost = compute_verification_boost(Some(&empty));
        assert_eq!(boost.skills_multiplier, 1.0);
        assert_eq!(boost.traits_multiplier, 1.0);
        assert_eq!(boost.performance_scores.mean(), 5.0);
    }

    #[test]
    fn test_tier_scales_multipliers() {
        let stats = VerificationStats {
            total_verifications: 2,
            ..VerificationStats::default()
        };
        let boost = compute_verification_boost(Some(&stats));
        assert!((boost.skills_multiplier - 1.10).abs() < 1e-9);
        assert!((boost.traits_multiplier - 1.12).abs() < 1e-9);
    }

    #[test]
    fn test_tier_saturates_at_five() {
        let stats = VerificationStats {
            total_verifications: 40,
            skill_stats: vec![stat("rust", 0.9, 3)],
            ..VerificationStats::default()
        };
        let boost = compute_verification_boost(Some(&stats));
        assert!((boost.skills_multiplier - 1.25 * 1.05).abs() < 1e-9);
        assert!((boost.traits_multiplier - 1.30).abs() < 1e-9);
    }

    #[test]
    fn test_skill_bonus_needs_two_verifications() {
        let stats = VerificationStats {
            total_verifications: 1,
            skill_stats: vec![stat("rust", 0.95, 1)],
            ..VerificationStats::default()
        };
        let boost = compute_verification_boost(Some(&stats));
        assert!((boost.skills_multiplier - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_missing_axes_default_to_five() {
        let stats = VerificationStats {
            total_verifications: 3,
            avg_communication: Some(8.0),
            avg_reliability: Some(12.0),
            ..VerificationStats::default()
        };
        let boost = compute_verification_boost(Some(&stats));
        assert_eq!(boost.performance_scores.communication, 8.0);
        assert_eq!(boost.performance_scores.problem_solving, 5.0);
        assert_eq!(boost.performance_scores.reliability, 10.0);
    }

    #[test]
    fn test_skill_stat_lookup_ignores_case() {
        let stats = VerificationStats {
            total_verifications: 1,
            skill_stats: vec![stat("TypeScript", 0.8, 2)],
            ..VerificationStats::default()
        };
        let boost = compute_verification_boost(Some(&stats));
        assert!(boost.skill_stat("typescript").is_some());
    }
}
