//! Typed categorical preferences.
//!
//! Each dimension has a closed key enum and one option enum per key. A facet
//! value is the pair, serialized as `{"key": "pace", "value": "fast"}`, so a
//! candidate preference and a job requirement with the same key are directly
//! comparable with `==`.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// A single categorical preference, identified by its key.
pub trait Facet: Copy + PartialEq + Debug {
    type Key: Copy + Ord + Debug;

    fn key(&self) -> Self::Key;
}

/// Human-readable label used in match reasons.
pub trait FacetLabel {
    fn label(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Work style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyleKey {
    Pace,
    Autonomy,
    Schedule,
    Communication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Steady,
    Fast,
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Autonomy {
    High,
    Balanced,
    Guided,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    Fixed,
    Flexible,
    Async,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunicationMode {
    Written,
    Verbal,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum WorkStyleFacet {
    Pace(Pace),
    Autonomy(Autonomy),
    Schedule(Schedule),
    Communication(CommunicationMode),
}

impl Facet for WorkStyleFacet {
    type Key = WorkStyleKey;

    fn key(&self) -> WorkStyleKey {
        match self {
            WorkStyleFacet::Pace(_) => WorkStyleKey::Pace,
            WorkStyleFacet::Autonomy(_) => WorkStyleKey::Autonomy,
            WorkStyleFacet::Schedule(_) => WorkStyleKey::Schedule,
            WorkStyleFacet::Communication(_) => WorkStyleKey::Communication,
        }
    }
}

impl FacetLabel for WorkStyleKey {
    fn label(&self) -> &'static str {
        match self {
            WorkStyleKey::Pace => "pace",
            WorkStyleKey::Autonomy => "autonomy",
            WorkStyleKey::Schedule => "schedule",
            WorkStyleKey::Communication => "communication",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Team
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamKey {
    TeamSize,
    Collaboration,
    Structure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collaboration {
    Independent,
    Pairing,
    Collaborative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamStructure {
    Flat,
    Hierarchical,
    Matrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum TeamFacet {
    TeamSize(TeamSize),
    Collaboration(Collaboration),
    Structure(TeamStructure),
}

impl Facet for TeamFacet {
    type Key = TeamKey;

    fn key(&self) -> TeamKey {
        match self {
            TeamFacet::TeamSize(_) => TeamKey::TeamSize,
            TeamFacet::Collaboration(_) => TeamKey::Collaboration,
            TeamFacet::Structure(_) => TeamKey::Structure,
        }
    }
}

impl FacetLabel for TeamKey {
    fn label(&self) -> &'static str {
        match self {
            TeamKey::TeamSize => "team size",
            TeamKey::Collaboration => "collaboration",
            TeamKey::Structure => "team structure",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Management
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementKey {
    Style,
    CheckIns,
    Feedback,
    Recognition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementStyle {
    HandsOn,
    Coaching,
    HandsOff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInCadence {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStyle {
    Direct,
    Diplomatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recognition {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum ManagementFacet {
    Style(ManagementStyle),
    CheckIns(CheckInCadence),
    Feedback(FeedbackStyle),
    Recognition(Recognition),
}

impl Facet for ManagementFacet {
    type Key = ManagementKey;

    fn key(&self) -> ManagementKey {
        match self {
            ManagementFacet::Style(_) => ManagementKey::Style,
            ManagementFacet::CheckIns(_) => ManagementKey::CheckIns,
            ManagementFacet::Feedback(_) => ManagementKey::Feedback,
            ManagementFacet::Recognition(_) => ManagementKey::Recognition,
        }
    }
}

impl FacetLabel for ManagementKey {
    fn label(&self) -> &'static str {
        match self {
            ManagementKey::Style => "management style",
            ManagementKey::CheckIns => "check-in cadence",
            ManagementKey::Feedback => "feedback style",
            ManagementKey::Recognition => "recognition",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_serde_shape() {
        let facet = WorkStyleFacet::Pace(Pace::Fast);
        let json = serde_json::to_string(&facet).unwrap();
        assert_eq!(json, r#"{"key":"pace","value":"fast"}"#);

        let back: WorkStyleFacet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, facet);
    }

    #[test]
    fn test_same_key_different_value_not_equal() {
        let a = TeamFacet::TeamSize(TeamSize::Small);
        let b = TeamFacet::TeamSize(TeamSize::Large);
        assert_eq!(a.key(), b.key());
        assert_ne!(a, b);
    }

    #[test]
    fn test_management_key_deserializes_snake_case() {
        let facet: ManagementFacet =
            serde_json::from_str(r#"{"key":"check_ins","value":"weekly"}"#).unwrap();
        assert_eq!(facet.key(), ManagementKey::CheckIns);
        assert_eq!(ManagementKey::CheckIns.label(), "check-in cadence");
    }
}
