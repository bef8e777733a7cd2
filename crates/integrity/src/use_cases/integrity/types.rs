//! Integrity check settings and result types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use armory_domain::{BucketPrefix, DomainError, ItemId, UserId};

// ============================================================================
// Propagation Gate
// ============================================================================

/// Whether the propagation outcome takes part in the overall verdict.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropagationGate {
    /// Outcome is logged and reported but never fails the run.
    Advisory,
    /// A failed propagation fails the run. Skipped still passes.
    #[default]
    Required,
}

impl std::fmt::Display for PropagationGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagationGate::Advisory => write!(f, "advisory"),
            PropagationGate::Required => write!(f, "required"),
        }
    }
}

impl std::str::FromStr for PropagationGate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "advisory" | "legacy" => Ok(PropagationGate::Advisory),
            "required" | "strict" => Ok(PropagationGate::Required),
            other => Err(DomainError::parse(format!(
                "Unknown propagation gate '{}', expected 'advisory' or 'required'",
                other
            ))),
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Environment-specific inputs of a check run.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    /// Every base image URL must start with this.
    pub bucket_prefix: BucketPrefix,
    /// Owner of the transient probe item. Must satisfy the items table's
    /// user foreign key, otherwise the propagation check is skipped.
    pub fixture_user_id: UserId,
    /// Item type used as the propagation template when present.
    pub reference_item_type: String,
    pub propagation_gate: PropagationGate,
}

/// Default template name for the propagation check.
pub const DEFAULT_REFERENCE_ITEM_TYPE: &str = "Sword";

// ============================================================================
// Check Results
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletenessResult {
    pub with_image: usize,
    /// Names of item types without a base image URL, in fetch order.
    pub missing: Vec<String>,
}

impl CompletenessResult {
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMismatch {
    pub item_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingMismatch {
    pub item_type: String,
    pub expected: String,
    pub actual: String,
}

/// Result of the insert/compare/delete round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PropagationOutcome {
    Passed {
        item_type: String,
        image_url: String,
    },
    Failed {
        item_type: String,
        expected: String,
        actual: Option<String>,
        /// Set when the probe row could not be deleted afterwards.
        leaked_item_id: Option<ItemId>,
    },
    Skipped {
        reason: String,
    },
}

impl PropagationOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped {
            reason: reason.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }
}

// ============================================================================
// Report
// ============================================================================

/// Everything one run observed, plus the verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub item_type_count: usize,
    pub completeness: CompletenessResult,
    pub propagation: PropagationOutcome,
    pub pattern_mismatches: Vec<PatternMismatch>,
    pub naming_mismatches: Vec<NamingMismatch>,
    pub propagation_gate: PropagationGate,
    pub passed: bool,
}
