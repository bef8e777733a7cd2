//! Item image integrity use case.
//!
//! Runs four checks against the item type catalog in fixed order:
//! completeness, propagation (one transient item insert + delete), bucket
//! pattern and naming convention. Only a failed catalog fetch aborts the
//! run; everything else lands in the [`IntegrityReport`].

mod checks;
mod error;
mod types;

use std::sync::Arc;

use armory_domain::{ItemType, NewItem};

use crate::infrastructure::ports::{ClockPort, ItemRepo, ItemTypeRepo};

pub use checks::{
    check_completeness, check_naming, check_pattern, overall_passed, select_template,
};
pub use error::IntegrityError;
pub use types::{
    CheckSettings, CompletenessResult, IntegrityReport, NamingMismatch, PatternMismatch,
    PropagationGate, PropagationOutcome, DEFAULT_REFERENCE_ITEM_TYPE,
};

/// Check item image integrity use case.
///
/// Orchestrates: catalog fetch, probe item round-trip, per-record checks.
pub struct CheckIntegrity {
    item_types: Arc<dyn ItemTypeRepo>,
    items: Arc<dyn ItemRepo>,
    clock: Arc<dyn ClockPort>,
    settings: CheckSettings,
}

impl CheckIntegrity {
    pub fn new(
        item_types: Arc<dyn ItemTypeRepo>,
        items: Arc<dyn ItemRepo>,
        clock: Arc<dyn ClockPort>,
        settings: CheckSettings,
    ) -> Self {
        Self {
            item_types,
            items,
            clock,
            settings,
        }
    }

    /// Execute all checks and build the report.
    ///
    /// # Returns
    /// * `Ok(IntegrityReport)` - Every check ran; `passed` holds the verdict
    /// * `Err(IntegrityError)` - The item type catalog could not be fetched
    pub async fn execute(&self) -> Result<IntegrityReport, IntegrityError> {
        let started_at = self.clock.now();

        // 1. Completeness
        tracing::info!("Step 1/4: checking item types for a base image URL");
        let item_types = self
            .item_types
            .list_ordered_by_name()
            .await
            .map_err(IntegrityError::FetchItemTypes)?;

        let completeness = check_completeness(&item_types);
        for name in &completeness.missing {
            tracing::warn!(item_type = %name, "Item type has no base image URL");
        }
        tracing::info!(
            total = item_types.len(),
            with_image = completeness.with_image,
            missing = completeness.missing_count(),
            "Completeness check finished"
        );

        // 2. Propagation
        tracing::info!("Step 2/4: checking new items copy the base image URL");
        let propagation = self.check_propagation(&item_types).await;

        // 3. Pattern
        tracing::info!(
            prefix = %self.settings.bucket_prefix,
            "Step 3/4: checking base image URLs live in the item bucket"
        );
        let pattern_mismatches = check_pattern(&item_types, &self.settings.bucket_prefix);
        for mismatch in &pattern_mismatches {
            tracing::warn!(
                item_type = %mismatch.item_type,
                url = %mismatch.url,
                "Base image URL outside the item bucket"
            );
        }
        tracing::info!(
            mismatches = pattern_mismatches.len(),
            "Pattern check finished"
        );

        // 4. Naming convention
        tracing::info!("Step 4/4: checking image filenames follow the naming convention");
        let naming_mismatches = check_naming(&item_types);
        for mismatch in &naming_mismatches {
            tracing::warn!(
                item_type = %mismatch.item_type,
                expected = %mismatch.expected,
                actual = %mismatch.actual,
                "Image filename does not match item type name"
            );
        }
        tracing::info!(
            mismatches = naming_mismatches.len(),
            "Naming check finished"
        );

        let passed = overall_passed(
            completeness.missing_count(),
            pattern_mismatches.len(),
            naming_mismatches.len(),
            &propagation,
            self.settings.propagation_gate,
        );

        let report = IntegrityReport {
            started_at,
            finished_at: self.clock.now(),
            item_type_count: item_types.len(),
            completeness,
            propagation,
            pattern_mismatches,
            naming_mismatches,
            propagation_gate: self.settings.propagation_gate,
            passed,
        };

        log_summary(&report);
        Ok(report)
    }

    /// Insert a probe item from the template type, compare its stored image
    /// with the type's base image, then delete it whatever the comparison
    /// said. Insert failures skip the check.
    async fn check_propagation(&self, item_types: &[ItemType]) -> PropagationOutcome {
        let reference = self.settings.reference_item_type.as_str();
        let Some(template) = select_template(item_types, reference) else {
            tracing::warn!("No item types fetched, skipping propagation check");
            return PropagationOutcome::skipped("no item types to use as template");
        };
        if template.name != reference {
            tracing::info!(
                reference = %reference,
                fallback = %template.name,
                "Reference item type not found, using first item type"
            );
        }

        let Some(expected) = template.base_image_url.clone() else {
            tracing::warn!(
                item_type = %template.name,
                "Template item type has no base image URL, skipping propagation check"
            );
            return PropagationOutcome::skipped(format!(
                "template item type '{}' has no base image URL",
                template.name
            ));
        };

        let probe = NewItem::from_item_type(template, self.settings.fixture_user_id);
        let item = match self.items.insert(&probe).await {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    user_id = %self.settings.fixture_user_id,
                    "Could not insert probe item (does the fixture user exist?), skipping propagation check"
                );
                return PropagationOutcome::skipped(format!("probe insert failed: {}", e));
            }
        };

        let matched = item.image_url.as_deref() == Some(expected.as_str());
        if matched {
            tracing::info!(item_type = %template.name, "New item carries the base image URL");
        } else {
            tracing::warn!(
                item_type = %template.name,
                expected = %expected,
                actual = ?item.image_url,
                "New item image URL differs from the base image URL"
            );
        }

        let leaked_item_id = match self.items.delete(item.id).await {
            Ok(()) => {
                tracing::debug!(item_id = %item.id, "Probe item deleted");
                None
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    item_id = %item.id,
                    "Failed to delete probe item, row leaked"
                );
                Some(item.id)
            }
        };

        if matched && leaked_item_id.is_none() {
            PropagationOutcome::Passed {
                item_type: template.name.clone(),
                image_url: expected,
            }
        } else {
            PropagationOutcome::Failed {
                item_type: template.name.clone(),
                expected,
                actual: item.image_url,
                leaked_item_id,
            }
        }
    }
}

fn log_summary(report: &IntegrityReport) {
    let propagation = match &report.propagation {
        PropagationOutcome::Passed { .. } => "passed",
        PropagationOutcome::Failed { .. } => "failed",
        PropagationOutcome::Skipped { .. } => "skipped",
    };
    tracing::info!(
        item_types = report.item_type_count,
        missing = report.completeness.missing_count(),
        pattern_mismatches = report.pattern_mismatches.len(),
        naming_mismatches = report.naming_mismatches.len(),
        propagation = propagation,
        gate = %report.propagation_gate,
        "Integrity summary"
    );
    if report.passed {
        tracing::info!("All integrity checks passed");
    } else {
        tracing::warn!("Integrity checks failed");
    }
}
