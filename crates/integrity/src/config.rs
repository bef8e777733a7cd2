//! Environment configuration.
//!
//! Values come from the process environment; `main` applies `.env.local`
//! and `.env` from the repository root first. Required variables have no
//! defaults because they differ per deployment.

use std::path::PathBuf;

use armory_domain::{BucketPrefix, UserId};
use uuid::Uuid;

use crate::infrastructure::supabase::DEFAULT_TIMEOUT_SECS;
use crate::use_cases::integrity::{CheckSettings, PropagationGate, DEFAULT_REFERENCE_ITEM_TYPE};

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const SUPABASE_TIMEOUT_SECS: &str = "SUPABASE_TIMEOUT_SECS";
pub const ITEM_IMAGE_BUCKET_PREFIX: &str = "ITEM_IMAGE_BUCKET_PREFIX";
pub const INTEGRITY_FIXTURE_USER_ID: &str = "INTEGRITY_FIXTURE_USER_ID";
pub const INTEGRITY_REFERENCE_ITEM_TYPE: &str = "INTEGRITY_REFERENCE_ITEM_TYPE";
pub const INTEGRITY_PROPAGATION_GATE: &str = "INTEGRITY_PROPAGATION_GATE";
pub const INTEGRITY_REPORT_PATH: &str = "INTEGRITY_REPORT_PATH";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

impl ConfigError {
    fn invalid(var: &'static str, message: impl ToString) -> Self {
        Self::Invalid {
            var,
            message: message.to_string(),
        }
    }
}

/// Connection settings for the hosted store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub service_key: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct IntegrityConfig {
    pub store: StoreConfig,
    pub check: CheckSettings,
    /// Where to write the JSON report, if anywhere.
    pub report_path: Option<PathBuf>,
}

impl IntegrityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from any variable source. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing(var));

        let url = require(SUPABASE_URL)?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::invalid(SUPABASE_URL, "expected an http(s) URL"));
        }
        let service_key = require(SUPABASE_SERVICE_ROLE_KEY)?;
        let timeout_secs = match get(SUPABASE_TIMEOUT_SECS) {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::invalid(SUPABASE_TIMEOUT_SECS, "expected a positive integer")
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let bucket_prefix = BucketPrefix::new(require(ITEM_IMAGE_BUCKET_PREFIX)?)
            .map_err(|e| ConfigError::invalid(ITEM_IMAGE_BUCKET_PREFIX, e))?;
        let fixture_user_id = match get(INTEGRITY_FIXTURE_USER_ID) {
            Some(raw) => raw
                .parse::<UserId>()
                .map_err(|e| ConfigError::invalid(INTEGRITY_FIXTURE_USER_ID, e))?,
            None => UserId::from_uuid(Uuid::nil()),
        };
        let reference_item_type = get(INTEGRITY_REFERENCE_ITEM_TYPE)
            .unwrap_or_else(|| DEFAULT_REFERENCE_ITEM_TYPE.to_string());
        let propagation_gate = match get(INTEGRITY_PROPAGATION_GATE) {
            Some(raw) => raw
                .parse::<PropagationGate>()
                .map_err(|e| ConfigError::invalid(INTEGRITY_PROPAGATION_GATE, e))?,
            None => PropagationGate::default(),
        };

        Ok(Self {
            store: StoreConfig {
                url,
                service_key,
                timeout_secs,
            },
            check: CheckSettings {
                bucket_prefix,
                fixture_user_id,
                reference_item_type,
                propagation_gate,
            },
            report_path: get(INTEGRITY_REPORT_PATH).map(PathBuf::from),
        })
    }
}
