//! Armory integrity checker library.
//!
//! Verifies that item type artwork in the hosted store is complete, lives in
//! the item bucket, follows the naming convention and is copied onto newly
//! created items.
//!
//! ## Structure
//!
//! - `config` - Environment configuration
//! - `infrastructure/` - Port traits and the hosted store adapters
//! - `use_cases/` - The integrity check orchestration and its report

pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for use case tests.
#[cfg(test)]
pub mod test_fixtures;

pub use config::{ConfigError, IntegrityConfig};
pub use use_cases::integrity::{CheckIntegrity, IntegrityReport};
