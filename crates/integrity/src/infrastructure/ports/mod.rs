//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Data store access (hosted REST store today, anything row-shaped tomorrow)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{ItemRepo, ItemTypeRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::{MockItemRepo, MockItemTypeRepo};
#[cfg(test)]
pub use testing::MockClockPort;
