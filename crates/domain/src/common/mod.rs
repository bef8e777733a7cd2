//! Common utility functions shared across the Armory crates.
//!
//! Pure functions only: no side effects, no I/O.

pub mod string;

pub use string::{blank_to_none, deserialize_optional_text};
