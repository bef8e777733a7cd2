//! User story orchestration across ports.

pub mod integrity;
