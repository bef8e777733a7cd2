//! Armory domain types.
//!
//! Catalog and instance entities for game equipment, plus the pure rules the
//! integrity checks apply to them. No I/O lives here.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod image_naming;
pub mod value_objects;

pub use entities::{Item, ItemType, NewItem};
pub use error::DomainError;
pub use ids::{ItemId, ItemTypeId, UserId};
pub use value_objects::BucketPrefix;
