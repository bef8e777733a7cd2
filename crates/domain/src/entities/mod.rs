//! Domain entities - Core business objects with identity

mod item;
mod item_type;

pub use item::{Item, NewItem};
pub use item_type::ItemType;
