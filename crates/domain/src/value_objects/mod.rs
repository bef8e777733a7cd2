//! Value objects - Immutable objects defined by their attributes

mod bucket_prefix;

pub use bucket_prefix::BucketPrefix;
