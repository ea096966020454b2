//! Feature schema - ordered model columns and category slot lookup

mod entity;
mod validation;

pub use entity::{CategoryGroup, FeatureSchema};
pub use validation::{validate_feature_names, SchemaValidationError};

/// Leading schema slots holding the scaled `[kms, age]` pair
pub const NUMERIC_SLOTS: usize = 2;
