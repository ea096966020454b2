//! Feature schema entity

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{validate_feature_names, SchemaValidationError};
use super::NUMERIC_SLOTS;

/// Categorical field group, identified in the schema by its column prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    Car,
    Ownership,
    FuelType,
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 3] = [Self::Car, Self::Ownership, Self::FuelType];

    /// Column name prefix used for this group's indicator columns
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Car => "car_",
            Self::Ownership => "ownership_",
            Self::FuelType => "fuel_type_",
        }
    }

    /// Stable label for logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Ownership => "ownership",
            Self::FuelType => "fuel_type",
        }
    }

    /// Full column name for a raw category value
    pub fn column_name(&self, value: &str) -> String {
        format!("{}{}", self.prefix(), value)
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "brand"),
            Self::Ownership => write!(f, "ownership"),
            Self::FuelType => write!(f, "fuel type"),
        }
    }
}

/// Ordered feature columns a fitted model expects, with a precomputed
/// `value -> slot` index per category group.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    categories: HashMap<CategoryGroup, HashMap<String, usize>>,
}

impl FeatureSchema {
    /// Build a schema from ordered column names.
    ///
    /// The first `NUMERIC_SLOTS` columns are the numeric features. Every
    /// later column whose name starts with a group prefix becomes an
    /// indicator slot for that group; other columns stay in the schema but
    /// are never set.
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaValidationError> {
        validate_feature_names(&columns)?;

        let mut categories: HashMap<CategoryGroup, HashMap<String, usize>> = HashMap::new();

        for (index, name) in columns.iter().enumerate().skip(NUMERIC_SLOTS) {
            let matched = CategoryGroup::ALL
                .iter()
                .find_map(|group| name.strip_prefix(group.prefix()).map(|value| (*group, value)));

            if let Some((group, value)) = matched {
                categories
                    .entry(group)
                    .or_default()
                    .insert(value.to_string(), index);
            }
        }

        Ok(Self {
            columns,
            categories,
        })
    }

    /// Number of columns, which is also the feature vector length
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Vector slot of a category value, if the schema knows it
    pub fn category_index(&self, group: CategoryGroup, value: &str) -> Option<usize> {
        self.categories.get(&group)?.get(value).copied()
    }

    /// Number of indicator slots for a group
    pub fn category_count(&self, group: CategoryGroup) -> usize {
        self.categories.get(&group).map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(values: &[&str]) -> FeatureSchema {
        FeatureSchema::new(values.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_category_index_lookup() {
        let schema = schema(&[
            "kms",
            "age",
            "car_Honda",
            "car_Maruti",
            "ownership_First",
            "fuel_type_Petrol",
        ]);

        assert_eq!(schema.len(), 6);
        assert_eq!(schema.category_index(CategoryGroup::Car, "Honda"), Some(2));
        assert_eq!(schema.category_index(CategoryGroup::Car, "Maruti"), Some(3));
        assert_eq!(schema.category_index(CategoryGroup::Ownership, "First"), Some(4));
        assert_eq!(schema.category_index(CategoryGroup::FuelType, "Petrol"), Some(5));
        assert_eq!(schema.category_index(CategoryGroup::Car, "Tesla"), None);
    }

    #[test]
    fn test_lookup_is_scoped_to_group() {
        let schema = schema(&["kms", "age", "car_First", "ownership_Second"]);

        assert_eq!(schema.category_index(CategoryGroup::Ownership, "First"), None);
        assert_eq!(schema.category_index(CategoryGroup::Car, "Second"), None);
        assert_eq!(schema.category_index(CategoryGroup::Car, "First"), Some(2));
    }

    #[test]
    fn test_numeric_slots_are_never_categories() {
        let schema = schema(&["car_Honda", "age", "car_Maruti"]);

        assert_eq!(schema.category_index(CategoryGroup::Car, "Honda"), None);
        assert_eq!(schema.category_index(CategoryGroup::Car, "Maruti"), Some(2));
    }

    #[test]
    fn test_unprefixed_columns_are_kept() {
        let schema = schema(&["kms", "age", "seats", "car_Honda"]);

        assert_eq!(schema.len(), 4);
        assert_eq!(schema.category_count(CategoryGroup::Car), 1);
        assert_eq!(schema.category_count(CategoryGroup::FuelType), 0);
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let result = FeatureSchema::new(vec!["kms".to_string()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_group_labels() {
        assert_eq!(CategoryGroup::FuelType.prefix(), "fuel_type_");
        assert_eq!(CategoryGroup::FuelType.column_name("Diesel"), "fuel_type_Diesel");
        assert_eq!(CategoryGroup::Car.to_string(), "brand");
        assert_eq!(
            serde_json::to_string(&CategoryGroup::FuelType).unwrap(),
            "\"fuel_type\""
        );
    }
}
