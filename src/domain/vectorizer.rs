//! Feature vectorizer - raw listing fields to a model-ready feature vector

use std::sync::Arc;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::schema::{CategoryGroup, FeatureSchema, NUMERIC_SLOTS};
use super::{DomainError, RawListing, StandardScaler};

/// What to do with a category value the schema has no column for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCategoryPolicy {
    /// Leave the group's indicator slots at zero
    #[default]
    Ignore,
    /// Reject the listing
    Error,
}

/// Feature vector sized to the schema
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: Vec<f64>,
    unmatched: Vec<CategoryGroup>,
}

impl FeatureVector {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Groups whose value had no indicator column and were left at zero
    pub fn unmatched(&self) -> &[CategoryGroup] {
        &self.unmatched
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self {
            values,
            unmatched: Vec::new(),
        }
    }
}

/// Builds feature vectors from raw listings using the loaded schema and scaler
#[derive(Debug, Clone)]
pub struct FeatureVectorizer {
    schema: Arc<FeatureSchema>,
    scaler: Arc<StandardScaler>,
    policy: UnknownCategoryPolicy,
    reference_year: Option<i32>,
}

impl FeatureVectorizer {
    pub fn new(
        schema: Arc<FeatureSchema>,
        scaler: Arc<StandardScaler>,
        policy: UnknownCategoryPolicy,
    ) -> Self {
        Self {
            schema,
            scaler,
            policy,
            reference_year: None,
        }
    }

    /// Compute ages against a fixed year instead of the current one
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn policy(&self) -> UnknownCategoryPolicy {
        self.policy
    }

    /// Year that vehicle age is measured against
    pub fn reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Build the feature vector for one listing
    pub fn vectorize(&self, listing: &RawListing) -> Result<FeatureVector, DomainError> {
        let year = listing.parse_year()?;
        let kms = listing.parse_kms()?;
        let age = f64::from(self.reference_year()) - f64::from(year);

        let mut values = vec![0.0; self.schema.len()];
        let scaled = self.scaler.transform(&[kms, age])?;
        values[..NUMERIC_SLOTS].copy_from_slice(&scaled);

        let mut unmatched = Vec::new();

        for (group, value) in [
            (CategoryGroup::Car, &listing.brand),
            (CategoryGroup::Ownership, &listing.ownership),
            (CategoryGroup::FuelType, &listing.fuel),
        ] {
            match self.schema.category_index(group, value) {
                Some(slot) => values[slot] = 1.0,
                None if self.policy == UnknownCategoryPolicy::Error => {
                    return Err(DomainError::unknown_category(group, value.as_str()));
                }
                None => {
                    tracing::debug!(
                        column = %group.column_name(value),
                        "Category not in schema, leaving indicator slots at zero"
                    );
                    unmatched.push(group);
                }
            }
        }

        Ok(FeatureVector { values, unmatched })
    }
}
