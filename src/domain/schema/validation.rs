//! Feature schema validation utilities

use std::collections::HashSet;
use std::fmt;

use super::NUMERIC_SLOTS;

/// Schema validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaValidationError {
    /// Fewer columns than the numeric slots require
    TooFewColumns { length: usize, min: usize },
    /// A column name is empty
    EmptyColumnName { index: usize },
    /// The same column name appears twice
    DuplicateColumn { name: String },
}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColumns { length, min } => {
                write!(
                    f,
                    "Feature schema has {} columns, at least {} are required",
                    length, min
                )
            }
            Self::EmptyColumnName { index } => {
                write!(f, "Feature schema column {} has an empty name", index)
            }
            Self::DuplicateColumn { name } => {
                write!(f, "Feature schema column '{}' appears more than once", name)
            }
        }
    }
}

impl std::error::Error for SchemaValidationError {}

/// Validate an ordered list of feature column names
pub fn validate_feature_names(names: &[String]) -> Result<(), SchemaValidationError> {
    if names.len() < NUMERIC_SLOTS {
        return Err(SchemaValidationError::TooFewColumns {
            length: names.len(),
            min: NUMERIC_SLOTS,
        });
    }

    let mut seen = HashSet::with_capacity(names.len());

    for (index, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(SchemaValidationError::EmptyColumnName { index });
        }

        if !seen.insert(name.as_str()) {
            return Err(SchemaValidationError::DuplicateColumn { name: name.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_valid_schema() {
        assert!(validate_feature_names(&names(&["kms", "age", "car_Honda"])).is_ok());
        assert!(validate_feature_names(&names(&["kms", "age"])).is_ok());
    }

    #[test]
    fn test_too_few_columns() {
        let result = validate_feature_names(&names(&["kms"]));
        assert_eq!(
            result,
            Err(SchemaValidationError::TooFewColumns { length: 1, min: 2 })
        );
    }

    #[test]
    fn test_empty_column_name() {
        let result = validate_feature_names(&names(&["kms", "age", ""]));
        assert_eq!(result, Err(SchemaValidationError::EmptyColumnName { index: 2 }));
    }

    #[test]
    fn test_duplicate_column() {
        let result = validate_feature_names(&names(&["kms", "age", "car_Honda", "car_Honda"]));
        assert!(matches!(
            result,
            Err(SchemaValidationError::DuplicateColumn { ref name }) if name == "car_Honda"
        ));
    }
}
