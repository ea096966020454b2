use thiserror::Error;

use super::schema::CategoryGroup;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Unknown {group} '{value}'")]
    UnknownCategory { group: CategoryGroup, value: String },

    #[error("Inference error: {message}")]
    Inference { message: String },

    #[error("Artifact error: {message}")]
    Artifact { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn unknown_category(group: CategoryGroup, value: impl Into<String>) -> Self {
        Self::UnknownCategory {
            group,
            value: value.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn artifact(message: impl Into<String>) -> Self {
        Self::Artifact {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::UnknownCategory { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("year", "'abc' is not an integer");
        assert_eq!(error.to_string(), "Invalid year: 'abc' is not an integer");
        assert!(error.is_client_error());
    }

    #[test]
    fn test_unknown_category_error() {
        let error = DomainError::unknown_category(CategoryGroup::Car, "Tesla");
        assert_eq!(error.to_string(), "Unknown brand 'Tesla'");
        assert!(error.is_client_error());
    }

    #[test]
    fn test_server_side_errors() {
        assert!(!DomainError::inference("shape mismatch").is_client_error());
        assert!(!DomainError::artifact("missing file").is_client_error());
        assert_eq!(
            DomainError::configuration("bad port").to_string(),
            "Configuration error: bad port"
        );
    }
}
