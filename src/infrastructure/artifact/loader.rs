//! Loads the model artifact bundle from disk

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{ArtifactBundle, CategoryGroup, DomainError, ModelArtifacts};

/// Reads and validates a JSON artifact bundle
#[derive(Debug, Clone)]
pub struct FileArtifactLoader {
    path: PathBuf,
}

impl FileArtifactLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read, parse and validate the bundle
    pub async fn load(&self) -> Result<ModelArtifacts, DomainError> {
        debug!(path = %self.path.display(), "Reading artifact bundle");

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::artifact(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let artifacts = parse_artifacts(&content).map_err(|e| match e {
            DomainError::Artifact { message } => {
                DomainError::artifact(format!("{}: {}", self.path.display(), message))
            }
            other => other,
        })?;

        info!(
            path = %self.path.display(),
            features = artifacts.schema.len(),
            brands = artifacts.brands.len(),
            brand_slots = artifacts.schema.category_count(CategoryGroup::Car),
            ownership_slots = artifacts.schema.category_count(CategoryGroup::Ownership),
            fuel_type_slots = artifacts.schema.category_count(CategoryGroup::FuelType),
            "Model artifacts loaded"
        );

        Ok(artifacts)
    }
}

/// Parse and validate a bundle from its JSON text
pub fn parse_artifacts(content: &str) -> Result<ModelArtifacts, DomainError> {
    let bundle: ArtifactBundle = serde_json::from_str(content)
        .map_err(|e| DomainError::artifact(format!("Invalid artifact JSON: {}", e)))?;

    ModelArtifacts::try_from(bundle)
}
