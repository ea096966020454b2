//! Serialized model artifact bundle

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{DomainError, FeatureSchema, LinearRegressor, Regressor, StandardScaler};

/// On-disk bundle produced at training time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    /// Brand names offered in the form
    pub brands: Vec<String>,
    pub model: ModelArtifact,
    pub scaler: ScalerArtifact,
}

/// Fitted linear model parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Ordered input columns the model was fitted on
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// Fitted scaler parameters for the `[kms, age]` columns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScalerArtifact {
    #[serde(default)]
    pub mean: Option<Vec<f64>>,
    #[serde(default)]
    pub scale: Option<Vec<f64>>,
}

/// Validated, immutable artifacts ready for serving
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub brands: Vec<String>,
    pub schema: Arc<FeatureSchema>,
    pub scaler: Arc<StandardScaler>,
    pub regressor: Arc<LinearRegressor>,
}

impl TryFrom<ArtifactBundle> for ModelArtifacts {
    type Error = DomainError;

    fn try_from(bundle: ArtifactBundle) -> Result<Self, Self::Error> {
        let ArtifactBundle {
            brands,
            model,
            scaler,
        } = bundle;

        let schema = FeatureSchema::new(model.feature_names)
            .map_err(|e| DomainError::artifact(e.to_string()))?;

        let regressor = LinearRegressor::new(model.coefficients, model.intercept)?;

        if regressor.n_features() != schema.len() {
            return Err(DomainError::artifact(format!(
                "Model has {} coefficients for {} feature names",
                regressor.n_features(),
                schema.len()
            )));
        }

        let scaler = StandardScaler::new(scaler.mean, scaler.scale)?;

        Ok(Self {
            brands,
            schema: Arc::new(schema),
            scaler: Arc::new(scaler),
            regressor: Arc::new(regressor),
        })
    }
}
