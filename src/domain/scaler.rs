//! Fitted standardization of the numeric features

use super::schema::NUMERIC_SLOTS;
use super::DomainError;

/// Standard scaler with parameters learned at training time.
///
/// `transform(x)[j] = (x[j] - mean[j]) / scale[j]`. A missing `mean`
/// disables centering, a missing `scale` disables scaling, and a zero
/// scale is treated as 1.0 the way constant columns are fitted.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Option<Vec<f64>>,
    scale: Option<Vec<f64>>,
    n_features: usize,
}

impl StandardScaler {
    /// Create a scaler over `NUMERIC_SLOTS` columns
    pub fn new(mean: Option<Vec<f64>>, scale: Option<Vec<f64>>) -> Result<Self, DomainError> {
        for (label, params) in [("mean", &mean), ("scale", &scale)] {
            let Some(values) = params else { continue };

            if values.len() != NUMERIC_SLOTS {
                return Err(DomainError::artifact(format!(
                    "Scaler {} has {} values, expected {}",
                    label,
                    values.len(),
                    NUMERIC_SLOTS
                )));
            }

            if values.iter().any(|v| !v.is_finite()) {
                return Err(DomainError::artifact(format!(
                    "Scaler {} contains a non-finite value",
                    label
                )));
            }
        }

        Ok(Self {
            mean,
            scale,
            n_features: NUMERIC_SLOTS,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Transform one row of numeric features
    pub fn transform(&self, row: &[f64]) -> Result<Vec<f64>, DomainError> {
        if row.len() != self.n_features {
            return Err(DomainError::inference(format!(
                "Scaler expects {} features, got {}",
                self.n_features,
                row.len()
            )));
        }

        let scaled = row
            .iter()
            .enumerate()
            .map(|(j, value)| {
                let mut value = *value;

                if let Some(mean) = &self.mean {
                    value -= mean[j];
                }

                if let Some(scale) = &self.scale {
                    if scale[j] != 0.0 {
                        value /= scale[j];
                    }
                }

                value
            })
            .collect();

        Ok(scaled)
    }
}
