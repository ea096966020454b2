//! Regression model trait and the fitted linear model

#[cfg(test)]
use mockall::automock;

use super::DomainError;

/// A fitted regression model predicting log-price from a feature vector
#[cfg_attr(test, automock)]
pub trait Regressor: Send + Sync {
    /// Number of input features the model was fitted on
    fn n_features(&self) -> usize;

    /// Predict a single value on the model's output scale
    fn predict(&self, features: &[f64]) -> Result<f64, DomainError>;
}

/// Linear model: `intercept + sum(coefficients[i] * x[i])`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressor {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearRegressor {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self, DomainError> {
        if coefficients.is_empty() {
            return Err(DomainError::artifact("Model has no coefficients"));
        }

        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(DomainError::artifact("Model parameters must be finite"));
        }

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegressor {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64, DomainError> {
        if features.len() != self.coefficients.len() {
            return Err(DomainError::inference(format!(
                "Model expects {} features, got {}",
                self.coefficients.len(),
                features.len()
            )));
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum();

        Ok(self.intercept + dot)
    }
}
