//! Price predictor - regression inference and inverse log transform

use std::sync::Arc;

use super::{CategoryGroup, DomainError, FeatureVector, FeatureVectorizer, RawListing, Regressor};

/// Result of a single price prediction
#[derive(Debug, Clone, PartialEq)]
pub struct PricePrediction {
    /// Price in original units
    pub price: f64,
    /// Raw model output on the log scale
    pub log_price: f64,
    /// Category groups that were not found in the schema
    pub unmatched: Vec<CategoryGroup>,
}

/// Runs the vectorizer and the fitted regressor
#[derive(Clone)]
pub struct PricePredictor {
    vectorizer: FeatureVectorizer,
    regressor: Arc<dyn Regressor>,
}

impl std::fmt::Debug for PricePredictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricePredictor")
            .field("vectorizer", &self.vectorizer)
            .field("n_features", &self.regressor.n_features())
            .finish()
    }
}

impl PricePredictor {
    pub fn new(vectorizer: FeatureVectorizer, regressor: Arc<dyn Regressor>) -> Self {
        Self {
            vectorizer,
            regressor,
        }
    }

    pub fn vectorizer(&self) -> &FeatureVectorizer {
        &self.vectorizer
    }

    /// Vectorize a listing and predict its price
    pub fn predict(&self, listing: &RawListing) -> Result<PricePrediction, DomainError> {
        let vector = self.vectorizer.vectorize(listing)?;
        let log_price = self.predict_log_price(&vector)?;

        Ok(PricePrediction {
            price: inverse_log(log_price)?,
            log_price,
            unmatched: vector.unmatched().to_vec(),
        })
    }

    /// Predict the price of an already built feature vector
    pub fn predict_vector(&self, vector: &FeatureVector) -> Result<f64, DomainError> {
        inverse_log(self.predict_log_price(vector)?)
    }

    fn predict_log_price(&self, vector: &FeatureVector) -> Result<f64, DomainError> {
        if vector.len() != self.regressor.n_features() {
            return Err(DomainError::inference(format!(
                "Feature vector has {} values, model expects {}",
                vector.len(),
                self.regressor.n_features()
            )));
        }

        let log_price = self.regressor.predict(vector.values())?;

        if !log_price.is_finite() {
            return Err(DomainError::inference(format!(
                "Model returned a non-finite value: {}",
                log_price
            )));
        }

        Ok(log_price)
    }
}

/// Undo the log transform applied to prices at training time
pub fn inverse_log(log_price: f64) -> Result<f64, DomainError> {
    let price = log_price.exp();

    if !price.is_finite() {
        return Err(DomainError::inference(format!(
            "Price overflow for log value {}",
            log_price
        )));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::regressor::MockRegressor;
    use crate::domain::{FeatureSchema, LinearRegressor, StandardScaler, UnknownCategoryPolicy};

    fn vectorizer() -> FeatureVectorizer {
        let columns = ["kms", "age", "car_Honda", "ownership_First", "fuel_type_Petrol"];
        let schema = FeatureSchema::new(columns.iter().map(|s| s.to_string()).collect()).unwrap();
        let scaler = StandardScaler::new(Some(vec![40000.0, 6.0]), Some(vec![10000.0, 2.0])).unwrap();

        FeatureVectorizer::new(Arc::new(schema), Arc::new(scaler), UnknownCategoryPolicy::Ignore)
            .with_reference_year(2024)
    }

    #[test]
    fn test_predict_applies_inverse_log() {
        let regressor = LinearRegressor::new(vec![0.0, 0.0, 1.0, 0.5, 0.25], 10.0).unwrap();
        let predictor = PricePredictor::new(vectorizer(), Arc::new(regressor));

        let listing = RawListing::new("Honda", "2018", "40000", "First", "Petrol");
        let prediction = predictor.predict(&listing).unwrap();

        assert_eq!(prediction.log_price, 11.75);
        assert_eq!(prediction.price, 11.75f64.exp());
        assert!(prediction.unmatched.is_empty());
    }

    #[test]
    fn test_unknown_brand_still_predicts() {
        let mut regressor = MockRegressor::new();
        regressor.expect_n_features().return_const(5usize);
        regressor
            .expect_predict()
            .withf(|features| features[2] == 0.0)
            .times(1)
            .returning(|_| Ok(12.0));

        let predictor = PricePredictor::new(vectorizer(), Arc::new(regressor));
        let listing = RawListing::new("Tesla", "2018", "40000", "First", "Petrol");

        let prediction = predictor.predict(&listing).unwrap();
        assert!(prediction.price > 0.0);
        assert_eq!(prediction.unmatched, vec![CategoryGroup::Car]);
    }

    #[test]
    fn test_invalid_year_never_reaches_model() {
        let mut regressor = MockRegressor::new();
        regressor.expect_n_features().return_const(5usize);
        regressor.expect_predict().never();

        let predictor = PricePredictor::new(vectorizer(), Arc::new(regressor));
        let listing = RawListing::new("Honda", "abc", "40000", "First", "Petrol");

        let result = predictor.predict(&listing);
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_shape_mismatch_is_inference_error() {
        let regressor = LinearRegressor::new(vec![1.0, 1.0, 1.0], 0.0).unwrap();
        let predictor = PricePredictor::new(vectorizer(), Arc::new(regressor));

        let listing = RawListing::new("Honda", "2018", "40000", "First", "Petrol");
        let result = predictor.predict(&listing);

        assert!(matches!(result, Err(DomainError::Inference { .. })));
    }

    #[test]
    fn test_non_finite_model_output() {
        let mut regressor = MockRegressor::new();
        regressor.expect_n_features().return_const(5usize);
        regressor.expect_predict().returning(|_| Ok(f64::NAN));

        let predictor = PricePredictor::new(vectorizer(), Arc::new(regressor));
        let result = predictor.predict_vector(&FeatureVector::from(vec![0.0; 5]));

        assert!(matches!(result, Err(DomainError::Inference { .. })));
    }

    #[test]
    fn test_model_error_propagates() {
        let mut regressor = MockRegressor::new();
        regressor.expect_n_features().return_const(5usize);
        regressor
            .expect_predict()
            .returning(|_| Err(DomainError::inference("model exploded")));

        let predictor = PricePredictor::new(vectorizer(), Arc::new(regressor));
        let result = predictor.predict_vector(&FeatureVector::from(vec![0.0; 5]));

        assert_eq!(result.unwrap_err().to_string(), "Inference error: model exploded");
    }

    #[test]
    fn test_inverse_log_is_positive() {
        for log_price in [-700.0, -1.0, 0.0, 1.0, 13.2, 700.0] {
            assert!(inverse_log(log_price).unwrap() > 0.0);
        }

        assert_eq!(inverse_log(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_inverse_log_overflow() {
        assert!(inverse_log(1000.0).is_err());
    }
}
