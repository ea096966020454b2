//! Domain layer - Feature construction and price inference

pub mod artifact;
pub mod error;
pub mod listing;
pub mod predictor;
pub mod regressor;
pub mod scaler;
pub mod schema;
pub mod vectorizer;

pub use artifact::{ArtifactBundle, ModelArtifact, ModelArtifacts, ScalerArtifact};
pub use error::DomainError;
pub use listing::{RawListing, FORM_FIELD_COUNT};
pub use predictor::{inverse_log, PricePrediction, PricePredictor};
pub use regressor::{LinearRegressor, Regressor};
pub use scaler::StandardScaler;
pub use schema::{
    validate_feature_names, CategoryGroup, FeatureSchema, SchemaValidationError, NUMERIC_SLOTS,
};
pub use vectorizer::{FeatureVector, FeatureVectorizer, UnknownCategoryPolicy};
