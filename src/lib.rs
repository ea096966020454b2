//! Car Price Server
//!
//! Serves a fitted used-car price regression model behind a web form:
//! - Feature vectors built from raw form fields (scaled numerics + one-hot categories)
//! - Linear model inference with inverse log transform
//! - JSON artifact bundle loaded once at startup

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use domain::{FeatureVectorizer, ModelArtifacts, PricePredictor, UnknownCategoryPolicy};
use infrastructure::artifact::FileArtifactLoader;
use infrastructure::page::{IndexPage, IndexPageContext};

/// Load artifacts from the configured path, or `artifact_path` when given
pub async fn load_artifacts(
    config: &AppConfig,
    artifact_path: Option<&Path>,
) -> anyhow::Result<ModelArtifacts> {
    let loader = match artifact_path {
        Some(path) => FileArtifactLoader::new(path),
        None => FileArtifactLoader::new(&config.artifacts.path),
    };

    Ok(loader.load().await?)
}

/// Wire the vectorizer and regressor from loaded artifacts. Ages are
/// measured against `reference_year`, or the current year when `None`.
pub fn build_predictor(
    artifacts: &ModelArtifacts,
    policy: UnknownCategoryPolicy,
    reference_year: Option<i32>,
) -> PricePredictor {
    let mut vectorizer = FeatureVectorizer::new(
        Arc::clone(&artifacts.schema),
        Arc::clone(&artifacts.scaler),
        policy,
    );

    if let Some(year) = reference_year {
        vectorizer = vectorizer.with_reference_year(year);
    }

    PricePredictor::new(vectorizer, artifacts.regressor.clone())
}

/// Create application state: load artifacts, build the predictor and render
/// the form page. Any failure here must abort startup.
pub async fn create_app_state(
    config: &AppConfig,
    artifact_path: Option<&Path>,
) -> anyhow::Result<AppState> {
    let artifacts = load_artifacts(config, artifact_path).await?;
    let predictor = build_predictor(&artifacts, config.prediction.unknown_category, None);

    info!(
        policy = ?config.prediction.unknown_category,
        "Unknown category policy configured"
    );

    let context = IndexPageContext {
        title: &config.page.title,
        predict_url: &config.prediction.predict_url,
        brands: &artifacts.brands,
    };

    let index_page = match &config.page.template_path {
        Some(path) => IndexPage::render_file(Path::new(path), &context).await?,
        None => IndexPage::render_default(&context)?,
    };

    Ok(AppState::new(predictor, index_page, artifacts.brands))
}
