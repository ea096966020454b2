//! Predict command - one-shot prediction from the command line

use std::path::PathBuf;

use clap::Args;

use crate::build_predictor;
use crate::config::LoggingConfig;
use crate::domain::{RawListing, UnknownCategoryPolicy};
use crate::infrastructure::logging;

/// Arguments for the predict command
#[derive(Args, Clone, Debug)]
pub struct PredictArgs {
    /// Car brand, e.g. Honda
    #[arg(long)]
    pub brand: String,

    /// Model year
    #[arg(long)]
    pub year: String,

    /// Kilometres driven
    #[arg(long)]
    pub kms: String,

    /// Ownership, e.g. First
    #[arg(long)]
    pub ownership: String,

    /// Fuel type, e.g. Petrol
    #[arg(long)]
    pub fuel: String,

    /// Artifact bundle path (overrides config)
    #[arg(long)]
    pub artifact: Option<PathBuf>,

    /// Year used to compute the car age (defaults to the current year)
    #[arg(long)]
    pub reference_year: Option<i32>,

    /// Unknown category handling: ignore or error (overrides config)
    #[arg(long, value_parser = parse_policy)]
    pub unknown_category: Option<UnknownCategoryPolicy>,
}

/// Predict a single price and print it as `[price]`
pub async fn run(args: PredictArgs) -> anyhow::Result<()> {
    let config = super::load_config()?;

    // stdout carries the result only
    logging::init_stderr_logging(&LoggingConfig {
        level: "warn".to_string(),
        format: config.logging.format.clone(),
    })?;

    let artifacts = crate::load_artifacts(&config, args.artifact.as_deref()).await?;
    let policy = args
        .unknown_category
        .unwrap_or(config.prediction.unknown_category);

    let predictor = build_predictor(&artifacts, policy, args.reference_year);

    let listing = RawListing::new(args.brand, args.year, args.kms, args.ownership, args.fuel);
    let prediction = predictor.predict(&listing)?;

    for group in &prediction.unmatched {
        tracing::warn!(group = %group, "Category not in the model; indicator left unset");
    }

    println!("{}", serde_json::to_string(&[prediction.price])?);

    Ok(())
}

fn parse_policy(value: &str) -> Result<UnknownCategoryPolicy, String> {
    match value.to_ascii_lowercase().as_str() {
        "ignore" => Ok(UnknownCategoryPolicy::Ignore),
        "error" => Ok(UnknownCategoryPolicy::Error),
        other => Err(format!("unknown policy '{}', expected ignore or error", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_policy() {
        assert_eq!(parse_policy("ignore"), Ok(UnknownCategoryPolicy::Ignore));
        assert_eq!(parse_policy("Error"), Ok(UnknownCategoryPolicy::Error));
        assert!(parse_policy("strict").is_err());
    }

    #[tokio::test]
    async fn test_reference_year_is_applied() {
        let config = crate::AppConfig::default();
        let artifact = Path::new(env!("CARGO_MANIFEST_DIR")).join("artifact/saved_model.json");
        let artifacts = crate::load_artifacts(&config, Some(&artifact)).await.unwrap();

        let predictor = build_predictor(&artifacts, UnknownCategoryPolicy::Ignore, Some(2020));
        assert_eq!(predictor.vectorizer().reference_year(), 2020);

        let listing = RawListing::new("Honda", "2015", "60000", "Second", "Diesel");
        let prediction = predictor.predict(&listing).unwrap();
        assert!(prediction.price.is_finite());
        assert!(prediction.price > 0.0);
    }
}
