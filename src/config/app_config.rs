use serde::Deserialize;

use crate::domain::UnknownCategoryPolicy;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub artifacts: ArtifactConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Location of the serialized model bundle
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    #[serde(default)]
    pub unknown_category: UnknownCategoryPolicy,
    /// Form action URL rendered into the index page
    #[serde(default = "default_predict_url")]
    pub predict_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_title")]
    pub title: String,
    /// Custom index template; the built-in one is used when unset
    #[serde(default)]
    pub template_path: Option<String>,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_predict_url() -> String {
    "/predict".to_string()
}

fn default_page_title() -> String {
    "Car Price Predictor".to_string()
}

fn default_true() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            path: "artifact/saved_model.json".to_string(),
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            unknown_category: UnknownCategoryPolicy::default(),
            predict_url: default_predict_url(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_page_title(),
            template_path: None,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_metrics_path(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
