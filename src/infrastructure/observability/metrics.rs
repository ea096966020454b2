//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MetricsConfig;
use crate::domain::CategoryGroup;

/// Upper bound, in bytes, of a `path` label
const MAX_PATH_LABEL_LEN: usize = 50;

static NUMERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\d+(/|$)").unwrap());

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
    path: String,
}

impl PrometheusMetrics {
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Install the Prometheus recorder, or return `None` when disabled
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("car_price_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
                path: config.path.clone(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Router exposing the metrics endpoint at the configured path
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    let path = metrics.path.clone();

    Router::new()
        .route(&path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", sanitize_path(path)),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Outcome label for a prediction attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionOutcome {
    Success,
    Rejected,
    Failed,
}

impl PredictionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

/// Record a prediction attempt and its latency
pub fn record_prediction(outcome: PredictionOutcome, duration: Duration) {
    let labels = [("outcome", outcome.as_str().to_string())];

    counter!("car_price_predictions_total", &labels).increment(1);
    histogram!("car_price_prediction_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Record a category value that had no indicator column
pub fn record_unknown_category(group: CategoryGroup) {
    counter!("car_price_unknown_categories_total", "group" => group.as_str()).increment(1);
}

/// Collapse numeric path segments and cap the length to bound label cardinality
fn sanitize_path(path: &str) -> String {
    let path = NUMERIC_SEGMENT.replace_all(path, "/{id}$1");

    if path.len() <= MAX_PATH_LABEL_LEN {
        return path.into_owned();
    }

    // Cut on a char boundary; paths may carry multibyte characters
    let end = path
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|end| *end <= MAX_PATH_LABEL_LEN)
        .last()
        .unwrap_or(0);

    path[..end].to_string()
}
