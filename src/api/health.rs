//! Health check endpoints for container probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;
use crate::domain::{CategoryGroup, UnknownCategoryPolicy};

/// Detailed health response with component status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Individual component health check
#[derive(Serialize, Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check over the loaded artifacts
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let checks = vec![check_model(&state), check_brand_catalog(&state)];

    let overall_status = checks
        .iter()
        .map(|c| c.status)
        .fold(HealthStatus::Healthy, worst);

    let response = HealthResponse {
        status: overall_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(checks),
        latency_ms: Some(start.elapsed().as_millis() as u64),
    };

    let status_code = match overall_status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response))
}

/// Liveness check - simple check to verify the service is running
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

fn worst(a: HealthStatus, b: HealthStatus) -> HealthStatus {
    match (a, b) {
        (HealthStatus::Unhealthy, _) | (_, HealthStatus::Unhealthy) => HealthStatus::Unhealthy,
        (HealthStatus::Degraded, _) | (_, HealthStatus::Degraded) => HealthStatus::Degraded,
        _ => HealthStatus::Healthy,
    }
}

fn check_model(state: &AppState) -> HealthCheck {
    let vectorizer = state.predictor.vectorizer();
    let schema = vectorizer.schema();
    let policy = match vectorizer.policy() {
        UnknownCategoryPolicy::Ignore => "ignored",
        UnknownCategoryPolicy::Error => "rejected",
    };

    let (status, message) = if schema.is_empty() {
        (HealthStatus::Unhealthy, "Feature schema is empty".to_string())
    } else {
        (
            HealthStatus::Healthy,
            format!(
                "{} features ({} brand, {} ownership, {} fuel type indicators), unknown categories {}",
                schema.len(),
                schema.category_count(CategoryGroup::Car),
                schema.category_count(CategoryGroup::Ownership),
                schema.category_count(CategoryGroup::FuelType),
                policy
            ),
        )
    };

    HealthCheck {
        name: "model".to_string(),
        status,
        message: Some(message),
    }
}

fn check_brand_catalog(state: &AppState) -> HealthCheck {
    if state.brands.is_empty() {
        HealthCheck {
            name: "brand_catalog".to_string(),
            status: HealthStatus::Degraded,
            message: Some("No brands available for the form".to_string()),
        }
    } else {
        HealthCheck {
            name: "brand_catalog".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("{} brands", state.brands.len())),
        }
    }
}
