//! HTTP metrics middleware for recording request/response metrics

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use metrics::gauge;

use super::route_label;
use crate::infrastructure::observability::record_http_request;

/// Middleware to record request counts, latency and in-flight requests
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = route_label(&request);

    let in_flight = gauge!("http_requests_in_flight");
    in_flight.increment(1.0);

    let response = next.run(request).await;

    in_flight.decrement(1.0);
    record_http_request(method.as_str(), &path, response.status().as_u16(), start.elapsed());

    response
}
