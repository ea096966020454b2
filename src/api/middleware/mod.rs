//! API middleware components

pub mod logging;
pub mod metrics;
pub mod security;

pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use security::{security_headers_middleware, MAX_BODY_SIZE};

use axum::{body::Body, extract::MatchedPath, http::Request};

/// Metrics label shared by every request that matched no route
pub(crate) const UNMATCHED_ROUTE: &str = "unmatched";

/// Route pattern of the request, or the raw path when no route matched
pub(crate) fn matched_path(request: &Request<Body>) -> String {
    route_pattern(request).unwrap_or_else(|| request.uri().path().to_string())
}

/// Route pattern of the request, or `UNMATCHED_ROUTE`. Never the raw path,
/// so arbitrary URLs cannot add label values.
pub(crate) fn route_label(request: &Request<Body>) -> String {
    route_pattern(request).unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

fn route_pattern(request: &Request<Body>) -> Option<String> {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_unmatched_requests_share_one_label() {
        let first = route_label(&request("/wp-admin/setup.php"));
        let second = route_label(&request("/.env"));

        assert_eq!(first, UNMATCHED_ROUTE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matched_path_falls_back_to_raw_path() {
        assert_eq!(matched_path(&request("/.env")), "/.env");
    }
}
