use serde::Serialize;
use vecroute_common::MetricKind;

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub locations: usize,
    pub highways: usize,
    pub metric: MetricKind,
}
