use axum::extract::State;
use axum::http::header;
use axum::{Json, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use ihub_domain::config::ApiConfig;
use ihub_domain::constants::SYSTEM_TAG;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process can answer
    #[schema(example = "healthy")]
    pub status: &'static str,
    /// Current time, ISO-8601 UTC with millisecond precision
    #[schema(example = "2024-05-01T12:00:00.000Z")]
    pub timestamp: String,
    /// Configured service name
    #[schema(example = "backend-api")]
    pub service: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
#[allow(clippy::unused_async)]
pub(super) async fn health_handler(State(config): State<ApiConfig>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: config.server.service_name.clone(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
