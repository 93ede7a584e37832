use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;
use utoipa::ToSchema;

/// Envelope for responses that carry only an outcome and a human-readable message.
///
/// Failures of every slice share this shape: `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    #[schema(value_type = String)]
    pub message: Cow<'static, str>,
}

impl MessageResponse {
    pub fn ok(message: impl Into<Cow<'static, str>>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self { success: false, message: message.into() }
    }

    /// Pairs the envelope with a status code.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
