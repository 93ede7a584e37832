use std::borrow::Cow;

/// Item registry error type.
#[derive(Debug, thiserror::Error)]
pub enum ItemsError {
    /// No item matches the requested id, or the id segment is not a number.
    #[error("Item not found")]
    NotFound { id: Cow<'static, str> },

    /// The create payload is not a JSON object with optional string fields.
    #[error("Invalid request body: {message}")]
    InvalidBody { message: Cow<'static, str> },
}

pub type Result<T> = std::result::Result<T, ItemsError>;

impl ItemsError {
    pub fn not_found(id: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn invalid_body(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidBody { message: message.into() }
    }
}

#[cfg(feature = "server")]
mod response {
    use super::ItemsError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use ihub_kernel::server::MessageResponse;
    use tracing::debug;

    impl ItemsError {
        #[must_use]
        pub const fn status(&self) -> StatusCode {
            match self {
                Self::NotFound { .. } => StatusCode::NOT_FOUND,
                Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            }
        }
    }

    impl IntoResponse for ItemsError {
        fn into_response(self) -> Response {
            match &self {
                Self::NotFound { id } => debug!(id = %id, "Item lookup missed"),
                Self::InvalidBody { message } => debug!(%message, "Rejected item payload"),
            }
            let status = self.status();
            MessageResponse::failure(self.to_string()).with_status(status)
        }
    }
}
