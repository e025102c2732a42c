use crate::error::PetsError;
use crate::messages;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use petreg_kernel::server::response::ErrorResponse;
use tracing::error;

impl IntoResponse for PetsError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { message, .. } => {
                ErrorResponse::new(message).with_status(StatusCode::BAD_REQUEST)
            }
            Self::NotFound { .. } => {
                ErrorResponse::new(messages::NOT_FOUND).with_status(StatusCode::NOT_FOUND)
            }
            other => {
                error!(error = %other, "Pets request failed");
                ErrorResponse::new(messages::INTERNAL_ERROR)
                    .with_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
