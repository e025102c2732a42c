//! JSON bodies shared by the endpoints: `{"message": ..}` on success, `{"error": ..}` on failure.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use petreg_derive::api_model;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Acknowledgement of a successful operation
pub struct MessageResponse {
    pub message: String,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Human readable failure
pub struct ErrorResponse {
    pub error: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Pairs the body with `status`.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    /// Pairs the body with `status`.
    pub fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bodies_use_single_key_objects() {
        let ok = serde_json::to_value(MessageResponse::new("Pet deletado com sucesso!")).unwrap();
        assert_eq!(ok, serde_json::json!({ "message": "Pet deletado com sucesso!" }));

        let err = serde_json::to_value(ErrorResponse::new("Pet não encontrado.")).unwrap();
        assert_eq!(err, serde_json::json!({ "error": "Pet não encontrado." }));
    }

    #[test]
    fn status_is_attached() {
        let response = ErrorResponse::new("Erro interno do servidor")
            .with_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
