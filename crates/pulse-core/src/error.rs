use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors the shared router layer can answer with before a service handler runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Client errors only; TraceLayer already records method/uri/status.
        tracing::debug!(kind = self.kind(), "request rejected");
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}

/// Router fallback for unknown paths. Use with `Router::fallback`.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Router fallback for known paths hit with the wrong method.
/// Use with `Router::method_not_allowed_fallback`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
