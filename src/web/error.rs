use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures a handler can surface as an HTTP response.
///
/// Navigation mistakes (out-of-order question requests, missing session
/// state) are not errors; handlers recover from those with redirects. What
/// remains is an unknown survey id, which is the client's fault, and
/// session/template failures, which are ours. Internal details are logged
/// server-side and never echoed back to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("no survey named '{0}'")]
    UnknownSurvey(String),
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownSurvey(id) => {
                tracing::warn!("request for unknown survey '{}'", id);
                (StatusCode::NOT_FOUND, format!("No survey named '{id}'")).into_response()
            }
            AppError::Session(e) => {
                tracing::error!("session store error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            AppError::Template(e) => {
                tracing::error!("template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
