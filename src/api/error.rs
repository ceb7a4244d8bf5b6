use crate::domain::error::DomainError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),
    #[error("Invalid query string: {}", .0.body_text())]
    Query(#[from] QueryRejection),
}

/// Converts an `ApiError` into a JSON error response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Domain(err) => match err {
                DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                DomainError::InvalidInput(_) | DomainError::Parse(_) => StatusCode::BAD_REQUEST,
                DomainError::DuplicateTrade(_) => StatusCode::CONFLICT,
                DomainError::Io(io_err) => {
                    tracing::error!(error = ?io_err, "I/O error while serving request.");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            // Content-type and body-size problems keep axum's status; schema errors are 400.
            ApiError::Body(
                rejection @ (JsonRejection::MissingJsonContentType(_)
                | JsonRejection::BytesRejection(_)),
            ) => rejection.status(),
            ApiError::Body(_) | ApiError::Query(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
