use crate::error::{NotFoundError, QueryError, ValidationError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Maps query failures onto the HTTP status codes and bodies clients expect.
#[derive(Debug)]
pub struct ApiError(pub QueryError);

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        Self(error)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self(error.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::MalformedBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, body) = match self.0 {
            QueryError::Validation(ValidationError::InvalidTags(tags)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "invalid_tags": tags }),
            ),
            QueryError::Validation(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            QueryError::NotFound(NotFoundError::NoMatches) => {
                (StatusCode::NOT_FOUND, json!({ "message": message }))
            }
            QueryError::NotFound(NotFoundError::Recipe(_)) => {
                (StatusCode::NOT_FOUND, json!({ "error": message }))
            }
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
