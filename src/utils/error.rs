use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Not Found: {0}")]
    NotFoundError(String),

    #[error("Not Implemented: {0}")]
    NotImplementedError(String),

    #[error("Bad Request: {0}")]
    BadRequestError(String),

    #[error("Unauthorized: {0}")]
    UnauthorizedError(String),

    #[error("Conflict: {0}")]
    ConflictError(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl CustomError {
    /// Assert-style helper: returns `err` built from `msg` when `cond` is false.
    pub fn raise_assert(
        cond: bool,
        msg: impl Into<String>,
        err: fn(String) -> CustomError,
    ) -> Result<(), CustomError> {
        if cond { Ok(()) } else { Err(err(msg.into())) }
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::ValidationError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::NotImplementedError(..) => StatusCode::NOT_IMPLEMENTED,
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::UnauthorizedError(..) => StatusCode::UNAUTHORIZED,
            CustomError::ConflictError(..) => StatusCode::CONFLICT,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": match *self {
                CustomError::ValidationError(..) => "VALIDATION_ERROR",
                CustomError::NotFoundError(..) => "NOT_FOUND_ERROR",
                CustomError::NotImplementedError(..) => "NOT_IMPLEMENTED_ERROR",
                CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
                CustomError::UnauthorizedError(..) => "UNAUTHORIZED_ERROR",
                CustomError::ConflictError(..) => "CONFLICT_ERROR",
                CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            },
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_error_kind() {
        assert_eq!(
            CustomError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::NotFoundError("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CustomError::NotImplementedError("x".into()).status_code(),
            StatusCode::NOT_IMPLEMENTED
        );
        assert_eq!(
            CustomError::ConflictError("x".into()).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn raise_assert_passes_on_true() {
        assert!(CustomError::raise_assert(true, "ok", CustomError::ValidationError).is_ok());
    }

    #[test]
    fn raise_assert_builds_error_on_false() {
        let err =
            CustomError::raise_assert(false, "\"title\" required", CustomError::ValidationError)
                .unwrap_err();
        assert!(matches!(err, CustomError::ValidationError(msg) if msg == "\"title\" required"));
    }
}
