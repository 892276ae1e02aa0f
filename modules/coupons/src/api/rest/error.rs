//! HTTP error mapping to the response envelope

use super::dto::ApiResponse;
use crate::contract::CouponsError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Failed request, rendered as an envelope with `isSuccess: false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()>::failure(self.status.as_u16(), self.message);
        (self.status, Json(body)).into_response()
    }
}

/// Map domain errors to HTTP errors.
///
/// Validation and duplicate-name failures share 400; only the message tells
/// them apart.
pub fn map_domain_error(error: CouponsError) -> ApiError {
    let status = match &error {
        CouponsError::Validation { .. } | CouponsError::Conflict { .. } => StatusCode::BAD_REQUEST,
        CouponsError::NotFound { .. } => StatusCode::NOT_FOUND,
        CouponsError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    };
    ApiError::new(status, error.to_string())
}

impl From<CouponsError> for ApiError {
    fn from(error: CouponsError) -> Self {
        map_domain_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                CouponsError::Validation {
                    message: "'Name' must not be empty.".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "'Name' must not be empty.",
            ),
            (
                CouponsError::Conflict {
                    name: "SUMMER".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "The coupon with the name 'SUMMER' already exists",
            ),
            (
                CouponsError::NotFound { id: 12 },
                StatusCode::NOT_FOUND,
                "Coupon with identifier '12' not found.",
            ),
            (
                CouponsError::Internal,
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred",
            ),
        ];

        for (error, status, message) in cases {
            assert_eq!(map_domain_error(error), ApiError::new(status, message));
        }
    }
}
