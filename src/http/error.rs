//! HTTP error taxonomy and the JSON error payload.

use crate::product_actor::ProductError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Error payload returned with every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Product not found")]
    pub error: String,
}

/// Request failures, each mapped to one status code.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// Create payload missing, malformed, or carrying an empty/non-string `name`.
    #[error("Missing product name")]
    MissingName,

    /// No product with the requested ID (including IDs that do not parse).
    #[error("Product not found")]
    NotFound,

    /// The product actor is gone; the detail is logged, not returned.
    #[error("Product registry unavailable")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingName => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::MissingName => ApiError::MissingName,
            ProductError::NotFound(_) => ApiError::NotFound,
            ProductError::ActorCommunicationError(msg) => ApiError::Unavailable(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Unavailable(detail) = &self {
            error!(%detail, "Product registry unavailable");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_errors_map_to_status_codes() {
        let cases = [
            (ProductError::MissingName, StatusCode::BAD_REQUEST),
            (ProductError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (
                ProductError::ActorCommunicationError("Actor closed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (product_error, status) in cases {
            assert_eq!(ApiError::from(product_error).status(), status);
        }
    }

    #[test]
    fn test_unavailable_hides_detail() {
        let e = ApiError::Unavailable("Actor dropped response channel".into());
        assert_eq!(e.to_string(), "Product registry unavailable");
    }
}
