use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::PriceNegative => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_negative",
            ),
            ProductError::PriceTooLarge => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_too_large",
            ),
            ProductError::CategoryRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_required",
            ),
            ProductError::InvalidSort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_sort",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::CategoryNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "category.not_found")
            }
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
