use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CategoryError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "category.name_empty".to_string(),
            ),
            CategoryError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "category.not_found".to_string(),
            ),
            CategoryError::NameTaken => (
                StatusCode::CONFLICT,
                "Conflict",
                "category.name_taken".to_string(),
            ),
            CategoryError::HasProducts { product_count } => (
                StatusCode::CONFLICT,
                "Conflict",
                format!("category.has_products: {}", product_count),
            ),
            CategoryError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
