use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::category::use_cases::create::{
    CreateCategoryParams, CreateCategoryUseCase,
};
use business::domain::category::use_cases::delete::{
    DeleteCategoryParams, DeleteCategoryUseCase,
};
use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use business::domain::category::use_cases::get_by_id::{
    GetCategoryByIdParams, GetCategoryByIdUseCase,
};
use business::domain::category::use_cases::update::{
    UpdateCategoryParams, UpdateCategoryUseCase,
};

use crate::api::category::dto::{CategoryRequest, CategoryResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    create_use_case: Arc<dyn CreateCategoryUseCase>,
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
    get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
    update_use_case: Arc<dyn UpdateCategoryUseCase>,
    delete_use_case: Arc<dyn DeleteCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCategoryUseCase>,
        get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
        get_by_id_use_case: Arc<dyn GetCategoryByIdUseCase>,
        update_use_case: Arc<dyn UpdateCategoryUseCase>,
        delete_use_case: Arc<dyn DeleteCategoryUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Category management API
#[OpenApi]
impl CategoryApi {
    /// Create a category
    #[oai(path = "/categories", method = "post", tag = "ApiTags::Categories")]
    async fn create_category(&self, body: Json<CategoryRequest>) -> CreateCategoryResponse {
        let params = CreateCategoryParams {
            name: body.0.name,
            description: body.0.description,
            image: body.0.image,
        };

        match self.create_use_case.execute(params).await {
            Ok(category) => CreateCategoryResponse::Created(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateCategoryResponse::BadRequest(json),
                    409 => CreateCategoryResponse::Conflict(json),
                    _ => CreateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// List all categories
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> GetAllCategoriesResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => {
                let responses: Vec<CategoryResponse> =
                    categories.into_iter().map(|c| c.into()).collect();
                GetAllCategoriesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Get a category by ID
    #[oai(path = "/categories/:id", method = "get", tag = "ApiTags::Categories")]
    async fn get_category_by_id(&self, id: Path<i64>) -> GetCategoryByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetCategoryByIdParams { id: id.0 })
            .await
        {
            Ok(category) => GetCategoryByIdResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCategoryByIdResponse::NotFound(json),
                    _ => GetCategoryByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a category
    ///
    /// Overwrites name, description and image.
    #[oai(path = "/categories/:id", method = "put", tag = "ApiTags::Categories")]
    async fn update_category(
        &self,
        id: Path<i64>,
        body: Json<CategoryRequest>,
    ) -> UpdateCategoryResponse {
        let params = UpdateCategoryParams {
            id: id.0,
            name: body.0.name,
            description: body.0.description,
            image: body.0.image,
        };

        match self.update_use_case.execute(params).await {
            Ok(category) => UpdateCategoryResponse::Ok(Json(category.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCategoryResponse::BadRequest(json),
                    404 => UpdateCategoryResponse::NotFound(json),
                    409 => UpdateCategoryResponse::Conflict(json),
                    _ => UpdateCategoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a category
    ///
    /// Refused with 409 while any product still belongs to it.
    #[oai(path = "/categories/:id", method = "delete", tag = "ApiTags::Categories")]
    async fn delete_category(&self, id: Path<i64>) -> DeleteCategoryResponse {
        match self
            .delete_use_case
            .execute(DeleteCategoryParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteCategoryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteCategoryResponse::NotFound(json),
                    409 => DeleteCategoryResponse::Conflict(json),
                    _ => DeleteCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCategoryResponse {
    #[oai(status = 201)]
    Created(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoryByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<CategoryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCategoryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use serde_json::json;

    use crate::api::test_support::{client, create_category, create_product};

    #[tokio::test]
    async fn should_create_and_list_categories() {
        let cli = client();
        create_category(&cli, "Lighting").await;
        create_category(&cli, "Seating").await;

        let resp = cli.get("/api/categories").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let categories = json.value().array();
        categories.assert_len(2);
        categories.get(1).object().get("name").assert_string("Seating");
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let cli = client();

        let resp = cli
            .post("/api/categories")
            .body_json(&json!({ "name": "  " }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_report_conflict_on_duplicate_name() {
        let cli = client();
        create_category(&cli, "Lighting").await;

        let resp = cli
            .post("/api/categories")
            .body_json(&json!({ "name": "Lighting" }))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_overwrite_category_on_update() {
        let cli = client();
        let id = create_category(&cli, "Lighting").await;

        let resp = cli
            .put(format!("/api/categories/{}", id))
            .body_json(&json!({ "name": "Lamps", "description": "Bright things" }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let category = json.value().object();
        category.get("name").assert_string("Lamps");
        category.get("description").assert_string("Bright things");
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_category() {
        let cli = client();

        cli.get("/api/categories/7")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
        cli.delete("/api/categories/7")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_refuse_to_delete_category_in_use_and_keep_it() {
        let cli = client();
        let id = create_category(&cli, "Lighting").await;
        create_product(&cli, "Desk lamp", 30.0, id).await;

        let resp = cli.delete(format!("/api/categories/{}", id)).send().await;

        resp.assert_status(StatusCode::CONFLICT);
        cli.get(format!("/api/categories/{}", id))
            .send()
            .await
            .assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_delete_unused_category() {
        let cli = client();
        let id = create_category(&cli, "Lighting").await;

        cli.delete(format!("/api/categories/{}", id))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        cli.get(format!("/api/categories/{}", id))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
