use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::sort::ProductSort;
use business::domain::product::specification::ProductFilters;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_related::{
    GetRelatedProductsParams, GetRelatedProductsUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::pagination::PageRequest;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    ProductPageResponse, ProductRequest, ProductResponse, parse_price_filter,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    get_related_use_case: Arc<dyn GetRelatedProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        get_related_use_case: Arc<dyn GetRelatedProductsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            get_related_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// The category is mandatory and must exist.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let (details, category_id) = match body.0.into_parts() {
            Ok(parts) => parts,
            Err(json) => return CreateProductResponse::BadRequest(json),
        };

        match self
            .create_use_case
            .execute(CreateProductParams {
                details,
                category_id,
            })
            .await
        {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    404 => CreateProductResponse::NotFound(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Search products
    ///
    /// Every filter is optional and they combine with AND. `search` is a
    /// case-insensitive substring of the name, price bounds are inclusive.
    /// `sort` takes `field[,asc|desc]` with field one of id, name, price,
    /// rating, reviews, stock.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        category: Query<Option<i64>>,
        search: Query<Option<String>>,
        #[oai(name = "minPrice")] min_price: Query<Option<f64>>,
        #[oai(name = "maxPrice")] max_price: Query<Option<f64>>,
        page: Query<Option<u32>>,
        size: Query<Option<u32>>,
        sort: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let sort = match sort.0.as_deref().map(str::parse::<ProductSort>).transpose() {
            Ok(sort) => sort.unwrap_or_default(),
            Err(err) => {
                let (_, json) = err.into_error_response();
                return GetAllProductsResponse::BadRequest(json);
            }
        };
        let (min_price, max_price) = match (
            parse_price_filter(min_price.0),
            parse_price_filter(max_price.0),
        ) {
            (Ok(min), Ok(max)) => (min, max),
            (Err(json), _) | (_, Err(json)) => return GetAllProductsResponse::BadRequest(json),
        };

        let params = GetAllProductsParams {
            filters: ProductFilters {
                category_id: category.0,
                search: search.0,
                min_price,
                max_price,
            },
            sort,
            page: PageRequest::new(page.0, size.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(page) => GetAllProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllProductsResponse::BadRequest(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Overwrites every field. The category only changes when `categoryId`
    /// is present.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<i64>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let (details, category_id) = match body.0.into_parts() {
            Ok(parts) => parts,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id: id.0,
            details,
            category_id,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Carts keep their snapshot of the product.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<i64>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Related products
    ///
    /// Up to four other products of the same category, by ascending id.
    #[oai(
        path = "/products/:id/related",
        method = "get",
        tag = "ApiTags::Products"
    )]
    async fn get_related_products(&self, id: Path<i64>) -> GetRelatedProductsResponse {
        match self
            .get_related_use_case
            .execute(GetRelatedProductsParams { id: id.0 })
            .await
        {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetRelatedProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRelatedProductsResponse::NotFound(json),
                    _ => GetRelatedProductsResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRelatedProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
