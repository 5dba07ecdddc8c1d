use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_item::{
    UpdateCartItemParams, UpdateCartItemUseCase,
};
use business::domain::shared::value_objects::CartKey;

use crate::api::cart::dto::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_item_use_case: Arc<dyn UpdateCartItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_item_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

fn cart_failure(err: business::domain::cart::errors::CartError) -> CartOperationResponse {
    let (status, json) = err.into_error_response();
    match status.as_u16() {
        400 => CartOperationResponse::BadRequest(json),
        404 => CartOperationResponse::NotFound(json),
        _ => CartOperationResponse::InternalError(json),
    }
}

/// Shopping cart API
///
/// Carts are keyed by a client-chosen id and created on first use. Every
/// operation answers with the whole cart.
#[OpenApi]
impl CartApi {
    /// Get a cart
    #[oai(path = "/cart/:cart_id", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, cart_id: Path<String>) -> CartOperationResponse {
        match self
            .get_use_case
            .execute(GetCartParams {
                cart_key: CartKey::from(cart_id.0),
            })
            .await
        {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => cart_failure(err),
        }
    }

    /// Add a product to a cart
    #[oai(path = "/cart/:cart_id/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_cart_item(
        &self,
        cart_id: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> CartOperationResponse {
        let params = AddCartItemParams {
            cart_key: CartKey::from(cart_id.0),
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => cart_failure(err),
        }
    }

    /// Change an item's quantity
    ///
    /// A quantity of zero or less removes the item. Unknown items are ignored.
    #[oai(
        path = "/cart/:cart_id/items/:item_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_cart_item(
        &self,
        cart_id: Path<String>,
        item_id: Path<i64>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartOperationResponse {
        let params = UpdateCartItemParams {
            cart_key: CartKey::from(cart_id.0),
            item_id: item_id.0,
            quantity: body.0.quantity,
        };

        match self.update_item_use_case.execute(params).await {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => cart_failure(err),
        }
    }

    /// Remove an item
    ///
    /// Unknown items are ignored.
    #[oai(
        path = "/cart/:cart_id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_cart_item(
        &self,
        cart_id: Path<String>,
        item_id: Path<i64>,
    ) -> CartOperationResponse {
        let params = RemoveCartItemParams {
            cart_key: CartKey::from(cart_id.0),
            item_id: item_id.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => cart_failure(err),
        }
    }

    /// Empty a cart
    #[oai(path = "/cart/:cart_id", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, cart_id: Path<String>) -> CartOperationResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams {
                cart_key: CartKey::from(cart_id.0),
            })
            .await
        {
            Ok(cart) => CartOperationResponse::Ok(Json(cart.into())),
            Err(err) => cart_failure(err),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartOperationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
