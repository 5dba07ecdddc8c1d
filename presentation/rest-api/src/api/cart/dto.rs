use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

use crate::api::money::decimal_to_f64;
use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: i64,
    /// Units to add, at least 1. Merges with an existing line for the product.
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    /// New quantity. Zero or less removes the item.
    pub quantity: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    /// Product as it was when added to the cart
    pub product: ProductResponse,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            product: item.product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: String,
    pub items: Vec<CartItemResponse>,
    pub total: f64,
    pub item_count: i64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            total: decimal_to_f64(&cart.total),
            item_count: cart.item_count,
            items: cart.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
