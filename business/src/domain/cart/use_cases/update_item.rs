use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::CartKey;

pub struct UpdateCartItemParams {
    pub cart_key: CartKey,
    pub item_id: i64,
    pub quantity: i32,
}

#[async_trait]
pub trait UpdateCartItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<Cart, CartError>;
}
