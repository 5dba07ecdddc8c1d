use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCartItemUseCaseImpl {
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting item {} of cart {} to quantity {}",
            params.item_id, params.cart_key, params.quantity
        ));

        let cart = self
            .cart_store
            .apply(
                &params.cart_key,
                CartChange::SetQuantity {
                    item_id: params.item_id,
                    quantity: params.quantity,
                },
            )
            .await?;
        Ok(cart)
    }
}
