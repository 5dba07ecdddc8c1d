use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing item {} from cart {}",
            params.item_id, params.cart_key
        ));

        let cart = self
            .cart_store
            .apply(
                &params.cart_key,
                CartChange::RemoveItem {
                    item_id: params.item_id,
                },
            )
            .await?;
        Ok(cart)
    }
}
