use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Clearing cart {}", params.cart_key));
        Ok(self
            .cart_store
            .apply(&params.cart_key, CartChange::Clear)
            .await?)
    }
}
