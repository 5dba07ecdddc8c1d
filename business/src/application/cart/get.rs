use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub cart_store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .debug(&format!("Getting cart: {}", params.cart_key));
        Ok(self.cart_store.get_or_create(&params.cart_key).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::CartKey;
    use crate::test_support::{MockCarts, mock_logger};

    #[tokio::test]
    async fn should_return_empty_cart_for_new_key() {
        let mut store = MockCarts::new();
        store
            .expect_get_or_create()
            .withf(|key| key.as_str() == "u1")
            .times(1)
            .returning(|key| Ok(Cart::new(key.clone())));

        let use_case = GetCartUseCaseImpl {
            cart_store: Arc::new(store),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(GetCartParams {
                cart_key: CartKey::new("u1"),
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.id.as_str(), "u1");
    }

    #[tokio::test]
    async fn should_propagate_store_failures() {
        let mut store = MockCarts::new();
        store
            .expect_get_or_create()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = GetCartUseCaseImpl {
            cart_store: Arc::new(store),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetCartParams {
                cart_key: CartKey::new("u1"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
