use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub cart_store: Arc<dyn CartStore>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} x{} to cart {}",
            params.product_id, params.quantity, params.cart_key
        ));

        if params.quantity < 1 {
            return Err(CartError::InvalidQuantity);
        }

        // Resolved before touching the cart so a failed lookup leaves it unchanged.
        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let cart = self
            .cart_store
            .apply(
                &params.cart_key,
                CartChange::AddItem {
                    product,
                    quantity: params.quantity,
                },
            )
            .await?;

        self.logger.debug(&format!(
            "Cart {} now holds {} units, total {}",
            cart.id, cart.item_count, cart.total
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::shared::value_objects::CartKey;
    use crate::test_support::{MockCarts, MockProductRepo, mock_logger, product};

    fn applying_store() -> MockCarts {
        let mut store = MockCarts::new();
        store.expect_apply().returning(|key, change| {
            let mut cart = Cart::new(key.clone());
            cart.apply(change);
            Ok(cart)
        });
        store
    }

    fn params(product_id: i64, quantity: i32) -> AddCartItemParams {
        AddCartItemParams {
            cart_key: CartKey::new("u1"),
            product_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_add_snapshot_of_resolved_product() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .withf(|id| *id == 7)
            .returning(|id| Ok(product(id, "10.00", 1)));

        let use_case = AddCartItemUseCaseImpl {
            cart_store: Arc::new(applying_store()),
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(7, 2)).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, 7);
        assert_eq!(cart.item_count, 2);
        assert_eq!(cart.total, BigDecimal::from_str("20.00").unwrap());
    }

    #[tokio::test]
    async fn should_fail_without_touching_cart_when_product_missing() {
        let mut products = MockProductRepo::new();
        products
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut store = MockCarts::new();
        store.expect_apply().never();

        let use_case = AddCartItemUseCaseImpl {
            cart_store: Arc::new(store),
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(7, 2)).await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity() {
        let mut products = MockProductRepo::new();
        products.expect_get_by_id().never();
        let mut store = MockCarts::new();
        store.expect_apply().never();

        let use_case = AddCartItemUseCaseImpl {
            cart_store: Arc::new(store),
            product_repository: Arc::new(products),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(7, 0)).await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }
}
