//! Mocks and fixtures shared by the use case tests.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::repository::CartStore;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProduct, Product, ProductDetails};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::sort::ProductSort;
use crate::domain::product::specification::ProductSpecification;
use crate::domain::shared::pagination::{Page, PageRequest};
use crate::domain::shared::value_objects::CartKey;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn find_page(
            &self,
            specification: &ProductSpecification,
            sort: ProductSort,
            request: PageRequest,
        ) -> Result<Page<Product>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
        async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        async fn count_by_category(&self, category_id: i64) -> Result<u64, RepositoryError>;
        async fn find_related(
            &self,
            category_id: i64,
            exclude_id: i64,
            limit: u32,
        ) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError>;
        async fn create(&self, category: &NewCategory) -> Result<Category, RepositoryError>;
        async fn save(&self, category: &Category) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Carts {}

    #[async_trait]
    impl CartStore for Carts {
        async fn get_or_create(&self, key: &CartKey) -> Result<Cart, RepositoryError>;
        async fn apply(&self, key: &CartKey, change: CartChange) -> Result<Cart, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn category(id: i64) -> Category {
    Category {
        id,
        name: format!("Category {}", id),
        description: None,
        image: None,
    }
}

pub fn details(name: &str, price: &str) -> ProductDetails {
    ProductDetails {
        name: name.to_string(),
        description: Some("A fine product".to_string()),
        price: BigDecimal::from_str(price).unwrap(),
        image: Some("product.png".to_string()),
        rating: 4.0,
        reviews: 12,
        brand: Some("Acme".to_string()),
        stock: 30,
    }
}

pub fn product(id: i64, price: &str, category_id: i64) -> Product {
    Product::from_parts(
        id,
        details(&format!("Product {}", id), price),
        category(category_id),
    )
}
