use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDetails};

pub struct UpdateProductParams {
    pub id: i64,
    pub details: ProductDetails,
    /// When absent the product keeps its current category.
    pub category_id: Option<i64>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
