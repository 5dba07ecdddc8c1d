use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub const RELATED_PRODUCTS_LIMIT: u32 = 4;

pub struct GetRelatedProductsParams {
    pub id: i64,
}

#[async_trait]
pub trait GetRelatedProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetRelatedProductsParams) -> Result<Vec<Product>, ProductError>;
}
