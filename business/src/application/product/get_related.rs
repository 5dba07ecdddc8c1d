use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_related::{
    GetRelatedProductsParams, GetRelatedProductsUseCase, RELATED_PRODUCTS_LIMIT,
};

pub struct GetRelatedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRelatedProductsUseCase for GetRelatedProductsUseCaseImpl {
    async fn execute(&self, params: GetRelatedProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Getting products related to: {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let related: Vec<Product> = self
            .repository
            .find_related(product.category.id, product.id, RELATED_PRODUCTS_LIMIT)
            .await?
            .into_iter()
            .filter(|p| p.id != product.id && p.category.id == product.category.id)
            .take(RELATED_PRODUCTS_LIMIT as usize)
            .collect();

        self.logger
            .info(&format!("Found {} related products", related.len()));
        Ok(related)
    }
}
