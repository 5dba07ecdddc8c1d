use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.details.name));

        let category_id = params.category_id.ok_or(ProductError::CategoryRequired)?;
        params.details.validate()?;

        let category = self
            .category_repository
            .get_by_id(category_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        let new_product = NewProduct::new(params.details, category)?;
        // The category can vanish between the lookup and the insert.
        let product = self
            .repository
            .create(&new_product)
            .await
            .map_err(|e| match e {
                RepositoryError::Referenced => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
