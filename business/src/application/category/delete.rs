use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct DeleteCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Deleting category: {}", params.id));

        // Existence, then references, then delete.
        let category = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        let product_count = self.product_repository.count_by_category(category.id).await?;
        if product_count > 0 {
            self.logger.warn(&format!(
                "Category {} still has {} products, refusing to delete",
                category.id, product_count
            ));
            return Err(CategoryError::HasProducts { product_count });
        }

        self.repository
            .delete(category.id)
            .await
            .map_err(|e| match e {
                // A product was attached between the count and the delete.
                RepositoryError::Referenced => CategoryError::HasProducts { product_count: 1 },
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category deleted: {}", category.id));
        Ok(())
    }
}
