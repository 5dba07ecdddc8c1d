use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub category_repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        params.details.validate()?;

        // Verify product exists
        let mut product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if let Some(category_id) = params.category_id {
            product.category = self
                .category_repository
                .get_by_id(category_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => ProductError::CategoryNotFound,
                    other => ProductError::Repository(other),
                })?;
        }

        product.overwrite(params.details);
        self.repository
            .save(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                RepositoryError::Referenced => ProductError::CategoryNotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product updated: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        MockCategoryRepo, MockProductRepo, category, details, mock_logger, product,
    };
    use bigdecimal::BigDecimal;

    #[tokio::test]
    async fn should_overwrite_fields_and_keep_category_when_omitted() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|id| Ok(product(id, "10.00", 2)));
        product_repo
            .expect_save()
            .withf(|p| p.name == "Renamed" && p.category.id == 2)
            .times(1)
            .returning(|_| Ok(()));
        let mut category_repo = MockCategoryRepo::new();
        category_repo.expect_get_by_id().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(product_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let mut changes = details("Renamed", "12.50");
        changes.description = None;
        let result = use_case
            .execute(UpdateProductParams {
                id: 7,
                details: changes,
                category_id: None,
            })
            .await;

        let updated = result.unwrap();
        assert_eq!(updated.id, 7);
        assert_eq!(updated.price, "12.50".parse::<BigDecimal>().unwrap());
        assert!(updated.description.is_none());
        assert_eq!(updated.category.id, 2);
    }

    #[tokio::test]
    async fn should_move_product_to_new_category() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|id| Ok(product(id, "10.00", 2)));
        product_repo.expect_save().returning(|_| Ok(()));
        let mut category_repo = MockCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|id| Ok(category(id)));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(product_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 7,
                details: details("Lamp", "10.00"),
                category_id: Some(5),
            })
            .await;

        assert_eq!(result.unwrap().category.id, 5);
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        product_repo.expect_save().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(product_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 7,
                details: details("Lamp", "10.00"),
                category_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_new_category_missing() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|id| Ok(product(id, "10.00", 2)));
        product_repo.expect_save().never();
        let mut category_repo = MockCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(product_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 7,
                details: details("Lamp", "10.00"),
                category_id: Some(404),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_return_category_not_found_when_category_removed_before_save() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|id| Ok(product(id, "10.00", 2)));
        product_repo
            .expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::Referenced));
        let mut category_repo = MockCategoryRepo::new();
        category_repo
            .expect_get_by_id()
            .returning(|id| Ok(category(id)));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(product_repo),
            category_repository: Arc::new(category_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 7,
                details: details("Lamp", "10.00"),
                category_id: Some(5),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::CategoryNotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_removed_before_save() {
        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(|id| Ok(product(id, "10.00", 2)));
        product_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(product_repo),
            category_repository: Arc::new(MockCategoryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 7,
                details: details("Lamp", "10.00"),
                category_id: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
