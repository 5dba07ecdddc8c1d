use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let new_category = NewCategory::new(params.name, params.description, params.image)?;
        let category = self
            .repository
            .create(&new_category)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::NameTaken,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category created with id: {}", category.id));
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, mock_logger};

    #[tokio::test]
    async fn should_create_category_when_name_valid() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_create()
            .returning(|c| Ok(c.clone().into_category(1)));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Kitchen".to_string(),
                description: Some("Pots and pans".to_string()),
                image: None,
            })
            .await;

        let category = result.unwrap();
        assert_eq!(category.id, 1);
        assert_eq!(category.name, "Kitchen");
    }

    #[tokio::test]
    async fn should_reject_category_when_name_empty() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "".to_string(),
                description: None,
                image: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_conflict_when_name_taken() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateCategoryParams {
                name: "Kitchen".to_string(),
                description: None,
                image: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameTaken));
    }
}
