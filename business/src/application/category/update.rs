use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::{Category, NewCategory};
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<Category, CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let changes = NewCategory::new(params.name, params.description, params.image)?;

        let mut category = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CategoryError::NotFound,
                other => CategoryError::Repository(other),
            })?;

        category.overwrite(changes);
        self.repository
            .save(&category)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CategoryError::NameTaken,
                other => CategoryError::Repository(other),
            })?;

        self.logger
            .info(&format!("Category updated: {}", category.id));
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCategoryRepo, category, mock_logger};

    fn params(id: i64) -> UpdateCategoryParams {
        UpdateCategoryParams {
            id,
            name: "Garden".to_string(),
            description: Some("Outdoor".to_string()),
            image: Some("garden.jpg".to_string()),
        }
    }

    #[tokio::test]
    async fn should_overwrite_name_description_and_image() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(category(id)));
        mock_repo
            .expect_save()
            .withf(|c| c.name == "Garden" && c.image.as_deref() == Some("garden.jpg"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(4)).await;

        let updated = result.unwrap();
        assert_eq!(updated.id, 4);
        assert_eq!(updated.description.as_deref(), Some("Outdoor"));
    }

    #[tokio::test]
    async fn should_return_not_found_when_category_missing() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(4)).await;

        assert!(matches!(result.unwrap_err(), CategoryError::NotFound));
    }

    #[tokio::test]
    async fn should_report_conflict_when_renamed_to_existing_name() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(category(id)));
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = UpdateCategoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(4)).await;

        assert!(matches!(result.unwrap_err(), CategoryError::NameTaken));
    }
}
