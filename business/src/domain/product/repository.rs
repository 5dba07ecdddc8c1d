use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::{Page, PageRequest};

use super::model::{NewProduct, Product};
use super::sort::ProductSort;
use super::specification::ProductSpecification;

#[async_trait]
pub trait ProductRepository: Send + Sync {
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
    /// Products of `category_id` other than `exclude_id`, ordered by id.
    async fn find_related(
        &self,
        category_id: i64,
        exclude_id: i64,
        limit: u32,
    ) -> Result<Vec<Product>, RepositoryError>;
}
