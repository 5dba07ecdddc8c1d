use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::specification::ProductSpecification;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use crate::domain::shared::pagination::Page;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Page<Product>, ProductError> {
        let specification = ProductSpecification::from(params.filters);
        self.logger.info(&format!(
            "Listing products (criteria: {}, page: {}, size: {})",
            specification.criteria().len(),
            params.page.page,
            params.page.size
        ));

        let page = self
            .repository
            .find_page(&specification, params.sort, params.page)
            .await?;

        self.logger.info(&format!(
            "Retrieved {} of {} products",
            page.items.len(),
            page.total
        ));
        Ok(page)
    }
}
