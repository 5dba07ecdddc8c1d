use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use business::domain::category::model::{Category, NewCategory};
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::sort::ProductSort;
use business::domain::product::specification::ProductSpecification;
use business::domain::shared::pagination::{Page, PageRequest};

#[derive(Default)]
struct CatalogState {
    categories: BTreeMap<i64, Category>,
    products: BTreeMap<i64, Product>,
    last_category_id: i64,
    last_product_id: i64,
}

impl CatalogState {
    /// Products always expose the current state of their category, as a join would.
    fn hydrate(&self, product: &Product) -> Product {
        let mut product = product.clone();
        if let Some(category) = self.categories.get(&product.category.id) {
            product.category = category.clone();
        }
        product
    }

    fn name_taken(&self, name: &str, except_id: Option<i64>) -> bool {
        self.categories
            .values()
            .any(|c| c.name == name && Some(c.id) != except_id)
    }
}

/// Catalog kept entirely in process memory. Used when no database is
/// configured and by the API tests. Both repositories share one state.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_repository(&self) -> InMemoryProductRepository {
        InMemoryProductRepository {
            catalog: self.clone(),
        }
    }

    pub fn category_repository(&self) -> InMemoryCategoryRepository {
        InMemoryCategoryRepository {
            catalog: self.clone(),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, CatalogState>, RepositoryError> {
        self.state.read().map_err(|_| RepositoryError::Persistence)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, CatalogState>, RepositoryError> {
        self.state.write().map_err(|_| RepositoryError::Persistence)
    }
}

pub struct InMemoryProductRepository {
    catalog: InMemoryCatalog,
}

pub struct InMemoryCategoryRepository {
    catalog: InMemoryCatalog,
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_page(
        &self,
        specification: &ProductSpecification,
        sort: ProductSort,
        request: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let state = self.catalog.read()?;
        let mut matches: Vec<Product> = state
            .products
            .values()
            .map(|p| state.hydrate(p))
            .filter(|p| specification.is_satisfied_by(p))
            .collect();
        matches.sort_by(|a, b| sort.compare(a, b));

        let total = matches.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items = matches
            .into_iter()
            .skip(offset)
            .take(request.size as usize)
            .collect();

        Ok(Page::new(items, request, total))
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let state = self.catalog.read()?;
        state
            .products
            .get(&id)
            .map(|p| state.hydrate(p))
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.catalog.write()?;
        if !state.categories.contains_key(&product.category.id) {
            return Err(RepositoryError::NotFound);
        }

        state.last_product_id += 1;
        let stored = product.clone().into_product(state.last_product_id);
        state.products.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.catalog.write()?;
        if !state.categories.contains_key(&product.category.id) {
            return Err(RepositoryError::NotFound);
        }

        match state.products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.catalog.write()?;
        state
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    async fn count_by_category(&self, category_id: i64) -> Result<u64, RepositoryError> {
        let state = self.catalog.read()?;
        Ok(state
            .products
            .values()
            .filter(|p| p.category.id == category_id)
            .count() as u64)
    }

    async fn find_related(
        &self,
        category_id: i64,
        exclude_id: i64,
        limit: u32,
    ) -> Result<Vec<Product>, RepositoryError> {
        let state = self.catalog.read()?;
        // BTreeMap iteration is already ordered by id.
        Ok(state
            .products
            .values()
            .filter(|p| p.category.id == category_id && p.id != exclude_id)
            .take(limit as usize)
            .map(|p| state.hydrate(p))
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let state = self.catalog.read()?;
        Ok(state.categories.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, RepositoryError> {
        let state = self.catalog.read()?;
        state
            .categories
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, RepositoryError> {
        let mut state = self.catalog.write()?;
        if state.name_taken(&category.name, None) {
            return Err(RepositoryError::Duplicated);
        }

        state.last_category_id += 1;
        let stored = category.clone().into_category(state.last_category_id);
        state.categories.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, category: &Category) -> Result<(), RepositoryError> {
        let mut state = self.catalog.write()?;
        if state.name_taken(&category.name, Some(category.id)) {
            return Err(RepositoryError::Duplicated);
        }

        match state.categories.get_mut(&category.id) {
            Some(stored) => {
                *stored = category.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut state = self.catalog.write()?;
        if state.products.values().any(|p| p.category.id == id) {
            return Err(RepositoryError::Referenced);
        }

        state
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use business::domain::product::model::ProductDetails;
    use business::domain::product::specification::ProductFilters;

    use super::*;

    fn details(name: &str, price: &str) -> ProductDetails {
        ProductDetails {
            name: name.to_string(),
            description: None,
            price: BigDecimal::from_str(price).unwrap(),
            image: None,
            rating: 0.0,
            reviews: 0,
            brand: None,
            stock: 1,
        }
    }

    async fn seeded() -> (InMemoryProductRepository, InMemoryCategoryRepository) {
        let catalog = InMemoryCatalog::new();
        let products = catalog.product_repository();
        let categories = catalog.category_repository();

        let lighting = categories
            .create(&NewCategory::new("Lighting".to_string(), None, None).unwrap())
            .await
            .unwrap();
        let seating = categories
            .create(&NewCategory::new("Seating".to_string(), None, None).unwrap())
            .await
            .unwrap();

        for (name, price, category) in [
            ("Desk lamp", "30.00", &lighting),
            ("Floor lamp", "80.00", &lighting),
            ("Chair", "45.50", &seating),
            ("Lamp shade", "12.00", &lighting),
        ] {
            let new_product = NewProduct::new(details(name, price), category.clone()).unwrap();
            products.create(&new_product).await.unwrap();
        }

        (products, categories)
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let (products, _) = seeded().await;

        let page = products
            .find_page(
                &ProductSpecification::all(),
                ProductSort::default(),
                PageRequest::default(),
            )
            .await
            .unwrap();

        let ids: Vec<i64> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn should_filter_sort_and_paginate() {
        let (products, _) = seeded().await;
        let specification = ProductSpecification::from(ProductFilters {
            search: Some("LAMP".to_string()),
            max_price: Some(BigDecimal::from(50)),
            ..Default::default()
        });

        let page = products
            .find_page(
                &specification,
                "price,desc".parse().unwrap(),
                PageRequest::new(Some(0), Some(1)),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "Desk lamp");
    }

    #[tokio::test]
    async fn should_return_empty_page_past_the_end() {
        let (products, _) = seeded().await;

        let page = products
            .find_page(
                &ProductSpecification::all(),
                ProductSort::default(),
                PageRequest::new(Some(9), Some(10)),
            )
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
    }

    #[tokio::test]
    async fn should_find_related_in_same_category_excluding_self() {
        let (products, _) = seeded().await;

        let related = products.find_related(1, 1, 4).await.unwrap();

        let ids: Vec<i64> = related.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[tokio::test]
    async fn should_count_products_per_category() {
        let (products, _) = seeded().await;

        assert_eq!(products.count_by_category(1).await.unwrap(), 3);
        assert_eq!(products.count_by_category(2).await.unwrap(), 1);
        assert_eq!(products.count_by_category(3).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_refuse_to_delete_referenced_category() {
        let (_, categories) = seeded().await;

        let result = categories.delete(2).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Referenced));
        assert!(categories.get_by_id(2).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_duplicate_category_names() {
        let (_, categories) = seeded().await;

        let result = categories
            .create(&NewCategory::new("Seating".to_string(), None, None).unwrap())
            .await;

        assert!(matches!(result.unwrap_err(), RepositoryError::Duplicated));
    }

    #[tokio::test]
    async fn should_reflect_category_renames_in_products() {
        let (products, categories) = seeded().await;
        let mut seating = categories.get_by_id(2).await.unwrap();
        seating.name = "Chairs".to_string();
        categories.save(&seating).await.unwrap();

        let chair = products.get_by_id(3).await.unwrap();

        assert_eq!(chair.category.name, "Chairs");
    }

    #[tokio::test]
    async fn should_report_not_found_when_deleting_missing_product() {
        let (products, _) = seeded().await;

        let result = products.delete(42).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }
}
