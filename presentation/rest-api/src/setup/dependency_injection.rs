use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::store::InMemoryCartStore;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::memory::catalog::InMemoryCatalog;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_item::UpdateCartItemUseCaseImpl;
use business::application::category::create::CreateCategoryUseCaseImpl;
use business::application::category::delete::DeleteCategoryUseCaseImpl;
use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::category::get_by_id::GetCategoryByIdUseCaseImpl;
use business::application::category::update::UpdateCategoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_related::GetRelatedProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::cart::repository::CartStore;
use business::domain::category::repository::CategoryRepository;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::cart::routes::CartApi;
use crate::api::category::routes::CategoryApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;

/// Backing store for the catalog. Carts always live in memory.
pub enum Storage {
    Postgres(sqlx::PgPool),
    Memory,
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
    pub cart_api: CartApi,
}

impl DependencyContainer {
    pub fn new(storage: Storage) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let (product_repository, category_repository): (
            Arc<dyn ProductRepository>,
            Arc<dyn CategoryRepository>,
        ) = match storage {
            Storage::Postgres(pool) => (
                Arc::new(ProductRepositoryPostgres::new(pool.clone())),
                Arc::new(CategoryRepositoryPostgres::new(pool)),
            ),
            Storage::Memory => {
                let catalog = InMemoryCatalog::new();
                (
                    Arc::new(catalog.product_repository()),
                    Arc::new(catalog.category_repository()),
                )
            }
        };
        let cart_store: Arc<dyn CartStore> = Arc::new(InMemoryCartStore::new());

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                category_repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRelatedProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Category use cases
        let category_api = CategoryApi::new(
            Arc::new(CreateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllCategoriesUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetCategoryByIdUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateCategoryUseCaseImpl {
                repository: category_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteCategoryUseCaseImpl {
                repository: category_repository,
                product_repository: product_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Cart use cases
        let cart_api = CartApi::new(
            Arc::new(GetCartUseCaseImpl {
                cart_store: cart_store.clone(),
                logger: logger.clone(),
            }),
            Arc::new(AddCartItemUseCaseImpl {
                cart_store: cart_store.clone(),
                product_repository,
                logger: logger.clone(),
            }),
            Arc::new(UpdateCartItemUseCaseImpl {
                cart_store: cart_store.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                cart_store: cart_store.clone(),
                logger: logger.clone(),
            }),
            Arc::new(ClearCartUseCaseImpl { cart_store, logger }),
        );

        Self {
            health_api,
            product_api,
            category_api,
            cart_api,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Storage::Memory)
    }
}
