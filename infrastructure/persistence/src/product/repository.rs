use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::sort::{ProductSort, ProductSortField, SortDirection};
use business::domain::product::specification::{ProductCriterion, ProductSpecification};
use business::domain::shared::pagination::{Page, PageRequest};

use super::entity::{PRODUCT_COLUMNS, PRODUCT_FROM, ProductEntity};
use crate::errors::map_sqlx_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn push_criteria(builder: &mut QueryBuilder<'_, Postgres>, specification: &ProductSpecification) {
    let mut separator = " WHERE ";
    for criterion in specification.criteria() {
        builder.push(separator);
        separator = " AND ";
        match criterion {
            ProductCriterion::CategoryEquals(id) => {
                builder.push("p.category_id = ").push_bind(*id);
            }
            ProductCriterion::NameContains(needle) => {
                // POSITION avoids treating % and _ in the needle as wildcards.
                builder
                    .push("POSITION(")
                    .push_bind(needle.clone())
                    .push(" IN LOWER(p.name)) > 0");
            }
            ProductCriterion::PriceAtLeast(min) => {
                builder.push("p.price >= ").push_bind(min.clone());
            }
            ProductCriterion::PriceAtMost(max) => {
                builder.push("p.price <= ").push_bind(max.clone());
            }
        }
    }
}

fn order_by_clause(sort: ProductSort) -> String {
    let column = match sort.field {
        ProductSortField::Id => "p.id",
        ProductSortField::Name => "p.name COLLATE \"C\"",
        ProductSortField::Price => "p.price",
        ProductSortField::Rating => "p.rating",
        ProductSortField::Reviews => "p.reviews",
        ProductSortField::Stock => "p.stock",
    };
    let direction = match sort.direction {
        SortDirection::Asc => "ASC",
        SortDirection::Desc => "DESC",
    };

    match sort.field {
        ProductSortField::Id => format!(" ORDER BY p.id {}", direction),
        _ => format!(" ORDER BY {} {}, p.id ASC", column, direction),
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_page(
        &self,
        specification: &ProductSpecification,
        sort: ProductSort,
        request: PageRequest,
    ) -> Result<Page<Product>, RepositoryError> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        count_query.push(PRODUCT_FROM);
        push_criteria(&mut count_query, specification);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let mut page_query = QueryBuilder::<Postgres>::new("SELECT ");
        page_query.push(PRODUCT_COLUMNS).push(PRODUCT_FROM);
        push_criteria(&mut page_query, specification);
        page_query.push(order_by_clause(sort));
        page_query
            .push(" LIMIT ")
            .push_bind(i64::from(request.size))
            .push(" OFFSET ")
            .push_bind(i64::try_from(request.offset()).unwrap_or(i64::MAX));

        let entities = page_query
            .build_query_as::<ProductEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Page::new(
            entities.into_iter().map(|e| e.into_domain()).collect(),
            request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let query = format!("SELECT {}{} WHERE p.id = $1", PRODUCT_COLUMNS, PRODUCT_FROM);
        let entity = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let details = &product.details;
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO products (name, description, price, image, rating, reviews, brand, stock, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id"#,
        )
        .bind(&details.name)
        .bind(&details.description)
        .bind(&details.price)
        .bind(&details.image)
        .bind(details.rating)
        .bind(details.reviews)
        .bind(&details.brand)
        .bind(details.stock)
        .bind(product.category.id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(product.clone().into_product(id))
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products SET
                name = $2,
                description = $3,
                price = $4,
                image = $5,
                rating = $6,
                reviews = $7,
                brand = $8,
                stock = $9,
                category_id = $10
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(&product.image)
        .bind(product.rating)
        .bind(product.reviews)
        .bind(&product.brand)
        .bind(product.stock)
        .bind(product.category.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn count_by_category(&self, category_id: i64) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn find_related(
        &self,
        category_id: i64,
        exclude_id: i64,
        limit: u32,
    ) -> Result<Vec<Product>, RepositoryError> {
        let query = format!(
            "SELECT {}{} WHERE p.category_id = $1 AND p.id <> $2 ORDER BY p.id LIMIT $3",
            PRODUCT_COLUMNS, PRODUCT_FROM
        );
        let entities = sqlx::query_as::<_, ProductEntity>(&query)
            .bind(category_id)
            .bind(exclude_id)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
