use bigdecimal::BigDecimal;

use super::model::Product;

/// Optional search criteria as received from a caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilters {
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
}

/// A single predicate over products.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductCriterion {
    CategoryEquals(i64),
    /// Case-insensitive substring match on the name. Holds the lowercased needle.
    NameContains(String),
    PriceAtLeast(BigDecimal),
    PriceAtMost(BigDecimal),
}

impl ProductCriterion {
    pub fn is_satisfied_by(&self, product: &Product) -> bool {
        match self {
            ProductCriterion::CategoryEquals(id) => product.category.id == *id,
            ProductCriterion::NameContains(needle) => {
                product.name.to_lowercase().contains(needle.as_str())
            }
            ProductCriterion::PriceAtLeast(min) => product.price >= *min,
            ProductCriterion::PriceAtMost(max) => product.price <= *max,
        }
    }
}

/// Conjunction of criteria. An empty specification matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSpecification {
    criteria: Vec<ProductCriterion>,
}

impl ProductSpecification {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn and(mut self, criterion: ProductCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Adds `criterion` only when the filter value is present.
    pub fn and_maybe<T>(
        self,
        value: Option<T>,
        criterion: impl FnOnce(T) -> ProductCriterion,
    ) -> Self {
        match value {
            Some(v) => self.and(criterion(v)),
            None => self,
        }
    }

    pub fn criteria(&self) -> &[ProductCriterion] {
        &self.criteria
    }

    pub fn is_satisfied_by(&self, product: &Product) -> bool {
        self.criteria.iter().all(|c| c.is_satisfied_by(product))
    }
}

impl From<ProductFilters> for ProductSpecification {
    fn from(filters: ProductFilters) -> Self {
        let search = filters
            .search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        ProductSpecification::all()
            .and_maybe(filters.category_id, ProductCriterion::CategoryEquals)
            .and_maybe(search, ProductCriterion::NameContains)
            .and_maybe(filters.min_price, ProductCriterion::PriceAtLeast)
            .and_maybe(filters.max_price, ProductCriterion::PriceAtMost)
    }
}
