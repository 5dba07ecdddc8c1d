use bigdecimal::BigDecimal;
use poem_openapi::{Object, payload::Json};

use business::domain::product::model::{Product, ProductDetails};
use business::domain::shared::pagination::Page;

use crate::api::error::ErrorResponse;
use crate::api::money::{decimal_from_f64, decimal_to_f64, price_from_f64};

/// Body of product create and update requests.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Unit price, never negative
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(default)]
    pub rating: f64,
    #[oai(default)]
    pub reviews: i32,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(default)]
    pub stock: i32,
    /// Required on create. On update, omit it to keep the current category.
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i64>,
}

impl ProductRequest {
    pub fn into_parts(self) -> Result<(ProductDetails, Option<i64>), Json<ErrorResponse>> {
        let price = price_from_f64(self.price)
            .ok_or_else(|| ErrorResponse::validation("product.invalid_price"))?;

        let details = ProductDetails {
            name: self.name,
            description: self.description,
            price,
            image: self.image,
            rating: self.rating,
            reviews: self.reviews,
            brand: self.brand,
            stock: self.stock,
        };
        Ok((details, self.category_id))
    }
}

/// Converts an optional price bound exactly, rejecting NaN and infinities.
pub fn parse_price_filter(value: Option<f64>) -> Result<Option<BigDecimal>, Json<ErrorResponse>> {
    value
        .map(|v| decimal_from_f64(v).ok_or_else(|| ErrorResponse::validation("product.invalid_price")))
        .transpose()
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub rating: f64,
    pub reviews: i32,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    pub stock: i32,
    pub category_id: i64,
    pub category_name: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: decimal_to_f64(&product.price),
            image: product.image,
            rating: product.rating,
            reviews: product.reviews,
            brand: product.brand,
            stock: product.stock,
            category_id: product.category.id,
            category_name: product.category.name,
        }
    }
}

/// One page of a product listing. Pages are zero based.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    pub content: Vec<ProductResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Product>> for ProductPageResponse {
    fn from(page: Page<Product>) -> Self {
        let total_pages = page.total_pages();
        let page = page.map(ProductResponse::from);
        Self {
            content: page.items,
            page: page.page,
            size: page.size,
            total_elements: page.total,
            total_pages,
        }
    }
}
