use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::category::model::Category;
use business::domain::product::model::Product;

/// Columns every product query selects, with the owning category joined in.
pub const PRODUCT_COLUMNS: &str = "p.id, p.name, p.description, p.price, p.image, p.rating, \
     p.reviews, p.brand, p.stock, c.id AS category_id, c.name AS category_name, \
     c.description AS category_description, c.image AS category_image";

pub const PRODUCT_FROM: &str = " FROM products p JOIN categories c ON c.id = p.category_id";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub rating: f64,
    pub reviews: i32,
    pub brand: Option<String>,
    pub stock: i32,
    pub category_id: i64,
    pub category_name: String,
    pub category_description: Option<String>,
    pub category_image: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            image: self.image,
            rating: self.rating,
            reviews: self.reviews,
            brand: self.brand,
            stock: self.stock,
            category: Category {
                id: self.category_id,
                name: self.category_name,
                description: self.category_description,
                image: self.category_image,
            },
        }
    }
}
