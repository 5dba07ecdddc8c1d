use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::ProductError;
use crate::domain::category::model::Category;

/// Largest price a catalog column holds: twelve digits, two of them cents.
const MAX_PRICE_CENTS: i64 = 999_999_999_999;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub rating: f64,
    pub reviews: i32,
    pub brand: Option<String>,
    pub stock: i32,
    pub category: Category,
}

/// The editable scalar fields of a product, shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub image: Option<String>,
    pub rating: f64,
    pub reviews: i32,
    pub brand: Option<String>,
    pub stock: i32,
}

impl ProductDetails {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if self.price < BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }

        if self.price > BigDecimal::new(MAX_PRICE_CENTS.into(), 2) {
            return Err(ProductError::PriceTooLarge);
        }

        Ok(())
    }
}

/// A validated product with a resolved category, not stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub details: ProductDetails,
    pub category: Category,
}

impl NewProduct {
    pub fn new(details: ProductDetails, category: Category) -> Result<Self, ProductError> {
        details.validate()?;
        Ok(Self { details, category })
    }

    pub fn into_product(self, id: i64) -> Product {
        Product::from_parts(id, self.details, self.category)
    }
}

impl Product {
    pub fn from_parts(id: i64, details: ProductDetails, category: Category) -> Self {
        Self {
            id,
            name: details.name,
            description: details.description,
            price: details.price,
            image: details.image,
            rating: details.rating,
            reviews: details.reviews,
            brand: details.brand,
            stock: details.stock,
            category,
        }
    }

    /// Replaces every scalar field. The category is left untouched.
    pub fn overwrite(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.description = details.description;
        self.price = details.price;
        self.image = details.image;
        self.rating = details.rating;
        self.reviews = details.reviews;
        self.brand = details.brand;
        self.stock = details.stock;
    }
}
