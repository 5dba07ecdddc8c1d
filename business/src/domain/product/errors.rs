#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.price_too_large")]
    PriceTooLarge,
    #[error("product.category_required")]
    CategoryRequired,
    #[error("product.invalid_sort")]
    InvalidSort,
    #[error("product.not_found")]
    NotFound,
    #[error("category.not_found")]
    CategoryNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
