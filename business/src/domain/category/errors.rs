#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("category.not_found")]
    NotFound,
    #[error("category.name_taken")]
    NameTaken,
    #[error("category.has_products")]
    HasProducts { product_count: u64 },
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
