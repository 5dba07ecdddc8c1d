/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    /// The record is still referenced by another record and cannot be removed.
    #[error("repository.referenced")]
    Referenced,
    #[error("repository.database_error")]
    DatabaseError,
}
