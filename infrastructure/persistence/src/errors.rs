use business::domain::errors::RepositoryError;

/// Translates a driver error into the domain's repository error, keeping the
/// constraint violations the use cases react to.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::Referenced,
        _ => {
            tracing::error!(error = %error, "database operation failed");
            RepositoryError::DatabaseError
        }
    }
}
