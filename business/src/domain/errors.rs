/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated")]
    Duplicated,
    /// A conditional write lost against a concurrent writer.
    #[error("repository.conflict")]
    Conflict,
    #[error("repository.database_error: {0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn database_error(err: impl std::fmt::Display) -> Self {
        RepositoryError::DatabaseError(err.to_string())
    }
}
