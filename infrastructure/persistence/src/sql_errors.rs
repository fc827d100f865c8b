use business::domain::errors::RepositoryError;

/// Maps a sqlx failure onto the domain error, keeping unique-key violations
/// distinguishable from other database failures.
pub fn into_repository_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => RepositoryError::database_error(err),
    }
}
