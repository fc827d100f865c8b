#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.info_incomplete")]
    InfoIncomplete,
    #[error("product.not_found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
