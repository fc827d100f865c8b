#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.line_not_found")]
    LineNotFound,
    #[error("cart.product_not_in_cart")]
    ProductNotInCart,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.invalid_action")]
    InvalidAction,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.quantity_below_minimum")]
    QuantityBelowMinimum,
    #[error("cart.concurrent_modification")]
    ConcurrentModification,
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
