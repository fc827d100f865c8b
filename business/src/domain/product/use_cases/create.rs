use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductInfo};

pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub price: BigDecimal,
    pub info: ProductInfo,
    pub shipping_and_returns: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
