use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct RemoveCartLineParams {
    pub line_id: Uuid,
}

#[async_trait]
pub trait RemoveCartLineUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<Cart, CartError>;
}
