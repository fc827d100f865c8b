use std::sync::Arc;

use async_trait::async_trait;

use super::retry::retry_on_conflict;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartLineUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveCartLineUseCaseImpl {
    async fn write_once(&self, params: &RemoveCartLineParams) -> Result<Cart, CartError> {
        let mut cart = self
            .repository
            .find_by_line_id(params.line_id)
            .await?
            .ok_or(CartError::LineNotFound)?;

        cart.remove_line(params.line_id)?;
        cart.version = self.repository.save(&cart).await?;
        Ok(cart)
    }
}

#[async_trait]
impl RemoveCartLineUseCase for RemoveCartLineUseCaseImpl {
    async fn execute(&self, params: RemoveCartLineParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing cart line: {}", params.line_id));

        let params = &params;
        let cart = retry_on_conflict(self.logger.as_ref(), "remove_line", move || {
            self.write_once(params)
        })
        .await?;

        self.logger.info(&format!(
            "Cart line {} removed from cart {}",
            params.line_id, cart.id
        ));
        Ok(cart)
    }
}
