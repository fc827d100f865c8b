use std::sync::Arc;

use async_trait::async_trait;

use super::retry::retry_on_conflict;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, MIN_LINE_QUANTITY};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

impl AddCartItemUseCaseImpl {
    async fn write_once(&self, params: &AddCartItemParams, quantity: u32) -> Result<Cart, CartError> {
        let mut cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .unwrap_or_else(|| Cart::new(params.user_id.clone()));

        cart.add_item(params.product_id, quantity)?;
        cart.version = self.repository.save(&cart).await?;
        Ok(cart)
    }
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} x{} to cart of user {}",
            params.product_id, params.quantity, params.user_id
        ));

        let quantity = u32::try_from(params.quantity)
            .ok()
            .filter(|quantity| *quantity >= MIN_LINE_QUANTITY)
            .ok_or(CartError::InvalidQuantity)?;

        self.product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        let params = &params;
        let cart = retry_on_conflict(self.logger.as_ref(), "add_item", move || {
            self.write_once(params, quantity)
        })
        .await?;

        self.logger.info(&format!(
            "Cart {} now holds {} lines",
            cart.id,
            cart.items.len()
        ));
        Ok(cart)
    }
}
