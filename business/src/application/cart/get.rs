use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::PricedCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<PricedCart, CartError> {
        self.logger
            .info(&format!("Fetching cart of user {}", params.user_id));

        let cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;

        let products = if cart.items.is_empty() {
            Vec::new()
        } else {
            self.product_repository
                .find_by_ids(&cart.product_ids())
                .await?
        };

        if products.len() < cart.items.len() {
            self.logger.warn(&format!(
                "Cart {} references products missing from the catalog",
                cart.id
            ));
        }

        let priced = PricedCart::new(cart, &products);
        self.logger.debug(&format!(
            "Cart {} total price: {}",
            priced.cart.id, priced.total_price
        ));
        Ok(priced)
    }
}
