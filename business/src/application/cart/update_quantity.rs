use std::sync::Arc;

use async_trait::async_trait;

use super::retry::retry_on_conflict;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::cart::value_objects::QuantityAction;
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateCartItemQuantityUseCaseImpl {
    async fn write_once(&self, params: &UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        let mut cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;
        if cart.line_for_product(params.product_id).is_none() {
            return Err(CartError::ProductNotInCart);
        }
        let action = params.action.parse::<QuantityAction>()?;

        cart.change_quantity(params.product_id, action)?;
        cart.version = self.repository.save(&cart).await?;
        Ok(cart)
    }
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Applying {} to product {} in cart of user {}",
            params.action, params.product_id, params.user_id
        ));

        let params = &params;
        let cart = retry_on_conflict(self.logger.as_ref(), "update_quantity", move || {
            self.write_once(params)
        })
        .await?;

        self.logger.info(&format!("Cart {} quantity updated", cart.id));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_doubles::{MockCartRepo, mock_logger};
    use uuid::Uuid;

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    fn stored_cart(product_id: Uuid, quantity: u32) -> Cart {
        let mut cart = Cart::new(test_user_id());
        cart.add_item(product_id, quantity).unwrap();
        cart.version = 1;
        cart
    }

    fn params(product_id: Uuid, action: QuantityAction) -> UpdateCartItemQuantityParams {
        UpdateCartItemQuantityParams {
            user_id: test_user_id(),
            product_id,
            action: action.to_string(),
        }
    }

    #[tokio::test]
    async fn should_increment_quantity() {
        let product_id = Uuid::new_v4();
        let cart = stored_cart(product_id, 1);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(cart.clone())));
        cart_repo.expect_save().returning(|cart| Ok(cart.version + 1));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(params(product_id, QuantityAction::Increment))
            .await
            .unwrap();

        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.version, 2);
    }

    #[tokio::test]
    async fn should_decrement_quantity() {
        let product_id = Uuid::new_v4();
        let cart = stored_cart(product_id, 3);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(cart.clone())));
        cart_repo.expect_save().returning(|cart| Ok(cart.version + 1));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(params(product_id, QuantityAction::Decrement))
            .await
            .unwrap();

        assert_eq!(cart.items[0].quantity, 2);
    }

    #[tokio::test]
    async fn should_refuse_decrement_at_one_without_writing() {
        let product_id = Uuid::new_v4();
        let cart = stored_cart(product_id, 1);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(cart.clone())));
        cart_repo.expect_save().never();

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(product_id, QuantityAction::Decrement))
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::QuantityBelowMinimum
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_no_cart() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), QuantityAction::Increment))
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_not_in_cart() {
        let cart = stored_cart(Uuid::new_v4(), 2);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(cart.clone())));
        cart_repo.expect_save().never();

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(params(Uuid::new_v4(), QuantityAction::Increment))
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotInCart));
    }

    #[tokio::test]
    async fn should_report_missing_cart_before_unknown_action() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemQuantityParams {
                user_id: test_user_id(),
                product_id: Uuid::new_v4(),
                action: "invalid".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_report_missing_line_before_unknown_action() {
        let cart = stored_cart(Uuid::new_v4(), 2);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(cart.clone())));
        cart_repo.expect_save().never();

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemQuantityParams {
                user_id: test_user_id(),
                product_id: Uuid::new_v4(),
                action: "invalid".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotInCart));
    }

    #[tokio::test]
    async fn should_reject_unknown_action_for_existing_line() {
        let product_id = Uuid::new_v4();
        let cart = stored_cart(product_id, 2);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .returning(move |_| Ok(Some(cart.clone())));
        cart_repo.expect_save().never();

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateCartItemQuantityParams {
                user_id: test_user_id(),
                product_id,
                action: "Increment".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidAction));
    }

    #[tokio::test]
    async fn should_retry_when_write_conflicts() {
        let product_id = Uuid::new_v4();
        let cart = stored_cart(product_id, 1);
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user_id()
            .times(2)
            .returning(move |_| Ok(Some(cart.clone())));
        let mut seq = mockall::Sequence::new();
        cart_repo
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RepositoryError::Conflict));
        cart_repo
            .expect_save()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|cart| Ok(cart.version + 1));

        let use_case = UpdateCartItemQuantityUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(params(product_id, QuantityAction::Increment))
            .await
            .unwrap();

        assert_eq!(cart.items[0].quantity, 2);
    }
}
