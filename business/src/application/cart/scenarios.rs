//! End-to-end cart flows over the in-memory stores.

use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::add_item::AddCartItemUseCaseImpl;
use super::clear::ClearCartUseCaseImpl;
use super::get::GetCartUseCaseImpl;
use super::remove_line::RemoveCartLineUseCaseImpl;
use super::update_quantity::UpdateCartItemQuantityUseCaseImpl;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::cart::value_objects::QuantityAction;
use crate::domain::product::model::test_support::product;
use crate::domain::shared::value_objects::UserId;
use crate::test_doubles::{InMemoryCartRepo, InMemoryProductRepo, mock_logger};

struct Shop {
    add: AddCartItemUseCaseImpl,
    get: GetCartUseCaseImpl,
    update: UpdateCartItemQuantityUseCaseImpl,
    remove: RemoveCartLineUseCaseImpl,
    clear: ClearCartUseCaseImpl,
    product_a: Uuid,
    product_b: Uuid,
}

fn shop() -> Shop {
    let a = product(Uuid::new_v4(), "Product A", "10.00");
    let b = product(Uuid::new_v4(), "Product B", "2.50");
    let (product_a, product_b) = (a.id, b.id);

    let carts = Arc::new(InMemoryCartRepo::default());
    let products = Arc::new(InMemoryProductRepo::with(vec![a, b]));
    let logger = mock_logger();

    Shop {
        add: AddCartItemUseCaseImpl {
            repository: carts.clone(),
            product_repository: products.clone(),
            logger: logger.clone(),
        },
        get: GetCartUseCaseImpl {
            repository: carts.clone(),
            product_repository: products,
            logger: logger.clone(),
        },
        update: UpdateCartItemQuantityUseCaseImpl {
            repository: carts.clone(),
            logger: logger.clone(),
        },
        remove: RemoveCartLineUseCaseImpl {
            repository: carts.clone(),
            logger: logger.clone(),
        },
        clear: ClearCartUseCaseImpl {
            repository: carts,
            logger,
        },
        product_a,
        product_b,
    }
}

fn user() -> UserId {
    UserId::new("shopper")
}

async fn add(shop: &Shop, product_id: Uuid, quantity: i64) {
    shop.add
        .execute(AddCartItemParams {
            user_id: user(),
            product_id,
            quantity,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn repeated_additions_merge_into_one_line() {
    let shop = shop();

    add(&shop, shop.product_a, 2).await;
    add(&shop, shop.product_a, 3).await;

    let priced = shop.get.execute(GetCartParams { user_id: user() }).await.unwrap();
    assert_eq!(priced.lines.len(), 1);
    assert_eq!(priced.lines[0].line.quantity, 5);
    assert_eq!(priced.total_price, BigDecimal::from_str("50.00").unwrap());
}

#[tokio::test]
async fn total_follows_quantity_changes() {
    let shop = shop();
    add(&shop, shop.product_a, 1).await;
    add(&shop, shop.product_b, 2).await;

    shop.update
        .execute(UpdateCartItemQuantityParams {
            user_id: user(),
            product_id: shop.product_b,
            action: QuantityAction::Increment.to_string(),
        })
        .await
        .unwrap();

    let priced = shop.get.execute(GetCartParams { user_id: user() }).await.unwrap();
    assert_eq!(priced.total_price, BigDecimal::from_str("17.50").unwrap());
}

#[tokio::test]
async fn decrement_at_one_leaves_cart_unchanged() {
    let shop = shop();
    add(&shop, shop.product_a, 1).await;

    let result = shop
        .update
        .execute(UpdateCartItemQuantityParams {
            user_id: user(),
            product_id: shop.product_a,
            action: QuantityAction::Decrement.to_string(),
        })
        .await;

    assert!(matches!(
        result.unwrap_err(),
        CartError::QuantityBelowMinimum
    ));
    let priced = shop.get.execute(GetCartParams { user_id: user() }).await.unwrap();
    assert_eq!(priced.lines[0].line.quantity, 1);
    assert_eq!(priced.cart.version, 1);
}

#[tokio::test]
async fn removing_last_line_keeps_empty_cart() {
    let shop = shop();
    add(&shop, shop.product_a, 1).await;
    let line_id = shop
        .get
        .execute(GetCartParams { user_id: user() })
        .await
        .unwrap()
        .lines[0]
        .line
        .id;

    shop.remove
        .execute(RemoveCartLineParams { line_id })
        .await
        .unwrap();

    let priced = shop.get.execute(GetCartParams { user_id: user() }).await.unwrap();
    assert!(priced.lines.is_empty());
    assert_eq!(priced.total_price, BigDecimal::from(0));
}

#[tokio::test]
async fn clear_then_get_reports_not_found() {
    let shop = shop();
    add(&shop, shop.product_a, 1).await;

    shop.clear
        .execute(ClearCartParams { user_id: user() })
        .await
        .unwrap();

    let result = shop.get.execute(GetCartParams { user_id: user() }).await;
    assert!(matches!(result.unwrap_err(), CartError::NotFound));
}

#[tokio::test]
async fn clear_unknown_user_reports_not_found() {
    let shop = shop();

    let result = shop
        .clear
        .execute(ClearCartParams {
            user_id: UserId::new("nobody"),
        })
        .await;

    assert!(matches!(result.unwrap_err(), CartError::NotFound));
}
