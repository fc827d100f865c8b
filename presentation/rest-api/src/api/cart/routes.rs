use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_line::{RemoveCartLineParams, RemoveCartLineUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use business::domain::cart::value_objects::QuantityAction;
use business::domain::shared::value_objects::UserId;

use crate::api::cart::dto::{
    AddToCartRequest, CartEnvelope, PricedCartEnvelope, UpdateCartItemRequest,
};
use crate::api::envelope::EmptyEnvelope;
use crate::api::error::{ErrorResponse, IntoErrorResponse, invalid_field};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    get_use_case: Arc<dyn GetCartUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_line_use_case: Arc<dyn RemoveCartLineUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        get_use_case: Arc<dyn GetCartUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_line_use_case: Arc<dyn RemoveCartLineUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            get_use_case,
            update_quantity_use_case,
            remove_line_use_case,
            clear_use_case,
        }
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, Json<ErrorResponse>> {
    let user_id = UserId::new(raw.trim());
    if user_id.is_blank() {
        return Err(invalid_field("user id"));
    }
    Ok(user_id)
}

fn parse_uuid(raw: &str, field: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw.trim()).map_err(|_| invalid_field(field))
}

fn quantity_message(action: &str) -> String {
    let verb = match action.parse::<QuantityAction>() {
        Ok(QuantityAction::Decrement) => "decreased",
        _ => "increased",
    };
    format!("Cart item quantity {} successfully", verb)
}

/// Shopping cart API
///
/// One cart per user. Lines are merged by product; totals are computed on read.
#[OpenApi]
impl CartApi {
    /// Add a product to a cart
    ///
    /// Creates the cart on first use. Adding a product already in the cart
    /// increases that line's quantity.
    #[oai(path = "/cart/add", method = "post", tag = "ApiTags::Cart")]
    async fn add_to_cart(&self, body: Json<AddToCartRequest>) -> AddToCartResponse {
        let request = body.0;
        let user_id = match parse_user_id(&request.user_id) {
            Ok(id) => id,
            Err(json) => return AddToCartResponse::BadRequest(json),
        };
        let product_id = match parse_uuid(&request.product_id, "product id") {
            Ok(id) => id,
            Err(json) => return AddToCartResponse::BadRequest(json),
        };

        let params = AddCartItemParams {
            user_id,
            product_id,
            quantity: request.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(cart) => AddToCartResponse::Ok(Json(CartEnvelope::new("Product added to cart", cart))),
            Err(err) => {
                let (status, json) = err.into_error_response_or("Error adding to cart");
                match status.as_u16() {
                    400 => AddToCartResponse::BadRequest(json),
                    404 => AddToCartResponse::NotFound(json),
                    409 => AddToCartResponse::Conflict(json),
                    _ => AddToCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user's cart
    ///
    /// Resolves each line's product name and price and returns the total.
    #[oai(path = "/cart/user/:userId", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, #[oai(name = "userId")] user_id: Path<String>) -> GetCartResponse {
        let user_id = match parse_user_id(&user_id.0) {
            Ok(id) => id,
            Err(json) => return GetCartResponse::BadRequest(json),
        };

        match self.get_use_case.execute(GetCartParams { user_id }).await {
            Ok(priced) => GetCartResponse::Ok(Json(PricedCartEnvelope {
                status: true,
                message: "Cart fetched successfully".to_string(),
                data: priced.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response_or("Error fetching cart");
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Change a cart line's quantity by one
    ///
    /// The line is identified by `userId` and `productId` in the body.
    /// Decrementing a line at quantity 1 is rejected and leaves the cart unchanged.
    #[oai(path = "/cart/update/:cartItemId", method = "put", tag = "ApiTags::Cart")]
    async fn update_cart_item(
        &self,
        #[oai(name = "cartItemId")] cart_item_id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> UpdateCartItemResponse {
        let request = body.0;
        tracing::debug!(cart_item_id = %cart_item_id.0, "updating cart item");

        let user_id = match parse_user_id(&request.user_id) {
            Ok(id) => id,
            Err(json) => return UpdateCartItemResponse::BadRequest(json),
        };
        let product_id = match parse_uuid(&request.product_id, "product id") {
            Ok(id) => id,
            Err(json) => return UpdateCartItemResponse::BadRequest(json),
        };
        let action = request.action;
        let params = UpdateCartItemQuantityParams {
            user_id,
            product_id,
            action: action.clone(),
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(cart) => {
                UpdateCartItemResponse::Ok(Json(CartEnvelope::new(quantity_message(&action), cart)))
            }
            Err(err) => {
                let (status, json) = err.into_error_response_or("Error updating cart item");
                match status.as_u16() {
                    400 => UpdateCartItemResponse::BadRequest(json),
                    404 => UpdateCartItemResponse::NotFound(json),
                    409 => UpdateCartItemResponse::Conflict(json),
                    _ => UpdateCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a line from whichever cart holds it
    ///
    /// The cart is kept even when its last line is removed.
    #[oai(path = "/cart/delete/:cartItemId", method = "delete", tag = "ApiTags::Cart")]
    async fn delete_cart_item(
        &self,
        #[oai(name = "cartItemId")] cart_item_id: Path<String>,
    ) -> DeleteCartItemResponse {
        let line_id = match parse_uuid(&cart_item_id.0, "cart item id") {
            Ok(id) => id,
            Err(json) => return DeleteCartItemResponse::BadRequest(json),
        };

        match self
            .remove_line_use_case
            .execute(RemoveCartLineParams { line_id })
            .await
        {
            Ok(cart) => DeleteCartItemResponse::Ok(Json(CartEnvelope::new(
                "Cart item deleted successfully",
                cart,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response_or("Error deleting cart item");
                match status.as_u16() {
                    404 => DeleteCartItemResponse::NotFound(json),
                    409 => DeleteCartItemResponse::Conflict(json),
                    _ => DeleteCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a user's cart
    #[oai(path = "/cart/clear/:userId", method = "delete", tag = "ApiTags::Cart")]
    async fn clear_cart(&self, #[oai(name = "userId")] user_id: Path<String>) -> ClearCartResponse {
        let user_id = match parse_user_id(&user_id.0) {
            Ok(id) => id,
            Err(json) => return ClearCartResponse::BadRequest(json),
        };

        match self.clear_use_case.execute(ClearCartParams { user_id }).await {
            Ok(()) => ClearCartResponse::Ok(Json(EmptyEnvelope::new("Cart cleared successfully"))),
            Err(err) => {
                let (status, json) = err.into_error_response_or("Error clearing cart");
                match status.as_u16() {
                    404 => ClearCartResponse::NotFound(json),
                    _ => ClearCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<PricedCartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 200)]
    Ok(Json<EmptyEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
