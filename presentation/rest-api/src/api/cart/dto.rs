use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine, PricedCart, PricedLine};

use crate::api::money::to_json_number;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub user_id: String,
    pub product_id: String,
    /// Units to add; merged into an existing line for the same product
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    pub user_id: String,
    pub product_id: String,
    /// `increment` or `decrement`
    pub action: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartLineResponse {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            id: line.id.to_string(),
            product_id: line.product_id.to_string(),
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartLineResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.to_string(),
            user_id: cart.user_id.to_string(),
            items: cart.items.into_iter().map(CartLineResponse::from).collect(),
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartProductResponse {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PricedCartLineResponse {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    /// Absent when the product is no longer in the catalog
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<CartProductResponse>,
}

impl From<PricedLine> for PricedCartLineResponse {
    fn from(priced: PricedLine) -> Self {
        Self {
            id: priced.line.id.to_string(),
            product_id: priced.line.product_id.to_string(),
            quantity: priced.line.quantity,
            product: priced.product.map(|product| CartProductResponse {
                price: to_json_number(&product.price),
                name: product.name,
            }),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PricedCartResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<PricedCartLineResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Object)]
pub struct CartData {
    pub cart: CartResponse,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PricedCartData {
    pub cart: PricedCartResponse,
    pub total_price: f64,
}

impl From<PricedCart> for PricedCartData {
    fn from(priced: PricedCart) -> Self {
        let total_price = to_json_number(&priced.total_price);
        let cart = priced.cart;
        Self {
            cart: PricedCartResponse {
                id: cart.id.to_string(),
                user_id: cart.user_id.to_string(),
                items: priced
                    .lines
                    .into_iter()
                    .map(PricedCartLineResponse::from)
                    .collect(),
                created_at: cart.created_at,
                updated_at: cart.updated_at,
            },
            total_price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartEnvelope {
    pub status: bool,
    pub message: String,
    pub data: CartData,
}

impl CartEnvelope {
    pub fn new(message: impl Into<String>, cart: Cart) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: CartData { cart: cart.into() },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PricedCartEnvelope {
    pub status: bool,
    pub message: String,
    pub data: PricedCartData,
}
