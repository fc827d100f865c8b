use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::cart::model::{Cart, CartLine};
use business::domain::shared::value_objects::UserId;

/// One element of the `items` JSONB array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineDocument {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
}

impl From<&CartLine> for CartLineDocument {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.id,
            product_id: line.product_id,
            quantity: line.quantity,
        }
    }
}

impl From<CartLineDocument> for CartLine {
    fn from(doc: CartLineDocument) -> Self {
        CartLine {
            id: doc.id,
            product_id: doc.product_id,
            quantity: doc.quantity,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub id: Uuid,
    pub user_id: String,
    pub items: Json<Vec<CartLineDocument>>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.items.0.into_iter().map(CartLine::from).collect(),
            self.version,
            self.created_at,
            self.updated_at,
        )
    }

    pub fn items_document(cart: &Cart) -> Json<Vec<CartLineDocument>> {
        Json(cart.items.iter().map(CartLineDocument::from).collect())
    }
}
