use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use super::value_objects::QuantityAction;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// Smallest quantity a cart line may hold.
pub const MIN_LINE_QUANTITY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
}

/// A user's cart. Owns its lines exclusively; at most one line per product.
///
/// `version` is the value read from the store (0 for a cart that has never
/// been written) and guards conditional writes.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub items: Vec<CartLine>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<CartLine>,
        version: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            version,
            created_at,
            updated_at,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.version > 0
    }

    pub fn line_for_product(&self, product_id: Uuid) -> Option<&CartLine> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Merges `quantity` into the line for `product_id`, appending a new line
    /// when the product is not in the cart yet.
    pub fn add_item(&mut self, product_id: Uuid, quantity: u32) -> Result<(), CartError> {
        if quantity < MIN_LINE_QUANTITY {
            return Err(CartError::InvalidQuantity);
        }

        match self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidQuantity)?;
            }
            None => self.items.push(CartLine {
                id: Uuid::new_v4(),
                product_id,
                quantity,
            }),
        }

        self.touch();
        Ok(())
    }

    /// Applies a one-step change and returns the line's new quantity.
    /// A decrement never removes the line.
    pub fn change_quantity(
        &mut self,
        product_id: Uuid,
        action: QuantityAction,
    ) -> Result<u32, CartError> {
        let line = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
            .ok_or(CartError::ProductNotInCart)?;

        line.quantity = match action {
            QuantityAction::Increment => line
                .quantity
                .checked_add(1)
                .ok_or(CartError::InvalidQuantity)?,
            QuantityAction::Decrement if line.quantity > MIN_LINE_QUANTITY => line.quantity - 1,
            QuantityAction::Decrement => return Err(CartError::QuantityBelowMinimum),
        };
        let quantity = line.quantity;

        self.touch();
        Ok(quantity)
    }

    /// Removes exactly the line with `line_id`. The cart survives even when it
    /// ends up empty.
    pub fn remove_line(&mut self, line_id: Uuid) -> Result<CartLine, CartError> {
        let position = self
            .items
            .iter()
            .position(|line| line.id == line_id)
            .ok_or(CartError::LineNotFound)?;

        let removed = self.items.remove(position);
        self.touch();
        Ok(removed)
    }

    pub fn product_ids(&self) -> Vec<Uuid> {
        self.items.iter().map(|line| line.product_id).collect()
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// The fields of a product a cart view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct PricedLine {
    pub line: CartLine,
    /// `None` when the product has been removed from the catalog since it was added.
    pub product: Option<ProductSummary>,
}

impl PricedLine {
    pub fn subtotal(&self) -> BigDecimal {
        self.product
            .as_ref()
            .map(|product| &product.price * BigDecimal::from(self.line.quantity))
            .unwrap_or_else(|| BigDecimal::from(0))
    }
}

/// Cart view with products resolved and the derived total. Never persisted.
#[derive(Debug, Clone)]
pub struct PricedCart {
    pub cart: Cart,
    pub lines: Vec<PricedLine>,
    pub total_price: BigDecimal,
}

impl PricedCart {
    pub fn new(cart: Cart, products: &[Product]) -> Self {
        let by_id: HashMap<Uuid, &Product> = products.iter().map(|p| (p.id, p)).collect();

        let lines: Vec<PricedLine> = cart
            .items
            .iter()
            .map(|line| PricedLine {
                line: line.clone(),
                product: by_id.get(&line.product_id).map(|product| ProductSummary {
                    name: product.name.clone(),
                    price: product.price.clone(),
                }),
            })
            .collect();

        let total_price = lines
            .iter()
            .fold(BigDecimal::from(0), |total, line| total + line.subtotal());

        Self {
            cart,
            lines,
            total_price,
        }
    }
}
