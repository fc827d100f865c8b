use serde::{Deserialize, Serialize};

use super::errors::CartError;

/// Single-step quantity change requested for a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityAction {
    Increment,
    Decrement,
}

impl std::fmt::Display for QuantityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantityAction::Increment => write!(f, "increment"),
            QuantityAction::Decrement => write!(f, "decrement"),
        }
    }
}

impl std::str::FromStr for QuantityAction {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "increment" => Ok(QuantityAction::Increment),
            "decrement" => Ok(QuantityAction::Decrement),
            _ => Err(CartError::InvalidAction),
        }
    }
}
