use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};

/// JSON number for a decimal amount. Amounts outside f64 range render as 0.
pub fn to_json_number(amount: &BigDecimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// Decimal amount for a JSON number, rounded to cents. `None` for NaN or infinity.
pub fn from_json_number(amount: f64) -> Option<BigDecimal> {
    BigDecimal::from_f64(amount).map(|value| value.round(2))
}
