use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;

/// Descriptive attributes shown on the product page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInfo {
    pub material: String,
    pub weight: String,
    pub country_of_origin: String,
    pub dimensions: String,
    pub product_type: String,
}

impl ProductInfo {
    fn is_complete(&self) -> bool {
        [
            &self.material,
            &self.weight,
            &self.country_of_origin,
            &self.dimensions,
            &self.product_type,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub price: BigDecimal,
    pub info: ProductInfo,
    pub shipping_and_returns: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub price: BigDecimal,
    pub info: ProductInfo,
    pub shipping_and_returns: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if props.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }
        if props.price < BigDecimal::from(0) {
            return Err(ProductError::InvalidPrice);
        }
        if !props.info.is_complete() {
            return Err(ProductError::InfoIncomplete);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            images: props.images,
            colors: props.colors,
            price: props.price,
            info: props.info,
            shipping_and_returns: props.shipping_and_returns,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        images: Vec<String>,
        colors: Vec<String>,
        price: BigDecimal,
        info: ProductInfo,
        shipping_and_returns: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            images,
            colors,
            price,
            info,
            shipping_and_returns,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::str::FromStr;

    use super::*;

    pub fn info() -> ProductInfo {
        ProductInfo {
            material: "Cotton".to_string(),
            weight: "250g".to_string(),
            country_of_origin: "Portugal".to_string(),
            dimensions: "70x50cm".to_string(),
            product_type: "T-Shirt".to_string(),
        }
    }

    pub fn product(id: Uuid, name: &str, price: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            id,
            name.to_string(),
            format!("{name} description"),
            vec![],
            vec!["black".to_string()],
            BigDecimal::from_str(price).unwrap(),
            info(),
            None,
            now,
            now,
        )
    }
}
