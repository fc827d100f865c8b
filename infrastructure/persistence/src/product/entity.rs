use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductInfo};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub price: BigDecimal,
    pub material: String,
    pub weight: String,
    pub country_of_origin: String,
    pub dimensions: String,
    pub product_type: String,
    pub shipping_and_returns: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.images,
            self.colors,
            self.price,
            ProductInfo {
                material: self.material,
                weight: self.weight,
                country_of_origin: self.country_of_origin,
                dimensions: self.dimensions,
                product_type: self.product_type,
            },
            self.shipping_and_returns,
            self.created_at,
            self.updated_at,
        )
    }
}
