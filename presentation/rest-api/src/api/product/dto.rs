use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::{Product, ProductInfo};

use crate::api::money::to_json_number;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductInfoDto {
    pub material: String,
    pub weight: String,
    pub country_of_origin: String,
    pub dimensions: String,
    #[oai(rename = "type")]
    pub product_type: String,
}

impl From<ProductInfo> for ProductInfoDto {
    fn from(info: ProductInfo) -> Self {
        Self {
            material: info.material,
            weight: info.weight,
            country_of_origin: info.country_of_origin,
            dimensions: info.dimensions,
            product_type: info.product_type,
        }
    }
}

impl From<ProductInfoDto> for ProductInfo {
    fn from(dto: ProductInfoDto) -> Self {
        Self {
            material: dto.material,
            weight: dto.weight,
            country_of_origin: dto.country_of_origin,
            dimensions: dto.dimensions,
            product_type: dto.product_type,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description (cannot be empty)
    pub description: String,
    /// Image URLs
    #[oai(default)]
    pub images: Vec<String>,
    /// Available colors
    #[oai(default)]
    pub colors: Vec<String>,
    /// Unit price, rounded to cents
    pub price: f64,
    pub product_info: ProductInfoDto,
    #[oai(skip_serializing_if_is_none)]
    pub shipping_and_returns: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub price: f64,
    pub product_info: ProductInfoDto,
    #[oai(skip_serializing_if_is_none)]
    pub shipping_and_returns: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            price: to_json_number(&product.price),
            name: product.name,
            description: product.description,
            images: product.images,
            colors: product.colors,
            product_info: product.info.into(),
            shipping_and_returns: product.shipping_and_returns,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductData {
    pub product: ProductResponse,
}

#[derive(Debug, Clone, Object)]
pub struct ProductEnvelope {
    pub status: bool,
    pub message: String,
    pub data: ProductData,
}

impl ProductEnvelope {
    pub fn new(message: impl Into<String>, product: Product) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: ProductData {
                product: product.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductListData {
    pub products: Vec<ProductResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductListEnvelope {
    pub status: bool,
    pub message: String,
    pub data: ProductListData,
}
