use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub image: String,
    pub product_title: String,
    pub price: f64,
    pub unit: String,
    pub rating: i64,
}

#[derive(Serialize, Debug)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

/// Body of `POST /products`.
#[derive(Deserialize, Debug, Clone)]
pub struct NewProduct {
    pub image: String,
    #[serde(alias = "title")]
    pub product_title: String,
    pub price: f64,
    pub unit: String,
    pub rating: i64,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), ApiError> {
        let required = [
            ("image", &self.image),
            ("product_title", &self.product_title),
            ("unit", &self.unit),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ApiError::InvalidInput(format!("{} is required", field)));
        }
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(ApiError::InvalidInput(String::from(
                "price must be a positive number",
            )));
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ApiError::InvalidInput(String::from(
                "rating must be between 1 and 5",
            )));
        }
        Ok(())
    }
}
