use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use meer_core::{DomainError, DomainResult, ProductId};

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Mean score in `0.0..=5.0`.
    pub average: f64,
    pub count: u32,
}

impl Rating {
    pub fn new(average: f64, count: u32) -> Self {
        Self { average, count }
    }
}

fn default_in_stock() -> bool {
    true
}

/// A catalog product as exposed over the API.
///
/// `id` is always the public (string) form of the store identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A product that has not been stored yet (no identifier, no timestamps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub in_stock: bool,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub rating: Rating,
}

impl NewProduct {
    /// Check the record before it is handed to a store.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number (got {})",
                self.price
            )));
        }
        if !(0.0..=5.0).contains(&self.rating.average) {
            return Err(DomainError::validation(format!(
                "rating average must be within 0..=5 (got {})",
                self.rating.average
            )));
        }
        Ok(())
    }

    /// Attach a store-assigned identifier and timestamps.
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            brand: self.brand,
            in_stock: self.in_stock,
            images: self.images,
            colors: self.colors,
            rating: self.rating,
            created_at: Some(created_at),
            updated_at: Some(created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewProduct {
        NewProduct {
            title: "Test Runner".to_string(),
            description: "Light and fast.".to_string(),
            price: 99.5,
            category: "Running".to_string(),
            brand: "Acme".to_string(),
            in_stock: true,
            images: vec!["https://img.example/1.jpg".to_string()],
            colors: vec!["Red".to_string()],
            rating: Rating::new(4.2, 10),
        }
    }

    #[test]
    fn valid_product_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn rejects_blank_title() {
        let mut p = sample();
        p.title = "   ".to_string();
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_negative_or_nan_price() {
        let mut p = sample();
        p.price = -0.01;
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));

        p.price = f64::NAN;
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn zero_price_is_allowed() {
        let mut p = sample();
        p.price = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_rating_out_of_range() {
        let mut p = sample();
        p.rating.average = 5.1;
        assert!(matches!(p.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn product_json_exposes_plain_id() {
        let id = ProductId::generate();
        let product = sample().into_product(id, Utc::now());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], serde_json::Value::String(id.to_string()));
        assert!(json.get("_id").is_none());
        assert_eq!(json["rating"]["count"], 10);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let id = ProductId::generate();
        let json = serde_json::json!({
            "id": id.to_string(),
            "title": "Bare",
            "price": 10.0,
        });
        let product: Product = serde_json::from_value(json).unwrap();

        assert!(product.in_stock);
        assert!(product.images.is_empty());
        assert_eq!(product.rating, Rating::default());
        assert!(product.created_at.is_none());
    }
}
