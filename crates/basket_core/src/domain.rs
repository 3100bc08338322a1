//! crates/basket_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! The catalog shapes carry a flattened map of extra keys so that seed data
//! with fields we don't model round-trips through the API unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A shopping category. Opaque beyond its `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A product entry, either in the shared catalog or in an account's
/// personal list. `is_paid` is only meaningful for bought items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub price: f64,
    #[serde(default, rename = "isBought")]
    pub is_bought: bool,
    #[serde(default, rename = "isPaid")]
    pub is_paid: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// The full chargeable amount for this entry.
    pub fn line_total(&self) -> f64 {
        self.quantity * self.price
    }
}

/// A registered user: credentials plus a personal copy of the catalog.
#[derive(Debug, Clone)]
pub struct Account {
    pub email: String,
    pub password_hash: String,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Totals across an account's bought products.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Balance {
    pub total: f64,
    pub paid: f64,
    pub remaining: f64,
}

/// Deserializes a number, coercing anything non-numeric to zero.
/// Seed data and client payloads are not trusted to keep these fields
/// numeric, and the balance math treats such values as worthless.
fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64().unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_defaults_and_extras_survive_deserialization() {
        let raw = json!({
            "name": "Milk",
            "price": 2.5,
            "imageUrl": "http://example.com/milk.png"
        });
        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.name, "Milk");
        assert_eq!(product.quantity, 0.0);
        assert!(!product.is_bought);
        assert!(!product.is_paid);
        assert_eq!(
            product.extra.get("imageUrl").and_then(|v| v.as_str()),
            Some("http://example.com/milk.png")
        );
    }

    #[test]
    fn non_numeric_price_coerces_to_zero() {
        let raw = json!({ "name": "Eggs", "price": "twelve", "quantity": null });
        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.price, 0.0);
        assert_eq!(product.quantity, 0.0);
    }

    #[test]
    fn serialization_uses_wire_field_names() {
        let product = Product {
            name: "Bread".to_string(),
            quantity: 1.0,
            price: 3.0,
            is_bought: true,
            is_paid: false,
            extra: Map::new(),
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["isBought"], json!(true));
        assert_eq!(value["isPaid"], json!(false));
    }
}
