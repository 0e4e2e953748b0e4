use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::decimal;

/// Image value the API stores for products that have no picture yet
pub const IMAGE_PENDING: &str = "PENDIENTE";

/// Product as returned by the store API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precio", deserialize_with = "decimal")]
    pub price: f64,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "habilitado", default)]
    pub enabled: bool,
    #[serde(rename = "limite_de_orden", default)]
    pub order_limit: u32,
    #[serde(rename = "url", default)]
    pub image_url: Option<String>,
}

impl Product {
    /// Image URL, or `None` while the upload is still pending
    pub fn image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty() && *url != IMAGE_PENDING)
    }

    /// Whether a customer can put this product in the cart
    pub fn is_purchasable(&self) -> bool {
        self.enabled && self.order_limit > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "nombre": "Chicha morada",
            "descripcion": "Botella de 500 ml",
            "precio": "4.50",
            "categoria": "bebidas",
            "habilitado": true,
            "limite_de_orden": 5,
            "url": "PENDIENTE"
        }"#
    }

    #[test]
    fn test_decode_backend_shape() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Chicha morada");
        assert_eq!(product.price, 4.5);
        assert_eq!(product.order_limit, 5);
        assert!(product.enabled);
        assert_eq!(product.image(), None);
        assert!(product.is_purchasable());
    }

    #[test]
    fn test_zero_limit_is_not_purchasable() {
        let mut product: Product = serde_json::from_str(sample_json()).unwrap();
        product.order_limit = 0;
        assert!(!product.is_purchasable());
        product.order_limit = 3;
        product.enabled = false;
        assert!(!product.is_purchasable());
    }
}
