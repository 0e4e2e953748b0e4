use serde::{Deserialize, Serialize};

use super::aggregate::Product;
use super::category::CATEGORY_VALUES;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

const NAME: ValidationRules = ValidationRules::required().min_length(3).max_length(100);
const DESCRIPTION: ValidationRules = ValidationRules::required().min_length(10).max_length(500);
const PRICE: ValidationRules = ValidationRules::none()
    .at_least(0.01)
    .message("El precio debe ser mayor a 0");
const CATEGORY: ValidationRules = ValidationRules::required()
    .one_of(CATEGORY_VALUES)
    .message("Selecciona una categoría");
const ORDER_LIMIT: ValidationRules = ValidationRules::none().range(1.0, 100.0);

/// Editable fields of a product, as bound to the product form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub enabled: bool,
    pub order_limit: u32,
}

impl From<&Product> for ProductForm {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            price: p.price,
            category: p.category.clone(),
            enabled: p.enabled,
            order_limit: p.order_limit,
        }
    }
}

impl ProductForm {
    /// True when submitting would change nothing on the server
    pub fn is_unchanged(&self, original: &Product) -> bool {
        *self == ProductForm::from(original)
    }

    /// Multipart fields under the names the API expects.
    /// The image file, if any, is appended by the caller.
    pub fn to_form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("nombre", self.name.trim().to_string()),
            ("descripcion", self.description.trim().to_string()),
            ("habilitado", self.enabled.to_string()),
            ("precio", self.price.to_string()),
            ("categoria", self.category.clone()),
            ("limite_de_orden", self.order_limit.to_string()),
        ]
    }
}

impl Validate for ProductForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check_string("name", "Nombre", NAME, &self.name);
        errors.check_string("description", "Descripción", DESCRIPTION, &self.description);
        errors.check_number("price", "Precio", PRICE, self.price);
        errors.check_string("category", "Categoría", CATEGORY, &self.category);
        errors.check_number("order_limit", "Límite de compra", ORDER_LIMIT, self.order_limit as f64);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            name: "Lomo saltado".to_string(),
            description: "Plato de fondo con papas".to_string(),
            price: 18.0,
            category: "comidas".to_string(),
            enabled: true,
            order_limit: 3,
            image_url: None,
        }
    }

    #[test]
    fn test_valid_product_form() {
        let form = ProductForm::from(&product());
        assert!(form.is_valid());
    }

    #[test]
    fn test_invalid_fields_are_reported() {
        let form = ProductForm {
            name: "Lo".to_string(),
            description: "corta".to_string(),
            price: 0.0,
            category: "juguetes".to_string(),
            enabled: true,
            order_limit: 0,
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get("price"), Some("El precio debe ser mayor a 0"));
        assert_eq!(errors.get("category"), Some("Selecciona una categoría"));
        assert!(errors.get("order_limit").is_some());
    }

    #[test]
    fn test_unchanged_detection() {
        let original = product();
        let mut form = ProductForm::from(&original);
        assert!(form.is_unchanged(&original));
        form.enabled = false;
        assert!(!form.is_unchanged(&original));
    }

    #[test]
    fn test_form_fields_use_api_names() {
        let fields = ProductForm::from(&product()).to_form_fields();
        assert_eq!(fields[0], ("nombre", "Lomo saltado".to_string()));
        assert_eq!(fields[2], ("habilitado", "true".to_string()));
        assert_eq!(fields[3], ("precio", "18".to_string()));
        assert_eq!(fields[5], ("limite_de_orden", "3".to_string()));
    }
}
