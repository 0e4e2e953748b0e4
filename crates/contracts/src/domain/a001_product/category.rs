/// Product category offered in the product form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCategory {
    pub value: &'static str,
    pub name: &'static str,
}

pub const PRODUCT_CATEGORIES: &[ProductCategory] = &[
    ProductCategory { value: "comidas", name: "Comidas" },
    ProductCategory { value: "bebidas", name: "Bebidas" },
    ProductCategory { value: "postres", name: "Postres" },
    ProductCategory { value: "snacks", name: "Snacks" },
    ProductCategory { value: "otros", name: "Otros" },
];

pub const CATEGORY_VALUES: &[&str] = &["comidas", "bebidas", "postres", "snacks", "otros"];

/// Display name of a category value; unknown values are shown as-is
pub fn category_name(value: &str) -> &str {
    PRODUCT_CATEGORIES
        .iter()
        .find(|c| c.value == value)
        .map(|c| c.name)
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_match_categories() {
        let values: Vec<&str> = PRODUCT_CATEGORIES.iter().map(|c| c.value).collect();
        assert_eq!(values, CATEGORY_VALUES);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(category_name("bebidas"), "Bebidas");
        assert_eq!(category_name("desconocida"), "desconocida");
    }
}
