//! Shopping cart model.
//!
//! Every line item keeps `1 <= quantity <= order_limit`. Totals are computed
//! on read and never cached.

use serde::{Deserialize, Serialize};

use crate::domain::a001_product::Product;
use crate::domain::a003_payment::PaymentMethod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub order_limit: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CartItem {
    /// New line with quantity 1; `None` for products that cannot be bought
    pub fn from_product(product: &Product) -> Option<Self> {
        if !product.is_purchasable() {
            return None;
        }
        Some(Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            order_limit: product.order_limit,
            image_url: product.image().map(str::to_string),
        })
    }

    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }

    pub fn is_at_limit(&self) -> bool {
        self.quantity >= self.order_limit
    }
}

/// Result of [`Cart::add_product`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Incremented(u32),
    /// Already at the order limit, quantity left unchanged
    AtLimit(u32),
    /// Disabled product or zero order limit
    Unavailable,
}

/// Result of [`Cart::update_product_quantity`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Applied(u32),
    /// Requested value was outside `[1, order_limit]`
    Clamped { requested: u32, applied: u32 },
    Removed,
    Missing,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    items: Vec<CartItem>,
    #[serde(default)]
    payment_method: Option<PaymentMethod>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops and repairs lines that break the quantity invariant.
    /// Used on data loaded from storage, which may be stale or edited by hand.
    pub fn sanitized(mut self) -> Self {
        self.items.retain(|item| item.order_limit > 0);
        for item in &mut self.items {
            item.quantity = item.quantity.clamp(1, item.order_limit);
        }
        let mut seen = Vec::with_capacity(self.items.len());
        self.items.retain(|item| {
            if seen.contains(&item.product_id) {
                false
            } else {
                seen.push(item.product_id);
                true
            }
        });
        self
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.position(product_id).is_some()
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.position(product_id)
            .map(|i| self.items[i].quantity)
            .unwrap_or(0)
    }

    fn position(&self, product_id: i64) -> Option<usize> {
        self.items.iter().position(|i| i.product_id == product_id)
    }

    /// Inserts the product with quantity 1, or increments it by one up to
    /// its order limit
    pub fn add_product(&mut self, product: &Product) -> AddOutcome {
        if let Some(idx) = self.position(product.id) {
            let item = &mut self.items[idx];
            if item.is_at_limit() {
                return AddOutcome::AtLimit(item.quantity);
            }
            item.quantity += 1;
            return AddOutcome::Incremented(item.quantity);
        }
        match CartItem::from_product(product) {
            Some(item) => {
                self.items.push(item);
                AddOutcome::Added
            }
            None => AddOutcome::Unavailable,
        }
    }

    /// Sets the quantity of a line.
    ///
    /// Callers clamp to `[1, order_limit]` before calling; values outside
    /// that range are still corrected here. Zero removes the line.
    pub fn update_product_quantity(&mut self, product_id: i64, quantity: u32) -> QuantityUpdate {
        let Some(idx) = self.position(product_id) else {
            return QuantityUpdate::Missing;
        };
        if quantity == 0 {
            self.items.remove(idx);
            return QuantityUpdate::Removed;
        }
        let item = &mut self.items[idx];
        let applied = quantity.min(item.order_limit);
        item.quantity = applied;
        if applied == quantity {
            QuantityUpdate::Applied(applied)
        } else {
            QuantityUpdate::Clamped {
                requested: quantity,
                applied,
            }
        }
    }

    pub fn remove_product(&mut self, product_id: i64) -> bool {
        match self.position(product_id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Empties the cart; the chosen payment method is kept
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        self.payment_method = method;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64, limit: u32) -> Product {
        Product {
            id,
            name: format!("Producto {id}"),
            description: String::new(),
            price,
            category: "otros".to_string(),
            enabled: true,
            order_limit: limit,
            image_url: None,
        }
    }

    #[test]
    fn test_add_twice_increments_by_one_up_to_limit() {
        let mut cart = Cart::new();
        let p = product(1, 10.0, 2);
        assert_eq!(cart.add_product(&p), AddOutcome::Added);
        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.add_product(&p), AddOutcome::Incremented(2));
        assert_eq!(cart.add_product(&p), AddOutcome::AtLimit(2));
        assert_eq!(cart.quantity_of(1), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_unavailable_products_are_not_added() {
        let mut cart = Cart::new();
        assert_eq!(cart.add_product(&product(1, 10.0, 0)), AddOutcome::Unavailable);
        let mut disabled = product(2, 10.0, 3);
        disabled.enabled = false;
        assert_eq!(cart.add_product(&disabled), AddOutcome::Unavailable);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 10.0, 5));
        cart.add_product(&product(1, 10.0, 5));
        cart.add_product(&product(2, 5.0, 5));
        assert_eq!(cart.total(), 25.0);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_update_quantity_stays_in_bounds() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 4.0, 3));
        for requested in 1..=3 {
            assert_eq!(
                cart.update_product_quantity(1, requested),
                QuantityUpdate::Applied(requested)
            );
            assert_eq!(cart.quantity_of(1), requested);
        }
        assert_eq!(
            cart.update_product_quantity(1, 9),
            QuantityUpdate::Clamped { requested: 9, applied: 3 }
        );
        assert_eq!(cart.quantity_of(1), 3);
        assert_eq!(cart.update_product_quantity(42, 1), QuantityUpdate::Missing);
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 4.0, 3));
        assert_eq!(cart.update_product_quantity(1, 0), QuantityUpdate::Removed);
        assert!(!cart.contains(1));
    }

    #[test]
    fn test_remove_last_item_leaves_empty_cart() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 4.0, 3));
        assert!(cart.remove_product(1));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert!(!cart.remove_product(1));
    }

    #[test]
    fn test_clear_keeps_payment_method() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 4.0, 3));
        cart.set_payment_method(Some(PaymentMethod::Yape));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.payment_method(), Some(PaymentMethod::Yape));
    }

    #[test]
    fn test_sanitized_repairs_stored_cart() {
        let json = r#"{"items":[
            {"product_id":1,"name":"A","unit_price":2.0,"quantity":0,"order_limit":3},
            {"product_id":2,"name":"B","unit_price":2.0,"quantity":9,"order_limit":4},
            {"product_id":3,"name":"C","unit_price":2.0,"quantity":1,"order_limit":0},
            {"product_id":1,"name":"A","unit_price":2.0,"quantity":2,"order_limit":3}
        ]}"#;
        let cart: Cart = serde_json::from_str::<Cart>(json).unwrap().sanitized();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of(1), 1);
        assert_eq!(cart.quantity_of(2), 4);
        assert!(!cart.contains(3));
        assert_eq!(cart.payment_method(), None);
    }
}
