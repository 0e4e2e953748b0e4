//! Cart store shared by the shop pages.
//!
//! [`CartStore`] wraps the pure [`Cart`] model in a signal and writes every
//! change through a [`CartPersistence`] backend. The browser backend keeps
//! the cart in `localStorage` so it survives reloads.

use std::sync::Arc;

use contracts::domain::a001_product::Product;
use contracts::domain::a003_payment::PaymentMethod;
use contracts::shop::{AddOutcome, Cart, CartItem, QuantityUpdate};
use leptos::prelude::*;

use crate::config::CART_STORAGE_KEY;
use crate::shared::storage;

/// Where the cart is kept between page loads
pub trait CartPersistence: Send + Sync {
    fn load(&self) -> Option<Cart>;
    fn save(&self, cart: &Cart);
}

/// `localStorage["cart-storage"]` as JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStoragePersistence;

impl CartPersistence for LocalStoragePersistence {
    fn load(&self) -> Option<Cart> {
        storage::load_json(CART_STORAGE_KEY)
    }

    fn save(&self, cart: &Cart) {
        storage::save_json(CART_STORAGE_KEY, cart);
    }
}

#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
    persistence: StoredValue<Arc<dyn CartPersistence>>,
}

impl CartStore {
    /// Store restored from `persistence`; a missing or unreadable cart starts empty
    pub fn with_persistence(persistence: impl CartPersistence + 'static) -> Self {
        let restored = persistence.load().map(Cart::sanitized).unwrap_or_default();
        log::debug!("Cart restored with {} line(s)", restored.len());
        Self {
            cart: RwSignal::new(restored),
            persistence: StoredValue::new(Arc::new(persistence) as Arc<dyn CartPersistence>),
        }
    }

    pub fn new() -> Self {
        Self::with_persistence(LocalStoragePersistence)
    }

    fn persist(&self) {
        self.cart
            .with_untracked(|cart| self.persistence.with_value(|p| p.save(cart)));
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.cart.with(|c| c.items().to_vec())
    }

    /// Recomputed from the lines on every read
    pub fn total(&self) -> f64 {
        self.cart.with(Cart::total)
    }

    pub fn item_count(&self) -> u32 {
        self.cart.with(Cart::item_count)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    pub fn contains(&self, product_id: i64) -> bool {
        self.cart.with(|c| c.contains(product_id))
    }

    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.cart.with(|c| c.quantity_of(product_id))
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.cart.with(Cart::payment_method)
    }

    /// Current cart without subscribing to it
    pub fn snapshot(&self) -> Cart {
        self.cart.get_untracked()
    }

    pub fn add_product(&self, product: &Product) -> AddOutcome {
        let mut outcome = AddOutcome::Unavailable;
        self.cart.update(|c| outcome = c.add_product(product));
        log::debug!("add_product {} -> {:?}", product.id, outcome);
        if matches!(outcome, AddOutcome::Added | AddOutcome::Incremented(_)) {
            self.persist();
        }
        outcome
    }

    pub fn update_product_quantity(&self, product_id: i64, quantity: u32) -> QuantityUpdate {
        let mut result = QuantityUpdate::Missing;
        self.cart
            .update(|c| result = c.update_product_quantity(product_id, quantity));
        match result {
            QuantityUpdate::Clamped { requested, applied } => log::warn!(
                "Quantity {} for product {} is out of range, set to {}",
                requested,
                product_id,
                applied
            ),
            QuantityUpdate::Missing => {
                log::warn!("Quantity change for product {} not in cart", product_id)
            }
            other => log::debug!("update_product_quantity {} -> {:?}", product_id, other),
        }
        if result != QuantityUpdate::Missing {
            self.persist();
        }
        result
    }

    pub fn remove_product(&self, product_id: i64) -> bool {
        let mut removed = false;
        self.cart.update(|c| removed = c.remove_product(product_id));
        if removed {
            log::debug!("remove_product {}", product_id);
            self.persist();
        }
        removed
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
        log::debug!("Cart cleared");
        self.persist();
    }

    /// Takes a placed order out of the cart. Units added while the order was
    /// in flight stay in the cart.
    pub fn remove_ordered(&self, ordered: &Cart) {
        self.cart.update(|c| {
            for item in ordered.items() {
                let left = c.quantity_of(item.product_id).saturating_sub(item.quantity);
                if left == 0 {
                    c.remove_product(item.product_id);
                } else {
                    c.update_product_quantity(item.product_id, left);
                }
            }
        });
        log::debug!("Removed {} ordered lines", ordered.len());
        self.persist();
    }

    pub fn set_payment_method(&self, method: Option<PaymentMethod>) {
        self.cart.update(|c| c.set_payment_method(method));
        self.persist();
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_cart_store() -> CartStore {
    let store = CartStore::new();
    provide_context(store);
    store
}

/// Cart store from the app context
pub fn use_cart_store() -> CartStore {
    use_context::<CartStore>().expect("CartStore not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct MemoryPersistence(Arc<Mutex<Option<Cart>>>);

    impl CartPersistence for MemoryPersistence {
        fn load(&self) -> Option<Cart> {
            self.0.lock().unwrap().clone()
        }

        fn save(&self, cart: &Cart) {
            *self.0.lock().unwrap() = Some(cart.clone());
        }
    }

    fn product(id: i64, price: f64, limit: u32) -> Product {
        Product {
            id,
            name: format!("Producto {id}"),
            description: String::new(),
            price,
            category: "comidas".to_string(),
            enabled: true,
            order_limit: limit,
            image_url: None,
        }
    }

    #[test]
    fn test_changes_are_written_through() {
        let memory = MemoryPersistence::default();
        let store = CartStore::with_persistence(memory.clone());

        store.add_product(&product(1, 10.0, 5));
        store.add_product(&product(1, 10.0, 5));
        store.add_product(&product(2, 5.0, 5));
        assert_eq!(store.total(), 25.0);

        let saved = memory.0.lock().unwrap().clone().unwrap();
        assert_eq!(saved.quantity_of(1), 2);
        assert_eq!(saved.total(), 25.0);
    }

    #[test]
    fn test_restores_saved_cart() {
        let memory = MemoryPersistence::default();
        {
            let store = CartStore::with_persistence(memory.clone());
            store.add_product(&product(7, 3.5, 2));
            store.set_payment_method(Some(PaymentMethod::Yape));
        }
        let store = CartStore::with_persistence(memory);
        assert_eq!(store.quantity_of(7), 1);
        assert_eq!(store.payment_method(), Some(PaymentMethod::Yape));
    }

    #[test]
    fn test_quantity_stays_within_limit() {
        let store = CartStore::with_persistence(MemoryPersistence::default());
        store.add_product(&product(3, 1.0, 4));
        for q in [0u32, 1, 4, 9] {
            store.add_product(&product(3, 1.0, 4));
            store.update_product_quantity(3, q);
            let qty = store.quantity_of(3);
            assert!(qty <= 4);
        }
        assert_eq!(store.quantity_of(3), 4);
    }

    #[test]
    fn test_remove_ordered_keeps_later_additions() {
        let memory = MemoryPersistence::default();
        let store = CartStore::with_persistence(memory.clone());
        store.add_product(&product(1, 10.0, 5));
        store.add_product(&product(2, 5.0, 5));
        let ordered = store.snapshot();

        // added while the order request is pending
        store.add_product(&product(1, 10.0, 5));
        store.add_product(&product(3, 2.0, 5));

        store.remove_ordered(&ordered);
        assert_eq!(store.quantity_of(1), 1);
        assert!(!store.contains(2));
        assert_eq!(store.quantity_of(3), 1);
        assert_eq!(store.total(), 12.0);
        let saved = memory.0.lock().unwrap().clone().unwrap();
        assert_eq!(saved.total(), 12.0);
    }

    #[test]
    fn test_clear_empties_and_persists() {
        let memory = MemoryPersistence::default();
        let store = CartStore::with_persistence(memory.clone());
        store.add_product(&product(1, 2.0, 3));
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.total(), 0.0);
        assert!(memory.0.lock().unwrap().as_ref().unwrap().is_empty());
    }
}
