pub mod cart;
pub mod checkout;

pub use cart::{AddOutcome, Cart, CartItem, QuantityUpdate};
pub use checkout::{CheckoutError, CreateOrderDto};
