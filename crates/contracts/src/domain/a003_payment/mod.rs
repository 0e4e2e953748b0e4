pub mod aggregate;

pub use aggregate::{Payment, PaymentMethod};
