use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cart::Cart;
use crate::domain::a003_payment::PaymentMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Tu carrito está vacío")]
    EmptyCart,
    #[error("Selecciona un método de pago")]
    MissingPaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderItem {
    #[serde(rename = "producto_id")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Body of the create order request sent at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    pub items: Vec<CreateOrderItem>,
    #[serde(rename = "metodo_pago")]
    pub payment_method: PaymentMethod,
}

impl CreateOrderDto {
    pub fn from_cart(cart: &Cart) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let payment_method = cart
            .payment_method()
            .ok_or(CheckoutError::MissingPaymentMethod)?;
        Ok(Self {
            items: cart
                .items()
                .iter()
                .map(|i| CreateOrderItem {
                    product_id: i.product_id,
                    quantity: i.quantity,
                })
                .collect(),
            payment_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;

    fn cart_with_one_line() -> Cart {
        let mut cart = Cart::new();
        cart.add_product(&Product {
            id: 9,
            name: "Anticucho".to_string(),
            description: String::new(),
            price: 12.0,
            category: "comidas".to_string(),
            enabled: true,
            order_limit: 4,
            image_url: None,
        });
        cart
    }

    #[test]
    fn test_empty_cart_cannot_checkout() {
        assert_eq!(
            CreateOrderDto::from_cart(&Cart::new()),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_payment_method_required() {
        assert_eq!(
            CreateOrderDto::from_cart(&cart_with_one_line()),
            Err(CheckoutError::MissingPaymentMethod)
        );
    }

    #[test]
    fn test_order_body() {
        let mut cart = cart_with_one_line();
        cart.set_payment_method(Some(PaymentMethod::Efectivo));
        let dto = CreateOrderDto::from_cart(&cart).unwrap();
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"items":[{"producto_id":9,"cantidad":1}],"metodo_pago":"efectivo"}"#
        );
    }
}
