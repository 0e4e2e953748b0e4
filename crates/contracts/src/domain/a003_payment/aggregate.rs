use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Efectivo,
    Tarjeta,
    Yape,
    #[serde(other)]
    Otro,
}

impl PaymentMethod {
    /// Methods a customer can choose at checkout
    pub const SELECTABLE: [PaymentMethod; 3] = [
        PaymentMethod::Efectivo,
        PaymentMethod::Tarjeta,
        PaymentMethod::Yape,
    ];

    /// Wire value, also used as the `method` URL filter
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "efectivo",
            PaymentMethod::Tarjeta => "tarjeta",
            PaymentMethod::Yape => "yape",
            PaymentMethod::Otro => "otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Efectivo => "Efectivo",
            PaymentMethod::Tarjeta => "Tarjeta",
            PaymentMethod::Yape => "Yape",
            PaymentMethod::Otro => "Otro",
        }
    }

    pub fn parse(value: &str) -> Option<PaymentMethod> {
        Self::SELECTABLE.into_iter().find(|m| m.as_str() == value)
    }
}

/// Payment row of the sales report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    #[serde(rename = "transaccion", default)]
    pub transaction: String,
    #[serde(rename = "monto_total", deserialize_with = "decimal")]
    pub total: f64,
    #[serde(rename = "metodo_pago", default = "unknown_method")]
    pub method: PaymentMethod,
    #[serde(rename = "creado", default)]
    pub created_at: Option<String>,
    /// Customer code
    #[serde(rename = "codigo", default)]
    pub customer_code: Option<String>,
}

fn unknown_method() -> PaymentMethod {
    PaymentMethod::Otro
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payment() {
        let json = r#"{"id":3,"transaccion":"TX-0003","monto_total":"99.90","metodo_pago":"yape","codigo":"C-17"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.transaction, "TX-0003");
        assert_eq!(payment.total, 99.9);
        assert_eq!(payment.method, PaymentMethod::Yape);
        assert_eq!(payment.created_at, None);
        assert_eq!(payment.customer_code.as_deref(), Some("C-17"));
    }

    #[test]
    fn test_unknown_or_missing_method() {
        let json = r#"{"id":4,"transaccion":"TX-4","monto_total":1,"metodo_pago":"plin"}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.method, PaymentMethod::Otro);

        let json = r#"{"id":5,"monto_total":1}"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.method, PaymentMethod::Otro);
    }

    #[test]
    fn test_parse_only_selectable() {
        assert_eq!(PaymentMethod::parse("tarjeta"), Some(PaymentMethod::Tarjeta));
        assert_eq!(PaymentMethod::parse("otro"), None);
        assert_eq!(PaymentMethod::parse("all"), None);
    }
}
