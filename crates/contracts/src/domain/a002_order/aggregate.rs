use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::decimal;

/// Lifecycle of an order.
///
/// `EN_PROCESO -> RECOGER -> COMPLETADA`; `CANCELADA` and `ABANDONADA` are
/// set by the backend and are terminal like `COMPLETADA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    EnProceso,
    Recoger,
    Completada,
    Cancelada,
    Abandonada,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::EnProceso,
        OrderStatus::Recoger,
        OrderStatus::Completada,
        OrderStatus::Cancelada,
        OrderStatus::Abandonada,
    ];

    /// Wire value, also used as the `status` URL filter
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::EnProceso => "EN_PROCESO",
            OrderStatus::Recoger => "RECOGER",
            OrderStatus::Completada => "COMPLETADA",
            OrderStatus::Cancelada => "CANCELADA",
            OrderStatus::Abandonada => "ABANDONADA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::EnProceso => "En Proceso",
            OrderStatus::Recoger => "Para recoger",
            OrderStatus::Completada => "Completada",
            OrderStatus::Cancelada => "Cancelada",
            OrderStatus::Abandonada => "Abandonada",
        }
    }

    pub fn parse(value: &str) -> Option<OrderStatus> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completada | OrderStatus::Cancelada | OrderStatus::Abandonada
        )
    }

    /// Status the admin moves the order to with the advance action
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::EnProceso => Some(OrderStatus::Recoger),
            OrderStatus::Recoger => Some(OrderStatus::Completada),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(rename = "nombre", default)]
    pub first_name: String,
    #[serde(rename = "apellidos", default)]
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "nombre_producto")]
    pub product_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precio", deserialize_with = "decimal")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    /// `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "hora_programada", default)]
    pub scheduled_at: String,
    #[serde(rename = "Usuario")]
    pub customer: OrderCustomer,
    #[serde(rename = "Orden_Item", default)]
    pub items: Vec<OrderItem>,
    #[serde(rename = "monto_total", deserialize_with = "decimal")]
    pub total: f64,
}

impl Order {
    /// Pickup time part of `scheduled_at`
    pub fn scheduled_time(&self) -> String {
        match NaiveDateTime::parse_from_str(&self.scheduled_at, "%Y-%m-%d %H:%M:%S") {
            Ok(dt) => dt.format("%H:%M").to_string(),
            Err(_) => self
                .scheduled_at
                .split(' ')
                .nth(1)
                .unwrap_or(&self.scheduled_at)
                .to_string(),
        }
    }

    pub fn customer_name(&self) -> String {
        format!("{} {}", self.customer.first_name, self.customer.last_name)
            .trim()
            .to_lowercase()
    }

    pub fn can_advance(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// Body of the status change request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderStatusDto {
    #[serde(rename = "estado")]
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "id": 12,
        "estado": "EN_PROCESO",
        "hora_programada": "2024-05-10 13:45:00",
        "Usuario": { "nombre": "ROSA", "apellidos": "QUISPE MAMANI" },
        "Orden_Item": [
            { "nombre_producto": "Ceviche", "cantidad": 2, "precio": "20.00" },
            { "nombre_producto": "Inca Kola", "cantidad": 1, "precio": 3.5 }
        ],
        "monto_total": "43.50"
    }"#;

    #[test]
    fn test_decode_order() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.status, OrderStatus::EnProceso);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].price, 20.0);
        assert_eq!(order.total, 43.5);
        assert_eq!(order.scheduled_time(), "13:45");
        assert_eq!(order.customer_name(), "rosa quispe mamani");
        assert!(order.can_advance());
    }

    #[test]
    fn test_scheduled_time_fallback() {
        let mut order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        order.scheduled_at = "hoy 14h".to_string();
        assert_eq!(order.scheduled_time(), "14h");
    }

    #[test]
    fn test_status_machine() {
        assert_eq!(OrderStatus::EnProceso.next(), Some(OrderStatus::Recoger));
        assert_eq!(OrderStatus::Recoger.next(), Some(OrderStatus::Completada));
        for status in OrderStatus::ALL {
            assert_eq!(status.is_terminal(), status.next().is_none());
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("all"), None);
    }

    #[test]
    fn test_status_wire_name() {
        let dto = UpdateOrderStatusDto {
            status: OrderStatus::Recoger,
        };
        assert_eq!(serde_json::to_string(&dto).unwrap(), r#"{"estado":"RECOGER"}"#);
    }
}
