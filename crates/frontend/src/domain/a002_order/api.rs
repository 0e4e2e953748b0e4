use contracts::domain::a002_order::aggregate::UpdateOrderStatusDto;
use contracts::domain::a002_order::{Order, OrderStatus};

use crate::shared::http::{get_json, patch_json, ApiResult};

pub async fn fetch_orders() -> ApiResult<Vec<Order>> {
    get_json("/ordenes/obtener-ordenes").await
}

pub async fn update_status(id: i64, status: OrderStatus) -> ApiResult<()> {
    patch_json(
        &format!("/ordenes/{}/actualizar-estado", id),
        &UpdateOrderStatusDto { status },
    )
    .await
}
