use contracts::shop::CreateOrderDto;

use crate::shared::http::{post_json, ApiResult};

/// Place the order for the current cart
pub async fn create_order(dto: &CreateOrderDto) -> ApiResult<()> {
    post_json("/ordenes/crear-orden", dto).await
}
