use super::entities::Order;
use serde::{Deserialize, Serialize};

// 流水列表响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOrderListResponse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub orders: Vec<Order>,
    pub total: i64,
}
