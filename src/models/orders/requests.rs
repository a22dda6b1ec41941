use serde::Serialize;

use super::entities::OrderType;
use crate::models::common::PaginationQuery;

// 流水列表查询（student_id 为 0 表示不限学员）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetOrderListRequest {
    pub student_id: i64,
    pub subject_ids: Vec<i64>,
    #[serde(rename = "type")]
    pub order_types: Vec<OrderType>,
    pub date_start: String,
    pub date_end: String,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 流水筛选条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilters {
    pub student_id: Option<i64>,
    pub student_name_label: String,
    pub order_type: Option<OrderType>,
    pub subject_ids: Vec<i64>,
    pub date_start: String,
    pub date_end: String,
}

impl OrderFilters {
    pub fn to_request(&self, pagination: PaginationQuery) -> GetOrderListRequest {
        GetOrderListRequest {
            student_id: self.student_id.unwrap_or(0),
            subject_ids: self.subject_ids.clone(),
            order_types: self.order_type.into_iter().collect(),
            date_start: self.date_start.clone(),
            date_end: self.date_end.clone(),
            pagination,
        }
    }
}
