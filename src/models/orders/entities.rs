use serde::{Deserialize, Serialize};

use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;

// 课时变动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Increase, // 充值
    Decrease, // 扣费/退费
}

impl OrderType {
    /// 课时数非负视为充值
    pub fn from_hours(hours: i64) -> Self {
        if hours >= 0 {
            OrderType::Increase
        } else {
            OrderType::Decrease
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Increase => "increase",
            OrderType::Decrease => "decrease",
        }
    }

    pub fn zh_label(&self) -> &'static str {
        match self {
            OrderType::Increase => "充值",
            OrderType::Decrease => "退费",
        }
    }
}

// 分类标签
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTag {
    pub label: String,
    pub color: String,
}

impl OrderTag {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

// 课时变动流水
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub order_number: String,
    #[serde(default, deserialize_with = "crate::models::students::entities::student_or_missing")]
    pub student: Option<Student>,
    pub subject: Subject,
    pub teacher: Teacher,
    pub hours: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Order {
    /// 表格中显示的学员姓名，学员缺失时为 `-`
    pub fn student_name(&self) -> &str {
        self.student.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }
}

// 列表行：流水 + 由备注推断出的标签
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub order: Order,
    pub tags: Vec<OrderTag>,
}

impl From<Order> for OrderRow {
    fn from(order: Order) -> Self {
        let tags = crate::utils::classification::categorize_order_tags(&order.remark);
        Self { order, tags }
    }
}
