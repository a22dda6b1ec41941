use crate::models::common::{Gender, PaginationQuery};
use serde::Serialize;

// 教师列表查询
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetTeacherListRequest {
    pub key: String,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

// 新建教师
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub phone: String,
    pub gender: Gender,
    pub remark: String,
}

// 更新教师
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTeacherRequest {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub gender: Gender,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteTeacherRequest {
    pub id: i64,
}
