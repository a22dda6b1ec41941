use crate::models::common::PaginationQuery;
use serde::Serialize;

// 科目列表查询
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetSubjectListRequest {
    pub keyword: String,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateSubjectRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateSubjectRequest {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteSubjectRequest {
    pub id: i64,
}
