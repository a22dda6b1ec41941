use super::entities::StudentStatus;
use crate::models::common::{Gender, PaginationQuery};
use serde::Serialize;

// 学员列表查询（status 为 0 表示不筛选）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetStudentListRequest {
    pub keyword: String,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub status: i32,
}

// 学员列表筛选条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFilters {
    pub keyword: String,
    pub status: Option<StudentStatus>,
}

impl StudentFilters {
    pub fn to_request(&self, pagination: PaginationQuery) -> GetStudentListRequest {
        GetStudentListRequest {
            keyword: self.keyword.trim().to_string(),
            pagination,
            status: self.status.map(|s| s.code()).unwrap_or(0),
        }
    }
}

// 新建学员
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    pub remark: String,
}

// 更新学员
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateStudentRequest {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    pub remark: String,
    pub status: StudentStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteStudentRequest {
    pub id: i64,
}
