use crate::models::common::PaginationQuery;
use serde::Serialize;

use super::entities::CourseStatusFilter;

// 课程列表查询
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetCourseListRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub students: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teachers: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_max: Option<i64>,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<i32>,
    pub keyword: String,
}

// 课程列表筛选条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilters {
    pub student_id: Option<i64>,
    pub student_name_label: String,
    pub subjects: Vec<i64>,
    pub teachers: Vec<i64>,
    pub balance_min: Option<i64>,
    pub balance_max: Option<i64>,
    pub status: Vec<CourseStatusFilter>,
    pub keyword: String,
}

impl CourseFilters {
    pub fn to_request(&self, pagination: PaginationQuery) -> GetCourseListRequest {
        GetCourseListRequest {
            students: self.student_id.into_iter().collect(),
            subjects: self.subjects.clone(),
            teachers: self.teachers.clone(),
            balance_min: self.balance_min,
            balance_max: self.balance_max,
            pagination,
            status: self.status.iter().map(|s| s.code()).collect(),
            keyword: self.keyword.trim().to_string(),
        }
    }
}

// 新课报名
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCourseRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    pub remark: String,
}

// 更换授课教师 / 修改备注
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateCourseRequest {
    pub id: i64,
    pub teacher_id: i64,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToggleCourseStatusRequest {
    pub course_id: i64,
}

// 退课：软删除为结课并清算，硬删除直接删除记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteCourseRequest {
    pub course_id: i64,
    pub is_hard_delete: bool,
    pub remark: String,
}

// 充值/扣除：hours 正数为充值，负数为扣除，不允许为 0
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RechargeCourseRequest {
    pub course_id: i64,
    pub hours: i64,
    pub amount: f64, // 实付/退费金额
    pub remark: String,
}
