use super::entities::Teacher;
use serde::{Deserialize, Serialize};

// 教师列表响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetTeacherListResponse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub teachers: Vec<Teacher>,
    pub total: i64,
}
