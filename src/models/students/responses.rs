use super::entities::Student;
use serde::{Deserialize, Serialize};

// 学员列表响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetStudentListResponse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub students: Vec<Student>,
    pub total: i64,
}
