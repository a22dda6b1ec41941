use super::entities::Subject;
use serde::{Deserialize, Serialize};

// 科目列表响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetSubjectListResponse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub subjects: Vec<Subject>,
    pub total: i64,
}
