use super::entities::Course;
use serde::{Deserialize, Serialize};

// 课程列表响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetCourseListResponse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub courses: Vec<Course>,
    pub total: i64,
}
