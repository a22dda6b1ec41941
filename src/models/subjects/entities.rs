use serde::{Deserialize, Serialize};

// 科目实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub subject_number: String,
    #[serde(default)]
    pub student_count: i64, // 关联学员数
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
