use serde::{Deserialize, Serialize};

// 教师实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    #[serde(default)]
    pub teacher_number: String,
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub deleted_at: i64,
}

impl Teacher {
    /// 下拉选项标题：`姓名 (工号)`
    pub fn option_title(&self) -> String {
        format!("{} ({})", self.name, self.teacher_number)
    }
}
