use serde::{Deserialize, Serialize};

use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;

// 上课记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::models::students::entities::student_or_missing")]
    pub student: Option<Student>,
    pub teacher: Teacher,
    pub subject: Subject,
    pub teaching_date: String, // YYYY-MM-DD
    pub start_time: String,    // HH:MM
    pub end_time: String,      // HH:MM
    pub active: bool,          // 已激活的记录才会扣减课时
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Record {
    /// 表格中显示的学员姓名，学员缺失时为 `-`
    pub fn student_name(&self) -> &str {
        self.student.as_ref().map(|s| s.name.as_str()).unwrap_or("-")
    }

    /// 表格中显示的时间段，例如 `10:00-12:00`
    pub fn time_span(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }

    pub fn status_label(&self) -> &'static str {
        if self.active { "已激活" } else { "未激活" }
    }

    pub fn status_color(&self) -> &'static str {
        if self.active { "success" } else { "warning" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(student: &str) -> String {
        format!(
            r#"{{"id":5,"student":{student},"teacher":{{"id":2,"name":"李老师"}},
            "subject":{{"id":1,"name":"钢琴"}},"teaching_date":"2026-03-18",
            "start_time":"10:00","end_time":"11:30","active":false}}"#
        )
    }

    #[test]
    fn test_zero_value_student_keeps_row() {
        let raw = record_json(r#"{"id":0,"name":"","status":0}"#);
        let record: Record = serde_json::from_str(&raw).unwrap();
        assert!(record.student.is_none());
        assert_eq!(record.student_name(), "-");
        assert_eq!(record.time_span(), "10:00-11:30");
    }

    #[test]
    fn test_nested_student_name() {
        let raw = record_json(r#"{"id":3,"name":"张三","status":2}"#);
        let record: Record = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.student_name(), "张三");
    }
}
