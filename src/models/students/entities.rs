use serde::{Deserialize, Serialize};

// 学员档案状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentStatus {
    #[default]
    Active, // 在读
    Suspended, // 停课
    Withdrawn, // 退学
}

impl StudentStatus {
    pub const fn code(&self) -> i32 {
        match self {
            StudentStatus::Active => 1,
            StudentStatus::Suspended => 2,
            StudentStatus::Withdrawn => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(StudentStatus::Active),
            2 => Some(StudentStatus::Suspended),
            3 => Some(StudentStatus::Withdrawn),
            _ => None,
        }
    }

    pub fn zh_label(&self) -> &'static str {
        match self {
            StudentStatus::Active => "在读",
            StudentStatus::Suspended => "停课",
            StudentStatus::Withdrawn => "退学",
        }
    }
}

impl Serialize for StudentStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for StudentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        StudentStatus::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!("无效的学员状态: {code}. 支持的状态: 1, 2, 3"))
        })
    }
}

// 学员实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    #[serde(default)]
    pub student_number: String,
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub remark: String,
    pub status: StudentStatus,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Student {
    /// 下拉选项标题：`姓名 (学号)`
    pub fn option_title(&self) -> String {
        if self.student_number.is_empty() {
            format!("{} (无学号)", self.name)
        } else {
            format!("{} ({})", self.name, self.student_number)
        }
    }
}

// 关联学员缺失时后端返回零值结构体（id 为 0，状态为 0），视为无学员
pub(crate) fn student_or_missing<'de, D>(deserializer: D) -> Result<Option<Student>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| serde_json::from_value::<Student>(v).ok())
        .filter(|s| s.id != 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format_is_numeric() {
        assert_eq!(serde_json::to_string(&StudentStatus::Withdrawn).unwrap(), "3");
        let s: StudentStatus = serde_json::from_str("2").unwrap();
        assert_eq!(s, StudentStatus::Suspended);
        assert!(serde_json::from_str::<StudentStatus>("0").is_err());
    }

    #[test]
    fn test_student_dto_tolerates_missing_optional_fields() {
        let raw = r#"{"id":1,"name":"张三","status":1}"#;
        let student: Student = serde_json::from_str(raw).unwrap();
        assert_eq!(student.option_title(), "张三 (无学号)");
    }
}
