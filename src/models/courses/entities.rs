use serde::{Deserialize, Serialize};

use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;

// 课程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourseStatus {
    #[default]
    Active, // 正常上课
    Paused, // 课程暂停
    Finished, // 已结课
}

impl CourseStatus {
    pub const fn code(&self) -> i32 {
        match self {
            CourseStatus::Active => 1,
            CourseStatus::Paused => 2,
            CourseStatus::Finished => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(CourseStatus::Active),
            2 => Some(CourseStatus::Paused),
            3 => Some(CourseStatus::Finished),
            _ => None,
        }
    }

    /// 切换状态：正常 <-> 暂停，已结课保持不变
    pub fn toggled(&self) -> Self {
        match self {
            CourseStatus::Active => CourseStatus::Paused,
            CourseStatus::Paused => CourseStatus::Active,
            CourseStatus::Finished => CourseStatus::Finished,
        }
    }
}

impl Serialize for CourseStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for CourseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        CourseStatus::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!("无效的课程状态: {code}. 支持的状态: 1, 2, 3"))
        })
    }
}

// 课程列表的状态筛选项，4/5 由学员档案状态派生
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseStatusFilter {
    Active,
    Paused,
    Finished,
    StudentSuspended,
    StudentWithdrawn,
}

impl CourseStatusFilter {
    pub const ALL: [CourseStatusFilter; 5] = [
        CourseStatusFilter::Active,
        CourseStatusFilter::Paused,
        CourseStatusFilter::Finished,
        CourseStatusFilter::StudentSuspended,
        CourseStatusFilter::StudentWithdrawn,
    ];

    pub const fn code(&self) -> i32 {
        match self {
            CourseStatusFilter::Active => 1,
            CourseStatusFilter::Paused => 2,
            CourseStatusFilter::Finished => 3,
            CourseStatusFilter::StudentSuspended => 4,
            CourseStatusFilter::StudentWithdrawn => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CourseStatusFilter::Active => "正常上课",
            CourseStatusFilter::Paused => "课程暂停",
            CourseStatusFilter::Finished => "已结课",
            CourseStatusFilter::StudentSuspended => "学员停课",
            CourseStatusFilter::StudentWithdrawn => "学员退学",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            CourseStatusFilter::Active => "success",
            CourseStatusFilter::Paused => "warning",
            CourseStatusFilter::Finished => "grey",
            CourseStatusFilter::StudentSuspended => "blue-grey",
            CourseStatusFilter::StudentWithdrawn => "error",
        }
    }
}

// 课程（学员-科目-教师 关联，带剩余课时）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default, deserialize_with = "crate::models::students::entities::student_or_missing")]
    pub student: Option<Student>,
    pub subject: Subject,
    pub teacher: Teacher,
    pub balance: i64, // 剩余课时数
    #[serde(default)]
    pub remark: String,
    pub status: CourseStatus,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
