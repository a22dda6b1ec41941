use chrono::NaiveDate;
use serde::Serialize;

use crate::models::common::PaginationQuery;
use crate::utils::date_range::DatePreset;

// 上课记录列表查询
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetRecordListRequest {
    pub student_ids: Vec<i64>,
    pub teacher_ids: Vec<i64>,
    pub subject_ids: Vec<i64>,
    pub start_date: String,
    pub end_date: String,
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub active: Option<bool>, // None: 全部, true: 已激活, false: 未激活
}

// 按当前筛选条件导出
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRecordsRequest {
    pub student_ids: Vec<i64>,
    pub teacher_ids: Vec<i64>,
    pub subject_ids: Vec<i64>,
    pub start_date: String,
    pub end_date: String,
    pub active: Option<bool>,
}

// 上课记录筛选条件
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilters {
    pub students: Vec<i64>,
    pub teachers: Vec<i64>,
    pub subjects: Vec<i64>,
    pub date: DatePreset,
    pub active: Option<bool>,
}

impl RecordFilters {
    pub fn has_active_filters(&self) -> bool {
        !self.students.is_empty()
            || !self.teachers.is_empty()
            || !self.subjects.is_empty()
            || self.date != DatePreset::All
            || self.active.is_some()
    }

    fn dates(&self, today: NaiveDate) -> (String, String) {
        self.date
            .query_bounds(today)
            .map(|(start, end)| (start.unwrap_or_default(), end.unwrap_or_default()))
            .unwrap_or_default()
    }

    pub fn to_request(&self, pagination: PaginationQuery, today: NaiveDate) -> GetRecordListRequest {
        let (start_date, end_date) = self.dates(today);
        GetRecordListRequest {
            student_ids: self.students.clone(),
            teacher_ids: self.teachers.clone(),
            subject_ids: self.subjects.clone(),
            start_date,
            end_date,
            pagination,
            active: self.active,
        }
    }

    pub fn to_export_request(&self, today: NaiveDate) -> ExportRecordsRequest {
        let (start_date, end_date) = self.dates(today);
        ExportRecordsRequest {
            student_ids: self.students.clone(),
            teacher_ids: self.teachers.clone(),
            subject_ids: self.subjects.clone(),
            start_date,
            end_date,
            active: self.active,
        }
    }
}

// 新建上课记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateRecordRequest {
    pub student_id: i64,
    pub subject_id: i64,
    pub teaching_date: String,
    pub start_time: String,
    pub end_time: String,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivateRecordRequest {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteRecordRequest {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportFromExcelRequest {
    pub filepath: String,
}
