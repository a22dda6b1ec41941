use super::entities::Record;
use serde::{Deserialize, Serialize};

// 上课记录列表响应
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetRecordListResponse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub records: Vec<Record>,
    pub total: i64,
    #[serde(default)]
    pub total_pending: i64,
}

// Excel 导入结果，error_infos 每行为 [行号, 错误原因, ...]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportFromExcelResponse {
    #[serde(default)]
    pub filepath: String,
    #[serde(default)]
    pub total_rows: i64,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub error_infos: Vec<Vec<String>>,
}

// 文件选择结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectFileResponse {
    pub filepath: String,
}
