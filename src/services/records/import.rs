use serde_json::Value;
use tracing::{info, warn};

use super::RecordService;
use crate::dispatch::{DispatchClient, routes};
use crate::errors::Result;
use crate::models::common::CANCEL_SENTINEL;
use crate::models::records::requests::ImportFromExcelRequest;
use crate::models::records::responses::{ImportFromExcelResponse, SelectFileResponse};
use crate::utils::validate::validate_import_file;

/// 文件选择对话框的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    Selected(String),
    Cancelled,
}

/// Excel 导入结果
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    Imported(ImportFromExcelResponse),
    /// 后端拒绝导入，`report` 为逐行错误（可能为空）
    Rejected {
        message: String,
        report: Vec<Vec<String>>,
    },
}

pub async fn select_import_file(service: &RecordService) -> Result<FileSelection> {
    let resp: SelectFileResponse = service
        .ctx
        .client
        .call_no_req(routes::record::SELECT_IMPORT_FILE)
        .await
        .inspect_err(|e| service.ctx.report("选择文件失败", e))?;

    let path = resp.filepath.trim();
    if path.is_empty() || path == CANCEL_SENTINEL {
        return Ok(FileSelection::Cancelled);
    }
    validate_import_file(path).inspect_err(|e| service.ctx.notifier.warning(e.message()))?;

    service.ctx.notifier.info(&format!("已选择文件: {path}"));
    Ok(FileSelection::Selected(path.to_string()))
}

// 失败响应的 data 可能是完整的导入结果，也可能只有错误表
fn error_report(data: Option<Value>) -> Vec<Vec<String>> {
    let Some(data) = data else {
        return Vec::new();
    };
    let rows = serde_json::from_value::<ImportFromExcelResponse>(data.clone())
        .map(|resp| resp.error_infos)
        .or_else(|_| serde_json::from_value::<Vec<Vec<String>>>(data))
        .unwrap_or_default();
    rows.into_iter().filter(|row| !row.is_empty()).collect()
}

pub async fn import_records(service: &mut RecordService, filepath: &str) -> Result<ImportOutcome> {
    validate_import_file(filepath).inspect_err(|e| service.ctx.notifier.warning(e.message()))?;

    let req = ImportFromExcelRequest {
        filepath: filepath.to_string(),
    };
    let payload = DispatchClient::encode(&req)?;
    let resp = service
        .ctx
        .client
        .envelope(routes::record::IMPORT, payload)
        .await
        .inspect_err(|e| service.ctx.report("导入失败", e))?;

    if !resp.is_success() {
        let report = error_report(resp.data);
        warn!("Import rejected: {} ({} rows with errors)", resp.message, report.len());
        service.ctx.notifier.error(&format!("导入失败: {}", resp.message));
        return Ok(ImportOutcome::Rejected {
            message: resp.message,
            report,
        });
    }

    let result: ImportFromExcelResponse = resp
        .into_result()
        .inspect_err(|e| service.ctx.report("导入失败", e))?;
    info!("Imported {} records from {}", result.total_rows, result.filepath);
    service
        .ctx
        .notifier
        .success(&format!("成功导入 {} 条记录", result.total_rows));
    service.load().await?;
    Ok(ImportOutcome::Imported(result))
}
