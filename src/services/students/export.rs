use super::StudentService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::services::{ExportOutcome, export_file, notify_export};

// 导出全部学生，无需参数
pub async fn export_students(service: &StudentService) -> Result<ExportOutcome> {
    let result = export_file::<()>(&service.ctx, routes::student::EXPORT, None).await;
    notify_export(&service.ctx, &result, "导出成功，文件已保存至", "导出失败");
    result
}
