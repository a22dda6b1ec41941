use super::RecordService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::services::{ExportOutcome, export_file};

// 按当前筛选条件导出，不分页
pub async fn export_records(service: &RecordService) -> Result<ExportOutcome> {
    let req = service.filters.to_export_request(RecordService::today());
    let result = export_file(&service.ctx, routes::record::EXPORT, Some(&req)).await;
    match &result {
        Ok(ExportOutcome::Cancelled) => service.ctx.notifier.info("已取消导出操作"),
        Ok(ExportOutcome::Saved(_)) => service.ctx.notifier.success("记录导出成功"),
        Err(e) => service.ctx.report("导出记录失败", e),
    }
    result
}

pub async fn download_template(service: &RecordService) -> Result<ExportOutcome> {
    let result = export_file::<()>(&service.ctx, routes::record::DOWNLOAD_TEMPLATE, None).await;
    match &result {
        Ok(ExportOutcome::Cancelled) => service.ctx.notifier.info("已取消操作"),
        Ok(ExportOutcome::Saved(path)) => service
            .ctx
            .notifier
            .success(&format!("模板下载成功，文件路径: {path}")),
        Err(e) => service.ctx.report("下载模板失败", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::notify::ToastLevel;
    use crate::services::testing::harness;
    use crate::services::{ExportOutcome, RecordService};
    use crate::utils::date_range::DatePreset;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_export_sends_filters_without_paging() {
        let h = harness(true);
        h.backend.register_typed(routes::record::EXPORT, |_: Value| async move {
            Ok::<_, String>("/tmp/记录.xlsx".to_string())
        });
        let mut service = RecordService::new(h.ctx.clone());
        service.filters.teachers = vec![3];
        service.filters.date = DatePreset::Custom {
            start: "2026-01-01".into(),
            end: "2026-01-31".into(),
        };
        let outcome = service.export_records().await.unwrap();
        assert_eq!(outcome, ExportOutcome::Saved("/tmp/记录.xlsx".into()));

        let payload = h.backend.last_payload(routes::record::EXPORT).unwrap();
        assert_eq!(payload["teacher_ids"], json!([3]));
        assert_eq!(payload["end_date"], json!("2026-01-31"));
        assert!(payload.get("limit").is_none());
        assert_eq!(h.notifier.last().unwrap().message, "记录导出成功");
    }

    #[tokio::test]
    async fn test_template_cancel_is_informational() {
        let h = harness(true);
        h.backend
            .register_no_req(routes::record::DOWNLOAD_TEMPLATE, || async move {
                Ok::<_, String>("cancel".to_string())
            });
        let service = RecordService::new(h.ctx.clone());
        assert!(service.download_template().await.unwrap().is_cancelled());
        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.level, ToastLevel::Info);
        assert_eq!(toast.message, "已取消操作");
    }

    #[tokio::test]
    async fn test_template_failure_is_reported() {
        let h = harness(true);
        h.backend
            .register_no_req(routes::record::DOWNLOAD_TEMPLATE, || async move {
                Err::<String, _>("磁盘已满".to_string())
            });
        let service = RecordService::new(h.ctx.clone());
        assert!(service.download_template().await.is_err());
        assert_eq!(h.notifier.last().unwrap().message, "下载模板失败: 磁盘已满");
    }
}
