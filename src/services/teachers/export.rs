use super::TeacherService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::services::{ExportOutcome, export_file, notify_export};

pub async fn export_teachers(service: &TeacherService) -> Result<ExportOutcome> {
    let result = export_file::<()>(&service.ctx, routes::teacher::EXPORT, None).await;
    notify_export(&service.ctx, &result, "教师数据已导出到", "导出教师数据失败");
    result
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::services::testing::harness;
    use crate::services::TeacherService;

    #[tokio::test]
    async fn test_export_failure_is_reported() {
        let h = harness(true);
        h.backend.register_no_req(routes::teacher::EXPORT, || async move {
            Err::<String, _>("磁盘已满".to_string())
        });
        let service = TeacherService::new(h.ctx.clone());
        assert!(service.export_teachers().await.is_err());
        assert_eq!(h.notifier.last().unwrap().message, "导出教师数据失败: 磁盘已满");
        assert_eq!(h.backend.calls()[0].0, "teacher_manager:export_teacher_to_excel");
    }
}
