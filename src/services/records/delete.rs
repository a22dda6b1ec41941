use super::RecordService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::records::entities::Record;
use crate::models::records::requests::DeleteRecordRequest;

// 已激活的记录删除后，后端会返还学生课时
pub async fn delete_record(service: &mut RecordService, record: &Record) -> Result<bool> {
    let text = format!(
        "学生 {} 于 {} 的记录, 如果已生效，删除则会返还学生的课时。确定删除？",
        record.student_name(), record.teaching_date
    );
    if !service.ctx.confirm.confirm("确认删除", &text).await {
        return Ok(false);
    }

    service
        .ctx
        .client
        .call_unit(routes::record::DELETE, &DeleteRecordRequest { id: record.id })
        .await
        .inspect_err(|e| service.ctx.report("删除记录失败", e))?;

    service.ctx.notifier.success("记录已删除, 学生课时已返还");
    service.load().await?;
    Ok(true)
}
