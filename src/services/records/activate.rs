use super::RecordService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::records::requests::ActivateRecordRequest;

pub async fn activate_record(service: &mut RecordService, id: i64) -> Result<()> {
    service
        .ctx
        .client
        .call_unit(routes::record::ACTIVATE, &ActivateRecordRequest { id })
        .await
        .inspect_err(|e| service.ctx.report("激活记录失败", e))?;

    // 本地标记为已激活，并同步待处理计数
    if let Some(record) = service.items.iter_mut().find(|r| r.id == id) {
        if !record.active {
            record.active = true;
            service.total_pending = (service.total_pending - 1).max(0);
        }
    }
    service.ctx.notifier.success("记录已激活");
    Ok(())
}

pub async fn activate_all_pending(service: &mut RecordService) -> Result<bool> {
    let confirmed = service
        .ctx
        .confirm
        .confirm("批量激活确认", "确定要激活所有待处理记录吗？")
        .await;
    if !confirmed {
        return Ok(false);
    }

    service
        .ctx
        .client
        .call_no_req_unit(routes::record::ACTIVATE_ALL_PENDING)
        .await
        .inspect_err(|e| service.ctx.report("批量激活记录失败", e))?;

    service.ctx.notifier.success("所有待处理记录已激活");
    service.load().await?;
    Ok(true)
}
