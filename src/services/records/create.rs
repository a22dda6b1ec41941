use super::RecordService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::records::requests::CreateRecordRequest;
use crate::utils::validate::{validate_remark, validate_teaching_date, validate_time_window};

fn validate_record(req: &CreateRecordRequest) -> Result<()> {
    if req.student_id <= 0 || req.subject_id <= 0 {
        return Err(TuitionError::validation("请选择学生和科目"));
    }
    validate_teaching_date(&req.teaching_date)?;
    validate_time_window(&req.start_time, &req.end_time)?;
    validate_remark(&req.remark)
}

// 新建的记录默认未激活，激活后才扣减课时
pub async fn create_record(service: &mut RecordService, req: CreateRecordRequest) -> Result<()> {
    validate_record(&req).inspect_err(|e| service.ctx.reject(e))?;

    service
        .ctx
        .client
        .call_unit(routes::record::CREATE, &req)
        .await
        .inspect_err(|e| service.ctx.report("添加记录失败", e))?;

    service.ctx.notifier.success("记录添加成功 (待生效)");
    service.load().await
}
