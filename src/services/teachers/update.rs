use super::TeacherService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::utils::validate::validate_person;

pub async fn update_teacher(service: &mut TeacherService, req: UpdateTeacherRequest) -> Result<()> {
    validate_person(&req.name, &req.phone, &req.remark).inspect_err(|e| service.ctx.reject(e))?;

    let req = UpdateTeacherRequest {
        name: req.name.trim().to_string(),
        ..req
    };
    service
        .ctx
        .client
        .call_unit(routes::teacher::UPDATE, &req)
        .await
        .inspect_err(|e| service.ctx.report("教师更新失败", e))?;

    service.ctx.notifier.success("教师更新成功");
    service.load().await
}
