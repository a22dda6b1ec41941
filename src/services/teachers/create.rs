use super::TeacherService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::utils::validate::validate_person;

pub async fn create_teacher(service: &mut TeacherService, req: CreateTeacherRequest) -> Result<()> {
    validate_person(&req.name, &req.phone, &req.remark).inspect_err(|e| service.ctx.reject(e))?;

    let req = CreateTeacherRequest {
        name: req.name.trim().to_string(),
        ..req
    };
    service
        .ctx
        .client
        .call_unit(routes::teacher::CREATE, &req)
        .await
        .inspect_err(|e| service.ctx.report("教师创建失败", e))?;

    service.ctx.notifier.success("教师创建成功");
    service.load().await
}
