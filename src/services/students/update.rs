use super::StudentService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::students::requests::UpdateStudentRequest;
use crate::utils::validate::validate_person;

pub async fn update_student(service: &mut StudentService, req: UpdateStudentRequest) -> Result<()> {
    if let Err(e) = validate_person(&req.name, &req.phone, &req.remark) {
        service.ctx.reject(&e);
        return Err(e);
    }

    let req = UpdateStudentRequest {
        name: req.name.trim().to_string(),
        ..req
    };
    if let Err(e) = service.ctx.client.call_unit(routes::student::UPDATE, &req).await {
        service.ctx.report("更新学生失败", &e);
        return Err(e);
    }

    service.ctx.notifier.success("学生信息更新成功");
    service.load().await
}
