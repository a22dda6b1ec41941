use super::TeacherService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::teachers::entities::Teacher;
use crate::models::teachers::requests::DeleteTeacherRequest;

pub async fn delete_teacher(service: &mut TeacherService, teacher: &Teacher) -> Result<bool> {
    let text = format!("确定要永久删除 \"{}\" 吗？此操作无法撤销。", teacher.name);
    if !service.ctx.confirm.confirm("删除确认", &text).await {
        return Ok(false);
    }

    service
        .ctx
        .client
        .call_unit(routes::teacher::DELETE, &DeleteTeacherRequest { id: teacher.id })
        .await
        .inspect_err(|e| service.ctx.report("教师删除失败", e))?;

    service.ctx.notifier.success("教师删除成功");
    service.load().await?;
    Ok(true)
}
