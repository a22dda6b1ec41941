use super::CourseService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::courses::requests::UpdateCourseRequest;
use crate::utils::validate::validate_remark;

pub async fn update_course(service: &mut CourseService, req: UpdateCourseRequest) -> Result<()> {
    let checked = if req.teacher_id <= 0 {
        Err(TuitionError::validation("请选择授课教师"))
    } else {
        validate_remark(&req.remark)
    };
    checked.inspect_err(|e| service.ctx.reject(e))?;

    service
        .ctx
        .client
        .call_unit(routes::course::UPDATE, &req)
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    service.ctx.notifier.success("课程信息更新成功");
    service.load().await
}
