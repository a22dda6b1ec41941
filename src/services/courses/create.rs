use super::CourseService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::courses::requests::CreateCourseRequest;
use crate::utils::validate::validate_remark;

pub async fn enroll_course(service: &mut CourseService, req: CreateCourseRequest) -> Result<()> {
    let checked = if req.student_id <= 0 || req.subject_id <= 0 || req.teacher_id <= 0 {
        Err(TuitionError::validation("请选择学员、科目和授课教师"))
    } else {
        validate_remark(&req.remark)
    };
    checked.inspect_err(|e| service.ctx.reject(e))?;

    service
        .ctx
        .client
        .call_unit(routes::course::CREATE, &req)
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    service.ctx.notifier.success("新课报名成功");
    service.load().await
}
