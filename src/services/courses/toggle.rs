use super::CourseService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::courses::requests::ToggleCourseStatusRequest;
use crate::models::students::entities::StudentStatus;

// 暂停/恢复课程，学员档案不是在读状态时不允许操作
pub async fn toggle_status(service: &mut CourseService, course_id: i64) -> Result<()> {
    let course = service.course(course_id).inspect_err(|e| service.ctx.reject(e))?;
    let student_active = course
        .student
        .as_ref()
        .is_some_and(|s| s.status == StudentStatus::Active);
    if !student_active {
        let err = TuitionError::status_gate("请先恢复学员档案状态");
        service.ctx.reject(&err);
        return Err(err);
    }

    service
        .ctx
        .client
        .call_unit(routes::course::TOGGLE_STATUS, &ToggleCourseStatusRequest { course_id })
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    service.ctx.notifier.success("状态已更新");
    if let Some(course) = service.items.iter_mut().find(|c| c.id == course_id) {
        course.status = course.status.toggled();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::models::courses::entities::CourseStatus;
    use crate::services::CourseService;
    use crate::services::courses::fixtures::{course_json, list_json};
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_toggle_flips_local_status() {
        let h = harness(true);
        h.backend
            .register_typed(routes::course::GET_LIST, |_: Value| async move {
                Ok::<_, String>(list_json(vec![course_json(1, 1, 1, 5), course_json(2, 2, 1, 5)]))
            });
        h.backend
            .register_typed(routes::course::TOGGLE_STATUS, |_: Value| async move {
                Ok::<_, String>(json!(null))
            });
        let mut service = CourseService::new(h.ctx.clone());
        service.load().await.unwrap();

        service.toggle_status(1).await.unwrap();
        assert_eq!(service.items[0].status, CourseStatus::Paused);
        assert_eq!(
            h.backend.last_payload(routes::course::TOGGLE_STATUS).unwrap(),
            json!({"course_id": 1})
        );

        let err = service.toggle_status(2).await.unwrap_err();
        assert_eq!(err.code(), "E006");
        assert_eq!(h.notifier.last().unwrap().message, "请先恢复学员档案状态");
        assert_eq!(service.items[1].status, CourseStatus::Active);
    }
}
