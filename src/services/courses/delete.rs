use super::CourseService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::courses::requests::DeleteCourseRequest;
use crate::utils::validate::validate_course_delete;

pub async fn delete_course(
    service: &mut CourseService,
    course_id: i64,
    is_hard_delete: bool,
    remark: &str,
) -> Result<()> {
    let balance = service
        .course(course_id)
        .map(|c| c.balance)
        .inspect_err(|e| service.ctx.reject(e))?;
    validate_course_delete(balance, is_hard_delete, remark)
        .inspect_err(|e| service.ctx.reject(e))?;

    let req = DeleteCourseRequest {
        course_id,
        is_hard_delete,
        remark: remark.trim().to_string(),
    };
    service
        .ctx
        .client
        .call_unit(routes::course::DELETE, &req)
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    service.ctx.notifier.success(if is_hard_delete {
        "记录已彻底删除"
    } else {
        "已办理退课"
    });
    service.load().await
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::services::CourseService;
    use crate::services::courses::fixtures::{course_json, list_json};
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    async fn service_with_balance(h: &crate::services::testing::Harness, balance: i64) -> CourseService {
        let body = list_json(vec![course_json(1, 1, 1, balance)]);
        h.backend
            .register_typed(routes::course::GET_LIST, move |_: Value| {
                let body = body.clone();
                async move { Ok::<_, String>(body) }
            });
        h.backend
            .register_typed(routes::course::DELETE, |_: Value| async move { Ok::<_, String>(json!(null)) });
        let mut service = CourseService::new(h.ctx.clone());
        service.load().await.unwrap();
        service
    }

    #[tokio::test]
    async fn test_finish_with_balance_requires_remark() {
        let h = harness(true);
        let mut service = service_with_balance(&h, 6).await;
        assert!(service.finish_course(1, " ").await.is_err());
        assert!(h.backend.last_payload(routes::course::DELETE).is_none());

        service.finish_course(1, "退费 6 节").await.unwrap();
        assert_eq!(
            h.backend.last_payload(routes::course::DELETE).unwrap(),
            json!({"course_id": 1, "is_hard_delete": false, "remark": "退费 6 节"})
        );
        assert!(h.notifier.toasts().iter().any(|t| t.message == "已办理退课"));
    }

    #[tokio::test]
    async fn test_purge_needs_no_remark() {
        let h = harness(true);
        let mut service = service_with_balance(&h, 6).await;
        service.purge_course(1).await.unwrap();
        assert_eq!(
            h.backend.last_payload(routes::course::DELETE).unwrap()["is_hard_delete"],
            json!(true)
        );
    }
}
