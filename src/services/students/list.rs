use tracing::debug;

use super::StudentService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::students::responses::GetStudentListResponse;

pub async fn load_students(service: &mut StudentService) -> Result<()> {
    let req = service.filters.to_request(service.page.query());
    service.loading = true;
    let result: Result<GetStudentListResponse> =
        service.ctx.client.call(routes::student::GET_LIST, &req).await;
    service.loading = false;

    match result {
        Ok(resp) => {
            debug!("Loaded {} of {} students", resp.students.len(), resp.total);
            service.items = resp.students;
            service.page.total = resp.total;
            Ok(())
        }
        Err(e) => {
            service.ctx.report("获取学生列表失败", &e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::models::students::entities::StudentStatus;
    use crate::services::StudentService;
    use crate::services::students::fixtures::student_json;
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_load_sends_filters_and_offsets() {
        let h = harness(true);
        h.backend
            .register_typed(routes::student::GET_LIST, |_: Value| async move {
                Ok::<_, String>(json!({"students": [student_json(1, "张三", 2)], "total": 31}))
            });
        let mut service = StudentService::new(h.ctx.clone());
        service.filters.status = Some(StudentStatus::Suspended);
        service.set_page(3, 10).await.unwrap();

        let payload = h.backend.last_payload(routes::student::GET_LIST).unwrap();
        assert_eq!(payload["offset"], json!(20));
        assert_eq!(payload["limit"], json!(10));
        assert_eq!(payload["status"], json!(2));
        assert_eq!(service.items.len(), 1);
        assert_eq!(service.page.total, 31);
    }

    #[tokio::test]
    async fn test_keyword_change_resets_page() {
        let h = harness(true);
        h.backend
            .register_typed(routes::student::GET_LIST, |_: Value| async move {
                Ok::<_, String>(json!({"students": null, "total": 0}))
            });
        let mut service = StudentService::new(h.ctx.clone());
        service.page.page = 4;
        service.set_keyword(" 张 ").await.unwrap();
        let payload = h.backend.last_payload(routes::student::GET_LIST).unwrap();
        assert_eq!(payload["offset"], json!(0));
        assert_eq!(payload["keyword"], json!("张"));
        assert!(service.items.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_notifies() {
        let h = harness(true);
        h.backend
            .register_typed(routes::student::GET_LIST, |_: Value| async move {
                Err::<Value, _>("数据库连接失败".to_string())
            });
        let mut service = StudentService::new(h.ctx.clone());
        assert!(service.load().await.is_err());
        assert_eq!(
            h.notifier.last().unwrap().message,
            "获取学生列表失败: 数据库连接失败"
        );
    }
}
