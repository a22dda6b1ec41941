use super::CourseService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::courses::responses::GetCourseListResponse;

pub async fn load_courses(service: &mut CourseService) -> Result<()> {
    let req = service.filters.to_request(service.page.query());
    service.loading = true;
    let result: Result<GetCourseListResponse> =
        service.ctx.client.call(routes::course::GET_LIST, &req).await;
    service.loading = false;

    match result {
        Ok(resp) => {
            service.items = resp.courses;
            service.page.total = resp.total;
            Ok(())
        }
        Err(e) => {
            // 加载失败时不保留旧数据
            service.items.clear();
            service.page.total = 0;
            service.ctx.report("获取课程列表失败", &e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::models::courses::entities::CourseStatusFilter;
    use crate::models::courses::requests::CourseFilters;
    use crate::services::CourseService;
    use crate::services::courses::fixtures::{course_json, list_json};
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_filters_are_omitted_when_empty() {
        let h = harness(true);
        h.backend
            .register_typed(routes::course::GET_LIST, |_: Value| async move {
                Ok::<_, String>(list_json(vec![course_json(1, 1, 1, 12)]))
            });
        let mut service = CourseService::new(h.ctx.clone());
        service.load().await.unwrap();
        assert_eq!(
            h.backend.last_payload(routes::course::GET_LIST).unwrap(),
            json!({"offset": 0, "limit": 10, "keyword": ""})
        );
        assert_eq!(service.items[0].balance, 12);

        service
            .apply_filters(CourseFilters {
                student_id: Some(1),
                balance_max: Some(5),
                status: vec![CourseStatusFilter::StudentWithdrawn],
                ..Default::default()
            })
            .await
            .unwrap();
        let payload = h.backend.last_payload(routes::course::GET_LIST).unwrap();
        assert_eq!(payload["students"], json!([1]));
        assert_eq!(payload["balance_max"], json!(5));
        assert_eq!(payload["status"], json!([5]));
        assert!(payload.get("balance_min").is_none());
    }

    #[tokio::test]
    async fn test_failed_load_clears_items() {
        let h = harness(true);
        h.backend
            .register_typed(routes::course::GET_LIST, |_: Value| async move {
                Ok::<_, String>(list_json(vec![course_json(1, 1, 1, 12)]))
            });
        let mut service = CourseService::new(h.ctx.clone());
        service.load().await.unwrap();

        h.backend
            .register_typed(routes::course::GET_LIST, |_: Value| async move {
                Err::<Value, _>("查询失败".to_string())
            });
        assert!(service.load().await.is_err());
        assert!(service.items.is_empty());
        assert_eq!(service.page.total, 0);
    }
}
