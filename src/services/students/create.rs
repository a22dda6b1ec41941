use tracing::info;

use super::StudentService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::students::requests::CreateStudentRequest;
use crate::utils::validate::validate_person;

pub async fn create_student(service: &mut StudentService, req: CreateStudentRequest) -> Result<()> {
    if let Err(e) = validate_person(&req.name, &req.phone, &req.remark) {
        service.ctx.reject(&e);
        return Err(e);
    }

    let req = CreateStudentRequest {
        name: req.name.trim().to_string(),
        ..req
    };
    if let Err(e) = service.ctx.client.call_unit(routes::student::CREATE, &req).await {
        service.ctx.report("添加学生失败", &e);
        return Err(e);
    }

    info!("Student created: {}", req.name);
    service.ctx.notifier.success("学生添加成功");
    service.load().await
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::models::common::Gender;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::notify::ToastLevel;
    use crate::services::StudentService;
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    fn form(name: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            gender: Gender::Female,
            phone: "13800000000".into(),
            remark: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_reloads_list() {
        let h = harness(true);
        h.backend
            .register_typed(routes::student::CREATE, |_: Value| async move { Ok::<_, String>(json!(null)) });
        h.backend
            .register_typed(routes::student::GET_LIST, |_: Value| async move {
                Ok::<_, String>(json!({"students": [], "total": 0}))
            });
        let mut service = StudentService::new(h.ctx.clone());
        service.create_student(form(" 李四 ")).await.unwrap();

        let payload = h.backend.last_payload(routes::student::CREATE).unwrap();
        assert_eq!(payload["name"], json!("李四"));
        assert_eq!(payload["gender"], json!("female"));
        let routes_called: Vec<String> = h.backend.calls().into_iter().map(|(r, _)| r).collect();
        assert_eq!(routes_called, vec![routes::student::CREATE, routes::student::GET_LIST]);
        assert_eq!(h.notifier.toasts()[0].level, ToastLevel::Success);
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected_locally() {
        let h = harness(true);
        let mut service = StudentService::new(h.ctx.clone());
        let err = service.create_student(form("  ")).await.unwrap_err();
        assert_eq!(err.code(), "E004");
        assert!(h.backend.calls().is_empty());
        assert_eq!(h.notifier.last().unwrap().message, "姓名不能为空");
    }
}
