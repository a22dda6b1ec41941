use super::StudentService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::students::entities::Student;
use crate::models::students::requests::DeleteStudentRequest;

pub async fn delete_student(service: &mut StudentService, student: &Student) -> Result<bool> {
    let text = format!("确定要永久删除 \"{}\" 吗？此操作无法撤销。", student.name);
    if !service.ctx.confirm.confirm("删除确认", &text).await {
        return Ok(false);
    }

    let req = DeleteStudentRequest { id: student.id };
    if let Err(e) = service.ctx.client.call_unit(routes::student::DELETE, &req).await {
        service.ctx.report("删除学生失败", &e);
        return Err(e);
    }

    service
        .ctx
        .notifier
        .success(&format!("学生 {} 已删除", student.name));
    service.load().await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::models::students::entities::Student;
    use crate::services::StudentService;
    use crate::services::students::fixtures::student_json;
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    fn student() -> Student {
        serde_json::from_value(student_json(5, "王五", 1)).unwrap()
    }

    #[tokio::test]
    async fn test_declined_confirmation_skips_dispatch() {
        let h = harness(false);
        let mut service = StudentService::new(h.ctx.clone());
        assert!(!service.delete_student(&student()).await.unwrap());
        assert!(h.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_delete() {
        let h = harness(true);
        h.backend
            .register_typed(routes::student::DELETE, |_: Value| async move { Ok::<_, String>(json!(null)) });
        h.backend
            .register_typed(routes::student::GET_LIST, |_: Value| async move {
                Ok::<_, String>(json!({"students": [], "total": 0}))
            });
        let mut service = StudentService::new(h.ctx.clone());
        assert!(service.delete_student(&student()).await.unwrap());
        assert_eq!(
            h.backend.last_payload(routes::student::DELETE).unwrap(),
            json!({"id": 5})
        );
    }
}
