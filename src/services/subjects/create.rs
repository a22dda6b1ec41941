use super::SubjectService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::utils::validate::validate_name;

/// 科目名称为空时只给出警告
pub(super) fn checked_name(service: &SubjectService, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        service.ctx.notifier.warning("科目名称不能为空");
        return Err(TuitionError::validation("科目名称不能为空"));
    }
    validate_name(name, "科目名称").inspect_err(|e| service.ctx.reject(e))?;
    Ok(name.to_string())
}

pub async fn create_subject(service: &mut SubjectService, name: &str) -> Result<()> {
    let name = checked_name(service, name)?;
    service
        .ctx
        .client
        .call_unit(routes::subject::CREATE, &CreateSubjectRequest { name })
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    service.ctx.notifier.success("科目添加成功");
    service.load().await
}

#[cfg(test)]
mod tests {
    use crate::dispatch::routes;
    use crate::notify::ToastLevel;
    use crate::services::SubjectService;
    use crate::services::testing::harness;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_empty_name_warns() {
        let h = harness(true);
        let mut service = SubjectService::new(h.ctx.clone());
        assert!(service.create_subject(" ").await.is_err());
        let toast = h.notifier.last().unwrap();
        assert_eq!(toast.level, ToastLevel::Warning);
        assert_eq!(toast.message, "科目名称不能为空");
        assert!(h.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_name_shows_backend_message() {
        let h = harness(true);
        h.backend
            .register_typed(routes::subject::CREATE, |req: Value| async move {
                assert_eq!(req, json!({"name": "钢琴"}));
                Err::<Value, _>("科目名称已存在".to_string())
            });
        let mut service = SubjectService::new(h.ctx.clone());
        assert!(service.create_subject("钢琴").await.is_err());
        assert_eq!(h.notifier.last().unwrap().message, "科目名称已存在");
    }
}
