use super::SubjectService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::subjects::entities::Subject;
use crate::models::subjects::requests::DeleteSubjectRequest;

pub async fn delete_subject(service: &mut SubjectService, subject: &Subject) -> Result<bool> {
    if subject.student_count > 0 {
        let message = format!(
            "无法删除：该科目下仍有 {} 名在读学员。",
            subject.student_count
        );
        service.ctx.notifier.warning(&message);
        return Err(TuitionError::validation(message));
    }

    let text = format!("确定要永久删除 \"{}\" 吗？此操作无法撤销。", subject.name);
    if !service.ctx.confirm.confirm("删除确认", &text).await {
        return Ok(false);
    }

    service
        .ctx
        .client
        .call_unit(routes::subject::DELETE, &DeleteSubjectRequest { id: subject.id })
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    service
        .ctx
        .notifier
        .success(&format!("科目 {} 已删除", subject.name));
    service.load().await?;
    Ok(true)
}
