use super::SubjectService;
use super::create::checked_name;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::subjects::requests::UpdateSubjectRequest;

pub async fn rename_subject(service: &mut SubjectService, id: i64, name: &str) -> Result<()> {
    let name = checked_name(service, name)?;
    service
        .ctx
        .client
        .call_unit(routes::subject::UPDATE, &UpdateSubjectRequest { id, name })
        .await
        .inspect_err(|e| service.ctx.report("", e))?;

    service.ctx.notifier.success("科目更新成功");
    service.load().await
}
