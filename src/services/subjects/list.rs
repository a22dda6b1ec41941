use super::SubjectService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::subjects::requests::GetSubjectListRequest;
use crate::models::subjects::responses::GetSubjectListResponse;

pub async fn load_subjects(service: &mut SubjectService) -> Result<()> {
    let req = GetSubjectListRequest {
        keyword: service.keyword.trim().to_string(),
        pagination: service.page.query(),
    };
    service.loading = true;
    let result: Result<GetSubjectListResponse> =
        service.ctx.client.call(routes::subject::GET_LIST, &req).await;
    service.loading = false;

    let resp = result.inspect_err(|e| service.ctx.report("获取科目列表失败", e))?;
    service.items = resp.subjects;
    service.page.total = resp.total;
    Ok(())
}
