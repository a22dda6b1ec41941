use super::TeacherService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::teachers::requests::GetTeacherListRequest;
use crate::models::teachers::responses::GetTeacherListResponse;

pub async fn load_teachers(service: &mut TeacherService) -> Result<()> {
    let req = GetTeacherListRequest {
        key: service.keyword.trim().to_string(),
        pagination: service.page.query(),
    };
    service.loading = true;
    let result: Result<GetTeacherListResponse> =
        service.ctx.client.call(routes::teacher::GET_LIST, &req).await;
    service.loading = false;

    let resp = result.inspect_err(|e| service.ctx.report("获取教师列表失败", e))?;
    service.items = resp.teachers;
    service.page.total = resp.total;
    Ok(())
}
