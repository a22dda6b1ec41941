use tracing::debug;

use super::RecordService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::records::requests::RecordFilters;
use crate::models::records::responses::GetRecordListResponse;

pub async fn load_records(service: &mut RecordService) -> Result<()> {
    let req = service
        .filters
        .to_request(service.page.query(), RecordService::today());
    debug!("Loading records: {:?}", req);
    service.loading = true;
    let result: Result<GetRecordListResponse> =
        service.ctx.client.call(routes::record::GET_LIST, &req).await;
    service.loading = false;

    match result {
        Ok(resp) => {
            service.items = resp.records;
            service.page.total = resp.total;
            service.total_pending = resp.total_pending;
            Ok(())
        }
        Err(e) => {
            service.items.clear();
            service.page.total = 0;
            service.ctx.report("获取记录列表失败", &e);
            Err(e)
        }
    }
}

pub async fn apply_filters(service: &mut RecordService, filters: RecordFilters) -> Result<()> {
    filters.date.validate().inspect_err(|e| service.ctx.reject(e))?;
    service.filters = filters;
    service.page.reset();
    service.load().await
}
