use super::DashboardService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::dashboard::responses::DashboardSummaryResponse;

pub async fn load_summary(service: &mut DashboardService) -> Result<()> {
    let summary: DashboardSummaryResponse = service
        .ctx
        .client
        .call_no_req(routes::dashboard::SUMMARY)
        .await
        .inspect_err(|e| service.ctx.report("加载数据失败", e))?;
    service.summary = summary;
    Ok(())
}
