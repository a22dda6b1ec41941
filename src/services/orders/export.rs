use super::OrderService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::services::{ExportOutcome, export_file};

// 与列表相同的筛选条件，不分页
pub async fn export_orders(service: &OrderService) -> Result<ExportOutcome> {
    service.ctx.notifier.info("正在导出订单数据，请稍候...");
    let req = service.filters.to_request(PaginationQuery::all());
    let result = export_file(&service.ctx, routes::order::EXPORT, Some(&req)).await;
    match &result {
        Ok(ExportOutcome::Cancelled) => service.ctx.notifier.info("已取消导出操作"),
        Ok(ExportOutcome::Saved(_)) => service
            .ctx
            .notifier
            .success("订单数据已成功导出至 Excel 文件"),
        Err(e) => service.ctx.report("导出订单数据异常", e),
    }
    result
}
