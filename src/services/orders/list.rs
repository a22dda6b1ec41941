use tracing::debug;

use super::OrderService;
use crate::dispatch::routes;
use crate::errors::{Result, TuitionError};
use crate::models::orders::entities::OrderRow;
use crate::models::orders::requests::OrderFilters;
use crate::models::orders::responses::GetOrderListResponse;
use crate::utils::date_range::parse_date;

pub async fn load_orders(service: &mut OrderService) -> Result<()> {
    let req = service.filters.to_request(service.page.query());
    debug!("Loading orders: {:?}", req);
    service.loading = true;
    let result: Result<GetOrderListResponse> =
        service.ctx.client.call(routes::order::GET_LIST, &req).await;
    service.loading = false;

    let resp = result.inspect_err(|e| service.ctx.report("获取订单列表失败", e))?;
    service.items = resp.orders.into_iter().map(OrderRow::from).collect();
    service.page.total = resp.total;
    Ok(())
}

// 起止日期允许只填一侧
fn validate_dates(filters: &OrderFilters) -> Result<()> {
    let start = (!filters.date_start.is_empty())
        .then(|| parse_date(&filters.date_start))
        .transpose()?;
    let end = (!filters.date_end.is_empty())
        .then(|| parse_date(&filters.date_end))
        .transpose()?;
    match (start, end) {
        (Some(start), Some(end)) if start > end => {
            Err(TuitionError::validation("开始日期不能晚于结束日期"))
        }
        _ => Ok(()),
    }
}

pub async fn apply_filters(service: &mut OrderService, filters: OrderFilters) -> Result<()> {
    validate_dates(&filters).inspect_err(|e| service.ctx.reject(e))?;
    service.filters = filters;
    service.page.reset();
    service.load().await
}
