use super::DashboardService;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::dashboard::entities::{FinanceRange, HeatmapGrid};
use crate::models::dashboard::requests::GetFinanceDataRequest;
use crate::models::dashboard::responses::{ChartData, FinanceChart, StatsChart, TeacherRank};

// 切换范围时即使请求失败也保留用户的选择
pub async fn load_finance(service: &mut DashboardService, range: FinanceRange) -> Result<()> {
    service.finance_range = range;
    let chart: FinanceChart = service
        .ctx
        .client
        .call(routes::dashboard::FINANCE_CHART, &GetFinanceDataRequest { range })
        .await
        .inspect_err(|e| service.ctx.report("加载数据失败", e))?;
    service.finance = chart;
    Ok(())
}

pub async fn load_teacher_rank(service: &mut DashboardService) -> Result<()> {
    let rank: TeacherRank = service
        .ctx
        .client
        .call_no_req(routes::dashboard::TEACHER_RANK)
        .await
        .inspect_err(|e| service.ctx.report("加载数据失败", e))?;
    service.teacher_rank = rank;
    Ok(())
}

pub async fn load_heatmap(service: &mut DashboardService) -> Result<()> {
    let triples: Option<Vec<Vec<i64>>> = service
        .ctx
        .client
        .call_no_req(routes::dashboard::HEATMAP)
        .await
        .inspect_err(|e| service.ctx.report("加载数据失败", e))?;
    service.heatmap = Some(HeatmapGrid::from_triples(&triples.unwrap_or_default()));
    Ok(())
}

pub async fn load_student_growth(service: &mut DashboardService) -> Result<()> {
    let growth: ChartData = service
        .ctx
        .client
        .call_no_req(routes::dashboard::STUDENT_GROWTH)
        .await
        .inspect_err(|e| service.ctx.report("加载数据失败", e))?;
    service.student_growth = growth;
    Ok(())
}

async fn load_stats(service: &DashboardService, route: &str) -> Result<StatsChart> {
    service
        .ctx
        .client
        .call_no_req::<Option<StatsChart>>(route)
        .await
        .map(Option::unwrap_or_default)
        .inspect_err(|e| service.ctx.report("加载数据失败", e))
}

pub async fn load_student_engagement(service: &mut DashboardService) -> Result<()> {
    let stats = load_stats(service, routes::dashboard::STUDENT_ENGAGEMENT).await?;
    service.student_engagement = stats;
    Ok(())
}

pub async fn load_student_balance(service: &mut DashboardService) -> Result<()> {
    let stats = load_stats(service, routes::dashboard::STUDENT_BALANCE).await?;
    service.student_balance = stats;
    Ok(())
}
