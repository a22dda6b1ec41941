pub mod charts;
pub mod summary;

use super::ServiceContext;
use crate::errors::Result;
use crate::models::dashboard::entities::{FinanceRange, HeatmapGrid};
use crate::models::dashboard::responses::{
    ChartData, DashboardSummaryResponse, FinanceChart, StatsChart, TeacherRank,
};

/// 首页看板，各图表独立加载
pub struct DashboardService {
    ctx: ServiceContext,
    pub summary: DashboardSummaryResponse,
    pub finance_range: FinanceRange,
    pub finance: FinanceChart,
    pub teacher_rank: TeacherRank,
    pub heatmap: Option<HeatmapGrid>,
    pub student_growth: ChartData,
    pub student_engagement: StatsChart,
    pub student_balance: StatsChart,
    pub loading: bool,
}

impl DashboardService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            summary: DashboardSummaryResponse::default(),
            finance_range: FinanceRange::default(),
            finance: FinanceChart::default(),
            teacher_rank: TeacherRank::default(),
            heatmap: None,
            student_growth: ChartData::default(),
            student_engagement: StatsChart::default(),
            student_balance: StatsChart::default(),
            loading: false,
        }
    }

    pub async fn load_summary(&mut self) -> Result<()> {
        summary::load_summary(self).await
    }

    pub async fn load_finance(&mut self, range: FinanceRange) -> Result<()> {
        charts::load_finance(self, range).await
    }

    pub async fn load_teacher_rank(&mut self) -> Result<()> {
        charts::load_teacher_rank(self).await
    }

    pub async fn load_heatmap(&mut self) -> Result<()> {
        charts::load_heatmap(self).await
    }

    pub async fn load_student_growth(&mut self) -> Result<()> {
        charts::load_student_growth(self).await
    }

    pub async fn load_student_engagement(&mut self) -> Result<()> {
        charts::load_student_engagement(self).await
    }

    pub async fn load_student_balance(&mut self) -> Result<()> {
        charts::load_student_balance(self).await
    }

    /// 刷新整个看板，遇到第一个错误即停止
    pub async fn refresh(&mut self) -> Result<()> {
        self.loading = true;
        let result = async {
            self.load_summary().await?;
            self.load_finance(self.finance_range).await?;
            self.load_teacher_rank().await?;
            self.load_heatmap().await?;
            self.load_student_growth().await?;
            self.load_student_engagement().await?;
            self.load_student_balance().await
        }
        .await;
        self.loading = false;
        result
    }
}
