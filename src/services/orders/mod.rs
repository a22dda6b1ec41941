pub mod export;
pub mod filters;
pub mod list;

use super::{ExportOutcome, ServiceContext};
use crate::errors::Result;
use crate::models::common::PageState;
use crate::models::orders::entities::OrderRow;
use crate::models::orders::requests::OrderFilters;
use crate::utils::options::{FilterChip, SelectOption};

/// 课时流水管理
pub struct OrderService {
    ctx: ServiceContext,
    pub filters: OrderFilters,
    pub page: PageState,
    pub items: Vec<OrderRow>,
    pub loading: bool,
}

impl OrderService {
    pub fn new(ctx: ServiceContext) -> Self {
        let page = PageState::new(ctx.ui.page_size);
        Self {
            ctx,
            filters: OrderFilters::default(),
            page,
            items: Vec::new(),
            loading: false,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        list::load_orders(self).await
    }

    pub async fn set_page(&mut self, page: i64, items_per_page: i64) -> Result<()> {
        self.page.set_page(page, items_per_page);
        self.load().await
    }

    pub async fn apply_filters(&mut self, filters: OrderFilters) -> Result<()> {
        list::apply_filters(self, filters).await
    }

    pub fn active_filters(&self, subjects: &[SelectOption]) -> Vec<FilterChip> {
        filters::active_filters(&self.filters, subjects)
    }

    pub async fn clear_filter(&mut self, key: &str) -> Result<()> {
        let mut filters = self.filters.clone();
        filters::clear_filter(&mut filters, key);
        self.apply_filters(filters).await
    }

    pub async fn export_orders(&self) -> Result<ExportOutcome> {
        export::export_orders(self).await
    }
}
