pub mod activate;
pub mod create;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;

use chrono::{Local, NaiveDate};
use std::sync::Arc;

use super::{ExportOutcome, ServiceContext};
use crate::errors::Result;
use crate::models::common::PageState;
use crate::models::records::entities::Record;
use crate::models::records::requests::{CreateRecordRequest, RecordFilters};
use crate::utils::date_range::DatePreset;
use crate::utils::debounce::Debouncer;

pub use import::{FileSelection, ImportOutcome};

pub struct RecordService {
    ctx: ServiceContext,
    pub filters: RecordFilters,
    pub page: PageState,
    pub items: Vec<Record>,
    pub total_pending: i64,
    pub loading: bool,
    search_debouncer: Arc<Debouncer>,
}

impl RecordService {
    pub fn new(ctx: ServiceContext) -> Self {
        let page = PageState::new(ctx.ui.page_size);
        let search_debouncer = Arc::new(Debouncer::from_millis(ctx.ui.record_search_debounce_ms));
        Self {
            ctx,
            filters: RecordFilters::default(),
            page,
            items: Vec::new(),
            total_pending: 0,
            loading: false,
            search_debouncer,
        }
    }

    pub(crate) fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn search_debouncer(&self) -> Arc<Debouncer> {
        self.search_debouncer.clone()
    }

    /// 筛选栏上的日期文本，全部时间时为空
    pub fn date_range_text(&self) -> String {
        if self.filters.date == DatePreset::All {
            return String::new();
        }
        self.filters.date.range_text(Self::today())
    }

    pub async fn load(&mut self) -> Result<()> {
        list::load_records(self).await
    }

    pub async fn set_page(&mut self, page: i64, items_per_page: i64) -> Result<()> {
        self.page.set_page(page, items_per_page);
        self.load().await
    }

    // 任一筛选条件变化都回到第一页
    pub async fn apply_filters(&mut self, filters: RecordFilters) -> Result<()> {
        list::apply_filters(self, filters).await
    }

    pub async fn select_date_preset(&mut self, preset: DatePreset) -> Result<()> {
        let filters = RecordFilters {
            date: preset,
            ..self.filters.clone()
        };
        self.apply_filters(filters).await
    }

    pub async fn clear_all_filters(&mut self) -> Result<()> {
        self.ctx.notifier.info("已清空所有筛选条件");
        self.apply_filters(RecordFilters::default()).await
    }

    pub async fn create_record(&mut self, req: CreateRecordRequest) -> Result<()> {
        create::create_record(self, req).await
    }

    pub async fn activate_record(&mut self, id: i64) -> Result<()> {
        activate::activate_record(self, id).await
    }

    /// 需要确认，取消时返回 `Ok(false)`
    pub async fn activate_all_pending(&mut self) -> Result<bool> {
        activate::activate_all_pending(self).await
    }

    pub async fn delete_record(&mut self, record: &Record) -> Result<bool> {
        delete::delete_record(self, record).await
    }

    pub async fn export_records(&self) -> Result<ExportOutcome> {
        export::export_records(self).await
    }

    pub async fn download_template(&self) -> Result<ExportOutcome> {
        export::download_template(self).await
    }

    pub async fn select_import_file(&self) -> Result<FileSelection> {
        import::select_import_file(self).await
    }

    pub async fn import_records(&mut self, filepath: &str) -> Result<ImportOutcome> {
        import::import_records(self, filepath).await
    }
}
