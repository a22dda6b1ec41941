pub mod create;
pub mod delete;
pub mod export;
pub mod list;
pub mod update;

use std::sync::Arc;

use super::{ExportOutcome, ServiceContext};
use crate::errors::Result;
use crate::models::common::PageState;
use crate::models::teachers::entities::Teacher;
use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::utils::debounce::Debouncer;

pub struct TeacherService {
    ctx: ServiceContext,
    pub keyword: String,
    pub page: PageState,
    pub items: Vec<Teacher>,
    pub loading: bool,
    search_debouncer: Arc<Debouncer>,
}

impl TeacherService {
    pub fn new(ctx: ServiceContext) -> Self {
        let page = PageState::new(ctx.ui.page_size);
        let search_debouncer = Arc::new(Debouncer::from_millis(ctx.ui.search_debounce_ms));
        Self {
            ctx,
            keyword: String::new(),
            page,
            items: Vec::new(),
            loading: false,
            search_debouncer,
        }
    }

    pub fn search_debouncer(&self) -> Arc<Debouncer> {
        self.search_debouncer.clone()
    }

    pub async fn load(&mut self) -> Result<()> {
        list::load_teachers(self).await
    }

    pub async fn set_page(&mut self, page: i64, items_per_page: i64) -> Result<()> {
        self.page.set_page(page, items_per_page);
        self.load().await
    }

    pub async fn set_keyword(&mut self, keyword: &str) -> Result<()> {
        self.keyword = keyword.to_string();
        self.page.reset();
        self.load().await
    }

    pub async fn create_teacher(&mut self, req: CreateTeacherRequest) -> Result<()> {
        create::create_teacher(self, req).await
    }

    pub async fn update_teacher(&mut self, req: UpdateTeacherRequest) -> Result<()> {
        update::update_teacher(self, req).await
    }

    pub async fn delete_teacher(&mut self, teacher: &Teacher) -> Result<bool> {
        delete::delete_teacher(self, teacher).await
    }

    pub async fn export_teachers(&self) -> Result<ExportOutcome> {
        export::export_teachers(self).await
    }
}
