pub mod create;
pub mod delete;
pub mod export;
pub mod list;
pub mod update;

use std::sync::Arc;

use super::{ExportOutcome, ServiceContext};
use crate::errors::Result;
use crate::models::common::PageState;
use crate::models::students::entities::{Student, StudentStatus};
use crate::models::students::requests::{
    CreateStudentRequest, StudentFilters, UpdateStudentRequest,
};
use crate::utils::debounce::Debouncer;

pub struct StudentService {
    ctx: ServiceContext,
    pub filters: StudentFilters,
    pub page: PageState,
    pub items: Vec<Student>,
    pub loading: bool,
    search_debouncer: Arc<Debouncer>,
}

impl StudentService {
    pub fn new(ctx: ServiceContext) -> Self {
        let page = PageState::new(ctx.ui.page_size);
        let search_debouncer = Arc::new(Debouncer::from_millis(ctx.ui.search_debounce_ms));
        Self {
            ctx,
            filters: StudentFilters::default(),
            page,
            items: Vec::new(),
            loading: false,
            search_debouncer,
        }
    }

    /// 关键字输入的防抖器，放行后再调用 [`Self::set_keyword`]
    pub fn search_debouncer(&self) -> Arc<Debouncer> {
        self.search_debouncer.clone()
    }

    // 按当前筛选条件和分页加载
    pub async fn load(&mut self) -> Result<()> {
        list::load_students(self).await
    }

    // 表格翻页
    pub async fn set_page(&mut self, page: i64, items_per_page: i64) -> Result<()> {
        self.page.set_page(page, items_per_page);
        self.load().await
    }

    pub async fn set_keyword(&mut self, keyword: &str) -> Result<()> {
        self.filters.keyword = keyword.to_string();
        self.page.reset();
        self.load().await
    }

    pub async fn set_status_filter(&mut self, status: Option<StudentStatus>) -> Result<()> {
        self.filters.status = status;
        self.page.reset();
        self.load().await
    }

    pub async fn create_student(&mut self, req: CreateStudentRequest) -> Result<()> {
        create::create_student(self, req).await
    }

    pub async fn update_student(&mut self, req: UpdateStudentRequest) -> Result<()> {
        update::update_student(self, req).await
    }

    /// 删除前需要用户确认，取消时返回 `Ok(false)`
    pub async fn delete_student(&mut self, student: &Student) -> Result<bool> {
        delete::delete_student(self, student).await
    }

    pub async fn export_students(&self) -> Result<ExportOutcome> {
        export::export_students(self).await
    }
}
