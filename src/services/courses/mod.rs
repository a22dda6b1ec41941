pub mod create;
pub mod delete;
pub mod filters;
pub mod list;
pub mod recharge;
pub mod toggle;
pub mod update;

use std::sync::Arc;

use super::ServiceContext;
use crate::errors::{Result, TuitionError};
use crate::models::common::PageState;
use crate::models::courses::entities::Course;
use crate::models::courses::requests::{CourseFilters, CreateCourseRequest, UpdateCourseRequest};
use crate::utils::debounce::Debouncer;
use crate::utils::options::{FilterChip, SelectOption};
use crate::utils::status::{StatusDescriptor, effective_course_status};

pub use recharge::{RechargeForm, RechargeMode};

pub struct CourseService {
    ctx: ServiceContext,
    pub filters: CourseFilters,
    pub page: PageState,
    pub items: Vec<Course>,
    pub loading: bool,
    search_debouncer: Arc<Debouncer>,
}

impl CourseService {
    pub fn new(ctx: ServiceContext) -> Self {
        let page = PageState::new(ctx.ui.page_size);
        let search_debouncer = Arc::new(Debouncer::from_millis(ctx.ui.search_debounce_ms));
        Self {
            ctx,
            filters: CourseFilters::default(),
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
        list::load_courses(self).await
    }

    pub async fn set_page(&mut self, page: i64, items_per_page: i64) -> Result<()> {
        self.page.set_page(page, items_per_page);
        self.load().await
    }

    // 应用新的筛选条件并回到第一页
    pub async fn apply_filters(&mut self, filters: CourseFilters) -> Result<()> {
        self.filters = filters;
        self.page.reset();
        self.load().await
    }

    pub fn active_filters(&self, subjects: &[SelectOption], teachers: &[SelectOption]) -> Vec<FilterChip> {
        filters::active_filters(&self.filters, subjects, teachers)
    }

    pub async fn clear_filter(&mut self, key: &str) -> Result<()> {
        filters::clear_filter(&mut self.filters, key);
        self.page.reset();
        self.load().await
    }

    pub fn course(&self, course_id: i64) -> Result<&Course> {
        self.items
            .iter()
            .find(|c| c.id == course_id)
            .ok_or_else(|| TuitionError::validation(format!("课程 {course_id} 不在当前列表中")))
    }

    pub fn status_of(&self, course_id: i64) -> Result<StatusDescriptor> {
        self.course(course_id).map(effective_course_status)
    }

    // 新课报名
    pub async fn enroll(&mut self, req: CreateCourseRequest) -> Result<()> {
        create::enroll_course(self, req).await
    }

    // 更换教师或修改备注
    pub async fn update_course(&mut self, req: UpdateCourseRequest) -> Result<()> {
        update::update_course(self, req).await
    }

    /// 打开充值/扣除弹窗前的状态检查，通过后返回带默认值的表单
    pub fn begin_recharge(&self, course_id: i64, mode: RechargeMode) -> Result<RechargeForm> {
        recharge::begin_recharge(self, course_id, mode)
    }

    pub async fn submit_recharge(&mut self, form: &RechargeForm) -> Result<()> {
        recharge::submit_recharge(self, form).await
    }

    pub async fn toggle_status(&mut self, course_id: i64) -> Result<()> {
        toggle::toggle_status(self, course_id).await
    }

    /// 退课：结课并清算剩余课时，有余额时必须填写备注
    pub async fn finish_course(&mut self, course_id: i64, remark: &str) -> Result<()> {
        delete::delete_course(self, course_id, false, remark).await
    }

    /// 彻底删除课程记录
    pub async fn purge_course(&mut self, course_id: i64) -> Result<()> {
        delete::delete_course(self, course_id, true, "").await
    }
}
