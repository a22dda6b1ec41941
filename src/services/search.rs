use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error};

use super::ServiceContext;
use crate::dispatch::routes;
use crate::errors::Result;
use crate::models::common::PaginationQuery;
use crate::models::students::{requests::GetStudentListRequest, responses::GetStudentListResponse};
use crate::models::subjects::{requests::GetSubjectListRequest, responses::GetSubjectListResponse};
use crate::models::teachers::{requests::GetTeacherListRequest, responses::GetTeacherListResponse};
use crate::utils::debounce::Debouncer;
use crate::utils::options::{SelectOption, merge_keep_selected, selected_names_summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTarget {
    Students,
    Teachers,
    Subjects,
}

impl SearchTarget {
    /// 已选摘要的前缀和量词
    fn summary_words(&self) -> (&'static str, &'static str) {
        match self {
            SearchTarget::Students => ("学生", "人"),
            SearchTarget::Teachers => ("老师", "人"),
            SearchTarget::Subjects => ("科目", "个"),
        }
    }
}

/// 下拉框的远程搜索，输入经过防抖，已选中的选项不会因为新结果而丢失
pub struct OptionSearch {
    ctx: ServiceContext,
    target: SearchTarget,
    debouncer: Debouncer,
    options: Mutex<Vec<SelectOption>>,
    loading: AtomicBool,
}

impl OptionSearch {
    pub fn new(ctx: ServiceContext, target: SearchTarget, debounce_ms: u64) -> Self {
        Self {
            ctx,
            target,
            debouncer: Debouncer::from_millis(debounce_ms),
            options: Mutex::new(Vec::new()),
            loading: AtomicBool::new(false),
        }
    }

    pub fn options(&self) -> Vec<SelectOption> {
        self.options.lock().map(|o| o.clone()).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// 直接设置选项（例如从详情页带入的已选学员）
    pub fn set_options(&self, options: Vec<SelectOption>) {
        if let Ok(mut current) = self.options.lock() {
            *current = options;
        }
    }

    pub fn summary(&self, selected: &[i64]) -> String {
        let (prefix, unit) = self.target.summary_words();
        selected_names_summary(selected, &self.options(), prefix, unit)
    }

    /// 按关键字搜索，返回本次输入是否真正发起了查询
    ///
    /// 空关键字不查询；被后续输入取代的调用直接返回 false。
    pub async fn search(&self, keyword: &str, selected: &[i64]) -> Result<bool> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(false);
        }
        if !self.debouncer.settle().await {
            debug!("Search '{}' superseded", keyword);
            return Ok(false);
        }

        self.loading.store(true, Ordering::SeqCst);
        let result = self.fetch(keyword).await;
        self.loading.store(false, Ordering::SeqCst);

        let fresh = result.inspect_err(|e| error!("搜索{:?}失败: {}", self.target, e))?;
        let current = self.options();
        self.set_options(merge_keep_selected(&current, selected, fresh));
        Ok(true)
    }

    async fn fetch(&self, keyword: &str) -> Result<Vec<SelectOption>> {
        let pagination = PaginationQuery::first(self.ctx.ui.search_page_size);
        let client = &self.ctx.client;
        let options = match self.target {
            SearchTarget::Students => {
                let req = GetStudentListRequest {
                    keyword: keyword.to_string(),
                    pagination,
                    status: 0,
                };
                let resp: GetStudentListResponse =
                    client.call(routes::student::GET_LIST, &req).await?;
                resp.students.iter().map(SelectOption::from).collect()
            }
            SearchTarget::Teachers => {
                let req = GetTeacherListRequest {
                    key: keyword.to_string(),
                    pagination,
                };
                let resp: GetTeacherListResponse =
                    client.call(routes::teacher::GET_LIST, &req).await?;
                resp.teachers.iter().map(SelectOption::from).collect()
            }
            SearchTarget::Subjects => {
                let req = GetSubjectListRequest {
                    keyword: keyword.to_string(),
                    pagination,
                };
                let resp: GetSubjectListResponse =
                    client.call(routes::subject::GET_LIST, &req).await?;
                resp.subjects.iter().map(SelectOption::from).collect()
            }
        };
        Ok(options)
    }
}
