//! 各实体的管理器
//!
//! 每个管理器持有筛选条件、分页状态和当前页数据，所有后端调用都经过
//! [`DispatchClient`]，结果通过 [`Notifier`] 提示给用户。

pub mod courses;
pub mod dashboard;
pub mod orders;
pub mod records;
pub mod search;
pub mod students;
pub mod subjects;
pub mod teachers;

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::UiConfig;
use crate::dispatch::DispatchClient;
use crate::errors::{Result, TuitionError};
use crate::models::common::ApiResponse;
use crate::notify::{Confirm, Notifier};

pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use orders::OrderService;
pub use records::RecordService;
pub use search::OptionSearch;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use teachers::TeacherService;

/// 管理器共享的依赖
#[derive(Clone)]
pub struct ServiceContext {
    pub client: DispatchClient,
    pub notifier: Arc<dyn Notifier>,
    pub confirm: Arc<dyn Confirm>,
    pub ui: UiConfig,
}

impl ServiceContext {
    pub fn new(
        client: DispatchClient,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn Confirm>,
        ui: UiConfig,
    ) -> Self {
        Self {
            client,
            notifier,
            confirm,
            ui,
        }
    }

    /// 记录错误并提示用户，`prefix` 为空时直接显示错误详情
    pub(crate) fn report(&self, prefix: &str, err: &TuitionError) {
        error!("{} [{}] {}", prefix, err.code(), err.message());
        if prefix.is_empty() {
            self.notifier.error(err.message());
        } else {
            self.notifier.error(&format!("{prefix}: {}", err.message()));
        }
    }

    /// 校验失败或状态拦截只提示，不记错误日志
    pub(crate) fn reject(&self, err: &TuitionError) {
        info!("Rejected [{}] {}", err.code(), err.message());
        self.notifier.error(err.message());
    }
}

/// 导出或保存文件的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(String), // 文件路径
    Cancelled,
}

impl ExportOutcome {
    /// 成功响应的 `data` 为文件路径，用户取消时为取消标记
    pub(crate) fn from_envelope(resp: ApiResponse<Value>) -> Result<Self> {
        if !resp.is_success() {
            return Err(TuitionError::backend(resp.message));
        }
        if resp.is_cancelled() {
            return Ok(ExportOutcome::Cancelled);
        }
        match resp.data {
            Some(Value::String(path)) => Ok(ExportOutcome::Saved(path)),
            Some(Value::Null) | None => Ok(ExportOutcome::Saved(String::new())),
            Some(other) => Ok(ExportOutcome::Saved(other.to_string())),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ExportOutcome::Cancelled)
    }
}

/// 调用导出类接口，`req` 为 None 时发送空负载
pub(crate) async fn export_file<Req: Serialize>(
    ctx: &ServiceContext,
    route: &str,
    req: Option<&Req>,
) -> Result<ExportOutcome> {
    let payload = match req {
        Some(req) => DispatchClient::encode(req)?,
        None => String::new(),
    };
    let resp = ctx.client.envelope(route, payload).await?;
    ExportOutcome::from_envelope(resp).inspect_err(|e| error!("API Error [{}]: {}", route, e))
}

/// 导出结果的统一提示
pub(crate) fn notify_export(
    ctx: &ServiceContext,
    result: &Result<ExportOutcome>,
    success_prefix: &str,
    failure_prefix: &str,
) {
    match result {
        Ok(ExportOutcome::Cancelled) => ctx.notifier.info("已取消导出操作"),
        Ok(ExportOutcome::Saved(path)) if path.is_empty() => ctx.notifier.success(success_prefix),
        Ok(ExportOutcome::Saved(path)) => {
            ctx.notifier.success(&format!("{success_prefix}: {path}"))
        }
        Err(e) => ctx.report(failure_prefix, e),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::dispatch::MemoryDispatch;
    use crate::notify::{AutoConfirm, RecordingNotifier};

    pub fn ui_config() -> UiConfig {
        UiConfig {
            page_size: 10,
            search_page_size: 25,
            search_debounce_ms: 0,
            record_search_debounce_ms: 0,
            low_balance_threshold: 5,
        }
    }

    pub struct Harness {
        pub backend: MemoryDispatch,
        pub notifier: Arc<RecordingNotifier>,
        pub ctx: ServiceContext,
    }

    pub fn harness(confirm: bool) -> Harness {
        let backend = MemoryDispatch::recording();
        let notifier = Arc::new(RecordingNotifier::new());
        let ctx = ServiceContext::new(
            DispatchClient::new(Arc::new(backend.clone())),
            notifier.clone(),
            Arc::new(AutoConfirm(confirm)),
            ui_config(),
        );
        Harness {
            backend,
            notifier,
            ctx,
        }
    }
}
