use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::dispatch::{Dispatch, DispatchClient, HttpDispatch};
use crate::errors::{Result, TuitionError};
use crate::notify::{AutoConfirm, Confirm, Notifier, TracingNotifier};
use crate::services::ServiceContext;

pub struct StartupContext {
    pub client: DispatchClient,
    pub services: ServiceContext,
}

/// 根据配置创建调度后端
fn create_dispatch(config: &AppConfig) -> Result<Arc<dyn Dispatch>> {
    let transport = config.dispatch.transport.as_str();
    warn!("Attempting to create {} dispatch backend", transport);

    match transport {
        "http" => {
            let backend = HttpDispatch::from_config(config)?;
            warn!("Dispatch backend ready at {}", backend.url());
            Ok(Arc::new(backend))
        }
        other => Err(TuitionError::config(format!(
            "Unsupported dispatch transport: {other}"
        ))),
    }
}

/// 准备客户端启动的上下文
/// 包括调度后端、提示与确认方式
pub fn prepare_client_startup() -> Result<StartupContext> {
    let config = AppConfig::get();
    prepare_with(config, Arc::new(TracingNotifier), Arc::new(AutoConfirm(false)))
}

/// 使用指定的提示与确认实现准备上下文
pub fn prepare_with(
    config: &AppConfig,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn Confirm>,
) -> Result<StartupContext> {
    let client = DispatchClient::new(create_dispatch(config)?);
    debug!(
        "UI settings: page_size={}, search_debounce_ms={}",
        config.ui.page_size, config.ui.search_debounce_ms
    );

    let services = ServiceContext::new(client.clone(), notifier, confirm, config.ui.clone());
    Ok(StartupContext { client, services })
}
