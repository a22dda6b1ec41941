use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，所有配置文件均为可选
            .set_default("app.system_name", "教务管理系统")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("dispatch.transport", "http")?
            .set_default("dispatch.endpoint", "http://127.0.0.1:34115")?
            .set_default("ui.page_size", 10)?
            .set_default("ui.search_page_size", 25)?
            .set_default("ui.search_debounce_ms", 500)?
            .set_default("ui.record_search_debounce_ms", 300)?
            .set_default("ui.low_balance_threshold", 5)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("TUITION")
                    .separator("_")
                    .try_parsing(true),
            );

        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option(
                "dispatch.endpoint",
                std::env::var("DISPATCH_ENDPOINT").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 分页大小只接受后端允许的取值
        if !crate::models::common::is_allowed_limit(app_config.ui.page_size) {
            app_config.ui.page_size = crate::models::common::DEFAULT_PAGE_SIZE;
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 调度入口地址（去掉末尾斜杠）
    pub fn dispatch_endpoint(&self) -> &str {
        self.dispatch.endpoint.trim_end_matches('/')
    }
}
