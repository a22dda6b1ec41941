use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub dispatch: DispatchConfig,
    pub ui: UiConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 后端调度配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    pub transport: String, // 目前仅支持 http
    pub endpoint: String,  // 后端调度入口，例如 http://127.0.0.1:34115
}

/// 界面行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub page_size: i64,
    pub search_page_size: i64,
    pub search_debounce_ms: u64,
    pub record_search_debounce_ms: u64,
    pub low_balance_threshold: i64,
}
