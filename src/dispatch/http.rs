use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::Dispatch;
use crate::config::AppConfig;
use crate::errors::{Result, TuitionError};

#[derive(Serialize)]
struct DispatchBody<'a> {
    route: &'a str,
    payload: &'a str,
}

/// 通过本地 HTTP 桥接调用后端：`POST <endpoint>/dispatch`
///
/// 不设置超时，也不重试，失败直接交给调用方。
#[derive(Clone)]
pub struct HttpDispatch {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpDispatch {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(TuitionError::config(format!(
                "dispatch endpoint must be an http(s) URL, got '{endpoint}'"
            )));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| TuitionError::transport(e.to_string()))?;
        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.dispatch_endpoint())
    }

    pub fn url(&self) -> String {
        format!("{}/dispatch", self.endpoint)
    }
}

#[async_trait]
impl Dispatch for HttpDispatch {
    async fn dispatch(&self, route: &str, payload: String) -> Result<String> {
        let response = self
            .http
            .post(self.url())
            .json(&DispatchBody {
                route,
                payload: &payload,
            })
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        debug!("Dispatch {} returned {} bytes", route, text.len());
        Ok(text)
    }
}
