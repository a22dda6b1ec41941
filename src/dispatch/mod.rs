//! 后端调度层
//!
//! 所有后端操作都通过同一个调度原语完成：路由名 + JSON 文本负载，
//! 返回值总是 `{code, message, data}` 信封。

pub mod http;
pub mod memory;
pub mod routes;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::Result;
use crate::models::common::ApiResponse;

pub use http::HttpDispatch;
pub use memory::MemoryDispatch;

/// 调度原语：按路由名调用后端，返回原始响应文本
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, route: &str, payload: String) -> Result<String>;
}

/// 在调度原语之上完成序列化与信封解析
#[derive(Clone)]
pub struct DispatchClient {
    inner: Arc<dyn Dispatch>,
}

impl DispatchClient {
    pub fn new(inner: Arc<dyn Dispatch>) -> Self {
        Self { inner }
    }

    /// 发送请求并解析信封，不检查状态码
    pub async fn envelope(&self, route: &str, payload: String) -> Result<ApiResponse<Value>> {
        debug!("Dispatching {} ({} bytes)", route, payload.len());
        let raw = self.inner.dispatch(route, payload).await.inspect_err(|e| {
            error!("API Error [{}]: {}", route, e);
        })?;
        ApiResponse::parse(&raw).inspect_err(|e| {
            error!("API Error [{}]: {}", route, e);
        })
    }

    /// 序列化请求体
    pub fn encode<Req: Serialize + ?Sized>(req: &Req) -> Result<String> {
        Ok(serde_json::to_string(req)?)
    }

    /// 带请求体的调用，返回 `data`
    pub async fn call<Req, Res>(&self, route: &str, req: &Req) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let payload = Self::encode(req)?;
        self.finish(route, self.envelope(route, payload).await?)
    }

    /// 带请求体的调用，只关心成功与否
    pub async fn call_unit<Req>(&self, route: &str, req: &Req) -> Result<()>
    where
        Req: Serialize + ?Sized,
    {
        let payload = Self::encode(req)?;
        self.envelope(route, payload)
            .await?
            .into_unit()
            .inspect_err(|e| error!("API Error [{}]: {}", route, e))
    }

    /// 无请求体的调用（负载为空串）
    pub async fn call_no_req<Res: DeserializeOwned>(&self, route: &str) -> Result<Res> {
        self.finish(route, self.envelope(route, String::new()).await?)
    }

    /// 无请求体的调用，只关心成功与否
    pub async fn call_no_req_unit(&self, route: &str) -> Result<()> {
        self.envelope(route, String::new())
            .await?
            .into_unit()
            .inspect_err(|e| error!("API Error [{}]: {}", route, e))
    }

    fn finish<Res: DeserializeOwned>(&self, route: &str, resp: ApiResponse<Value>) -> Result<Res> {
        resp.into_result()
            .inspect_err(|e| error!("API Error [{}]: {}", route, e))
    }
}
