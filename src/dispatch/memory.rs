//! 进程内调度表
//!
//! 与后端调度器的约定一致：按路由名查找处理函数，请求体反序列化失败、
//! 处理函数出错或路由不存在时返回 500 信封，成功时返回 200 信封。
//! 适合嵌入式后端与测试。

use async_trait::async_trait;
use dashmap::DashMap;
use futures_util::future::BoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use super::Dispatch;
use crate::errors::Result;
use crate::models::common::ApiResponse;

pub type RawHandler = Arc<dyn Fn(String) -> BoxFuture<'static, String> + Send + Sync>;

#[derive(Clone, Default)]
pub struct MemoryDispatch {
    handlers: Arc<DashMap<String, RawHandler>>,
    // 仅在 `recording()` 创建时记录调用
    calls: Option<Arc<Mutex<Vec<(String, String)>>>>,
}

fn to_envelope_text<T: Serialize>(resp: &ApiResponse<T>) -> String {
    serde_json::to_string(resp).unwrap_or_default()
}

fn bad_response(message: impl Into<String>) -> String {
    to_envelope_text(&ApiResponse::error(message))
}

impl MemoryDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录每次调用的路由与负载，供测试断言使用
    pub fn recording() -> Self {
        Self {
            calls: Some(Arc::default()),
            ..Self::default()
        }
    }

    /// 注册原始处理函数：收到负载文本，返回完整的响应文本
    pub fn register_raw<F>(&self, route: impl Into<String>, handler: F)
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        self.handlers.insert(
            route.into(),
            Arc::new(move |payload: String| -> BoxFuture<'static, String> {
                let handler = handler.clone();
                Box::pin(async move { handler(payload) })
            }),
        );
    }

    /// 注册带类型的处理函数，负载为空时按空对象处理
    pub fn register_typed<Req, Res, F, Fut>(&self, route: impl Into<String>, handler: F)
    where
        Req: DeserializeOwned + Send + 'static,
        Res: Serialize + Send + 'static,
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Res, String>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        self.handlers.insert(
            route.into(),
            Arc::new(move |payload: String| -> BoxFuture<'static, String> {
                let handler = handler.clone();
                Box::pin(async move {
                    let body = if payload.trim().is_empty() {
                        "{}"
                    } else {
                        payload.as_str()
                    };
                    let req: Req = match serde_json::from_str(body) {
                        Ok(req) => req,
                        Err(e) => {
                            warn!("unmarshal json to object fail: {}", e);
                            return bad_response("unmarshal json to object fail");
                        }
                    };
                    match handler(req).await {
                        Ok(res) => to_envelope_text(&ApiResponse::success(res)),
                        Err(message) => bad_response(message),
                    }
                })
            }),
        );
    }

    /// 注册不需要请求体的处理函数
    pub fn register_no_req<Res, F, Fut>(&self, route: impl Into<String>, handler: F)
    where
        Res: Serialize + Send + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<Res, String>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        self.handlers.insert(
            route.into(),
            Arc::new(move |_payload: String| -> BoxFuture<'static, String> {
                let handler = handler.clone();
                Box::pin(async move {
                    match handler().await {
                        Ok(res) => to_envelope_text(&ApiResponse::success(res)),
                        Err(message) => bad_response(message),
                    }
                })
            }),
        );
    }

    /// 已收到的调用（路由名, 负载），按时间顺序；未开启记录时为空
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .as_ref()
            .and_then(|calls| calls.lock().ok().map(|calls| calls.clone()))
            .unwrap_or_default()
    }

    /// 某个路由最近一次收到的负载
    pub fn last_payload(&self, route: &str) -> Option<Value> {
        self.calls()
            .into_iter()
            .rev()
            .find(|(r, _)| r == route)
            .and_then(|(_, payload)| serde_json::from_str(&payload).ok())
    }

    pub fn debug_routes(&self) {
        if self.handlers.is_empty() {
            debug!("No dispatch handlers registered.");
        } else {
            debug!("Registered dispatch handlers:");
            for entry in self.handlers.iter() {
                debug!(" - {}", entry.key());
            }
        }
    }
}

#[async_trait]
impl Dispatch for MemoryDispatch {
    async fn dispatch(&self, route: &str, payload: String) -> Result<String> {
        if let Some(Ok(mut calls)) = self.calls.as_ref().map(|calls| calls.lock()) {
            calls.push((route.to_string(), payload.clone()));
        }
        // 先取出处理函数再执行，避免持有 DashMap 的读锁跨越 await
        let handler = self.handlers.get(route).map(|h| h.value().clone());
        match handler {
            Some(handler) => Ok(handler(payload).await),
            None => Ok(bad_response(format!("handler [{route}] not found "))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct DeleteReq {
        id: i64,
    }

    #[tokio::test]
    async fn test_unknown_route_returns_500_envelope() {
        let backend = MemoryDispatch::recording();
        let raw = backend.dispatch("nope/route", String::new()).await.unwrap();
        let resp = ApiResponse::parse(&raw).unwrap();
        assert_eq!(resp.code, 500);
        assert!(resp.message.contains("handler [nope/route] not found"));
    }

    #[tokio::test]
    async fn test_bad_payload_returns_500_envelope() {
        let backend = MemoryDispatch::recording();
        backend.register_typed("del", |req: DeleteReq| async move {
            Ok::<_, String>(req.id)
        });
        let raw = backend.dispatch("del", "{\"id\":\"x\"}".into()).await.unwrap();
        let resp = ApiResponse::parse(&raw).unwrap();
        assert_eq!(resp.code, 500);
        assert_eq!(resp.message, "unmarshal json to object fail");

        let raw = backend.dispatch("del", "{\"id\":5}".into()).await.unwrap();
        let resp = ApiResponse::parse(&raw).unwrap();
        assert_eq!(resp.into_result::<i64>().unwrap(), 5);
    }

    #[tokio::test]
    async fn test_calls_are_recorded() {
        let backend = MemoryDispatch::recording();
        backend.register_raw("raw", |_| r#"{"code":200,"message":"ok"}"#.to_string());
        backend.dispatch("raw", "{\"a\":1}".into()).await.unwrap();
        assert_eq!(backend.calls().len(), 1);
        assert_eq!(backend.last_payload("raw").unwrap()["a"], 1);
    }

    #[tokio::test]
    async fn test_plain_table_keeps_no_history() {
        let backend = MemoryDispatch::new();
        backend.register_raw("raw", |_| r#"{"code":200,"message":"ok"}"#.to_string());
        backend.dispatch("raw", "{\"a\":1}".into()).await.unwrap();
        assert!(backend.calls().is_empty());
        assert!(backend.last_payload("raw").is_none());
    }
}
