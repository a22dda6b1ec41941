use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, TuitionError};

/// 后端约定的成功状态码
pub const SUCCESS_CODE: i32 = 200;
/// 后端约定的失败状态码
pub const FAILURE_CODE: i32 = 500;
/// 用户在原生文件对话框中取消操作时，后端返回的标记
pub const CANCEL_SENTINEL: &str = "cancel";

// 统一的API响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl ApiResponse<Value> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: FAILURE_CODE,
            message: message.into(),
            data: None,
        }
    }

    /// 解析后端返回的原始文本
    ///
    /// `data` 先保持为未定型的 JSON，失败响应里的 `data` 形状与成功时不同也能拿到 `message`。
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            TuitionError::serialization(format!("响应解析失败: {e}"))
        })
    }

    /// `code == 200` 时原样返回 `data`，否则以 `message` 作为错误
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T> {
        if !self.is_success() {
            return Err(TuitionError::backend(self.message));
        }
        let data = self.data.unwrap_or(Value::Null);
        let missing = data.is_null();
        serde_json::from_value(data).map_err(|e| {
            if missing {
                TuitionError::serialization("响应缺少 data 字段")
            } else {
                TuitionError::serialization(format!("响应数据格式错误: {e}"))
            }
        })
    }

    /// 只检查状态码，忽略 `data`
    pub fn into_unit(self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(TuitionError::backend(self.message))
        }
    }

    /// 用户是否在文件对话框中取消了操作
    ///
    /// `message` 中包含取消标记，或 `data` 恰好等于取消标记。路径中含有 `cancel` 的文件仍视为已保存。
    pub fn is_cancelled(&self) -> bool {
        if self.message.contains(CANCEL_SENTINEL) {
            return true;
        }
        match &self.data {
            Some(Value::String(s)) => s == CANCEL_SENTINEL,
            _ => false,
        }
    }
}
