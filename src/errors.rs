//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tuition_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum TuitionError {
            $($variant(String),)*
        }

        impl TuitionError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TuitionError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TuitionError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TuitionError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TuitionError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TuitionError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tuition_errors! {
    Transport("E001", "Transport Error"),
    Serialization("E002", "Serialization Error"),
    Backend("E003", "Backend Error"),
    Validation("E004", "Validation Error"),
    Config("E005", "Configuration Error"),
    StatusGate("E006", "Status Gate Error"),
    DateParse("E007", "Date Parse Error"),
}

impl TuitionError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TuitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TuitionError {}

// 为常见的错误类型实现 From trait
impl From<serde_json::Error> for TuitionError {
    fn from(err: serde_json::Error) -> Self {
        TuitionError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for TuitionError {
    fn from(err: reqwest::Error) -> Self {
        TuitionError::Transport(err.to_string())
    }
}

impl From<chrono::ParseError> for TuitionError {
    fn from(err: chrono::ParseError) -> Self {
        TuitionError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for TuitionError {
    fn from(err: config::ConfigError) -> Self {
        TuitionError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TuitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TuitionError::transport("test").code(), "E001");
        assert_eq!(TuitionError::backend("test").code(), "E003");
        assert_eq!(TuitionError::validation("test").code(), "E004");
        assert_eq!(TuitionError::status_gate("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TuitionError::serialization("test").error_type(),
            "Serialization Error"
        );
        assert_eq!(
            TuitionError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TuitionError::backend("学员不存在");
        assert_eq!(err.message(), "学员不存在");
    }

    #[test]
    fn test_from_serde_json() {
        let err: TuitionError = serde_json::from_str::<i32>("not json").unwrap_err().into();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_format_simple() {
        let err = TuitionError::validation("课时不能为0");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("课时不能为0"));
    }
}
