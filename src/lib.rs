//! TuitionDesk - 桌面教务管理系统的客户端层
//!
//! 学员、教师、科目、报名课程、上课记录与课时流水的管理逻辑，
//! 所有后端操作经由 JSON 调度接口完成。
//!
//! # 架构
//! - `config`: 配置管理
//! - `dispatch`: 后端调度层（HTTP 桥接 / 进程内调度表）
//! - `errors`: 统一错误处理
//! - `models`: 与后端对应的数据模型
//! - `notify`: 提示与确认
//! - `runtime`: 运行时生命周期管理
//! - `services`: 各实体的管理器
//! - `utils`: 校验、状态推导与分类等工具函数

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod notify;
pub mod runtime;
pub mod services;
pub mod utils;
