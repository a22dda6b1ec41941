//! 与后端 DTO 一一对应的数据模型

pub mod common;
pub mod courses;
pub mod dashboard;
pub mod orders;
pub mod records;
pub mod students;
pub mod subjects;
pub mod teachers;

pub use common::{ApiResponse, PageState, PaginationQuery};

/// 后端对空切片返回 `null`，按默认值处理
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
