use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// 不分页（导出等场景）
pub const UNLIMITED: i64 = -1;
/// 后端允许的 limit 取值
pub const ALLOWED_LIMITS: [i64; 5] = [10, 25, 50, 100, UNLIMITED];

pub fn is_allowed_limit(limit: i64) -> bool {
    ALLOWED_LIMITS.contains(&limit)
}

// 分页查询参数（offset/limit 形式，与后端请求字段一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationQuery {
    pub offset: i64,
    pub limit: i64,
}

impl PaginationQuery {
    /// 下拉搜索用的首页查询
    pub fn first(limit: i64) -> Self {
        Self { offset: 0, limit }
    }

    pub fn all() -> Self {
        Self {
            offset: 0,
            limit: UNLIMITED,
        }
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

// 列表页分页状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub page: i64,
    pub items_per_page: i64,
    pub total: i64,
}

impl PageState {
    pub fn new(items_per_page: i64) -> Self {
        let items_per_page = if is_allowed_limit(items_per_page) {
            items_per_page
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            page: 1,
            items_per_page,
            total: 0,
        }
    }

    /// 当前页对应的 offset/limit
    pub fn query(&self) -> PaginationQuery {
        if self.items_per_page == UNLIMITED {
            return PaginationQuery::all();
        }
        PaginationQuery {
            offset: (self.page.max(1) - 1) * self.items_per_page,
            limit: self.items_per_page,
        }
    }

    /// 表格翻页或修改每页条数
    pub fn set_page(&mut self, page: i64, items_per_page: i64) {
        self.page = page.max(1);
        if is_allowed_limit(items_per_page) {
            self.items_per_page = items_per_page;
        }
    }

    /// 筛选条件变化后回到第一页
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn total_pages(&self) -> i64 {
        if self.items_per_page <= 0 || self.total <= 0 {
            return 1;
        }
        (self.total + self.items_per_page - 1) / self.items_per_page
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_offsets() {
        let mut state = PageState::new(25);
        assert_eq!(state.query(), PaginationQuery { offset: 0, limit: 25 });
        state.set_page(3, 25);
        assert_eq!(state.query(), PaginationQuery { offset: 50, limit: 25 });
        state.reset();
        assert_eq!(state.query().offset, 0);
    }

    #[test]
    fn test_disallowed_size_falls_back() {
        let mut state = PageState::new(7);
        assert_eq!(state.items_per_page, DEFAULT_PAGE_SIZE);
        state.set_page(2, 33);
        assert_eq!(state.items_per_page, DEFAULT_PAGE_SIZE);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_unlimited_page() {
        let state = PageState::new(UNLIMITED);
        assert_eq!(state.query(), PaginationQuery::all());
    }

    #[test]
    fn test_total_pages() {
        let mut state = PageState::new(10);
        assert_eq!(state.total_pages(), 1);
        state.total = 21;
        assert_eq!(state.total_pages(), 3);
    }
}
