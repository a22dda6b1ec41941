pub mod gender;
pub mod pagination;
pub mod response;

pub use gender::{Gender, gender_color, gender_label};
pub use pagination::{
    ALLOWED_LIMITS, DEFAULT_PAGE_SIZE, PageState, PaginationQuery, UNLIMITED, is_allowed_limit,
};
pub use response::{ApiResponse, CANCEL_SENTINEL, FAILURE_CODE, SUCCESS_CODE};
