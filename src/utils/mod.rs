pub mod classification;
pub mod date_range;
pub mod debounce;
pub mod options;
pub mod status;
pub mod validate;

pub use classification::categorize_order_tags;
pub use date_range::DatePreset;
pub use debounce::Debouncer;
pub use options::{FilterChip, SelectOption, merge_keep_selected, selected_names_summary};
pub use status::{
    StatusDescriptor, balance_color, balance_label, effective_course_status, effective_status,
    format_balance, format_currency, format_hours,
};
