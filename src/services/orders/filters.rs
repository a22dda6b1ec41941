use crate::models::orders::requests::OrderFilters;
use crate::utils::options::{FilterChip, SelectOption};

pub fn active_filters(filters: &OrderFilters, subjects: &[SelectOption]) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    if let Some(id) = filters.student_id {
        let label = if filters.student_name_label.is_empty() {
            id.to_string()
        } else {
            filters.student_name_label.clone()
        };
        chips.push(FilterChip::new("student_id", format!("学员: {label}")));
    }
    if let Some(order_type) = filters.order_type {
        chips.push(FilterChip::new("order_type", format!("类型: {}", order_type.zh_label())));
    }
    if !filters.subject_ids.is_empty() {
        let names: Vec<String> = filters
            .subject_ids
            .iter()
            .map(|id| {
                subjects
                    .iter()
                    .find(|o| o.value == *id)
                    .map(|o| o.name().to_string())
                    .unwrap_or_else(|| id.to_string())
            })
            .collect();
        chips.push(FilterChip::new("subject_ids", format!("科目: {}", names.join(", "))));
    }
    if !filters.date_start.is_empty() || !filters.date_end.is_empty() {
        let side = |s: &str| if s.is_empty() { "不限".to_string() } else { s.to_string() };
        chips.push(FilterChip::new(
            "dates",
            format!("日期: {} 至 {}", side(&filters.date_start), side(&filters.date_end)),
        ));
    }
    chips
}

pub fn clear_filter(filters: &mut OrderFilters, key: &str) {
    match key {
        "student_id" => {
            filters.student_id = None;
            filters.student_name_label.clear();
        }
        "order_type" => filters.order_type = None,
        "subject_ids" => filters.subject_ids.clear(),
        "dates" => {
            filters.date_start.clear();
            filters.date_end.clear();
        }
        _ => {}
    }
}
