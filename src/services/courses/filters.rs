use crate::models::courses::requests::CourseFilters;
use crate::utils::options::{FilterChip, SelectOption};

fn names(ids: &[i64], options: &[SelectOption]) -> String {
    ids.iter()
        .map(|id| {
            options
                .iter()
                .find(|o| o.value == *id)
                .map(|o| o.name().to_string())
                .unwrap_or_else(|| id.to_string())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// 筛选栏上显示的已生效条件
pub fn active_filters(
    filters: &CourseFilters,
    subjects: &[SelectOption],
    teachers: &[SelectOption],
) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    if let Some(id) = filters.student_id {
        let label = if filters.student_name_label.is_empty() {
            id.to_string()
        } else {
            filters.student_name_label.clone()
        };
        chips.push(FilterChip::new("student_id", format!("学员: {label}")));
    }
    if !filters.subjects.is_empty() {
        chips.push(FilterChip::new(
            "subjects",
            format!("科目: {}", names(&filters.subjects, subjects)),
        ));
    }
    if !filters.teachers.is_empty() {
        chips.push(FilterChip::new(
            "teachers",
            format!("老师: {}", names(&filters.teachers, teachers)),
        ));
    }
    if let Some(min) = filters.balance_min {
        chips.push(FilterChip::new("balance_min", format!("课时 >= {min}")));
    }
    if let Some(max) = filters.balance_max {
        chips.push(FilterChip::new("balance_max", format!("课时 <= {max}")));
    }
    if !filters.status.is_empty() {
        let titles: Vec<&str> = filters.status.iter().map(|s| s.title()).collect();
        chips.push(FilterChip::new("status", format!("状态: {}", titles.join(", "))));
    }
    chips
}

pub fn clear_filter(filters: &mut CourseFilters, key: &str) {
    match key {
        "student_id" => {
            filters.student_id = None;
            filters.student_name_label.clear();
        }
        "subjects" => filters.subjects.clear(),
        "teachers" => filters.teachers.clear(),
        "balance_min" => filters.balance_min = None,
        "balance_max" => filters.balance_max = None,
        "status" => filters.status.clear(),
        "keyword" => filters.keyword.clear(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::CourseStatusFilter;

    #[test]
    fn test_chips_follow_filter_order() {
        let filters = CourseFilters {
            student_id: Some(9),
            student_name_label: "张三".into(),
            teachers: vec![3, 8],
            balance_min: Some(0),
            status: vec![CourseStatusFilter::Active, CourseStatusFilter::StudentSuspended],
            ..Default::default()
        };
        let teachers = vec![SelectOption::new("李老师 (T003)", 3)];
        let labels: Vec<String> = active_filters(&filters, &[], &teachers)
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "学员: 张三",
                "老师: 李老师, 8",
                "课时 >= 0",
                "状态: 正常上课, 学员停课"
            ]
        );
    }

    #[test]
    fn test_clear_student_filter_drops_label() {
        let mut filters = CourseFilters {
            student_id: Some(9),
            student_name_label: "张三".into(),
            ..Default::default()
        };
        clear_filter(&mut filters, "student_id");
        assert_eq!(filters, CourseFilters::default());
    }
}
