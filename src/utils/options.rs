//! 下拉选项与筛选标签

use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub title: String,
    pub value: i64,
}

impl SelectOption {
    pub fn new(title: impl Into<String>, value: i64) -> Self {
        Self {
            title: title.into(),
            value,
        }
    }

    /// 标题中括号前的部分，即姓名
    pub fn name(&self) -> &str {
        self.title.split(" (").next().unwrap_or(&self.title)
    }
}

impl From<&Student> for SelectOption {
    fn from(student: &Student) -> Self {
        SelectOption::new(student.option_title(), student.id)
    }
}

impl From<&Teacher> for SelectOption {
    fn from(teacher: &Teacher) -> Self {
        SelectOption::new(teacher.option_title(), teacher.id)
    }
}

impl From<&Subject> for SelectOption {
    fn from(subject: &Subject) -> Self {
        SelectOption::new(subject.name.clone(), subject.id)
    }
}

/// 用新的搜索结果替换选项，保留已选中但不在结果中的旧选项
pub fn merge_keep_selected(
    current: &[SelectOption],
    selected: &[i64],
    mut fresh: Vec<SelectOption>,
) -> Vec<SelectOption> {
    for option in current.iter().filter(|o| selected.contains(&o.value)) {
        if !fresh.iter().any(|n| n.value == option.value) {
            fresh.push(option.clone());
        }
    }
    fresh
}

/// 已选项摘要，例如 `学生: 张三, 李四`；过长时显示 `学生: 张三 等 5 人`
pub fn selected_names_summary(
    selected: &[i64],
    options: &[SelectOption],
    prefix: &str,
    unit: &str,
) -> String {
    if selected.is_empty() {
        return String::new();
    }
    let names: Vec<String> = selected
        .iter()
        .map(|id| {
            options
                .iter()
                .find(|o| o.value == *id)
                .map(|o| o.name().to_string())
                .unwrap_or_else(|| id.to_string())
        })
        .collect();

    let text = names.join(", ");
    if text.chars().count() > 20 && names.len() > 1 {
        format!("{prefix}: {} 等 {} {unit}", names[0], selected.len())
    } else {
        format!("{prefix}: {text}")
    }
}

/// 当前生效的筛选条件，用于筛选栏上的可关闭标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: &'static str,
    pub label: String,
}

impl FilterChip {
    pub fn new(key: &'static str, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_selected_options() {
        let current = vec![SelectOption::new("张三 (S001)", 1), SelectOption::new("李四 (S002)", 2)];
        let fresh = vec![SelectOption::new("王五 (S003)", 3)];
        let merged = merge_keep_selected(&current, &[1], fresh);
        assert_eq!(merged.iter().map(|o| o.value).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_merge_does_not_duplicate() {
        let current = vec![SelectOption::new("张三 (S001)", 1)];
        let fresh = vec![SelectOption::new("张三 (S001)", 1)];
        assert_eq!(merge_keep_selected(&current, &[1], fresh).len(), 1);
    }

    #[test]
    fn test_summary_short_and_long() {
        let options = vec![
            SelectOption::new("张三 (S001)", 1),
            SelectOption::new("欧阳娜娜娜娜 (S002)", 2),
            SelectOption::new("司马相如如如 (S003)", 3),
            SelectOption::new("诸葛孔明明明 (S004)", 4),
        ];
        assert_eq!(selected_names_summary(&[], &options, "学生", "人"), "");
        assert_eq!(
            selected_names_summary(&[1, 9], &options, "学生", "人"),
            "学生: 张三, 9"
        );
        assert_eq!(
            selected_names_summary(&[2, 3, 4], &options, "学生", "人"),
            "学生: 欧阳娜娜娜娜 等 3 人"
        );
        assert_eq!(
            selected_names_summary(&[2, 3, 4], &options, "科目", "个"),
            "科目: 欧阳娜娜娜娜 等 3 个"
        );
    }
}
