//! 课程状态与余额的显示规则

use crate::models::courses::entities::{Course, CourseStatus};
use crate::models::orders::entities::OrderType;
use crate::models::students::entities::StudentStatus;

/// 课程的综合状态描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDescriptor {
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub disabled: bool,
    pub desc: &'static str,
}

pub const LABEL_UNKNOWN: &str = "未知状态";
pub const LABEL_STUDENT_WITHDRAWN: &str = "学员退学";
pub const LABEL_STUDENT_SUSPENDED: &str = "学员停课";
pub const LABEL_FINISHED: &str = "已结课";
pub const LABEL_PAUSED: &str = "课程暂停";
pub const LABEL_ACTIVE: &str = "正常上课";

/// 学员档案状态优先于课程自身状态，按顺序取第一个命中的规则
pub fn effective_status(
    student_status: Option<StudentStatus>,
    course_status: CourseStatus,
) -> StatusDescriptor {
    let Some(student_status) = student_status else {
        return StatusDescriptor {
            label: LABEL_UNKNOWN,
            color: "grey",
            icon: "mdi-help-circle",
            disabled: true,
            desc: "学员信息缺失",
        };
    };

    match (student_status, course_status) {
        (StudentStatus::Withdrawn, _) => StatusDescriptor {
            label: LABEL_STUDENT_WITHDRAWN,
            color: "error",
            icon: "mdi-account-off",
            disabled: true,
            desc: "该学员已退学，课程终止",
        },
        (StudentStatus::Suspended, _) => StatusDescriptor {
            label: LABEL_STUDENT_SUSPENDED,
            color: "blue-grey",
            icon: "mdi-account-clock",
            disabled: true,
            desc: "因学员档案处于停课状态，该课程被冻结",
        },
        (_, CourseStatus::Finished) => StatusDescriptor {
            label: LABEL_FINISHED,
            color: "grey",
            icon: "mdi-flag-checkered",
            disabled: true,
            desc: "课程已结束",
        },
        (_, CourseStatus::Paused) => StatusDescriptor {
            label: LABEL_PAUSED,
            color: "warning",
            icon: "mdi-pause-circle",
            disabled: false,
            desc: "该课程已暂停，可恢复",
        },
        _ => StatusDescriptor {
            label: LABEL_ACTIVE,
            color: "success",
            icon: "mdi-check-circle",
            disabled: false,
            desc: "状态正常",
        },
    }
}

pub fn effective_course_status(course: &Course) -> StatusDescriptor {
    effective_status(course.student.as_ref().map(|s| s.status), course.status)
}

pub fn balance_color(balance: i64, low_threshold: i64) -> &'static str {
    if balance < 0 {
        "error"
    } else if balance < low_threshold {
        "warning"
    } else {
        "success"
    }
}

pub fn balance_label(balance: i64, low_threshold: i64) -> &'static str {
    if balance < 0 {
        "已欠费"
    } else if balance < low_threshold {
        "余额不足"
    } else {
        "余额充足"
    }
}

/// 余额徽标：超过两位数显示 `99+` / `-99+`，否则补零到两位
pub fn format_balance(balance: i64) -> String {
    if balance > 99 {
        return "99+".to_string();
    }
    if balance < -99 {
        return "-99+".to_string();
    }
    let sign = if balance < 0 { "-" } else { "" };
    format!("{sign}{:02}", balance.abs())
}

pub fn order_type_text(order_type: OrderType) -> &'static str {
    order_type.zh_label()
}

/// 金额显示：`¥0`、`+¥1,234`、`-¥50`
pub fn format_currency(amount: f64) -> String {
    if amount == 0.0 {
        return "¥0".to_string();
    }
    let sign = if amount > 0.0 { "+" } else { "-" };
    let abs = amount.abs();
    let whole = abs.trunc() as i64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as i64;
    let (whole, cents) = if cents >= 100 { (whole + 1, 0) } else { (whole, cents) };

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if cents == 0 {
        format!("{sign}¥{grouped}")
    } else {
        format!("{sign}¥{grouped}.{cents:02}")
    }
}

/// 课时显示：绝对值超过 99 时显示 `99+`
pub fn format_hours(hours: i64) -> String {
    let abs = hours.abs();
    if abs > 99 {
        "99+".to_string()
    } else {
        abs.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_student_is_unknown() {
        let desc = effective_status(None, CourseStatus::Active);
        assert_eq!(desc.label, LABEL_UNKNOWN);
        assert!(desc.disabled);
    }

    #[test]
    fn test_student_status_takes_precedence() {
        let desc = effective_status(Some(StudentStatus::Withdrawn), CourseStatus::Paused);
        assert_eq!(desc.label, LABEL_STUDENT_WITHDRAWN);
        let desc = effective_status(Some(StudentStatus::Suspended), CourseStatus::Finished);
        assert_eq!(desc.label, LABEL_STUDENT_SUSPENDED);
        assert_eq!(desc.color, "blue-grey");
    }

    #[test]
    fn test_course_status_when_student_active() {
        let finished = effective_status(Some(StudentStatus::Active), CourseStatus::Finished);
        assert!(finished.disabled);
        let paused = effective_status(Some(StudentStatus::Active), CourseStatus::Paused);
        assert_eq!(paused.label, LABEL_PAUSED);
        assert!(!paused.disabled);
        let active = effective_status(Some(StudentStatus::Active), CourseStatus::Active);
        assert_eq!(active.label, LABEL_ACTIVE);
        assert_eq!(active.color, "success");
    }

    #[test]
    fn test_balance_thresholds() {
        assert_eq!(balance_color(-1, 5), "error");
        assert_eq!(balance_color(4, 5), "warning");
        assert_eq!(balance_color(5, 5), "success");
        assert_eq!(balance_label(-3, 5), "已欠费");
        assert_eq!(balance_label(0, 5), "余额不足");
    }

    #[test]
    fn test_format_balance() {
        assert_eq!(format_balance(120), "99+");
        assert_eq!(format_balance(-100), "-99+");
        assert_eq!(format_balance(7), "07");
        assert_eq!(format_balance(-7), "-07");
        assert_eq!(format_balance(0), "00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "¥0");
        assert_eq!(format_currency(1234.0), "+¥1,234");
        assert_eq!(format_currency(-50.0), "-¥50");
        assert_eq!(format_currency(1234567.5), "+¥1,234,567.50");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(-8), "8");
        assert_eq!(format_hours(150), "99+");
        assert_eq!(format_hours(-100), "99+");
    }
}
