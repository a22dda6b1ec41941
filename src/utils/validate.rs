use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, TuitionError};
use crate::utils::date_range::parse_date;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("Invalid time regex"));

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\- ]*$").expect("Invalid phone regex"));

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_REMARK_LEN: usize = 255;

// 单节课时长上下限（分钟）
pub const MAX_LESSON_MINUTES: i32 = 8 * 60;
pub const MIN_LESSON_MINUTES: i32 = 5;

pub const IMPORT_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

/// 解析 `HH:MM` 为当天的分钟数
pub fn parse_time_to_minutes(text: &str) -> Result<i32> {
    let caps = TIME_RE
        .captures(text.trim())
        .ok_or_else(|| TuitionError::validation("时间格式不正确"))?;
    let hours: i32 = caps[1].parse().map_err(|_| TuitionError::validation("时间格式不正确"))?;
    let minutes: i32 = caps[2].parse().map_err(|_| TuitionError::validation("时间格式不正确"))?;
    if hours > 23 || minutes > 59 {
        return Err(TuitionError::validation("时间格式不正确"));
    }
    Ok(hours * 60 + minutes)
}

/// 上课时间段校验，返回时长（分钟）
pub fn validate_time_window(start: &str, end: &str) -> Result<i32> {
    let start = parse_time_to_minutes(start)?;
    let end = parse_time_to_minutes(end)?;
    let duration = end - start;
    if duration <= 0 {
        return Err(TuitionError::validation("结束时间必须晚于开始时间"));
    }
    if duration > MAX_LESSON_MINUTES {
        return Err(TuitionError::validation("上课时长不能超过8小时"));
    }
    if duration < MIN_LESSON_MINUTES {
        return Err(TuitionError::validation("上课时长太短"));
    }
    Ok(duration)
}

pub fn validate_teaching_date(date: &str) -> Result<()> {
    if !DATE_RE.is_match(date.trim()) {
        return Err(TuitionError::validation("日期格式不正确，应为 YYYY-MM-DD"));
    }
    parse_date(date).map(|_| ())
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub fn validate_name(name: &str, field: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TuitionError::validation(format!("{field}不能为空")));
    }
    if char_len(name) > MAX_NAME_LEN {
        return Err(TuitionError::validation(format!(
            "{field}不能超过{MAX_NAME_LEN}个字符"
        )));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<()> {
    if char_len(phone) > MAX_PHONE_LEN {
        return Err(TuitionError::validation(format!(
            "电话不能超过{MAX_PHONE_LEN}个字符"
        )));
    }
    if !PHONE_RE.is_match(phone) {
        return Err(TuitionError::validation("电话只能包含数字、空格、+ 或 -"));
    }
    Ok(())
}

pub fn validate_remark(remark: &str) -> Result<()> {
    if char_len(remark) > MAX_REMARK_LEN {
        return Err(TuitionError::validation(format!(
            "备注不能超过{MAX_REMARK_LEN}个字符"
        )));
    }
    Ok(())
}

/// 人员档案（学员/教师）的通用字段
pub fn validate_person(name: &str, phone: &str, remark: &str) -> Result<()> {
    validate_name(name, "姓名")?;
    validate_phone(phone)?;
    validate_remark(remark)
}

/// 充值/扣除弹窗：课时必须为正，金额不能为负
pub fn validate_recharge(hours: i64, amount: f64) -> Result<()> {
    if hours <= 0 {
        return Err(TuitionError::validation("课时数必须大于0"));
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(TuitionError::validation("金额不能为负数"));
    }
    Ok(())
}

/// 软删除（结课）时若仍有剩余课时，必须填写清算备注
pub fn validate_course_delete(balance: i64, is_hard_delete: bool, remark: &str) -> Result<()> {
    if !is_hard_delete && balance > 0 && remark.trim().is_empty() {
        return Err(TuitionError::validation("剩余课时大于0，请填写结课备注"));
    }
    Ok(())
}

pub fn validate_import_file(path: &str) -> Result<()> {
    let lower = path.trim().to_lowercase();
    if IMPORT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(TuitionError::validation("仅支持 Excel 文件 (.xlsx, .xls)"))
    }
}
