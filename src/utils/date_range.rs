//! 日期快捷筛选
//!
//! 周按周一至周日计算，月按自然月计算。

use chrono::{Datelike, Duration, NaiveDate};

use crate::errors::{Result, TuitionError};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatePreset {
    #[default]
    All,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    // 空字符串表示该侧不限
    Custom { start: String, end: String },
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_monday() as i64)
}

fn month_start(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn month_end(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(day)
}

pub fn format_date(day: NaiveDate) -> String {
    day.format(DATE_FORMAT).to_string()
}

pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map_err(|e| TuitionError::date_parse(format!("无效的日期 '{text}': {e}")))
}

impl DatePreset {
    pub const LABELS: [&'static str; 6] = ["全部时间", "本周", "上周", "本月", "上月", "自定义"];

    pub fn label(&self) -> &'static str {
        match self {
            DatePreset::All => "全部时间",
            DatePreset::ThisWeek => "本周",
            DatePreset::LastWeek => "上周",
            DatePreset::ThisMonth => "本月",
            DatePreset::LastMonth => "上月",
            DatePreset::Custom { .. } => "自定义",
        }
    }

    /// 按显示名称选择预设，自定义范围初始为空
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "全部时间" => Some(DatePreset::All),
            "本周" => Some(DatePreset::ThisWeek),
            "上周" => Some(DatePreset::LastWeek),
            "本月" => Some(DatePreset::ThisMonth),
            "上月" => Some(DatePreset::LastMonth),
            "自定义" => Some(DatePreset::Custom {
                start: String::new(),
                end: String::new(),
            }),
            _ => None,
        }
    }

    /// 固定预设对应的闭区间，全部时间与自定义返回 None
    pub fn range(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            DatePreset::All | DatePreset::Custom { .. } => None,
            DatePreset::ThisWeek => {
                let start = week_start(today);
                Some((start, start + Duration::days(6)))
            }
            DatePreset::LastWeek => {
                let start = week_start(today) - Duration::days(7);
                Some((start, start + Duration::days(6)))
            }
            DatePreset::ThisMonth => Some((month_start(today), month_end(today))),
            DatePreset::LastMonth => {
                let last = month_start(today).pred_opt()?;
                Some((month_start(last), last))
            }
        }
    }

    /// 查询参数：None 表示不筛选，内部的 None 表示该侧不限
    pub fn query_bounds(&self, today: NaiveDate) -> Option<(Option<String>, Option<String>)> {
        match self {
            DatePreset::All => None,
            DatePreset::Custom { start, end } => {
                let side = |s: &String| {
                    let s = s.trim();
                    (!s.is_empty()).then(|| s.to_string())
                };
                Some((side(start), side(end)))
            }
            preset => preset
                .range(today)
                .map(|(start, end)| (Some(format_date(start)), Some(format_date(end)))),
        }
    }

    /// 自定义范围两侧都已填写时校验先后顺序
    pub fn validate(&self) -> Result<()> {
        if let DatePreset::Custom { start, end } = self {
            if !start.trim().is_empty() && !end.trim().is_empty() {
                let (start, end) = (parse_date(start)?, parse_date(end)?);
                if start > end {
                    return Err(TuitionError::validation("开始日期不能晚于结束日期"));
                }
            }
        }
        Ok(())
    }

    /// 筛选栏文本，例如 `本月 (2026-03-01 至 2026-03-31)`
    pub fn range_text(&self, today: NaiveDate) -> String {
        match self.query_bounds(today) {
            None => self.label().to_string(),
            Some((start, end)) => format!(
                "{} ({} 至 {})",
                self.label(),
                start.as_deref().unwrap_or("不限"),
                end.as_deref().unwrap_or("不限")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_runs_monday_to_sunday() {
        // 2026-03-18 是周三
        let (start, end) = DatePreset::ThisWeek.range(day(2026, 3, 18)).unwrap();
        assert_eq!((start, end), (day(2026, 3, 16), day(2026, 3, 22)));
        let (start, end) = DatePreset::LastWeek.range(day(2026, 3, 16)).unwrap();
        assert_eq!((start, end), (day(2026, 3, 9), day(2026, 3, 15)));
        // 周日仍属于本周
        let (start, _) = DatePreset::ThisWeek.range(day(2026, 3, 22)).unwrap();
        assert_eq!(start, day(2026, 3, 16));
    }

    #[test]
    fn test_month_bounds() {
        let (start, end) = DatePreset::ThisMonth.range(day(2024, 2, 10)).unwrap();
        assert_eq!((start, end), (day(2024, 2, 1), day(2024, 2, 29)));
        let (start, end) = DatePreset::LastMonth.range(day(2026, 1, 5)).unwrap();
        assert_eq!((start, end), (day(2025, 12, 1), day(2025, 12, 31)));
        let (_, end) = DatePreset::ThisMonth.range(day(2025, 12, 31)).unwrap();
        assert_eq!(end, day(2025, 12, 31));
    }

    #[test]
    fn test_range_text() {
        let today = day(2026, 3, 18);
        assert_eq!(DatePreset::All.range_text(today), "全部时间");
        assert_eq!(
            DatePreset::ThisMonth.range_text(today),
            "本月 (2026-03-01 至 2026-03-31)"
        );
        let custom = DatePreset::Custom {
            start: "2026-01-01".into(),
            end: String::new(),
        };
        assert_eq!(custom.range_text(today), "自定义 (2026-01-01 至 不限)");
    }

    #[test]
    fn test_labels_round_trip() {
        for label in DatePreset::LABELS {
            assert_eq!(DatePreset::from_label(label).unwrap().label(), label);
        }
        assert!(DatePreset::from_label("明年").is_none());
    }

    #[test]
    fn test_custom_validation() {
        let reversed = DatePreset::Custom {
            start: "2026-03-10".into(),
            end: "2026-03-01".into(),
        };
        assert_eq!(reversed.validate().unwrap_err().code(), "E004");
        let bad = DatePreset::Custom {
            start: "2026/03/10".into(),
            end: "2026-03-01".into(),
        };
        assert_eq!(bad.validate().unwrap_err().code(), "E007");
        assert!(DatePreset::ThisWeek.validate().is_ok());
    }
}
