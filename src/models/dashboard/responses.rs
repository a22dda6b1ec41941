use serde::{Deserialize, Serialize};

// 核心指标卡
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummaryResponse {
    pub total_students: i64,
    pub new_students_this_month: i64,
    pub monthly_hours: i64,          // 本月消课数 (节)
    pub month_over_month: String,    // 环比增长，例如 "+12%"
    pub total_remaining_hours: i64,  // 剩余总课时
    pub total_arrears: i64,          // 欠费人数
    pub total_warning: i64,          // 预警人数
}

// 通用图表数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub x_axis: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub series: Vec<i64>,
}

// 资金/课时流转图表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceChart {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub x_axis: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub recharge_data: Vec<i64>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub consume_data: Vec<i64>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub net_data: Vec<i64>,
}

// 教师课时排行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeacherRank {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub names: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub values: Vec<i64>,
}

impl TeacherRank {
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

// 饼图的一个扇区
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: i64,
}

// 分桶统计：近 30 天上课频次（沉睡/消极/达标/高频）或课时余额（充足/预警/欠费）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsChart {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub stats: Vec<NamedValue>,
}

impl StatsChart {
    pub fn total(&self) -> i64 {
        self.stats.iter().map(|s| s.value).sum()
    }
}
