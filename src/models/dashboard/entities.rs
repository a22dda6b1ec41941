use serde::{Deserialize, Serialize};

// 资金/课时流转图表的时间范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FinanceRange {
    #[serde(rename = "1m")]
    OneMonth, // 最近一个月，按天
    #[default]
    #[serde(rename = "6m")]
    SixMonths, // 最近六个月，按月
    #[serde(rename = "12m")]
    TwelveMonths,
    #[serde(rename = "all")]
    All, // 从最早的流水或上课记录开始
}

/// 热力图营业时段（含首尾）
pub const HEATMAP_FIRST_HOUR: i64 = 8;
pub const HEATMAP_LAST_HOUR: i64 = 21;
pub const HEATMAP_HOURS: usize = (HEATMAP_LAST_HOUR - HEATMAP_FIRST_HOUR + 1) as usize;

// 周一为第一行的 7 x 14 热力图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapGrid {
    pub cells: [[i64; HEATMAP_HOURS]; 7],
}

impl HeatmapGrid {
    pub const DAY_LABELS: [&'static str; 7] =
        ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

    /// 后端返回 `[星期(0=周日), 小时, 课节数]` 三元组，越界或残缺的项直接忽略
    pub fn from_triples(triples: &[Vec<i64>]) -> Self {
        let mut cells = [[0; HEATMAP_HOURS]; 7];
        for item in triples {
            let [day, hour, value] = item.as_slice() else {
                continue;
            };
            if !(0..=6).contains(day) || !(HEATMAP_FIRST_HOUR..=HEATMAP_LAST_HOUR).contains(hour) {
                continue;
            }
            let row = if *day == 0 { 6 } else { (*day - 1) as usize };
            let col = (*hour - HEATMAP_FIRST_HOUR) as usize;
            cells[row][col] += *value;
        }
        Self { cells }
    }

    pub fn max(&self) -> i64 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heatmap_maps_sunday_last() {
        let grid = HeatmapGrid::from_triples(&[vec![0, 8, 3], vec![1, 21, 2], vec![3, 14, 5]]);
        assert_eq!(grid.cells[6][0], 3);
        assert_eq!(grid.cells[0][13], 2);
        assert_eq!(grid.cells[2][6], 5);
        assert_eq!(grid.max(), 5);
    }

    #[test]
    fn test_heatmap_skips_out_of_range() {
        let grid = HeatmapGrid::from_triples(&[vec![2, 7, 9], vec![7, 10, 1], vec![1, 10]]);
        assert_eq!(grid.max(), 0);
    }

    #[test]
    fn test_finance_range_wire_names() {
        assert_eq!(serde_json::to_string(&FinanceRange::TwelveMonths).unwrap(), "\"12m\"");
        assert_eq!(FinanceRange::default(), FinanceRange::SixMonths);
    }
}
