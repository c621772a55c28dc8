use serde::Serialize;
use chrono::NaiveDate;

use crate::model::daily_log::DailyLog;
use crate::model::size::EggSize;

/// One row of a size breakdown table.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BreakdownItem {
    pub size: EggSize,
    pub count: u64,
    pub percent: f64, // Already rounded to 2 decimals
}

impl BreakdownItem {
    pub fn percent_label(&self) -> String {
        format!("{:.2}", self.percent)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_sorted: u64,
    pub total_weight_kg: f64,
    pub avg_egg_weight_g: f64,
    pub breakdown: Vec<BreakdownItem>,
}

impl DailySummary {
    pub fn avg_egg_weight_label(&self) -> String {
        format!("{:.2}", self.avg_egg_weight_g)
    }

    /// Footer row of the breakdown table.
    pub fn total_percent_label(&self) -> &'static str {
        total_percent_label(self.total_sorted)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RangeSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub logs: Vec<DailyLog>,
    pub total_sorted: u64,
    pub total_weight_kg: f64,
    pub days: usize,
    pub avg_per_day: f64,
    pub breakdown: Vec<BreakdownItem>,
}

impl RangeSummary {
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Average units per day, rounded to a whole unit for display.
    pub fn avg_per_day_rounded(&self) -> u64 {
        self.avg_per_day.round() as u64
    }

    pub fn total_percent_label(&self) -> &'static str {
        total_percent_label(self.total_sorted)
    }
}

fn total_percent_label(total_sorted: u64) -> &'static str {
    if total_sorted > 0 { "100.00" } else { "0.00" }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_sorted: u64,
}

/// Daily totals over a range, with the vertical scale the trend chart uses.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
    pub y_min: f64,
    pub y_max: f64,
    pub y_ticks: Vec<u64>,
}
