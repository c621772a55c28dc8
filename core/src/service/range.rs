use chrono::NaiveDate;

use crate::model::daily_log::DailyLog;
use crate::model::size::Breakdown;
use crate::service::breakdown::breakdown_items;
use crate::service::dto::RangeSummary;

/// Logs dated within `[start, end]`, both ends inclusive, in input order.
/// An inverted range matches nothing.
pub fn filter_range(logs: &[DailyLog], start: NaiveDate, end: NaiveDate) -> Vec<DailyLog> {
    logs.iter()
        .filter(|log| log.date >= start && log.date <= end)
        .cloned()
        .collect()
}

pub fn aggregate_range(logs: &[DailyLog], start: NaiveDate, end: NaiveDate) -> RangeSummary {
    let filtered = filter_range(logs, start, end);

    // Counts saturate at u64::MAX
    let mut total_sorted: u64 = 0;
    let mut total_weight_kg = 0.0;
    let mut breakdown = Breakdown::default();
    for log in &filtered {
        total_sorted = total_sorted.saturating_add(log.total_sorted);
        total_weight_kg += log.total_weight_kg;
        breakdown += &log.breakdown;
    }

    let days = filtered.len();
    let avg_per_day = if days > 0 {
        total_sorted as f64 / days as f64
    } else {
        0.0
    };

    RangeSummary {
        start,
        end,
        logs: filtered,
        total_sorted,
        total_weight_kg,
        days,
        avg_per_day,
        breakdown: breakdown_items(&breakdown, total_sorted),
    }
}
