use crate::repository::DailyLogRepository;
use crate::service::dashboard_service::DashboardService;
use crate::service::dto::{RangeSummary, TrendPoint, TrendSeries};
use crate::service::range::aggregate_range;
use crate::model::daily_log::DailyLog;
use chrono::NaiveDate;
use anyhow::Result;

// Headroom above the busiest day so the line never touches the top edge.
const TREND_HEADROOM: f64 = 1.1;
const TREND_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryReport {
    pub summary: RangeSummary,
    /// `None` when the range holds no logs.
    pub trend: Option<TrendSeries>,
}

pub struct HistoryUseCase<'a, L: DailyLogRepository> {
    service: &'a DashboardService<L>,
}

impl<'a, L: DailyLogRepository> HistoryUseCase<'a, L> {
    pub fn new(service: &'a DashboardService<L>) -> Self {
        Self { service }
    }

    /// Range the history view opens on and resets to: first..last logged day.
    pub fn default_range(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        self.service.date_bounds()
    }

    pub fn report(&self, start: NaiveDate, end: NaiveDate) -> Result<HistoryReport> {
        let logs = self.service.logs()?;
        let summary = aggregate_range(&logs, start, end);
        let trend = trend_series(&summary.logs);
        log::debug!("history {}..{}: {} of {} logs", start, end, summary.days, logs.len());
        Ok(HistoryReport { summary, trend })
    }
}

/// Daily totals in log order with the chart's vertical scale: from the
/// smallest total up to the largest plus headroom, with evenly spaced ticks.
pub fn trend_series(logs: &[DailyLog]) -> Option<TrendSeries> {
    let min_total = logs.iter().map(|l| l.total_sorted).min()?;
    let max_total = logs.iter().map(|l| l.total_sorted).max()?;

    let y_min = min_total as f64;
    let y_max = max_total as f64 * TREND_HEADROOM;
    let span = y_max - y_min;
    let y_ticks = (0..TREND_TICKS)
        .map(|i| {
            let ratio = i as f64 / (TREND_TICKS - 1) as f64;
            (y_min + span * ratio).round() as u64
        })
        .collect();

    let points = logs
        .iter()
        .map(|l| TrendPoint {
            date: l.date,
            total_sorted: l.total_sorted,
        })
        .collect();

    Some(TrendSeries {
        points,
        y_min,
        y_max,
        y_ticks,
    })
}
