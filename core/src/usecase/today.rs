use crate::repository::DailyLogRepository;
use crate::service::breakdown::summarize_day;
use crate::service::dashboard_service::DashboardService;
use crate::service::dto::DailySummary;
use anyhow::Result;
use chrono::NaiveDate;

pub struct TodayUseCase<'a, L: DailyLogRepository> {
    service: &'a DashboardService<L>,
}

impl<'a, L: DailyLogRepository> TodayUseCase<'a, L> {
    pub fn new(service: &'a DashboardService<L>) -> Self {
        Self { service }
    }

    /// Date the dashboard opens on: the latest logged day.
    pub fn default_date(&self) -> Result<Option<NaiveDate>> {
        self.service.latest_date()
    }

    /// `None` when nothing was logged on `date`.
    pub fn summary_for(&self, date: NaiveDate) -> Result<Option<DailySummary>> {
        Ok(self.service.get_log(date)?.map(|log| summarize_day(&log)))
    }
}
