use crate::model::daily_log::DailyLog;
use crate::repository::DailyLogRepository;
use anyhow::Result;
use chrono::NaiveDate;

pub struct DashboardService<R: DailyLogRepository> {
    repo: R,
}

impl<R: DailyLogRepository> DashboardService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn logs(&self) -> Result<Vec<DailyLog>> {
        self.repo.list()
    }

    pub fn get_log(&self, date: NaiveDate) -> Result<Option<DailyLog>> {
        self.repo.get(date)
    }

    pub fn has_log(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.repo.get(date)?.is_some())
    }

    /// Earliest and latest logged dates, `None` for an empty collection.
    pub fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let logs = self.repo.list()?;
        let first = logs.iter().map(|l| l.date).min();
        let last = logs.iter().map(|l| l.date).max();
        Ok(first.zip(last))
    }

    pub fn latest_date(&self) -> Result<Option<NaiveDate>> {
        Ok(self.date_bounds()?.map(|(_, last)| last))
    }
}
