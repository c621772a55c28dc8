use crate::model::daily_log::DailyLog;
use anyhow::Result;
use chrono::NaiveDate;

/// Read-only source of daily logs. The collection does not change for the
/// lifetime of a repository.
pub trait DailyLogRepository {
    fn list(&self) -> Result<Vec<DailyLog>>;
    fn get(&self, date: NaiveDate) -> Result<Option<DailyLog>>;
}

impl<R: DailyLogRepository + ?Sized> DailyLogRepository for Box<R> {
    fn list(&self) -> Result<Vec<DailyLog>> {
        (**self).list()
    }

    fn get(&self, date: NaiveDate) -> Result<Option<DailyLog>> {
        (**self).get(date)
    }
}
