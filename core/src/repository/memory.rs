use anyhow::Result;
use chrono::NaiveDate;

use crate::model::daily_log::DailyLog;
use crate::model::size::Breakdown;
use crate::repository::traits::DailyLogRepository;
use crate::repository::warn_inconsistent;

// (date, total_sorted, total_weight_kg, counts for sizes 0..5)
const SAMPLE: [((i32, u32, u32), u64, f64, [u64; 6]); 7] = [
    ((2024, 12, 1), 118000, 7800.0, [12500, 35000, 48000, 15000, 5500, 2000]),
    ((2024, 12, 2), 121000, 8050.0, [13000, 36000, 50000, 15500, 4500, 2000]),
    ((2024, 12, 3), 115500, 7650.0, [12000, 34000, 47000, 14500, 6000, 2000]),
    ((2024, 12, 4), 119000, 7900.0, [12800, 35500, 48500, 15200, 5000, 2000]),
    ((2024, 12, 5), 125000, 8300.0, [13500, 40000, 52000, 14500, 3500, 1500]),
    ((2024, 12, 6), 110000, 7200.0, [11000, 32000, 43000, 14000, 7000, 3000]),
    ((2024, 12, 7), 120500, 8100.0, [12800, 37000, 49000, 15500, 4200, 2000]),
];

/// The built-in seven-day sorting record for 2024-12-01..2024-12-07.
pub fn sample_logs() -> Vec<DailyLog> {
    SAMPLE
        .iter()
        .filter_map(|&((y, m, d), total, weight, counts)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(DailyLog::new(date, total, weight, Breakdown::new(counts)))
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryDailyLogRepository {
    logs: Vec<DailyLog>,
}

impl InMemoryDailyLogRepository {
    pub fn new(logs: Vec<DailyLog>) -> Self {
        warn_inconsistent(&logs);
        Self { logs }
    }

    pub fn sample() -> Self {
        Self::new(sample_logs())
    }
}

impl DailyLogRepository for InMemoryDailyLogRepository {
    fn list(&self) -> Result<Vec<DailyLog>> {
        Ok(self.logs.clone())
    }

    fn get(&self, date: NaiveDate) -> Result<Option<DailyLog>> {
        Ok(self.logs.iter().find(|l| l.date == date).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_seven_consistent_days() {
        let logs = sample_logs();
        assert_eq!(logs.len(), 7);
        assert!(logs.iter().all(|l| l.is_consistent()));
        assert!(logs.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_get_by_date() {
        let repo = InMemoryDailyLogRepository::sample();
        let log = repo.get(NaiveDate::from_ymd_opt(2024, 12, 5).unwrap()).unwrap().unwrap();
        assert_eq!(log.total_sorted, 125000);
        assert!(repo.get(NaiveDate::from_ymd_opt(2024, 11, 30).unwrap()).unwrap().is_none());
    }
}
