use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::model::size::Breakdown;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub total_sorted: u64,
    pub total_weight_kg: f64,
    pub breakdown: Breakdown,
}

impl DailyLog {
    pub fn new(date: NaiveDate, total_sorted: u64, total_weight_kg: f64, breakdown: Breakdown) -> Self {
        Self {
            date,
            total_sorted,
            total_weight_kg,
            breakdown,
        }
    }

    /// True when the per-size counts add up to `total_sorted`.
    /// Nothing enforces this; loaders only warn about it.
    pub fn is_consistent(&self) -> bool {
        self.breakdown.total() == self.total_sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_log() {
        let json = r#"{
            "date": "2024-12-01",
            "total_sorted": 118000,
            "total_weight_kg": 7800,
            "breakdown": {"0": 12500, "1": 35000, "2": 48000, "3": 15000, "4": 5500, "5": 2000}
        }"#;
        let log: DailyLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.date, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(log.total_sorted, 118000);
        assert_eq!(log.total_weight_kg, 7800.0);
        assert!(log.is_consistent());
    }

    #[test]
    fn test_inconsistent_log() {
        let log = DailyLog::new(
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            100,
            6.0,
            Breakdown::new([10, 10, 10, 10, 10, 10]),
        );
        assert!(!log.is_consistent());
    }
}
