pub mod daily_log;
pub mod memory;
pub mod traits;

// Re-export
pub use daily_log::FileDailyLogRepository;
pub use memory::{sample_logs, InMemoryDailyLogRepository};
pub use traits::DailyLogRepository;

use crate::model::daily_log::DailyLog;

/// Logs a warning for every log whose size counts disagree with its total.
pub(crate) fn warn_inconsistent(logs: &[DailyLog]) {
    for entry in logs.iter().filter(|l| !l.is_consistent()) {
        log::warn!(
            "daily log {} is inconsistent: breakdown sums to {} but total_sorted is {}",
            entry.date,
            entry.breakdown.total(),
            entry.total_sorted
        );
    }
}
