use crate::model::daily_log::DailyLog;
use crate::model::size::Breakdown;
use crate::service::dto::{BreakdownItem, DailySummary};

/// Per-size counts and shares for a single day, in size order `0..5`.
pub fn calculate_daily_breakdown(log: &DailyLog) -> Vec<BreakdownItem> {
    breakdown_items(&log.breakdown, log.total_sorted)
}

/// Builds breakdown rows against an explicit denominator. `total` is the
/// recorded total, not the sum of `breakdown`, so inconsistent logs show
/// shares that do not add up to 100.
pub fn breakdown_items(breakdown: &Breakdown, total: u64) -> Vec<BreakdownItem> {
    breakdown
        .iter()
        .map(|(size, count)| BreakdownItem {
            size,
            count,
            percent: percent_of(count, total),
        })
        .collect()
}

pub fn percent_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(count as f64 / total as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn summarize_day(log: &DailyLog) -> DailySummary {
    let avg_egg_weight_g = if log.total_sorted > 0 {
        round2(log.total_weight_kg / log.total_sorted as f64 * 1000.0)
    } else {
        0.0
    };

    DailySummary {
        date: log.date,
        total_sorted: log.total_sorted,
        total_weight_kg: log.total_weight_kg,
        avg_egg_weight_g,
        breakdown: calculate_daily_breakdown(log),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::size::EggSize;
    use crate::repository::sample_logs;
    use chrono::NaiveDate;

    fn first_sample() -> DailyLog {
        DailyLog::new(
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            118000,
            7800.0,
            Breakdown::new([12500, 35000, 48000, 15000, 5500, 2000]),
        )
    }

    #[test]
    fn test_size_2_share_of_first_sample_day() {
        let items = calculate_daily_breakdown(&first_sample());
        let item = &items[EggSize::Size2.index()];
        assert_eq!(item.size, EggSize::Size2);
        assert_eq!(item.count, 48000);
        assert_eq!(item.percent_label(), "40.68");
    }

    #[test]
    fn test_items_follow_size_order() {
        let items = calculate_daily_breakdown(&first_sample());
        let sizes: Vec<EggSize> = items.iter().map(|i| i.size).collect();
        assert_eq!(sizes, EggSize::ALL.to_vec());
    }

    #[test]
    fn test_counts_sum_to_breakdown_total() {
        for log in sample_logs() {
            let items = calculate_daily_breakdown(&log);
            let sum: u64 = items.iter().map(|i| i.count).sum();
            assert_eq!(sum, log.breakdown.total());
        }
    }

    #[test]
    fn test_percents_sum_to_hundred() {
        for log in sample_logs() {
            let items = calculate_daily_breakdown(&log);
            let sum: f64 = items.iter().map(|i| i.percent).sum();
            assert!((sum - 100.0).abs() <= 0.01 * EggSize::COUNT as f64, "{}: {}", log.date, sum);
        }
    }

    #[test]
    fn test_zero_total_gives_zero_percent() {
        let log = DailyLog::new(
            NaiveDate::from_ymd_opt(2024, 12, 8).unwrap(),
            0,
            0.0,
            Breakdown::default(),
        );
        let items = calculate_daily_breakdown(&log);
        assert_eq!(items.len(), EggSize::COUNT);
        assert!(items.iter().all(|i| i.percent_label() == "0.00"));

        let summary = summarize_day(&log);
        assert_eq!(summary.avg_egg_weight_label(), "0.00");
        assert_eq!(summary.total_percent_label(), "0.00");
    }

    #[test]
    fn test_inconsistent_log_uses_recorded_total() {
        let log = DailyLog::new(
            NaiveDate::from_ymd_opt(2024, 12, 9).unwrap(),
            100,
            6.0,
            Breakdown::new([10; EggSize::COUNT]),
        );
        assert!(!log.is_consistent());

        let items = calculate_daily_breakdown(&log);
        assert!(items.iter().all(|i| i.count == 10 && i.percent_label() == "10.00"));
        let sum: f64 = items.iter().map(|i| i.percent).sum();
        assert_eq!(round2(sum), 60.0);
    }

    #[test]
    fn test_average_egg_weight_in_grams() {
        let summary = summarize_day(&first_sample());
        // 7800 kg / 118000 eggs
        assert_eq!(summary.avg_egg_weight_label(), "66.10");
        assert_eq!(summary.total_percent_label(), "100.00");
    }
}
