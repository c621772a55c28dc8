
#[cfg(test)]
mod tests {
    use crate::usecase::history::{trend_series, HistoryUseCase};
    use crate::repository::DailyLogRepository;
    use crate::service::dashboard_service::DashboardService;
    use crate::model::daily_log::DailyLog;
    use crate::model::size::Breakdown;
    use chrono::NaiveDate;
    use anyhow::Result;

    struct MockDailyLogRepo {
        logs: Vec<DailyLog>,
    }

    impl DailyLogRepository for MockDailyLogRepo {
        fn list(&self) -> Result<Vec<DailyLog>> { Ok(self.logs.clone()) }
        fn get(&self, _date: NaiveDate) -> Result<Option<DailyLog>> { unimplemented!() }
    }

    fn day(d: u32, total: u64) -> DailyLog {
        // Everything lands in size 2 so the log stays consistent.
        DailyLog::new(
            NaiveDate::from_ymd_opt(2025, 1, d).unwrap(),
            total,
            total as f64 * 0.065,
            Breakdown::new([0, 0, total, 0, 0, 0]),
        )
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_report_filters_and_builds_trend() {
        let repo = MockDailyLogRepo {
            logs: vec![day(1, 1000), day(2, 2000), day(3, 1500), day(4, 3000)],
        };
        let service = DashboardService::new(repo);
        let usecase = HistoryUseCase::new(&service);

        let report = usecase.report(date(2), date(3)).unwrap();
        assert_eq!(report.summary.days, 2);
        assert_eq!(report.summary.total_sorted, 3500);

        let trend = report.trend.unwrap();
        let totals: Vec<u64> = trend.points.iter().map(|p| p.total_sorted).collect();
        assert_eq!(totals, vec![2000, 1500]);
        assert_eq!(trend.y_min, 1500.0);
        assert!((trend.y_max - 2200.0).abs() < 1e-9);
        assert_eq!(trend.y_ticks, vec![1500, 1675, 1850, 2025, 2200]);
    }

    #[test]
    fn test_default_range_spans_all_logs() {
        let repo = MockDailyLogRepo {
            logs: vec![day(3, 10), day(1, 10), day(9, 10)],
        };
        let service = DashboardService::new(repo);
        let usecase = HistoryUseCase::new(&service);
        assert_eq!(usecase.default_range().unwrap(), Some((date(1), date(9))));

        let report = usecase.report(date(1), date(9)).unwrap();
        assert_eq!(report.summary.days, 3);
        assert_eq!(report.summary.total_sorted, 30);
    }

    #[test]
    fn test_empty_range_has_no_trend() {
        let repo = MockDailyLogRepo { logs: vec![day(1, 1000)] };
        let service = DashboardService::new(repo);
        let usecase = HistoryUseCase::new(&service);

        let report = usecase.report(date(5), date(2)).unwrap();
        assert!(report.summary.is_empty());
        assert!(report.trend.is_none());
    }

    #[test]
    fn test_single_point_trend() {
        let trend = trend_series(&[day(1, 1000)]).unwrap();
        assert_eq!(trend.points.len(), 1);
        assert_eq!(trend.y_ticks.first(), Some(&1000));
        assert_eq!(trend.y_ticks.last(), Some(&1100));
    }
}
