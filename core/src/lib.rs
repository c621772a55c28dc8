pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{Config, DataSource};
pub use error::DataError;
pub use model::daily_log::DailyLog;
pub use model::size::{Breakdown, EggSize};
pub use model::view::ViewMode;
pub use repository::{DailyLogRepository, FileDailyLogRepository, InMemoryDailyLogRepository, sample_logs};
pub use input::{parse_range, expand_key};
pub use time::{parse_date, format_date, DateContext};
pub use service::breakdown::{calculate_daily_breakdown, summarize_day};
pub use service::range::{aggregate_range, filter_range};
pub use service::dashboard_service::DashboardService;
pub use service::dto::{BreakdownItem, DailySummary, RangeSummary, TrendPoint, TrendSeries};
pub use usecase::history::{HistoryReport, HistoryUseCase};
pub use usecase::today::TodayUseCase;
