mod history;
mod report;
mod today;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eggsort_core::{
    parse_date, parse_range, Config, DashboardService, DateContext, HistoryUseCase, TodayUseCase, ViewMode,
};

#[derive(Parser)]
#[command(name = "eggsort")]
#[command(about = "Egg sorting production dashboard", long_about = None)]
struct Cli {
    /// Daily log JSON file (default: $EGGSORT_DATA, then ~/.eggsort/daily_logs.json, then built-in sample)
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show one day's totals and size breakdown (default: latest logged day)
    Today {
        /// YYYY-MM-DD, today, yesterday, latest, or an offset like -2d
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Aggregate a date range (default: every logged day)
    History {
        /// First day of the range, inclusive
        #[arg(long)]
        from: Option<String>,
        /// Last day of the range, inclusive
        #[arg(long)]
        to: Option<String>,
        /// Whole range as START..END
        #[arg(short, long, conflicts_with_all = ["from", "to"])]
        range: Option<String>,
    },
    /// Open the Terminal User Interface
    Tui {
        /// View to open on (dashboard or history)
        #[arg(short, long)]
        view: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.data);
    log::debug!("data source: {:?}", config.data_source);

    let service = DashboardService::new(config.open_repository()?);
    let ctx = DateContext::now(service.date_bounds()?);

    match cli.command {
        Some(Commands::Today { date }) => {
            let usecase = TodayUseCase::new(&service);
            let date = match date {
                Some(d) => parse_date(&d, &ctx)?,
                None => usecase.default_date()?.unwrap_or(ctx.today),
            };
            let summary = usecase.summary_for(date)?;
            today::show_today(date, summary.as_ref());
        },
        Some(Commands::History { from, to, range }) => {
            let usecase = HistoryUseCase::new(&service);
            let (first, last) = usecase.default_range()?.unwrap_or((ctx.today, ctx.today));
            let (start, end) = match range {
                Some(r) => parse_range(&r, &ctx)?,
                None => (
                    from.map(|d| parse_date(&d, &ctx)).transpose()?.unwrap_or(first),
                    to.map(|d| parse_date(&d, &ctx)).transpose()?.unwrap_or(last),
                ),
            };
            history::show_history(&usecase.report(start, end)?);
        },
        Some(Commands::Tui { view }) => {
            let view = view.map(|v| ViewMode::parse(&v)).transpose()?.unwrap_or_default();
            tui::run(service, ctx, view)?;
        },
        None => {
            tui::run(service, ctx, ViewMode::default())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_range_conflicts_with_from() {
        let result = Cli::try_parse_from(["eggsort", "history", "--range", "a..b", "--from", "a"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["eggsort", "today", "--data", "logs.json", "-d", "latest"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("logs.json")));
        assert!(matches!(cli.command, Some(Commands::Today { date: Some(_) })));
    }
}
