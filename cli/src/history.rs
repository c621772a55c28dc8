use eggsort_core::{format_date, HistoryReport, TrendSeries};
use tabled::{Table, Tabled};
use tabled::settings::{Alignment, Color, Modify, Style};
use tabled::settings::object::{Columns, Rows};

use crate::report::{breakdown_table, format_count, format_weight};

const TREND_BAR_WIDTH: usize = 30;

// Helper struct for Table Row
#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Sorted")]
    sorted: String,
    #[tabled(rename = "Weight (kg)")]
    weight: String,
    #[tabled(rename = "Trend")]
    trend: String,
}

pub fn show_history(report: &HistoryReport) {
    let summary = &report.summary;
    let range = format!("{} .. {}", format_date(summary.start), format_date(summary.end));

    if summary.is_empty() {
        println!("No sorting logs between {}. Try another range.", range);
        return;
    }

    println!(
        "\n\x1b[1;36mHistory {}\x1b[0m (Days: {}, Total: {}, Avg/day: {})",
        range,
        summary.days,
        format_count(summary.total_sorted),
        format_count(summary.avg_per_day_rounded())
    );
    println!("  Total weight: {} kg", format_weight(summary.total_weight_kg));

    let rows: Vec<DayRow> = summary
        .logs
        .iter()
        .map(|log| DayRow {
            date: format_date(log.date),
            day: log.date.format("%a").to_string(),
            sorted: format_count(log.total_sorted),
            weight: format_weight(log.total_weight_kg),
            trend: report
                .trend
                .as_ref()
                .map(|t| trend_bar(t, log.total_sorted))
                .unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(2..4)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    println!("\nSize breakdown");
    println!("{}", breakdown_table(&summary.breakdown, summary.total_sorted, summary.total_percent_label()));
}

// Bar length relative to the chart scale; the smallest day still gets one cell.
fn trend_bar(trend: &TrendSeries, total: u64) -> String {
    let span = trend.y_max - trend.y_min;
    let ratio = if span > 0.0 {
        ((total as f64 - trend.y_min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cells = 1 + (ratio * (TREND_BAR_WIDTH - 1) as f64).round() as usize;
    "█".repeat(cells)
}
