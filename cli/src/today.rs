use chrono::NaiveDate;
use eggsort_core::{format_date, DailySummary};

use crate::report::{breakdown_table, format_count, format_weight};

pub fn show_today(date: NaiveDate, summary: Option<&DailySummary>) {
    let Some(summary) = summary else {
        println!("No sorting log for {}.", format_date(date));
        return;
    };

    println!("\n\x1b[1;36mDaily sorting {} ({})\x1b[0m", format_date(date), date.format("%a"));
    println!("  Total sorted:    {} eggs", format_count(summary.total_sorted));
    println!("  Total weight:    {} kg", format_weight(summary.total_weight_kg));
    println!("  Avg egg weight:  {} g", summary.avg_egg_weight_label());
    println!();

    let table = breakdown_table(&summary.breakdown, summary.total_sorted, summary.total_percent_label());
    println!("{}", table);
}
