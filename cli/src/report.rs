use eggsort_core::BreakdownItem;
use tabled::{Table, Tabled};
use tabled::settings::{Alignment, Color, Modify, Style};
use tabled::settings::object::{Columns, Rows};

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Count")]
    count: String,
    #[tabled(rename = "Share (%)")]
    percent: String,
}

/// Size breakdown with a closing total row.
pub fn breakdown_table(items: &[BreakdownItem], total: u64, total_percent: &str) -> Table {
    let mut rows: Vec<BreakdownRow> = items
        .iter()
        .map(|item| BreakdownRow {
            size: format!("No. {}", item.size),
            count: format_count(item.count),
            percent: item.percent_label(),
        })
        .collect();
    rows.push(BreakdownRow {
        size: "Total".to_string(),
        count: format_count(total),
        percent: total_percent.to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

/// `1234567` -> `1,234,567`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped like [`format_count`], with two decimals only when there is a fraction.
pub fn format_weight(kg: f64) -> String {
    let rounded = (kg * 100.0).round() / 100.0;
    let whole = rounded.trunc();
    let grouped = format_count(whole.max(0.0) as u64);
    if (rounded - whole).abs() < f64::EPSILON {
        grouped
    } else {
        let fraction = format!("{:.2}", rounded - whole);
        format!("{}{}", grouped, fraction.trim_start_matches('0'))
    }
}
