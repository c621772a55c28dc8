use eggsort_core::{format_date, BreakdownItem, DailySummary, EggSize, HistoryReport, TrendSeries, ViewMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType, Padding, Paragraph,
        Row, Table, Tabs,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::report::{format_count, format_weight};
use crate::tui::app::{App, DateField, InputMode};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    warn: Color,
}

const THEME: Theme = Theme {
    primary: Color::Yellow, // Amber accents
    muted: Color::DarkGray,
    text: Color::White,
    warn: Color::Red,
};

fn size_color(size: EggSize) -> Color {
    match size {
        EggSize::Size0 => Color::Yellow,
        EggSize::Size1 => Color::Cyan,
        EggSize::Size2 => Color::Red,
        EggSize::Size3 => Color::Blue,
        EggSize::Size4 => Color::Magenta,
        EggSize::Size5 => Color::Gray,
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header / Tabs
            Constraint::Length(3), // Date controls
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer / Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_controls(f, app, main_chunks[1]);

    match app.view {
        ViewMode::Dashboard => match &app.daily {
            Some(summary) => draw_dashboard(f, summary, main_chunks[2]),
            None => draw_empty(
                f,
                &format!("No sorting log for {}. Pick another date.", format_date(app.selected_date)),
                main_chunks[2],
            ),
        },
        ViewMode::History => match &app.history {
            Some(report) if !report.summary.is_empty() => draw_history(f, report, main_chunks[2]),
            _ => draw_empty(f, "No sorting logs in the selected range. Try another range.", main_chunks[2]),
        },
    }

    draw_footer(f, app, main_chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let selected = match app.view {
        ViewMode::Dashboard => 0,
        ViewMode::History => 1,
    };
    let tabs = Tabs::new(vec![" Daily Dashboard ", " History "])
        .select(selected)
        .style(Style::default().fg(THEME.muted))
        .highlight_style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(Span::styled(" EGGSORT ", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        );
    f.render_widget(tabs, area);
}

fn draw_controls(f: &mut Frame, app: &App, area: Rect) {
    let editing = match app.input_mode {
        InputMode::Editing(field) => Some(field),
        InputMode::Normal => None,
    };

    // The field being edited shows the live input instead of its value
    let field_text = |field: DateField, value: String| -> String {
        if editing == Some(field) { app.input.clone() } else { value }
    };

    let mut spans = Vec::new();
    let mut cursor_x = None;
    let mut push_field = |spans: &mut Vec<Span<'static>>, label: &str, field: DateField, value: String| {
        spans.push(Span::styled(format!("{}: ", label), Style::default().fg(THEME.muted)));
        let text = field_text(field, value);
        let offset: usize = spans.iter().map(|s| s.content.width()).sum();
        if editing == Some(field) {
            let before: String = text.chars().take(app.cursor_position).collect();
            cursor_x = Some(offset + before.width());
            spans.push(Span::styled(text, Style::default().fg(THEME.primary).add_modifier(Modifier::UNDERLINED)));
        } else {
            spans.push(Span::styled(text, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)));
        }
        spans.push(Span::raw("   "));
    };

    match app.view {
        ViewMode::Dashboard => {
            push_field(&mut spans, "Date", DateField::Selected, format_date(app.selected_date));
        },
        ViewMode::History => {
            push_field(&mut spans, "From", DateField::Start, format_date(app.start_date));
            push_field(&mut spans, "To", DateField::End, format_date(app.end_date));
            if app.filter_pending() {
                spans.push(Span::styled("(press f to apply)", Style::default().fg(THEME.primary)));
            }
        },
    }

    if let Some(message) = &app.message {
        spans.push(Span::styled(format!("  {}", message), Style::default().fg(THEME.warn)));
    }

    let controls = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(controls, area);

    if let Some(x) = cursor_x {
        // Border + padding
        let x = area.x + 2 + x as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn draw_dashboard(f: &mut Frame, summary: &DailySummary, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Cards
            Constraint::Min(8),    // Chart + Table
        ])
        .split(area);

    draw_cards(
        f,
        &[
            ("Total sorted", format_count(summary.total_sorted), "eggs"),
            ("Total weight", format_weight(summary.total_weight_kg), "kg"),
            ("Avg egg weight", summary.avg_egg_weight_label(), "g"),
        ],
        chunks[0],
    );

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_breakdown_chart(f, &summary.breakdown, content[0]);
    draw_breakdown_table(f, &summary.breakdown, summary.total_sorted, summary.total_percent_label(), content[1]);
}

fn draw_history(f: &mut Frame, report: &HistoryReport, area: Rect) {
    let summary = &report.summary;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Trend
            Constraint::Length(4), // Cards
            Constraint::Length(10), // Breakdown table
        ])
        .split(area);

    if let Some(trend) = &report.trend {
        draw_trend_chart(f, trend, chunks[0]);
    }

    draw_cards(
        f,
        &[
            ("Total sorted", format_count(summary.total_sorted), "eggs"),
            ("Average per day", format_count(summary.avg_per_day_rounded()), "eggs"),
            ("Days logged", summary.days.to_string(), "days"),
        ],
        chunks[1],
    );

    draw_breakdown_table(f, &summary.breakdown, summary.total_sorted, summary.total_percent_label(), chunks[2]);
}

fn draw_cards(f: &mut Frame, cards: &[(&str, String, &str)], area: Rect) {
    let constraints: Vec<Constraint> = cards.iter().map(|_| Constraint::Ratio(1, cards.len() as u32)).collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((title, value, unit), slot) in cards.iter().zip(slots.iter()) {
        let text = Line::from(vec![
            Span::styled(value.clone(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {}", unit), Style::default().fg(THEME.muted)),
        ]);
        let card = Paragraph::new(text).block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.primary))
                .padding(Padding::horizontal(1)),
        );
        f.render_widget(card, *slot);
    }
}

fn draw_breakdown_chart(f: &mut Frame, items: &[BreakdownItem], area: Rect) {
    let bar_items: Vec<Bar> = items.iter().map(|item| {
        Bar::default()
            .label(Line::from(format!("No.{}", item.size)))
            .value(item.count)
            .style(Style::default().fg(size_color(item.size)))
            .text_value(format!("{}%", item.percent_label()))
    }).collect();

    // 10% headroom above the tallest bar
    let max = items.iter().map(|i| i.count).max().unwrap_or(0);
    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Size Breakdown ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(7)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bar_items))
        .max(max + max / 10);

    f.render_widget(chart, area);
}

fn draw_breakdown_table(f: &mut Frame, items: &[BreakdownItem], total: u64, total_percent: &str, area: Rect) {
    let mut rows: Vec<Row> = items.iter().map(|item| {
        Row::new(vec![
            Span::styled(format!("No. {}", item.size), Style::default().fg(size_color(item.size))),
            Span::raw(format_count(item.count)),
            Span::raw(format!("{}%", item.percent_label())),
        ])
    }).collect();
    rows.push(
        Row::new(vec![
            Span::raw("Total"),
            Span::raw(format_count(total)),
            Span::raw(format!("{}%", total_percent)),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),  // Size
            Constraint::Min(10),    // Count
            Constraint::Length(9),  // Share
        ]
    )
    .header(Row::new(vec!["Size", "Count", "Share"]).style(Style::default().fg(THEME.primary)))
    .block(
        Block::default()
            .title(" Breakdown ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted)),
    );

    f.render_widget(table, area);
}

fn draw_trend_chart(f: &mut Frame, trend: &TrendSeries, area: Rect) {
    let points: Vec<(f64, f64)> = trend
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.total_sorted as f64))
        .collect();

    let x_max = (points.len().saturating_sub(1)).max(1) as f64;
    let x_labels: Vec<String> = match (trend.points.first(), trend.points.last()) {
        (Some(first), Some(last)) if trend.points.len() > 1 => vec![
            first.date.format("%m-%d").to_string(),
            last.date.format("%m-%d").to_string(),
        ],
        (Some(only), _) => vec![only.date.format("%m-%d").to_string()],
        _ => Vec::new(),
    };
    let y_labels: Vec<String> = trend.y_ticks.iter().map(|t| format_count(*t)).collect();

    let dataset = Dataset::default()
        .name("sorted / day")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(THEME.primary))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(" Daily Sorted Trend ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(THEME.muted))
                .bounds([trend.y_min, trend.y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

fn draw_empty(f: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted))
                .padding(Padding::new(0, 0, 2, 0)),
        );
    f.render_widget(paragraph, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let keys: &[(&str, &str)] = match (app.input_mode, app.view) {
        (InputMode::Editing(_), _) => &[("APPLY: ", "Enter"), ("CANCEL: ", "Esc")],
        (InputMode::Normal, ViewMode::Dashboard) => {
            &[("DATE: ", "d"), ("DAY: ", "←/→"), ("VIEW: ", "Tab"), ("QUIT: ", "q")]
        },
        (InputMode::Normal, ViewMode::History) => {
            &[("FROM: ", "s"), ("TO: ", "e"), ("FILTER: ", "f"), ("RESET: ", "r"), ("VIEW: ", "Tab"), ("QUIT: ", "q")]
        },
    };

    let mut spans = Vec::new();
    for (label, key) in keys {
        spans.push(Span::styled(*label, Style::default().fg(THEME.muted)));
        spans.push(Span::styled(*key, Style::default().fg(THEME.text)));
        spans.push(Span::raw("  "));
    }
    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}
