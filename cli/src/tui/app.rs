use anyhow::Result;
use chrono::{Duration, NaiveDate};
use eggsort_core::{
    format_date, parse_date, DailyLogRepository, DailySummary, DashboardService, DateContext, HistoryReport,
    HistoryUseCase, TodayUseCase, ViewMode,
};

pub type Service = DashboardService<Box<dyn DailyLogRepository>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateField {
    Selected,
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Editing(DateField),
}

pub struct App {
    service: Service,
    ctx: DateContext,
    default_range: (NaiveDate, NaiveDate),
    pub view: ViewMode,

    // Dashboard
    pub selected_date: NaiveDate,
    pub daily: Option<DailySummary>,

    // History: the range being edited, and the report for the last applied range
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub history: Option<HistoryReport>,

    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub message: Option<String>,
}

impl App {
    pub fn new(service: Service, ctx: DateContext, view: ViewMode) -> Result<App> {
        let selected_date = TodayUseCase::new(&service).default_date()?.unwrap_or(ctx.today);
        let default_range = HistoryUseCase::new(&service).default_range()?.unwrap_or((ctx.today, ctx.today));

        let mut app = App {
            service,
            ctx,
            default_range,
            view,
            selected_date,
            daily: None,
            start_date: default_range.0,
            end_date: default_range.1,
            history: None,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            message: None,
        };
        app.refresh_daily();
        app.apply_filter();
        Ok(app)
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggle();
        self.message = None;
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.refresh_daily();
    }

    pub fn previous_day(&mut self) {
        if let Some(date) = self.selected_date.checked_sub_signed(Duration::days(1)) {
            self.set_selected_date(date);
        }
    }

    pub fn next_day(&mut self) {
        if let Some(date) = self.selected_date.checked_add_signed(Duration::days(1)) {
            self.set_selected_date(date);
        }
    }

    fn refresh_daily(&mut self) {
        match TodayUseCase::new(&self.service).summary_for(self.selected_date) {
            Ok(summary) => self.daily = summary,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Re-runs the history report for the edited start/end pair.
    pub fn apply_filter(&mut self) {
        match HistoryUseCase::new(&self.service).report(self.start_date, self.end_date) {
            Ok(report) => self.history = Some(report),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    pub fn reset_filter(&mut self) {
        (self.start_date, self.end_date) = self.default_range;
        self.apply_filter();
    }

    /// True when the edited range differs from the one on screen.
    pub fn filter_pending(&self) -> bool {
        self.history
            .as_ref()
            .map(|h| (h.summary.start, h.summary.end) != (self.start_date, self.end_date))
            .unwrap_or(true)
    }

    pub fn enter_edit_mode(&mut self, field: DateField) {
        let current = match field {
            DateField::Selected => self.selected_date,
            DateField::Start => self.start_date,
            DateField::End => self.end_date,
        };
        self.input = format_date(current);
        self.cursor_position = self.input.chars().count();
        self.input_mode = InputMode::Editing(field);
        self.message = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Parses the input into the edited field. Start and end only take
    /// effect on the next `apply_filter`.
    pub fn submit_input(&mut self) {
        let InputMode::Editing(field) = self.input_mode else {
            return;
        };

        match parse_date(&self.input, &self.ctx) {
            Ok(date) => {
                match field {
                    DateField::Selected => self.set_selected_date(date),
                    DateField::Start => self.start_date = date,
                    DateField::End => self.end_date = date,
                }
                self.message = None;
            },
            Err(e) => self.message = Some(e.to_string()),
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eggsort_core::InMemoryDailyLogRepository;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn app() -> App {
        let repo: Box<dyn DailyLogRepository> = Box::new(InMemoryDailyLogRepository::sample());
        let service = DashboardService::new(repo);
        let ctx = DateContext::now(service.date_bounds().unwrap());
        App::new(service, ctx, ViewMode::Dashboard).unwrap()
    }

    fn type_date(app: &mut App, field: DateField, text: &str) {
        app.enter_edit_mode(field);
        app.input.clear();
        app.cursor_position = 0;
        for c in text.chars() {
            app.input_char(c);
        }
        app.submit_input();
    }

    #[test]
    fn test_opens_on_latest_day_and_full_range() {
        let app = app();
        assert_eq!(app.selected_date, date("2024-12-07"));
        assert_eq!(app.daily.as_ref().unwrap().total_sorted, 120500);
        let history = app.history.as_ref().unwrap();
        assert_eq!(history.summary.days, 7);
        assert!(!app.filter_pending());
    }

    #[test]
    fn test_toggle_view() {
        let mut app = app();
        app.toggle_view();
        assert_eq!(app.view, ViewMode::History);
        app.toggle_view();
        assert_eq!(app.view, ViewMode::Dashboard);
    }

    #[test]
    fn test_date_outside_data_shows_nothing() {
        let mut app = app();
        app.next_day();
        assert_eq!(app.selected_date, date("2024-12-08"));
        assert!(app.daily.is_none());
        app.previous_day();
        assert!(app.daily.is_some());
    }

    #[test]
    fn test_day_steps_stop_at_calendar_limits() {
        let mut app = app();
        app.set_selected_date(NaiveDate::MAX);
        app.next_day();
        assert_eq!(app.selected_date, NaiveDate::MAX);

        app.set_selected_date(NaiveDate::MIN);
        app.previous_day();
        assert_eq!(app.selected_date, NaiveDate::MIN);
        assert!(app.daily.is_none());
    }

    #[test]
    fn test_edit_selected_date() {
        let mut app = app();
        type_date(&mut app, DateField::Selected, "2024-12-01");
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.daily.as_ref().unwrap().total_sorted, 118000);

        type_date(&mut app, DateField::Selected, "not a date");
        assert!(app.message.is_some());
        assert_eq!(app.selected_date, date("2024-12-01"));
    }

    #[test]
    fn test_filter_applies_only_on_request() {
        let mut app = app();
        type_date(&mut app, DateField::Start, "2024-12-01");
        type_date(&mut app, DateField::End, "2024-12-03");
        assert!(app.filter_pending());
        assert_eq!(app.history.as_ref().unwrap().summary.days, 7);

        app.apply_filter();
        let summary = &app.history.as_ref().unwrap().summary;
        assert_eq!(summary.days, 3);
        assert_eq!(summary.total_sorted, 354500);

        app.reset_filter();
        assert_eq!((app.start_date, app.end_date), (date("2024-12-01"), date("2024-12-07")));
        assert_eq!(app.history.as_ref().unwrap().summary.days, 7);
    }

    #[test]
    fn test_inverted_filter_is_empty() {
        let mut app = app();
        type_date(&mut app, DateField::Start, "2024-12-06");
        type_date(&mut app, DateField::End, "2024-12-02");
        app.apply_filter();
        assert!(app.history.as_ref().unwrap().summary.is_empty());
    }

    #[test]
    fn test_input_editing_is_char_based() {
        let mut app = app();
        app.enter_edit_mode(DateField::Selected);
        assert_eq!(app.cursor_position, 10);
        app.delete_char();
        app.input_char('6');
        assert_eq!(app.input, "2024-12-06");
        app.move_cursor_left();
        app.move_cursor_right();
        app.move_cursor_right();
        assert_eq!(app.cursor_position, 10);
        app.submit_input();
        assert_eq!(app.selected_date, date("2024-12-06"));
    }
}
