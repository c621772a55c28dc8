pub mod app;
pub mod ui;

use std::io;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use eggsort_core::{DateContext, ViewMode};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::{App, DateField, InputMode, Service};

pub fn run(service: Service, ctx: DateContext, view: ViewMode) -> Result<()> {
    // Load before touching the terminal so data errors print normally
    let mut app = App::new(service, ctx, view)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    loop_outcome(res)
}

fn loop_outcome(res: io::Result<()>) -> Result<()> {
    if let Err(err) = &res {
        log::error!("terminal loop failed: {}", err);
    }
    res.map_err(Into::into)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(std::time::Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match (app.view, key.code) {
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => return Ok(()),
                (_, KeyCode::Tab) | (_, KeyCode::Char('v')) => app.toggle_view(),

                (ViewMode::Dashboard, KeyCode::Char('d')) => app.enter_edit_mode(DateField::Selected),
                (ViewMode::Dashboard, KeyCode::Left) | (ViewMode::Dashboard, KeyCode::Char('h')) => app.previous_day(),
                (ViewMode::Dashboard, KeyCode::Right) | (ViewMode::Dashboard, KeyCode::Char('l')) => app.next_day(),

                (ViewMode::History, KeyCode::Char('s')) => app.enter_edit_mode(DateField::Start),
                (ViewMode::History, KeyCode::Char('e')) => app.enter_edit_mode(DateField::End),
                (ViewMode::History, KeyCode::Char('f')) | (ViewMode::History, KeyCode::Enter) => app.apply_filter(),
                (ViewMode::History, KeyCode::Char('r')) => app.reset_filter(),
                _ => {}
            },
            InputMode::Editing(_) => match key.code {
                KeyCode::Enter => app.submit_input(),
                KeyCode::Esc => app.exit_input_mode(),
                KeyCode::Char(c) => app.input_char(c),
                KeyCode::Backspace => app.delete_char(),
                KeyCode::Left => app.move_cursor_left(),
                KeyCode::Right => app.move_cursor_right(),
                _ => {}
            },
        }
    }
}
