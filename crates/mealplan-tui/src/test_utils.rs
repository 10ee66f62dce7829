//! Shared helpers for widget and render tests

use chrono::NaiveDate;
use mealplan_app::config::Settings;
use mealplan_app::AppState;
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
}

/// App state with default settings and the seeded data
pub fn test_state() -> AppState {
    AppState::new(&Settings::default(), today(), true)
}

/// Draw once into a test terminal and return its buffer
pub fn render_buffer(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer rows joined with newlines, trailing spaces trimmed
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render and return the screen text in one step
pub fn render_text(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    buffer_text(&render_buffer(width, height, draw))
}
