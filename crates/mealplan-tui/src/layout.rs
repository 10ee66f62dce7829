//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header: border, title and tab row, border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title and the tab bar
    pub header: Rect,

    /// The active tab's content
    pub content: Rect,

    /// Status message and key hints
    pub status: Rect,
}

/// Split the terminal into header, content and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

/// Split a content area into a fixed-height top strip and the rest
///
/// Used by tabs that show a summary or toolbar above their list.
pub fn split_top(area: Rect, top_height: u16) -> (Rect, Rect) {
    let chunks = Layout::vertical([Constraint::Length(top_height), Constraint::Min(0)]).split(area);
    (chunks[0], chunks[1])
}
