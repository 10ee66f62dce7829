//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

impl Palette {
    // --- Text styles ---
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text_bold(&self) -> Style {
        self.text_primary().add_modifier(Modifier::BOLD)
    }

    /// Completed items: muted and struck through
    pub fn text_done(&self) -> Style {
        self.text_muted().add_modifier(Modifier::CROSSED_OUT)
    }

    // --- Accent styles ---
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    // --- Status styles ---
    pub fn status_green(&self) -> Style {
        Style::default().fg(self.status_green)
    }

    pub fn status_red(&self) -> Style {
        Style::default().fg(self.status_red)
    }

    pub fn status_yellow(&self) -> Style {
        Style::default().fg(self.status_yellow)
    }

    /// Key hints in the status bar
    pub fn keybinding(&self) -> Style {
        self.status_yellow().add_modifier(Modifier::BOLD)
    }

    /// Selected row in a focused list
    pub fn focused_selected(&self) -> Style {
        Style::default()
            .fg(self.contrast_fg)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    // --- Block builders ---
    pub fn glass_block(&self, focused: bool) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused {
                self.border_active
            } else {
                self.border_dim
            }))
            .style(Style::default().bg(self.deepest_bg))
    }

    pub fn modal_block(&self, title: impl Into<String>) -> Block<'static> {
        Block::default()
            .title(format!(" {} ", title.into()))
            .title_style(self.accent_bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_active))
            .style(Style::default().bg(self.popup_bg))
    }
}

#[cfg(test)]
mod tests {
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_text_styles_have_palette_colors() {
        assert_eq!(DARK.text_primary().fg, Some(DARK.text_primary));
        assert_eq!(DARK.text_secondary().fg, Some(DARK.text_secondary));
        assert_eq!(LIGHT.text_muted().fg, Some(LIGHT.text_muted));
    }

    #[test]
    fn test_focused_selected_uses_accent_background() {
        let style = LIGHT.focused_selected();
        assert_eq!(style.bg, Some(LIGHT.accent));
        assert_eq!(style.fg, Some(LIGHT.contrast_fg));
    }

    #[test]
    fn test_text_done_is_crossed_out() {
        let style = DARK.text_done();
        assert!(style.add_modifier.contains(ratatui::style::Modifier::CROSSED_OUT));
    }
}
