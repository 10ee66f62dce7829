//! Modal dialogs drawn over the active tab

mod grocery_form;
mod meal_editor;
mod month_picker;
mod pickers;
mod recipe_form;

pub use grocery_form::GroceryFormDialog;
pub use meal_editor::MealEditorDialog;
pub use month_picker::MonthPickerDialog;
pub use pickers::{CategoryPickerDialog, CurrencyPickerDialog};
pub use recipe_form::RecipeFormDialog;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::modal_overlay::{centered_rect, dim_background};
use crate::theme::Palette;

/// Dim the screen, clear a centered box and draw its frame; returns the inner area
fn open_modal(
    buf: &mut Buffer,
    area: Rect,
    width: u16,
    height: u16,
    title: impl Into<String>,
    palette: &Palette,
) -> Rect {
    dim_background(buf, area, palette);
    let modal = centered_rect(width, height, area);
    Clear.render(modal, buf);
    let block = palette.modal_block(title);
    let inner = block.inner(modal);
    block.render(modal, buf);
    inner
}

/// `Label: value` with a cursor when the field has focus
fn field_line(label: &str, value: &str, focused: bool, palette: &Palette) -> Line<'static> {
    let label_style = if focused {
        palette.accent_bold()
    } else {
        palette.text_secondary()
    };
    let mut spans = vec![
        Span::styled(if focused { "▶ " } else { "  " }, palette.accent()),
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(value.to_string(), palette.text_primary()),
    ];
    if focused {
        spans.push(Span::styled("_", palette.keybinding()));
    }
    Line::from(spans)
}

/// Inline validation message, or a blank line
fn error_line(error: Option<String>, palette: &Palette) -> Line<'static> {
    match error {
        Some(message) => Line::from(Span::styled(format!("  {}", message), palette.status_red())),
        None => Line::default(),
    }
}

/// Highlighted-or-plain list row
fn list_row(text: String, selected: bool, palette: &Palette) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("▶ ", palette.accent()),
            Span::styled(text, palette.focused_selected()),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::styled(text, palette.text_primary())])
    }
}
