//! Field rendering utilities for forms

use crate::state::{FieldMark, FormField};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field with its validation indicator
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    palette: &Palette,
) {
    let border_color = match field.mark {
        FieldMark::Error => palette.error,
        FieldMark::Success => palette.success,
        FieldMark::Untouched if is_active => palette.selected,
        FieldMark::Untouched => palette.muted,
    };

    let mut border_style = Style::default().fg(border_color);
    if is_active {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let style = if is_active {
        Style::default().fg(palette.text)
    } else {
        Style::default().fg(palette.muted)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(palette.selected)),
    ]));

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    // Inline error indicator
    if let Some(hint) = field.error_hint() {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {hint} "),
            Style::default().fg(palette.error),
        )));
    } else if field.mark == FieldMark::Success {
        block = block.title_bottom(Line::from(Span::styled(
            " ✓ ",
            Style::default().fg(palette.success),
        )));
    }

    frame.render_widget(content.block(block), area);
}

/// Draw a single line of help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let help = Paragraph::new(text).style(Style::default().fg(palette.muted));
    frame.render_widget(help, area);
}
