//! Button component for TUI

use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Visual state of a button
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonStyle {
    pub is_selected: bool,
    pub is_hovered: bool,
    /// Overrides the border colour, e.g. for flash effects
    pub fill: Option<Color>,
}

impl ButtonStyle {
    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub fn hovered(mut self, is_hovered: bool) -> Self {
        self.is_hovered = is_hovered;
        self
    }

    pub fn fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }
}

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    style: ButtonStyle,
    palette: &Palette,
) {
    let border_color = match style.fill {
        Some(fill) => fill,
        None if style.is_selected => palette.selected,
        None if style.is_hovered => palette.accent,
        None => palette.muted,
    };

    let mut text_style = Style::default().fg(palette.text);
    if style.is_selected || style.is_hovered {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }
    if let Some(fill) = style.fill {
        text_style = text_style.fg(fill);
    }

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(paragraph.block(block), area);
}
