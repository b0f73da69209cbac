//! Modal message dialog

use crate::state::{Dialog, DialogKind};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

/// Widest a dialog may grow, borders included
const MAX_DIALOG_WIDTH: u16 = 60;
/// Borders plus one column of padding on each side
const FRAME_WIDTH: u16 = 4;
/// Borders, the blank line under the title and the hint with its spacer
const FRAME_HEIGHT: u16 = 2 + 1 + 2;

fn kind_color(kind: DialogKind) -> Color {
    match kind {
        DialogKind::Info => Color::Cyan,
        DialogKind::Success => Color::Green,
        DialogKind::Error => Color::Red,
    }
}

/// Greedy word wrap; explicit newlines start a new line
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = line.chars().count() + word.chars().count() + 1;
            if !line.is_empty() && needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

/// Centre a `width` x `height` box on `screen`, shrinking it to fit
fn centered(screen: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(screen.height))])
        .flex(Flex::Center)
        .areas(screen);
    let [area] = Layout::horizontal([Constraint::Length(width.min(screen.width))])
        .flex(Flex::Center)
        .areas(row);
    area
}

fn hint_line() -> Line<'static> {
    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    Line::from(vec![
        Span::raw("Press "),
        key("Enter"),
        Span::raw(" or "),
        key("Esc"),
        Span::raw(" to dismiss"),
    ])
}

/// Render a dialog centred over everything else
pub fn render_message_dialog(frame: &mut Frame, dialog: &Dialog) {
    let color = kind_color(dialog.kind);
    let hint = hint_line();

    let text_width = (MAX_DIALOG_WIDTH - FRAME_WIDTH) as usize;
    let lines = wrap_words(&dialog.message, text_width);
    let widest = lines
        .iter()
        .map(|l| l.chars().count())
        .chain([hint.width()])
        .max()
        .unwrap_or(0) as u16;

    let area = centered(
        frame.area(),
        (widest + FRAME_WIDTH).min(MAX_DIALOG_WIDTH),
        lines.len() as u16 + FRAME_HEIGHT,
    );

    let mut content: Vec<Line> = vec![Line::from("")];
    content.extend(lines.into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(hint);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(content)
            .block(block)
            .style(Style::default().bg(Color::Black).fg(Color::White)),
        area,
    );
}
