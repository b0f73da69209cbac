//! Event handling playground (click, hover, double click, theme)

use super::components::{render_button, ButtonStyle, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use crate::platform::CTRL_ENTER_SHORTCUT;
use crate::state::{AppState, Control};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BUTTON_WIDTH: u16 = 34;

fn panel_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .title(" Event Handling ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
}

fn rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Intro
            Constraint::Length(BUTTON_HEIGHT), // Click
            Constraint::Length(BUTTON_HEIGHT), // Hover
            Constraint::Length(BUTTON_HEIGHT), // Double click
            Constraint::Length(BUTTON_HEIGHT), // Dark mode
            Constraint::Min(0),                // Tips
        ])
        .split(area)
}

/// Controls of the events view and where they are drawn
pub fn regions(area: Rect) -> Vec<(Control, Rect)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = rows(inner);
    let width = |r: Rect| Rect {
        width: r.width.min(BUTTON_WIDTH),
        ..r
    };

    vec![
        (Control::ClickButton, width(rows[1])),
        (Control::HoverButton, width(rows[2])),
        (Control::DoubleClickButton, width(rows[3])),
        (Control::DarkModeToggle, width(rows[4])),
    ]
}

fn label(state: &AppState, control: Control) -> String {
    match control {
        Control::ClickButton => format!("Click me ({})", state.session.click_count),
        Control::HoverButton => "Hover over me".to_string(),
        Control::DoubleClickButton => "Double click me".to_string(),
        Control::DarkModeToggle => {
            let mark = if state.theme.is_dark() { "x" } else { " " };
            format!("[{mark}] Dark mode")
        }
        _ => String::new(),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let state = &app.state;
    let block = panel_block(palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = rows(inner);
    let intro = Paragraph::new("Click, hover and double click the buttons below.")
        .style(Style::default().fg(palette.text))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, rows[0]);

    let selected = state.selected_control();
    for (control, rect) in regions(area) {
        let fill = (control == Control::DoubleClickButton).then(|| {
            if state.events.is_double_click_flashing() {
                palette.double_click_flash
            } else {
                palette.double_click
            }
        });
        let style = ButtonStyle::default()
            .selected(selected == Some(control))
            .hovered(state.events.hovered == Some(control))
            .fill(fill);
        render_button(frame, rect, &label(state, control), style, palette);
    }

    let key = |k: &'static str| {
        Span::styled(
            k,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    };
    let tips = vec![
        Line::from(""),
        Line::from(vec![
            key("j/k"),
            Span::raw(" select  "),
            key("Enter"),
            Span::raw(" activate  "),
            key("d"),
            Span::raw(" dark mode"),
        ]),
        Line::from(vec![
            Span::raw("Try "),
            key(CTRL_ENTER_SHORTCUT),
            Span::raw(" anywhere."),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(tips).style(Style::default().fg(palette.muted)),
        rows[5],
    );
}
