//! Signup form view

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Control, FormButton, SignupForm};
use crate::ui::components::{render_button, ButtonStyle, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use crate::validation::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const FIELDS_PER_COLUMN: usize = 3;
const FORM_BUTTON_WIDTH: u16 = 12;

fn rows(area: Rect) -> std::rc::Rc<[Rect]> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                     // Intro
            Constraint::Length(FIELD_HEIGHT * FIELDS_PER_COLUMN as u16), // Fields
            Constraint::Length(BUTTON_HEIGHT),                         // Buttons
            Constraint::Length(1),                                     // Help
            Constraint::Min(0),
        ])
        .split(inner)
}

/// Controls of the form view and where they are drawn
pub fn regions(area: Rect) -> Vec<(Control, Rect)> {
    let rows = rows(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let mut regions: Vec<(Control, Rect)> = FieldName::ALL
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let column = columns[idx / FIELDS_PER_COLUMN];
            let row = (idx % FIELDS_PER_COLUMN) as u16;
            let rect = Rect {
                x: column.x,
                y: column.y + row * FIELD_HEIGHT,
                width: column.width,
                height: FIELD_HEIGHT,
            }
            .intersection(column);
            (Control::Field(*name), rect)
        })
        .collect();

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(FORM_BUTTON_WIDTH),
            Constraint::Length(FORM_BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[2]);
    regions.extend(
        FormButton::ALL
            .iter()
            .enumerate()
            .map(|(idx, button)| (Control::FormButton(*button), buttons[idx])),
    );

    regions
}

/// Draw the signup form
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form: &SignupForm = &app.state.form;

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted));
    frame.render_widget(block, area);

    let rows = rows(area);
    frame.render_widget(
        Paragraph::new("Every field is checked as you type.").style(Style::default().fg(palette.text)),
        rows[0],
    );

    for (control, rect) in regions(area) {
        if rect.is_empty() {
            continue;
        }
        match control {
            Control::Field(name) => {
                let is_active = form.active_field_name() == Some(name);
                draw_field(frame, rect, form.field(name), is_active, palette);
            }
            Control::FormButton(button) => {
                let is_selected =
                    form.is_buttons_row_active() && form.selected_button == button;
                let style = ButtonStyle::default()
                    .selected(is_selected)
                    .hovered(app.state.events.hovered == Some(control));
                render_button(frame, rect, button.label(), style, palette);
            }
            _ => {}
        }
    }

    let help = format!("Tab/↑↓:field  ←→:button  Enter:press  {SUBMIT_SHORTCUT}:submit");
    draw_help_text(frame, rows[3], &help, palette);
}
