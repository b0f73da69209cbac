//! Interactive widgets (counter, FAQ, dropdown, hidden panel)

use super::components::{render_button, ButtonStyle, BUTTON_HEIGHT};
use super::theme::{counter_color, Palette};
use crate::app::App;
use crate::state::{AppState, Control, FAQ_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Question and answer of each FAQ entry
pub const FAQ_ENTRIES: [(&str, &str); FAQ_COUNT] = [
    (
        "What is an event handler?",
        "A function that runs when something happens: a click, a key press, the mouse moving.",
    ),
    (
        "Where does the counter live?",
        "In the session state owned by the app. Nothing is global, so every session starts at zero.",
    ),
    (
        "When are form fields checked?",
        "On every keystroke, and all at once when you submit.",
    ),
];

/// Items listed in the dropdown menu
pub const DROPDOWN_ITEMS: [&str; 3] = ["Home", "About", "Contact"];

const ANSWER_HEIGHT: u16 = 4;
const HIDDEN_PANEL_HEIGHT: u16 = 6;

/// Rects for every part of the widgets view
struct WidgetAreas {
    counter_value: Rect,
    decrement: Rect,
    reset: Rect,
    increment: Rect,
    faq: [Rect; FAQ_COUNT],
    answer: [Rect; FAQ_COUNT],
    dropdown: Rect,
    dropdown_menu: Rect,
    hidden_toggle: Rect,
    hidden_panel: Rect,
    show_alert: Rect,
}

fn panel_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .title(" Interactive Elements ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
}

fn compute_areas(area: Rect, state: &AppState) -> WidgetAreas {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let answer_height = |idx: usize| {
        if state.widgets.open_faq == Some(idx) {
            ANSWER_HEIGHT
        } else {
            0
        }
    };

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Counter
            Constraint::Length(BUTTON_HEIGHT), // FAQ 1
            Constraint::Length(answer_height(0)),
            Constraint::Length(BUTTON_HEIGHT), // FAQ 2
            Constraint::Length(answer_height(1)),
            Constraint::Length(BUTTON_HEIGHT), // FAQ 3
            Constraint::Length(answer_height(2)),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let counter_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Value
            Constraint::Length(7),  // -
            Constraint::Length(9),  // Reset
            Constraint::Length(7),  // +
            Constraint::Min(0),
        ])
        .split(left[0]);

    let menu_height = if state.widgets.dropdown_open {
        DROPDOWN_ITEMS.len() as u16 + 2
    } else {
        0
    };
    let hidden_height = if state.widgets.hidden_revealed {
        HIDDEN_PANEL_HEIGHT
    } else {
        0
    };

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Dropdown toggle
            Constraint::Length(menu_height),
            Constraint::Length(BUTTON_HEIGHT), // Hidden toggle
            Constraint::Length(hidden_height),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let hidden_panel = right[3];
    let hidden_inner = Block::default().borders(Borders::ALL).inner(hidden_panel);
    let show_alert = Rect {
        x: hidden_inner.x,
        y: hidden_inner.y + 1,
        width: hidden_inner.width.min(16),
        height: BUTTON_HEIGHT.min(hidden_inner.height.saturating_sub(1)),
    };

    WidgetAreas {
        counter_value: counter_row[0],
        decrement: counter_row[1],
        reset: counter_row[2],
        increment: counter_row[3],
        faq: [left[1], left[3], left[5]],
        answer: [left[2], left[4], left[6]],
        dropdown: right[0],
        dropdown_menu: right[1],
        hidden_toggle: right[2],
        hidden_panel,
        show_alert,
    }
}

/// Controls of the widgets view and where they are drawn
pub fn regions(area: Rect, state: &AppState) -> Vec<(Control, Rect)> {
    let areas = compute_areas(area, state);
    let mut regions = vec![
        (Control::CounterDecrement, areas.decrement),
        (Control::CounterReset, areas.reset),
        (Control::CounterIncrement, areas.increment),
    ];
    regions.extend(
        areas
            .faq
            .iter()
            .enumerate()
            .map(|(idx, rect)| (Control::Faq(idx), *rect)),
    );
    regions.push((Control::DropdownToggle, areas.dropdown));
    regions.push((Control::HiddenToggle, areas.hidden_toggle));
    if state.widgets.hidden_revealed {
        regions.push((Control::ShowAlert, areas.show_alert));
    }
    regions
}

fn label(state: &AppState, control: Control) -> String {
    let arrow = |open: bool| if open { "▾" } else { "▸" };
    match control {
        Control::CounterDecrement => "-".to_string(),
        Control::CounterReset => "Reset".to_string(),
        Control::CounterIncrement => "+".to_string(),
        Control::Faq(idx) => format!(
            "{} {}",
            arrow(state.widgets.open_faq == Some(idx)),
            FAQ_ENTRIES.get(idx).map(|(q, _)| *q).unwrap_or_default()
        ),
        Control::DropdownToggle => format!("{} Menu", arrow(state.widgets.dropdown_open)),
        Control::HiddenToggle => {
            if state.widgets.hidden_revealed {
                "Hide secret interface".to_string()
            } else {
                "Reveal secret interface".to_string()
            }
        }
        Control::ShowAlert => "Show alert".to_string(),
        _ => String::new(),
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let state = &app.state;
    let block = panel_block(palette);
    frame.render_widget(block, area);

    let areas = compute_areas(area, state);

    // Counter value
    let counter = state.session.counter;
    let value = Paragraph::new(counter.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(counter_color(palette, counter))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(value, areas.counter_value);

    // FAQ answers
    if let Some(idx) = state.widgets.open_faq {
        if let (Some((_, answer)), Some(rect)) = (FAQ_ENTRIES.get(idx), areas.answer.get(idx)) {
            let paragraph = Paragraph::new(*answer)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(palette.text))
                .block(
                    Block::default()
                        .borders(Borders::LEFT)
                        .border_style(Style::default().fg(palette.accent)),
                );
            frame.render_widget(paragraph, *rect);
        }
    }

    // Dropdown menu
    if state.widgets.dropdown_open {
        let items: Vec<Line> = DROPDOWN_ITEMS
            .iter()
            .map(|item| Line::from(format!(" {item}")))
            .collect();
        let menu = Paragraph::new(items)
            .style(Style::default().fg(palette.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            );
        frame.render_widget(menu, areas.dropdown_menu);
    }

    // Hidden interface
    if state.widgets.hidden_revealed {
        let panel = Paragraph::new("This interface was hidden until now.")
            .style(Style::default().fg(palette.text))
            .block(
                Block::default()
                    .title(" Secret interface ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            );
        frame.render_widget(panel, areas.hidden_panel);
    }

    let selected = state.selected_control();
    for (control, rect) in regions(area, state) {
        if rect.is_empty() {
            continue;
        }
        let style = ButtonStyle::default()
            .selected(selected == Some(control))
            .hovered(state.events.hovered == Some(control));
        render_button(frame, rect, &label(state, control), style, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 20,
        y: 0,
        width: 80,
        height: 30,
    };

    #[test]
    fn test_regions_match_view_controls() {
        let mut state = AppState {
            current_view: crate::state::View::Widgets,
            ..Default::default()
        };
        let controls: Vec<_> = regions(AREA, &state).into_iter().map(|(c, _)| c).collect();
        assert_eq!(controls, state.view_controls());

        state.widgets.hidden_revealed = true;
        let controls: Vec<_> = regions(AREA, &state).into_iter().map(|(c, _)| c).collect();
        assert_eq!(controls, state.view_controls());
    }

    #[test]
    fn test_open_faq_pushes_following_entries_down() {
        let mut state = AppState::default();
        let closed = compute_areas(AREA, &state);
        state.widgets.open_faq = Some(0);
        let open = compute_areas(AREA, &state);

        assert_eq!(open.faq[0], closed.faq[0]);
        assert_eq!(open.faq[1].y, closed.faq[1].y + ANSWER_HEIGHT);
        assert_eq!(open.answer[0].height, ANSWER_HEIGHT);
    }

    #[test]
    fn test_show_alert_inside_hidden_panel() {
        let mut state = AppState::default();
        state.widgets.hidden_revealed = true;
        let areas = compute_areas(AREA, &state);
        assert!(areas.hidden_panel.contains(areas.show_alert.as_position()));
        assert!(areas.show_alert.bottom() <= areas.hidden_panel.bottom());
    }

    #[test]
    fn test_faq_label_shows_state() {
        let mut state = AppState::default();
        assert!(label(&state, Control::Faq(1)).starts_with('▸'));
        state.widgets.open_faq = Some(1);
        assert!(label(&state, Control::Faq(1)).starts_with('▾'));
        assert!(label(&state, Control::Faq(0)).starts_with('▸'));
    }
}
