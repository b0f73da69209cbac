//! UI module for rendering the TUI

mod components;
mod events_panel;
mod forms;
mod layout;
pub mod theme;
mod widgets_panel;

use crate::app::App;
use crate::state::{AppState, Control, View};
use components::render_message_dialog;
pub use widgets_panel::FAQ_ENTRIES;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = theme::palette(app.state.theme);

    // Themed background
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app, &palette);

    // Draw main content based on current view
    match app.state.current_view {
        View::Events => events_panel::draw(frame, main_area, app, &palette),
        View::Widgets => widgets_panel::draw(frame, main_area, app, &palette),
        View::Form => forms::draw_signup_form(frame, main_area, app, &palette),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app, &palette);

    // Modal dialog on top of everything
    if let Some(dialog) = app.state.current_dialog() {
        render_message_dialog(frame, dialog);
    }
}

/// Every clickable control on screen and where it is drawn
pub fn control_regions(state: &AppState, screen: Rect) -> Vec<(Control, Rect)> {
    let (sidebar_area, main_area) = layout::create_layout(screen);
    let mut regions = layout::sidebar_regions(sidebar_area);
    regions.extend(match state.current_view {
        View::Events => events_panel::regions(main_area),
        View::Widgets => widgets_panel::regions(main_area, state),
        View::Form => forms::regions(main_area),
    });
    regions
}

/// The control under a screen cell, if any
pub fn control_at(state: &AppState, screen: Rect, column: u16, row: u16) -> Option<Control> {
    let position = Position::new(column, row);
    control_regions(state, screen)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(control, _)| control)
}
