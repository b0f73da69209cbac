//! Layout components (sidebar, status bar)

use super::components::{render_button, ButtonStyle, BUTTON_HEIGHT};
use super::theme::{blend, Palette};
use crate::app::App;
use crate::state::{Control, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Sidebar buttons and the area each one occupies
pub fn sidebar_regions(area: Rect) -> Vec<(Control, Rect)> {
    let item_count = View::ALL.len() as u16;
    let content_height = item_count * BUTTON_HEIGHT;
    let top = area.y + area.height.saturating_sub(content_height) / 2;

    View::ALL
        .iter()
        .enumerate()
        .map(|(idx, view)| {
            let y = top + idx as u16 * BUTTON_HEIGHT;
            let rect = Rect {
                x: area.x,
                y,
                width: area.width,
                height: BUTTON_HEIGHT,
            }
            .intersection(area);
            (Control::Sidebar(*view), rect)
        })
        .collect()
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    for (control, rect) in sidebar_regions(area) {
        let Control::Sidebar(view) = control else {
            continue;
        };
        if rect.is_empty() {
            continue;
        }
        let idx = View::ALL.iter().position(|v| *v == view).unwrap_or(0);
        let style = ButtonStyle::default()
            .selected(app.state.current_view == view)
            .hovered(app.state.events.hovered == Some(control));
        let content = format!("F{} {}", idx + 1, view.label());
        render_button(frame, rect, &content, style, palette);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    // Fade from the highlight back to the normal background
    let intensity = app.state.status.flash.map(|f| f.intensity()).unwrap_or(0.0);
    let background = blend(palette.status_bg, palette.status_flash_bg, intensity);

    let session = &app.state.session;
    let counters = format!(
        " clicks:{} interactions:{} ",
        session.click_count, session.total_interactions
    );
    let quit_hint = " ^C:quit ";

    let spans = vec![
        Span::raw(" "),
        Span::styled(
            app.state.status.display_text(),
            Style::default().fg(palette.text),
        ),
    ];
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(background));
    frame.render_widget(status, status_area);

    // Counters and quit hint on the right
    let right = format!("{counters}{quit_hint}");
    let right_width = right.chars().count() as u16;
    if right_width < status_area.width {
        let right_area = Rect {
            x: status_area.right().saturating_sub(right_width),
            y: status_area.y,
            width: right_width,
            height: 1,
        };
        let widget = Paragraph::new(right).style(Style::default().bg(background).fg(palette.muted));
        frame.render_widget(widget, right_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line_and_sidebar() {
        let (sidebar, main) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(sidebar, Rect::new(0, 0, 20, 23));
        assert_eq!(main, Rect::new(20, 0, 60, 23));
    }

    #[test]
    fn test_sidebar_regions_are_centered_and_stacked() {
        let regions = sidebar_regions(Rect::new(0, 0, 20, 23));
        assert_eq!(regions.len(), 3);
        // 23 rows, 9 rows of buttons -> 7 rows of padding on top
        assert_eq!(regions[0], (Control::Sidebar(View::Events), Rect::new(0, 7, 20, 3)));
        assert_eq!(regions[1].1.y, 10);
        assert_eq!(regions[2], (Control::Sidebar(View::Form), Rect::new(0, 13, 20, 3)));
    }

    #[test]
    fn test_sidebar_regions_clip_to_small_area() {
        let area = Rect::new(0, 0, 20, 4);
        for (_, rect) in sidebar_regions(area) {
            assert!(rect.is_empty() || rect.bottom() <= area.bottom());
        }
    }
}
