//! Application state definitions

use super::forms::{FormButton, SignupForm};
use super::session::SessionStats;
use super::status::{Flash, StatusLine};
use crate::validation::FieldName;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Click, hover, double-click, theme toggle
    #[default]
    Events,
    /// Counter, FAQ, dropdown, hidden panel
    Widgets,
    /// Signup form
    Form,
}

impl View {
    pub const ALL: [View; 3] = [View::Events, View::Widgets, View::Form];

    pub fn next(&self) -> Self {
        match self {
            Self::Events => Self::Widgets,
            Self::Widgets => Self::Form,
            Self::Form => Self::Events,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Events => "Events",
            Self::Widgets => "Widgets",
            Self::Form => "Form",
        }
    }

    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Form)
    }

    /// Parse the `start_view` config value
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "events" => Some(Self::Events),
            "widgets" => Some(Self::Widgets),
            "form" => Some(Self::Form),
            _ => None,
        }
    }
}

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Anything that can be clicked or activated with Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Sidebar(View),
    ClickButton,
    HoverButton,
    DoubleClickButton,
    DarkModeToggle,
    CounterDecrement,
    CounterReset,
    CounterIncrement,
    Faq(usize),
    DropdownToggle,
    HiddenToggle,
    ShowAlert,
    Field(FieldName),
    FormButton(FormButton),
}

/// Number of FAQ entries in the widgets view
pub const FAQ_COUNT: usize = 3;

/// Modal dialog severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Success,
    Error,
}

/// A modal message that must be dismissed before anything else happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn new(kind: DialogKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Toggle state of the widgets view
#[derive(Debug, Clone, Default)]
pub struct WidgetsState {
    /// Index of the open FAQ entry; at most one is open
    pub open_faq: Option<usize>,
    pub dropdown_open: bool,
    pub hidden_revealed: bool,
}

/// Interaction tracking for the events view
#[derive(Debug, Clone, Default)]
pub struct EventsState {
    /// Control currently under the mouse (or keyboard focus)
    pub hovered: Option<Control>,
    /// First press of a potential double click
    pub last_double_press: Option<Instant>,
    /// Alternate colour on the double-click button
    pub double_click_flash: Option<Flash>,
}

impl EventsState {
    /// Maximum gap between two presses that still counts as a double click
    pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);
    /// How long the double-click button keeps its alternate colour
    pub const DOUBLE_CLICK_FLASH: Duration = Duration::from_millis(1000);

    /// Record a press on the double-click button; true when it completes a double click
    pub fn register_double_press(&mut self, now: Instant) -> bool {
        match self.last_double_press.take() {
            Some(prev) if now.saturating_duration_since(prev) <= Self::DOUBLE_CLICK_WINDOW => {
                self.double_click_flash = Some(Flash::new(Self::DOUBLE_CLICK_FLASH));
                true
            }
            _ => {
                self.last_double_press = Some(now);
                false
            }
        }
    }

    pub fn is_double_click_flashing(&self) -> bool {
        self.double_click_flash.is_some_and(|f| !f.is_expired())
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    /// Keyboard-selected control in the events and widgets views
    pub selected_index: usize,

    // Appearance
    pub theme: Theme,

    // Session
    pub session: SessionStats,
    pub status: StatusLine,

    // Views
    pub events: EventsState,
    pub widgets: WidgetsState,
    pub form: SignupForm,

    // Modal dialogs, front is shown
    pub dialogs: VecDeque<Dialog>,
}

impl AppState {
    /// Controls of the current view, in keyboard navigation order
    pub fn view_controls(&self) -> Vec<Control> {
        match self.current_view {
            View::Events => vec![
                Control::ClickButton,
                Control::HoverButton,
                Control::DoubleClickButton,
                Control::DarkModeToggle,
            ],
            View::Widgets => {
                let mut controls = vec![
                    Control::CounterDecrement,
                    Control::CounterReset,
                    Control::CounterIncrement,
                ];
                controls.extend((0..FAQ_COUNT).map(Control::Faq));
                controls.push(Control::DropdownToggle);
                controls.push(Control::HiddenToggle);
                if self.widgets.hidden_revealed {
                    controls.push(Control::ShowAlert);
                }
                controls
            }
            View::Form => {
                let mut controls: Vec<_> = FieldName::ALL.into_iter().map(Control::Field).collect();
                controls.extend(FormButton::ALL.into_iter().map(Control::FormButton));
                controls
            }
        }
    }

    /// The keyboard-selected control, if the view has one
    pub fn selected_control(&self) -> Option<Control> {
        if self.current_view.is_form_view() {
            return Some(match self.form.active_field_name() {
                Some(name) => Control::Field(name),
                None => Control::FormButton(self.form.selected_button),
            });
        }
        self.view_controls().get(self.selected_index).copied()
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let max = self.view_controls().len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside the current control list
    pub fn clamp_selection(&mut self) {
        let max = self.view_controls().len();
        if self.selected_index >= max {
            self.selected_index = max.saturating_sub(1);
        }
    }

    /// Select a control by value, if it belongs to the current view
    pub fn select_control(&mut self, control: Control) {
        if let Some(idx) = self.view_controls().iter().position(|c| *c == control) {
            self.selected_index = idx;
        }
    }

    pub fn push_dialog(&mut self, dialog: Dialog) {
        self.dialogs.push_back(dialog);
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialogs.is_empty()
    }

    pub fn current_dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialogs.pop_front();
    }

    /// Toggle one FAQ entry, closing the others. Returns true if it is now open.
    pub fn toggle_faq(&mut self, index: usize) -> bool {
        if self.widgets.open_faq == Some(index) {
            self.widgets.open_faq = None;
            false
        } else {
            self.widgets.open_faq = Some(index);
            true
        }
    }

    /// Whether any animation is running and the screen should redraw quickly
    pub fn is_animating(&self) -> bool {
        self.status.is_flashing() || self.events.is_double_click_flashing()
    }

    /// Drop animations that have run their course
    pub fn update_animations(&mut self) {
        self.status.update();
        if self
            .events
            .double_click_flash
            .is_some_and(|f| f.is_expired())
        {
            self.events.double_click_flash = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_cycles_all_views() {
            assert_eq!(View::Events.next(), View::Widgets);
            assert_eq!(View::Widgets.next(), View::Form);
            assert_eq!(View::Form.next(), View::Events);
        }

        #[test]
        fn test_from_config_is_case_insensitive() {
            assert_eq!(View::from_config("Form"), Some(View::Form));
            assert_eq!(View::from_config("widgets"), Some(View::Widgets));
            assert_eq!(View::from_config("settings"), None);
        }

        #[test]
        fn test_theme_toggle() {
            assert!(Theme::Light.toggle().is_dark());
            assert!(!Theme::Dark.toggle().is_dark());
        }
    }

    mod control_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_events_controls() {
            let state = AppState::default();
            assert_eq!(state.view_controls().len(), 4);
            assert_eq!(state.selected_control(), Some(Control::ClickButton));
        }

        #[test]
        fn test_show_alert_only_when_revealed() {
            let mut state = AppState {
                current_view: View::Widgets,
                ..Default::default()
            };
            assert!(!state.view_controls().contains(&Control::ShowAlert));
            state.widgets.hidden_revealed = true;
            assert_eq!(state.view_controls().last(), Some(&Control::ShowAlert));
        }

        #[test]
        fn test_selection_stays_in_bounds() {
            let mut state = AppState::default();
            for _ in 0..10 {
                state.move_selection_down();
            }
            assert_eq!(state.selected_index, 3);
            for _ in 0..10 {
                state.move_selection_up();
            }
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_clamp_after_controls_shrink() {
            let mut state = AppState {
                current_view: View::Widgets,
                ..Default::default()
            };
            state.widgets.hidden_revealed = true;
            state.select_control(Control::ShowAlert);
            state.widgets.hidden_revealed = false;
            state.clamp_selection();
            assert_eq!(state.selected_control(), Some(Control::HiddenToggle));
        }

        #[test]
        fn test_form_selected_control_follows_form_cursor() {
            let mut state = AppState {
                current_view: View::Form,
                ..Default::default()
            };
            assert_eq!(
                state.selected_control(),
                Some(Control::Field(FieldName::FullName))
            );
            state.form.focus_button(FormButton::Reset);
            assert_eq!(
                state.selected_control(),
                Some(Control::FormButton(FormButton::Reset))
            );
        }
    }

    mod widget_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_only_one_faq_open() {
            let mut state = AppState::default();
            assert!(state.toggle_faq(0));
            assert!(state.toggle_faq(2));
            assert_eq!(state.widgets.open_faq, Some(2));
            assert!(!state.toggle_faq(2));
            assert_eq!(state.widgets.open_faq, None);
        }

        #[test]
        fn test_dialog_queue_is_fifo() {
            let mut state = AppState::default();
            state.push_dialog(Dialog::new(DialogKind::Info, "a", "first"));
            state.push_dialog(Dialog::new(DialogKind::Error, "b", "second"));
            assert_eq!(state.current_dialog().map(|d| d.title.as_str()), Some("a"));
            state.dismiss_dialog();
            assert_eq!(state.current_dialog().map(|d| d.title.as_str()), Some("b"));
            state.dismiss_dialog();
            assert!(!state.has_dialog());
        }
    }

    mod double_click_tests {
        use super::*;

        #[test]
        fn test_two_quick_presses_are_a_double_click() {
            let mut events = EventsState::default();
            let now = Instant::now();
            assert!(!events.register_double_press(now));
            assert!(events.register_double_press(now + Duration::from_millis(150)));
            assert!(events.is_double_click_flashing());
            assert!(events.last_double_press.is_none());
        }

        #[test]
        fn test_slow_presses_are_not_a_double_click() {
            let mut events = EventsState::default();
            let now = Instant::now();
            assert!(!events.register_double_press(now));
            assert!(!events.register_double_press(now + Duration::from_millis(900)));
            // The second press starts a new window
            assert!(events.register_double_press(now + Duration::from_millis(1000)));
        }

        #[test]
        fn test_third_press_starts_over() {
            let mut events = EventsState::default();
            let now = Instant::now();
            events.register_double_press(now);
            assert!(events.register_double_press(now + Duration::from_millis(100)));
            assert!(!events.register_double_press(now + Duration::from_millis(200)));
        }
    }
}
