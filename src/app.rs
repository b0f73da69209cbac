//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::{is_ctrl_enter, is_submit};
use crate::state::{AppState, Control, Dialog, DialogKind, Form, FormButton, SessionStats, View};
use crate::submit::{Submission, SubmitTarget};
use crate::ui::{self, FAQ_ENTRIES};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Instant;

/// Terminal size assumed before the first draw (height, width)
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (24, 80);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Whether keys go to the form inputs while the form view is shown
    pub form_editing: bool,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Loaded user configuration
    config: TuiConfig,
    /// Where configuration changes are written back, if anywhere
    config_path: Option<PathBuf>,
    /// Receiver of validated submissions
    submit_target: Box<dyn SubmitTarget>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: TuiConfig,
        config_path: Option<PathBuf>,
        submit_target: Box<dyn SubmitTarget>,
    ) -> Self {
        let mut state = AppState {
            current_view: config.start_view(),
            session: SessionStats::new(config.interaction_milestone(), config.mouse_milestone()),
            ..Default::default()
        };
        if config.is_dark_mode() {
            state.theme = state.theme.toggle();
        }
        state
            .status
            .post("Welcome! Click, hover and type to see events in action.");

        Self {
            form_editing: state.current_view.is_form_view(),
            state,
            quit: false,
            terminal_size: None,
            config,
            config_path,
            submit_target,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::with_submit_target(Box::new(crate::submit::LogSubmitTarget::new()))
    }

    #[cfg(test)]
    pub fn with_submit_target(submit_target: Box<dyn SubmitTarget>) -> Self {
        let mut app = Self::new(TuiConfig::default(), None, submit_target);
        app.terminal_size = Some((30, 100));
        app
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Post a message to the status line
    pub fn post_status(&mut self, message: impl Into<String>) {
        self.state.status.post(message);
    }

    /// Whether the form inputs currently receive keys
    pub fn is_editing_form(&self) -> bool {
        self.form_editing && self.state.current_view.is_form_view()
    }

    /// Full terminal area used for hit testing
    pub fn screen_rect(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or(DEFAULT_TERMINAL_SIZE);
        Rect::new(0, 0, width, height)
    }

    /// Switch the main view
    pub fn switch_view(&mut self, view: View) {
        if self.state.current_view != view {
            tracing::debug!(view = view.label(), "Switching view");
        }
        self.state.current_view = view;
        self.state.selected_index = 0;
        self.state.events.hovered = None;
        self.form_editing = view.is_form_view();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // Dialogs are modal
        if self.state.has_dialog() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_dialog();
            }
            return Ok(());
        }

        if is_ctrl_enter(&key) {
            self.post_status("Ctrl + Enter pressed! Keyboard events are working!");
            return Ok(());
        }

        // Function keys switch views from anywhere
        let target = match key.code {
            KeyCode::F(1) => Some(View::Events),
            KeyCode::F(2) => Some(View::Widgets),
            KeyCode::F(3) => Some(View::Form),
            _ => None,
        };
        if let Some(view) = target {
            self.switch_view(view);
            return Ok(());
        }

        if self.is_editing_form() {
            self.handle_form_key(key).await
        } else {
            self.handle_navigation_key(key).await
        }
    }

    /// Keys outside the form inputs
    async fn handle_navigation_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab => self.switch_view(self.state.current_view.next()),
            KeyCode::Char('1') => self.switch_view(View::Events),
            KeyCode::Char('2') => self.switch_view(View::Widgets),
            KeyCode::Char('3') => self.switch_view(View::Form),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(true),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(false),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.state.current_view.is_form_view() {
                    self.form_editing = true;
                } else if let Some(control) = self.state.selected_control() {
                    self.activate(control).await?;
                    self.record_interaction();
                }
            }
            KeyCode::Char('d') => self.activate(Control::DarkModeToggle).await?,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.activate(Control::CounterIncrement).await?
            }
            KeyCode::Char('-') => self.activate(Control::CounterDecrement).await?,
            KeyCode::Char('0') => self.activate(Control::CounterReset).await?,
            _ => {}
        }
        Ok(())
    }

    /// Keys while the form inputs have focus
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        if is_submit(&key) {
            return self.submit_form().await;
        }

        let form = &mut self.state.form;
        match key.code {
            KeyCode::Esc => self.form_editing = false,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter => {
                if form.is_buttons_row_active() {
                    let button = form.selected_button;
                    self.press_form_button(button).await?;
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => {
                form.backspace();
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                form.input_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    /// Move the keyboard selection, reporting hover changes on the way
    fn move_selection(&mut self, down: bool) {
        let before = self.state.selected_control();
        if down {
            self.state.move_selection_down();
        } else {
            self.state.move_selection_up();
        }
        let after = self.state.selected_control();
        if before != after {
            self.report_hover_change(before, after);
        }
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.has_dialog() {
                    return Ok(());
                }
                let screen = self.screen_rect();
                if let Some(control) = ui::control_at(&self.state, screen, mouse.column, mouse.row)
                {
                    if !matches!(control, Control::Sidebar(_)) {
                        self.state.select_control(control);
                    }
                    self.activate(control).await?;
                }
                self.record_interaction();
            }
            MouseEventKind::Moved => {
                if let Some(total) = self.state.session.record_mouse_move() {
                    self.post_status(format!("Mouse has moved {total} times!"));
                }
                let screen = self.screen_rect();
                let hovered = ui::control_at(&self.state, screen, mouse.column, mouse.row);
                let previous = self.state.events.hovered;
                if hovered != previous {
                    self.state.events.hovered = hovered;
                    self.report_hover_change(previous, hovered);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a terminal resize
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = Some((height, width));
        self.post_status(format!("Window resized to {width}x{height}!"));
    }

    /// Handle the terminal gaining or losing focus
    pub fn handle_focus(&mut self, gained: bool) {
        if gained {
            self.post_status("Welcome back!");
        } else {
            tracing::debug!("Terminal lost focus");
        }
    }

    fn record_interaction(&mut self) {
        if let Some(total) = self.state.session.record_interaction() {
            self.post_status(format!("You've made {total} interactions on this page!"));
        }
    }

    fn report_hover_change(&mut self, from: Option<Control>, to: Option<Control>) {
        if from == Some(Control::HoverButton) {
            self.post_status("Mouse left the hover button!");
        }
        if to == Some(Control::HoverButton) {
            self.post_status("Mouse entered the hover button!");
        }
    }

    /// Run the action behind a control
    pub async fn activate(&mut self, control: Control) -> Result<()> {
        match control {
            Control::Sidebar(view) => self.switch_view(view),
            Control::ClickButton => {
                let clicks = self.state.session.record_click();
                let plural = if clicks == 1 { "" } else { "s" };
                self.post_status(format!("Button clicked {clicks} time{plural}!"));
            }
            Control::HoverButton => self.post_status("You clicked the hover button!"),
            Control::DoubleClickButton => {
                if self.state.events.register_double_press(Instant::now()) {
                    self.post_status("Double click detected!");
                }
            }
            Control::DarkModeToggle => self.toggle_dark_mode(),
            Control::CounterIncrement => {
                let value = self.state.session.increment();
                self.post_status(format!("Counter incremented to {value}"));
            }
            Control::CounterDecrement => {
                let value = self.state.session.decrement();
                self.post_status(format!("Counter decremented to {value}"));
            }
            Control::CounterReset => {
                self.state.session.reset_counter();
                self.post_status("Counter reset to 0");
            }
            Control::Faq(idx) => {
                let question = FAQ_ENTRIES.get(idx).map(|(q, _)| *q).unwrap_or_default();
                if self.state.toggle_faq(idx) {
                    self.post_status(format!("FAQ opened: {question}"));
                } else {
                    self.post_status(format!("FAQ closed: {question}"));
                }
            }
            Control::DropdownToggle => {
                let widgets = &mut self.state.widgets;
                widgets.dropdown_open = !widgets.dropdown_open;
                let message = if widgets.dropdown_open {
                    "Dropdown menu opened"
                } else {
                    "Dropdown menu closed"
                };
                self.post_status(message);
            }
            Control::HiddenToggle => {
                let widgets = &mut self.state.widgets;
                widgets.hidden_revealed = !widgets.hidden_revealed;
                let message = if widgets.hidden_revealed {
                    "Secret interface revealed!"
                } else {
                    "Secret interface hidden"
                };
                self.state.clamp_selection();
                self.post_status(message);
            }
            Control::ShowAlert => {
                self.state.push_dialog(Dialog::new(
                    DialogKind::Info,
                    "Alert",
                    "Hello from the hidden interface!",
                ));
                self.post_status("Alert shown");
            }
            Control::Field(name) => {
                self.state.form.focus(name);
                self.form_editing = true;
            }
            Control::FormButton(button) => {
                self.state.form.focus_button(button);
                self.form_editing = true;
                self.press_form_button(button).await?;
            }
        }
        Ok(())
    }

    fn toggle_dark_mode(&mut self) {
        self.state.theme = self.state.theme.toggle();
        let dark = self.state.theme.is_dark();
        self.post_status(if dark {
            "Dark mode activated!"
        } else {
            "Light mode restored!"
        });

        self.config.dark_mode = Some(dark);
        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                tracing::warn!(path = %path.display(), "Failed to save config: {err:#}");
            }
        }
    }

    async fn press_form_button(&mut self, button: FormButton) -> Result<()> {
        match button {
            FormButton::Reset => {
                self.state.form.reset();
                self.post_status("Form reset");
            }
            FormButton::Submit => self.submit_form().await?,
        }
        Ok(())
    }

    /// Validate every field and hand the values to the submit target
    pub async fn submit_form(&mut self) -> Result<()> {
        if !self.state.form.validate_all() {
            let failed = self.state.form.report().failures().len();
            tracing::info!(failed, "Form submission rejected");
            self.post_status("Form submission failed. Please fix the errors above.");
            self.state.push_dialog(Dialog::new(
                DialogKind::Error,
                "Submission failed",
                "Please fix the highlighted fields and try again.",
            ));
            return Ok(());
        }

        let submission = Submission::from_values(&self.state.form.values());
        match self.submit_target.submit(&submission).await {
            Ok(()) => {
                self.post_status("Form submitted successfully! All validations passed!");
                self.state.push_dialog(Dialog::new(
                    DialogKind::Success,
                    "Submitted",
                    format!("Thanks for signing up, {}!", submission.full_name),
                ));
            }
            Err(err) => {
                tracing::warn!("Submission failed: {err:#}");
                self.post_status("Form submission failed.");
                self.state.push_dialog(Dialog::new(
                    DialogKind::Error,
                    "Submission failed",
                    err.to_string(),
                ));
            }
        }
        Ok(())
    }
}
