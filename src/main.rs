//! Signup TUI binary
//!
//! Three views exercise click, hover, double-click and keyboard events,
//! stateful widgets, and a signup form validated on every keystroke.

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use signup_tui::{app::App, config::TuiConfig, submit::LogSubmitTarget, ui};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "signup_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load config before touching the terminal so errors print normally
    let config_path = TuiConfig::config_path();
    let config = match TuiConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            TuiConfig::default()
        }
    };

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config, config_path, Box::new(LogSubmitTarget::new()));
    let result = run_app(&mut terminal, &mut app).await;
    restore_terminal(&mut terminal)?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
    Ok(())
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen, mouse and focus reporting
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Keep the hit-testing area in sync with the terminal
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        // Expire finished highlights
        app.state.update_animations();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while a highlight is fading (16ms = ~60fps)
        let poll_duration = if app.state.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key).await?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse).await?;
                }
                Event::Resize(width, height) => app.handle_resize(width, height),
                Event::FocusGained => app.handle_focus(true),
                Event::FocusLost => app.handle_focus(false),
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
