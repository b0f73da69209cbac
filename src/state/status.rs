//! Rolling status message and short-lived highlight animations

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// A highlight that fades out over a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub start_time: Instant,
    pub duration: Duration,
}

impl Flash {
    pub fn new(duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.start_time.elapsed() >= self.duration
    }

    /// Highlight strength from 1.0 (just started) down to 0.0 (expired)
    pub fn intensity(&self) -> f32 {
        let elapsed = self.start_time.elapsed();
        if elapsed >= self.duration || self.duration.is_zero() {
            return 0.0;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        // Ease-out so the highlight lingers briefly, then drops off
        1.0 - simple_easing::cubic_out(progress)
    }
}

/// The single-line message display at the bottom of the screen
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub message: String,
    pub posted_at: DateTime<Local>,
    pub flash: Option<Flash>,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: String::new(),
            posted_at: Local::now(),
            flash: None,
        }
    }
}

impl StatusLine {
    /// How long a newly posted message stays highlighted
    pub const FLASH_DURATION: Duration = Duration::from_millis(500);

    /// Replace the current message and start the highlight
    pub fn post(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.posted_at = Local::now();
        self.flash = Some(Flash::new(Self::FLASH_DURATION));
        tracing::debug!(message = %self.message, "Status message posted");
    }

    /// `HH:MM:SS - message`
    pub fn display_text(&self) -> String {
        if self.message.is_empty() {
            return String::new();
        }
        format!("{} - {}", self.posted_at.format("%H:%M:%S"), self.message)
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some_and(|f| !f.is_expired())
    }

    /// Drop the highlight once it has run its course
    pub fn update(&mut self) {
        if self.flash.is_some_and(|f| f.is_expired()) {
            self.flash = None;
        }
    }
}
