use std::time::{Duration, Instant};

/// How long an error banner stays up unless dismissed.
pub const AUTO_HIDE: Duration = Duration::from_millis(6000);

/// Timed, dismissible error banner.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    opened_at: Option<Instant>,
    auto_hide: Duration,
}

impl Default for Notification {
    fn default() -> Self {
        Self::new(AUTO_HIDE)
    }
}

impl Notification {
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            message: String::new(),
            opened_at: None,
            auto_hide,
        }
    }

    pub fn open(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.opened_at = Some(now);
    }

    pub fn close(&mut self) {
        self.message.clear();
        self.opened_at = None;
    }

    /// Closes the banner once its time is up. Returns true if it just closed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.opened_at {
            Some(opened) if now.saturating_duration_since(opened) >= self.auto_hide => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.opened_at.is_some()
    }

    /// The message while visible.
    pub fn message(&self) -> Option<&str> {
        self.opened_at.map(|_| self.message.as_str())
    }

    /// When the banner will hide on its own.
    pub fn deadline(&self) -> Option<Instant> {
        self.opened_at.map(|opened| opened + self.auto_hide)
    }
}
