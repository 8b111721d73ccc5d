//! User-facing messages
//!
//! Alerts raised by the page (empty share request, clipboard failure) and the
//! CLI's status lines go through `OutputWriter`, so the same session code can
//! print to a terminal or feed the interactive status bar.

use colored::Colorize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Sink for user-facing messages
///
/// # Examples
///
/// ```no_run
/// use papershelf::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Showing 2 of 2 papers");
/// output.success("Copied!");
/// output.error("Please select at least one paper to share.");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);

    /// Blocking alert the user must see
    fn alert(&self, message: &str) {
        self.error(message);
    }

    /// Clear all messages (for TUI status bars)
    fn clear(&self);
}

/// Colored stdout/stderr writer for the CLI
///
/// In quiet mode only errors and alerts are printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter {
    quiet: bool,
}

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self { quiet: false }
    }

    /// Create a writer that suppresses informational output
    #[must_use]
    pub const fn quiet(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "❌".red(), message);
    }

    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), message);
        }
    }

    fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", "⚠️".yellow(), message);
        }
    }

    fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message.dimmed());
        }
    }

    fn clear(&self) {}
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Normal message
    Normal,
    /// Error message
    Error,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Info message
    Info,
    /// Blocking alert
    Alert,
}

/// Buffered writer for the interactive status bar
///
/// Messages expire after a time-to-live. Alerts do not expire; they stay until
/// acknowledged with [`StatusBarWriter::take_alert`]. Clones share one buffer,
/// so the page can hand a clone to the session and keep one for drawing.
///
/// # Examples
///
/// ```
/// use papershelf::ui::output::{MessageLevel, OutputWriter, StatusBarWriter};
///
/// let writer = StatusBarWriter::new();
/// writer.success("Copied!");
///
/// let (level, msg) = writer.latest_message().unwrap();
/// assert_eq!(level, MessageLevel::Success);
/// assert_eq!(msg, "Copied!");
/// ```
#[derive(Clone)]
pub struct StatusBarWriter {
    messages: Arc<Mutex<Vec<(MessageLevel, String, Instant)>>>,
    alerts: Arc<Mutex<Vec<String>>>,
    ttl: Duration,
}

impl StatusBarWriter {
    /// Create a new status bar writer with default TTL (5 seconds)
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(5))
    }

    /// Create a new status bar writer with custom TTL
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            alerts: Arc::new(Mutex::new(Vec::new())),
            ttl,
        }
    }

    /// Messages that have not expired yet
    #[must_use]
    pub fn recent_messages(&self) -> Vec<(MessageLevel, String)> {
        let now = Instant::now();
        let messages = self.lock_messages();

        messages
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
            .collect()
    }

    /// Get the most recent message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        let now = Instant::now();
        let messages = self.lock_messages();

        messages
            .iter()
            .rev()
            .find(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .map(|(level, msg, _)| (*level, msg.clone()))
    }

    /// Get count of active messages
    #[must_use]
    pub fn message_count(&self) -> usize {
        let now = Instant::now();
        let messages = self.lock_messages();

        messages
            .iter()
            .filter(|(_, _, time)| now.duration_since(*time) < self.ttl)
            .count()
    }

    /// Oldest unacknowledged alert
    #[must_use]
    pub fn pending_alert(&self) -> Option<String> {
        self.lock_alerts().first().cloned()
    }

    /// Acknowledge and remove the oldest alert
    pub fn take_alert(&self) -> Option<String> {
        let mut alerts = self.lock_alerts();
        (!alerts.is_empty()).then(|| alerts.remove(0))
    }

    /// Every alert raised so far that has not been acknowledged
    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.lock_alerts().clone()
    }

    fn lock_messages(&self) -> MutexGuard<'_, Vec<(MessageLevel, String, Instant)>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_alerts(&self) -> MutexGuard<'_, Vec<String>> {
        self.alerts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn add_message(&self, level: MessageLevel, message: String) {
        let mut messages = self.lock_messages();
        messages.push((level, message, Instant::now()));

        if messages.len() > 100 {
            messages.drain(0..50);
        }
    }
}

impl Default for StatusBarWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StatusBarWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message.to_string());
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message.to_string());
    }

    fn success(&self, message: &str) {
        self.add_message(MessageLevel::Success, message.to_string());
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message.to_string());
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message.to_string());
    }

    fn alert(&self, message: &str) {
        self.lock_alerts().push(message.to_string());
        self.add_message(MessageLevel::Alert, message.to_string());
    }

    fn clear(&self) {
        self.lock_messages().clear();
    }
}
