//! User-facing message sinks

use parking_lot::Mutex;
use tracing::warn;

/// Receives messages meant for the person who started the run
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Writes messages to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        warn!(notification = message, "User notification");
        eprintln!("{}", message);
    }
}

/// Keeps every message in memory, in order
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
