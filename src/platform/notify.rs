use std::sync::Mutex;
use std::time::Duration;

/// How long a transient message stays visible unless superseded.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(2);

/// One transient on-screen message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration: Duration,
}

/// Fire-and-forget transient messages.
///
/// Rapid successive calls must never fail: the latest message wins and the
/// prior one is dropped.
pub trait NotificationSink: Send + Sync {
    fn show_for(&self, message: &str, duration: Duration);

    fn show(&self, message: &str) {
        self.show_for(message, DEFAULT_NOTICE_DURATION);
    }
}

/// In-memory sink holding only the most recent notice.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Mutex<Option<Notice>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The notice currently on screen, if any.
    pub fn current(&self) -> Option<Notice> {
        self.current.lock().ok()?.clone()
    }

    pub fn clear(&self) {
        if let Ok(mut current) = self.current.lock() {
            *current = None;
        }
    }
}

impl NotificationSink for Notifier {
    fn show_for(&self, message: &str, duration: Duration) {
        log::debug!("notice: {message}");
        if let Ok(mut current) = self.current.lock() {
            *current = Some(Notice {
                message: message.to_string(),
                duration,
            });
        }
    }
}
