//! User-facing alerts and confirmations

/// Blocking dialogs raised by the dashboard
pub trait Notifier: Send + Sync {
    /// Blocking alert for a failed action
    fn alert(&self, message: &str);

    /// Confirmation that an action went through
    fn notice(&self, message: &str) {
        self.alert(message);
    }

    /// Yes/no question; `false` cancels the action
    fn confirm(&self, prompt: &str) -> bool;
}

/// Notifier for headless use: alerts go to the log and confirmations are
/// answered with a fixed value
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier {
    assume_yes: bool,
}

impl LogNotifier {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn notice(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn confirm(&self, prompt: &str) -> bool {
        tracing::info!(answer = self.assume_yes, "{}", prompt);
        self.assume_yes
    }
}
