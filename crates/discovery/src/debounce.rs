use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay matching the original search box behavior.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Delays each pushed value until no newer value has superseded it for
/// `delay`.
///
/// At most one timer is pending at any instant: pushing a value cancels the
/// previous timer, and dropping the debouncer cancels whatever is pending,
/// so nothing is emitted after teardown.
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Create a debouncer and the receiver its settled values arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Schedule `value` for emission, superseding any pending value.
    pub fn push(&mut self, value: T) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(value);
        }));
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
