use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::debounce::Debouncer;
use crate::service::{DiscoveryService, FetchState};

/// A debounced search box wired to the fetch lifecycle.
///
/// Raw input goes in through [`input`](Self::input); settled queries trigger
/// a listing fetch; lifecycle states come out of the watch channel. A query
/// that settles while an earlier fetch is still in flight aborts it, so a
/// slow earlier response can never overwrite a newer one.
pub struct SearchSession {
    raw_tx: mpsc::UnboundedSender<String>,
    state_rx: watch::Receiver<FetchState>,
    _task: JoinHandle<()>,
}

impl SearchSession {
    /// Spawn the session loop. `delay` is the debounce interval.
    pub fn spawn(service: Arc<DiscoveryService>, delay: Duration) -> Self {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(FetchState::Idle);

        let task = tokio::spawn(run(service, delay, raw_rx, state_tx));

        Self {
            raw_tx,
            state_rx,
            _task: task,
        }
    }

    /// Feed one raw input value (e.g. the search box content on a keystroke).
    pub fn input(&self, value: impl Into<String>) {
        let _ = self.raw_tx.send(value.into());
    }

    /// Watch the fetch lifecycle.
    pub fn state(&self) -> watch::Receiver<FetchState> {
        self.state_rx.clone()
    }
}

async fn run(
    service: Arc<DiscoveryService>,
    delay: Duration,
    mut raw_rx: mpsc::UnboundedReceiver<String>,
    state_tx: watch::Sender<FetchState>,
) {
    let (mut debouncer, mut settled_rx) = Debouncer::new(delay);
    let mut inflight: Option<JoinHandle<()>> = None;

    loop {
        tokio::select! {
            raw = raw_rx.recv() => match raw {
                Some(value) => debouncer.push(value),
                // Session dropped: stop fetching and let the debouncer's
                // pending timer die with it.
                None => break,
            },
            Some(query) = settled_rx.recv() => {
                if let Some(previous) = inflight.take() {
                    previous.abort();
                }
                let _ = state_tx.send(FetchState::Loading);

                let service = Arc::clone(&service);
                let state_tx = state_tx.clone();
                inflight = Some(tokio::spawn(async move {
                    let state = service.fetch_movies(&query, 1).await;
                    let _ = state_tx.send(state);
                }));
            }
        }
    }

    if let Some(inflight) = inflight.take() {
        inflight.abort();
    }
}
