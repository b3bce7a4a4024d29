use crate::{
    alert::AlertPlayback,
    classify::{ClassificationResult, Label},
};

use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, instrument};

/// Fires the audible alert for drowsy classifications.
///
/// At most one playback is active at a time. A drowsy result arriving
/// while the alert is already sounding restarts the clip from the
/// beginning (interrupt semantics) and re-arms the bounded force-stop;
/// sounds are never stacked.
pub struct AlertTrigger<P: AlertPlayback> {
    playback: Arc<Mutex<P>>,
    bound: Duration,
    pending_stop: Option<JoinHandle<()>>,
}

impl<P: AlertPlayback> AlertTrigger<P> {
    /// Wrap a playback backend. `bound` force-stops each alert regardless
    /// of natural clip length.
    pub fn new(playback: P, bound: Duration) -> Self {
        Self {
            playback: Arc::new(Mutex::new(playback)),
            bound,
            pending_stop: None,
        }
    }

    /// Start (or restart) the alert if the result is drowsy; no effect for
    /// any other label.
    #[instrument(skip(self, result))]
    pub async fn fire_if_drowsy(&mut self, result: &ClassificationResult) {
        if result.label != Label::Drowsy {
            return;
        }

        // Disarm the previous bound so it cannot cut the restarted clip
        // short.
        if let Some(pending) = self.pending_stop.take() {
            pending.abort();
        }

        self.playback.lock().await.restart();
        debug!(probability = result.probability, "Alert fired");

        let playback = Arc::clone(&self.playback);
        let bound = self.bound;
        self.pending_stop = Some(tokio::spawn(async move {
            tokio::time::sleep(bound).await;
            playback.lock().await.stop();
        }));
    }

    /// Disarm any pending force-stop and silence playback immediately.
    pub async fn silence(&mut self) {
        if let Some(pending) = self.pending_stop.take() {
            pending.abort();
        }
        self.playback.lock().await.stop();
    }
}
