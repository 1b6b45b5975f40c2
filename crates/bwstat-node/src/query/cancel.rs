use tokio::sync::watch;

/// Sender half of a request-scoped cancellation signal.
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            rx: self.tx.subscribe(),
        }
    }
}

/// Receiver half, cloneable and handed to the sampling task. A dropped
/// [`CancelHandle`] counts as cancellation: an abandoned request must not
/// leave its sampling loop running forever.
#[derive(Clone)]
pub struct CancellationToken {
    rx: watch::Receiver<bool>,
}

impl CancellationToken {
    pub fn pair() -> (CancelHandle, CancellationToken) {
        let (tx, rx) = watch::channel(false);
        (CancelHandle { tx }, CancellationToken { rx })
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the request is cancelled.
    pub async fn cancelled(&mut self) {
        while !*self.rx.borrow() {
            if self.rx.changed().await.is_err() {
                break;
            }
        }
    }
}
