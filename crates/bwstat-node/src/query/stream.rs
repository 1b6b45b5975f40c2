use super::{CancellationToken, Scope};
use crate::meter::BandwidthReporter;
use bwstat_types::{BandwidthSnapshot, BwstatError, BwstatResult};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, trace};

/// How the sampling loop runs: one immediate reading, or one reading per
/// interval until cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollConfig {
    enabled: bool,
    interval: Duration,
}

impl PollConfig {
    pub fn single_shot() -> Self {
        Self {
            enabled: false,
            interval: Duration::from_secs(1),
        }
    }

    pub fn every(interval: Duration) -> BwstatResult<Self> {
        if interval.is_zero() {
            return Err(BwstatError::InvalidInterval(
                "interval must be positive".to_string(),
            ));
        }
        Ok(Self {
            enabled: true,
            interval,
        })
    }

    /// Builds the config from raw CLI input. The interval string is parsed
    /// with humantime ("500ms", "10s", "5m") and validated even in
    /// single-shot mode, matching the command surface: a bad `--interval`
    /// fails the request whether or not `--poll` was given.
    pub fn from_args(poll: bool, interval: &str) -> BwstatResult<Self> {
        let parsed = humantime::parse_duration(interval)
            .map_err(|e| BwstatError::InvalidInterval(format!("{}: {}", interval, e)))?;
        if parsed.is_zero() {
            return Err(BwstatError::InvalidInterval(format!(
                "{}: must be positive",
                interval
            )));
        }
        Ok(Self {
            enabled: poll,
            interval: parsed,
        })
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Receiver half of a running sampling loop. Samples arrive in take-order;
/// `None` means the loop has terminated.
pub struct SampleStream {
    rx: mpsc::Receiver<BandwidthSnapshot>,
}

impl SampleStream {
    pub async fn next(&mut self) -> Option<BandwidthSnapshot> {
        self.rx.recv().await
    }
}

impl futures::Stream for SampleStream {
    type Item = BandwidthSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

/// Starts the sampling loop for `scope` and hands back the stream of
/// readings.
///
/// The operational precondition is checked here, once; after that the loop
/// cannot fail. Single-shot mode emits one sample and ends. Polling mode
/// emits a sample, then waits for the earlier of the interval elapsing and
/// the cancellation signal firing; cancellation ends the stream without a
/// further sample. The first sample is always taken before the first wait.
pub fn stream(
    reporter: Arc<dyn BandwidthReporter>,
    scope: Scope,
    poll: PollConfig,
    mut cancel: CancellationToken,
) -> BwstatResult<SampleStream> {
    if !reporter.is_operational() {
        return Err(BwstatError::NotOperational);
    }

    // Depth one: never more than a single unconsumed sample in flight.
    let (tx, rx) = mpsc::channel(1);

    tokio::spawn(async move {
        debug!(
            "sampling {} (poll={}, interval={:?})",
            scope,
            poll.enabled(),
            poll.interval()
        );

        loop {
            let sample = scope.sample(reporter.as_ref());
            if tx.send(sample).await.is_err() {
                // Consumer hung up.
                break;
            }
            if !poll.enabled() {
                break;
            }
            tokio::select! {
                _ = sleep(poll.interval()) => {}
                _ = cancel.cancelled() => {
                    trace!("sampling of {} cancelled", scope);
                    break;
                }
            }
        }
    });

    Ok(SampleStream { rx })
}
