use super::BandwidthReporter;
use bwstat_types::BandwidthSnapshot;
use libp2p::PeerId;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Smoothing factor for the exponentially weighted rate estimate.
const RATE_ALPHA: f64 = 0.3;

/// Read windows shorter than this are folded into the next read so that
/// back-to-back reads do not produce a degenerate rate sample.
const MIN_WINDOW_SECS: f64 = 0.01;

#[derive(Default)]
struct FlowCounters {
    bytes_in: AtomicU64,
    bytes_out: AtomicU64,
    window: Mutex<RateWindow>,
}

#[derive(Default)]
struct RateWindow {
    last_read: Option<Instant>,
    last_in: u64,
    last_out: u64,
    rate_in: f64,
    rate_out: f64,
}

impl FlowCounters {
    fn add_in(&self, bytes: u64) {
        self.bytes_in.fetch_add(bytes, Ordering::Relaxed);
    }

    fn add_out(&self, bytes: u64) {
        self.bytes_out.fetch_add(bytes, Ordering::Relaxed);
    }

    /// Takes a reading and advances the rate window. The first read of a
    /// flow establishes the baseline and reports rate 0.
    fn snapshot(&self) -> BandwidthSnapshot {
        let total_in = self.bytes_in.load(Ordering::Relaxed);
        let total_out = self.bytes_out.load(Ordering::Relaxed);

        let mut window = self.window.lock();
        let now = Instant::now();
        match window.last_read {
            Some(last) => {
                let elapsed = now.duration_since(last).as_secs_f64();
                if elapsed >= MIN_WINDOW_SECS {
                    let inst_in = total_in.saturating_sub(window.last_in) as f64 / elapsed;
                    let inst_out = total_out.saturating_sub(window.last_out) as f64 / elapsed;
                    window.rate_in = RATE_ALPHA * inst_in + (1.0 - RATE_ALPHA) * window.rate_in;
                    window.rate_out = RATE_ALPHA * inst_out + (1.0 - RATE_ALPHA) * window.rate_out;
                    window.last_read = Some(now);
                    window.last_in = total_in;
                    window.last_out = total_out;
                }
            }
            None => {
                window.last_read = Some(now);
                window.last_in = total_in;
                window.last_out = total_out;
            }
        }

        BandwidthSnapshot {
            total_in,
            total_out,
            rate_in: window.rate_in,
            rate_out: window.rate_out,
        }
    }
}

/// Live traffic meter: lock-free totals plus per-peer and per-protocol
/// counters. The transport calls the `record_*` hooks; the query engine
/// reads through [`BandwidthReporter`].
pub struct BandwidthMeter {
    operational: AtomicBool,
    totals: FlowCounters,
    peers: RwLock<HashMap<PeerId, Arc<FlowCounters>>>,
    protocols: RwLock<HashMap<String, Arc<FlowCounters>>>,
}

impl BandwidthMeter {
    pub fn new(operational: bool) -> Self {
        Self {
            operational: AtomicBool::new(operational),
            totals: FlowCounters::default(),
            peers: RwLock::new(HashMap::new()),
            protocols: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_operational(&self, operational: bool) {
        self.operational.store(operational, Ordering::SeqCst);
    }

    pub fn record_sent(&self, peer: &PeerId, protocol: &str, bytes: u64) {
        self.totals.add_out(bytes);
        self.peer_entry(peer).add_out(bytes);
        self.protocol_entry(protocol).add_out(bytes);
    }

    pub fn record_received(&self, peer: &PeerId, protocol: &str, bytes: u64) {
        self.totals.add_in(bytes);
        self.peer_entry(peer).add_in(bytes);
        self.protocol_entry(protocol).add_in(bytes);
    }

    pub fn tracked_peers(&self) -> usize {
        self.peers.read().len()
    }

    pub fn tracked_protocols(&self) -> usize {
        self.protocols.read().len()
    }

    fn peer_entry(&self, peer: &PeerId) -> Arc<FlowCounters> {
        if let Some(entry) = self.peers.read().get(peer) {
            return Arc::clone(entry);
        }
        Arc::clone(self.peers.write().entry(*peer).or_default())
    }

    fn protocol_entry(&self, protocol: &str) -> Arc<FlowCounters> {
        if let Some(entry) = self.protocols.read().get(protocol) {
            return Arc::clone(entry);
        }
        Arc::clone(
            self.protocols
                .write()
                .entry(protocol.to_string())
                .or_default(),
        )
    }
}

impl BandwidthReporter for BandwidthMeter {
    fn totals(&self) -> BandwidthSnapshot {
        self.totals.snapshot()
    }

    fn for_peer(&self, peer: &PeerId) -> BandwidthSnapshot {
        self.peers
            .read()
            .get(peer)
            .map(|entry| entry.snapshot())
            .unwrap_or_default()
    }

    fn for_protocol(&self, protocol: &str) -> BandwidthSnapshot {
        self.protocols
            .read()
            .get(protocol)
            .map(|entry| entry.snapshot())
            .unwrap_or_default()
    }

    fn is_operational(&self) -> bool {
        self.operational.load(Ordering::SeqCst)
    }
}
