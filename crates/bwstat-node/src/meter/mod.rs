mod registry;

pub use registry::BandwidthMeter;

use bwstat_types::BandwidthSnapshot;
use libp2p::PeerId;

/// Read side of the node's traffic metering subsystem. The query engine
/// only ever reads counters; keeping concurrent readers consistent is the
/// implementation's job.
pub trait BandwidthReporter: Send + Sync {
    /// Node-wide totals across all peers and protocols.
    fn totals(&self) -> BandwidthSnapshot;

    /// Traffic exchanged with a single remote peer. Unknown peers read
    /// as zero.
    fn for_peer(&self, peer: &PeerId) -> BandwidthSnapshot;

    /// Traffic carried by a single wire protocol. Unknown protocols read
    /// as zero.
    fn for_protocol(&self, protocol: &str) -> BandwidthSnapshot;

    /// Whether the subsystem can serve readings at all. Checked once per
    /// request, before any sampling begins.
    fn is_operational(&self) -> bool;
}

#[cfg(test)]
mod tests;
