use serde::{Deserialize, Serialize};

/// One reading of the meter: cumulative byte totals plus the transfer
/// rates at the moment the reading was taken. Snapshots are produced
/// fresh on every sampling tick and never mutated afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BandwidthSnapshot {
    pub total_in: u64,
    pub total_out: u64,
    pub rate_in: f64,
    pub rate_out: f64,
}

impl BandwidthSnapshot {
    pub fn is_idle(&self) -> bool {
        self.rate_in == 0.0 && self.rate_out == 0.0
    }
}
