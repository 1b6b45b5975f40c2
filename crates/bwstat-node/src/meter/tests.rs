use super::*;
use std::time::Duration;

fn peer(seed: u8) -> PeerId {
    // sha2-256 multihash with a fixed digest, enough for a stable test key.
    let mut bytes = vec![0x12, 0x20];
    bytes.extend(std::iter::repeat(seed).take(32));
    PeerId::from_bytes(&bytes).unwrap()
}

#[test]
fn totals_accumulate_across_peers_and_protocols() {
    let meter = BandwidthMeter::new(true);
    let a = peer(1);
    let b = peer(2);

    meter.record_received(&a, "/ipfs/bitswap", 100);
    meter.record_received(&b, "/ipfs/id/1.0.0", 50);
    meter.record_sent(&a, "/ipfs/bitswap", 25);

    let totals = meter.totals();
    assert_eq!(totals.total_in, 150);
    assert_eq!(totals.total_out, 25);
    assert_eq!(meter.tracked_peers(), 2);
    assert_eq!(meter.tracked_protocols(), 2);
}

#[test]
fn per_peer_counters_are_isolated() {
    let meter = BandwidthMeter::new(true);
    let a = peer(1);
    let b = peer(2);

    meter.record_received(&a, "/ipfs/bitswap", 100);
    meter.record_sent(&b, "/ipfs/bitswap", 40);

    assert_eq!(meter.for_peer(&a).total_in, 100);
    assert_eq!(meter.for_peer(&a).total_out, 0);
    assert_eq!(meter.for_peer(&b).total_out, 40);
}

#[test]
fn per_protocol_counters_are_isolated() {
    let meter = BandwidthMeter::new(true);
    let a = peer(1);

    meter.record_received(&a, "/ipfs/bitswap", 100);
    meter.record_received(&a, "/ipfs/dht", 7);

    assert_eq!(meter.for_protocol("/ipfs/bitswap").total_in, 100);
    assert_eq!(meter.for_protocol("/ipfs/dht").total_in, 7);
}

#[test]
fn unknown_scopes_read_as_zero() {
    let meter = BandwidthMeter::new(true);

    assert_eq!(meter.for_peer(&peer(9)), BandwidthSnapshot::default());
    assert_eq!(
        meter.for_protocol("/never/seen"),
        BandwidthSnapshot::default()
    );
}

#[test]
fn first_read_reports_zero_rate() {
    let meter = BandwidthMeter::new(true);
    meter.record_received(&peer(1), "/ipfs/bitswap", 10_000);

    let totals = meter.totals();
    assert_eq!(totals.total_in, 10_000);
    assert!(totals.is_idle());
}

#[test]
fn rate_rises_after_traffic_in_a_later_window() {
    let meter = BandwidthMeter::new(true);
    let a = peer(1);

    meter.record_received(&a, "/ipfs/bitswap", 1_000);
    let _ = meter.totals();

    std::thread::sleep(Duration::from_millis(20));
    meter.record_received(&a, "/ipfs/bitswap", 10_000);

    let totals = meter.totals();
    assert_eq!(totals.total_in, 11_000);
    assert!(totals.rate_in > 0.0);
    assert_eq!(totals.rate_out, 0.0);
}

#[test]
fn operational_flag_toggles() {
    let meter = BandwidthMeter::new(true);
    assert!(meter.is_operational());

    meter.set_operational(false);
    assert!(!meter.is_operational());
}
