//! Delta-based rate computation between two counter samples.

use crate::net::dev::Sample;

/// Per-interface transfer rate over one tick, in bytes per second.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRate {
    pub name: String,
    pub up_bps: f64,
    pub down_bps: f64,
}

impl DeviceRate {
    pub fn sum_bps(&self) -> f64 {
        self.up_bps + self.down_bps
    }
}

/// Rates summed across every interface in a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateTotals {
    pub up_bps: f64,
    pub down_bps: f64,
}

impl RateTotals {
    pub fn sum_bps(&self) -> f64 {
        self.up_bps + self.down_bps
    }
}

/// Whether the interface list differs between two samples.
///
/// The comparison is positional, not set-based: a membership-equal but
/// reordered list counts as changed and forces a re-baseline tick.
pub fn devices_changed(current: &Sample, previous: &Sample) -> bool {
    if current.devices.len() != previous.devices.len() {
        return true;
    }
    current
        .devices
        .iter()
        .zip(&previous.devices)
        .any(|(cur, prev)| cur.name != prev.name)
}

/// Compute per-interface and aggregate rates between two samples with
/// identical device lists.
///
/// Counter decreases (interface reset or bounce) are floored to zero; a
/// negative rate is meaningless. Elapsed time is clamped to one
/// millisecond so a degenerate tick never divides by zero.
pub fn compute_rates(
    current: &Sample,
    previous: &Sample,
    elapsed_ms: u64,
) -> (Vec<DeviceRate>, RateTotals) {
    let elapsed_secs = elapsed_ms.max(1) as f64 / 1000.0;

    let mut rates = Vec::with_capacity(current.devices.len());
    let mut totals = RateTotals::default();

    for (cur, prev) in current.devices.iter().zip(&previous.devices) {
        let up_bps = cur.tx_bytes.saturating_sub(prev.tx_bytes) as f64 / elapsed_secs;
        let down_bps = cur.rx_bytes.saturating_sub(prev.rx_bytes) as f64 / elapsed_secs;

        totals.up_bps += up_bps;
        totals.down_bps += down_bps;

        rates.push(DeviceRate {
            name: cur.name.clone(),
            up_bps,
            down_bps,
        });
    }

    (rates, totals)
}
