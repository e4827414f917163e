//! Typed events published by the monitor, replacing any toolkit-specific
//! signal mechanism. Frontends either subscribe with a callback or consume
//! the batch a tick returns.

use crate::net::device::DeviceType;
use crate::units::FormattedSpeed;

/// Formatted up/down pair for one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSpeed {
    pub device: String,
    pub up: FormattedSpeed,
    pub down: FormattedSpeed,
}

/// IP networks (`addr/prefix`) bound to one interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceAddrs {
    pub device: String,
    pub addrs: Vec<String>,
}

/// One monitor tick emits either the stats pair of events (stable device
/// list) or the menu pair (changed device list), never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Headline rates for the selected device, or the aggregate when the
    /// selection doesn't resolve to a present interface.
    Stats {
        sum: FormattedSpeed,
        up: FormattedSpeed,
        down: FormattedSpeed,
    },
    /// Per-interface formatted rates, in device order.
    Speeds(Vec<DeviceSpeed>),
    /// The interface list changed; carries the new names and their types.
    MenuChanged {
        devices: Vec<String>,
        types: Vec<DeviceType>,
    },
    /// Per-interface address lists, refreshed alongside `MenuChanged`.
    Addresses(Vec<DeviceAddrs>),
}
