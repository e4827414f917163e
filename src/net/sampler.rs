//! The polling sampler: owns the previous-sample baseline and turns each
//! tick into either a rate set or a "device list changed" notice.

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::net::dev::{self, Sample};
use crate::net::rate::{self, DeviceRate, RateTotals};
use crate::net::route;

/// What one polling tick produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TickDelta {
    /// The interface list differs from the previous tick (or this is the
    /// first tick). No rates this time; the new sample is the baseline.
    DevicesChanged { devices: Vec<String> },
    /// Stable interface list: per-interface and aggregate rates.
    Rates {
        rates: Vec<DeviceRate>,
        totals: RateTotals,
    },
}

/// Periodic reader of the network pseudo-files.
///
/// The only state carried across ticks is the previous sample (with its
/// timestamp) and the most recently resolved default gateway.
pub struct Sampler {
    dev_path: PathBuf,
    route_path: PathBuf,
    prev: Option<(Sample, Instant)>,
    default_gw: Option<String>,
}

impl Sampler {
    /// Sampler over the real `/proc` files.
    pub fn new() -> Self {
        Self::with_proc_root(Path::new("/proc"))
    }

    /// Sampler over a different proc root, laid out like the kernel's
    /// (`<root>/net/dev`, `<root>/net/route`).
    pub fn with_proc_root(proc_root: &Path) -> Self {
        Sampler {
            dev_path: proc_root.join("net").join("dev"),
            route_path: proc_root.join("net").join("route"),
            prev: None,
            default_gw: None,
        }
    }

    /// Interface holding the default route, as of the latest tick.
    pub fn default_gateway(&self) -> Option<&str> {
        self.default_gw.as_deref()
    }

    /// Take a sample and diff it against the previous one.
    pub fn tick(&mut self) -> TickDelta {
        self.default_gw = route::read_route(&self.route_path);

        let sample = dev::read_dev(&self.dev_path);
        let now = Instant::now();

        let delta = match &self.prev {
            Some((prev, taken_at)) if !rate::devices_changed(&sample, prev) => {
                let elapsed_ms = now.duration_since(*taken_at).as_millis() as u64;
                let (rates, totals) = rate::compute_rates(&sample, prev, elapsed_ms);
                TickDelta::Rates { rates, totals }
            }
            _ => TickDelta::DevicesChanged {
                devices: sample.device_names(),
            },
        };

        self.prev = Some((sample, now));
        delta
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
