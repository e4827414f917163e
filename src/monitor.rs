//! The polling monitor: one `tick()` performs read → diff → format → emit.

use std::path::{Path, PathBuf};

use sysinfo::Networks;

use crate::config::Config;
use crate::event::{DeviceAddrs, DeviceSpeed, Event};
use crate::net::device;
use crate::net::rate::{DeviceRate, RateTotals};
use crate::net::sampler::{Sampler, TickDelta};
use crate::units::format_speed;

/// Network speed monitor, driven by an external timer.
///
/// Owns the sampler (and with it the previous-sample baseline), the
/// current configuration, and the subscribed callbacks. Single-threaded:
/// the caller guarantees `tick()` invocations don't overlap.
pub struct Monitor {
    config: Config,
    sampler: Sampler,
    networks: Networks,
    sys_class_net: PathBuf,
    listeners: Vec<Box<dyn FnMut(&Event)>>,
}

impl Monitor {
    /// Monitor over the real `/proc` and `/sys` trees.
    pub fn new(config: Config) -> Self {
        Self::with_roots(config, Path::new("/proc"), Path::new("/sys/class/net"))
    }

    /// Monitor over alternate pseudo-file roots.
    pub fn with_roots(config: Config, proc_root: &Path, sys_class_net: &Path) -> Self {
        Monitor {
            config,
            sampler: Sampler::with_proc_root(proc_root),
            networks: Networks::new_with_refreshed_list(),
            sys_class_net: sys_class_net.to_path_buf(),
            listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next tick; callers
    /// re-read `config()` for the new poll interval.
    pub fn update_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Interface holding the default route, as of the latest tick.
    pub fn default_gateway(&self) -> Option<&str> {
        self.sampler.default_gateway()
    }

    /// Register a callback invoked for every event, in emission order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Event) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Poll once. Returns the emitted batch after dispatching it to every
    /// subscriber: Stats + Speeds on a stable-device-list tick,
    /// MenuChanged + Addresses when the list changed.
    pub fn tick(&mut self) -> Vec<Event> {
        let events = match self.sampler.tick() {
            TickDelta::Rates { rates, totals } => self.rate_events(&rates, totals),
            TickDelta::DevicesChanged { devices } => self.menu_events(devices),
        };

        for event in &events {
            for listener in &mut self.listeners {
                listener(event);
            }
        }

        events
    }

    fn rate_events(&self, rates: &[DeviceRate], totals: RateTotals) -> Vec<Event> {
        let digits = self.config.digits;
        let unit = self.config.unit();

        let speeds = rates
            .iter()
            .map(|rate| DeviceSpeed {
                device: rate.name.clone(),
                up: format_speed(rate.up_bps, digits, unit),
                down: format_speed(rate.down_bps, digits, unit),
            })
            .collect();

        // Headline rates come from the selected device when it is present,
        // otherwise from the aggregate.
        let selected = self
            .config
            .device
            .resolve(self.sampler.default_gateway())
            .and_then(|name| rates.iter().find(|rate| rate.name == name));

        let (sum_bps, up_bps, down_bps) = match selected {
            Some(rate) => (rate.sum_bps(), rate.up_bps, rate.down_bps),
            None => (totals.sum_bps(), totals.up_bps, totals.down_bps),
        };

        vec![
            Event::Stats {
                sum: format_speed(sum_bps, digits, unit),
                up: format_speed(up_bps, digits, unit),
                down: format_speed(down_bps, digits, unit),
            },
            Event::Speeds(speeds),
        ]
    }

    fn menu_events(&mut self, devices: Vec<String>) -> Vec<Event> {
        let types = devices
            .iter()
            .map(|name| device::classify(name, &self.sys_class_net))
            .collect();
        let addrs = self.collect_addresses(&devices);

        vec![Event::MenuChanged { devices, types }, Event::Addresses(addrs)]
    }

    /// Look up each device's IP networks. Interfaces the enumeration
    /// doesn't know about get an empty list.
    fn collect_addresses(&mut self, devices: &[String]) -> Vec<DeviceAddrs> {
        self.networks.refresh(true);

        devices
            .iter()
            .map(|name| {
                let addrs = self
                    .networks
                    .iter()
                    .find(|(iface, _)| iface.as_str() == name)
                    .map(|(_, data)| {
                        data.ip_networks()
                            .iter()
                            .map(|net| format!("{}/{}", net.addr, net.prefix))
                            .collect()
                    })
                    .unwrap_or_default();
                DeviceAddrs {
                    device: name.clone(),
                    addrs,
                }
            })
            .collect()
    }
}
