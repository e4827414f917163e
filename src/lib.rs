//! netspeed: the network speed measurement core.
//!
//! Polls the kernel's network pseudo-files, diffs byte counters between
//! ticks, and publishes formatted upload/download rates through a typed
//! event stream. The library does no rendering; the `netspeed` binary is
//! one consumer of [`Monitor`], any other frontend can be another.

pub mod config;
pub mod event;
pub mod monitor;
pub mod net;
pub mod units;

pub use config::{Config, DeviceSelector};
pub use event::{DeviceAddrs, DeviceSpeed, Event};
pub use monitor::Monitor;
pub use net::device::DeviceType;
pub use units::{format_speed, FormattedSpeed, UnitSystem};
