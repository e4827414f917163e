//! `/proc/net/dev` parsing.
//!
//! The file carries two header lines, then one line per interface:
//! `  eth0: 1234567 890 0 0 0 0 0 0 7654321 456 0 0 0 0 0 0`. The name is
//! terminated by a colon (counters may be glued to it), received bytes are
//! the first numeric column, transmitted bytes the ninth.

use std::fs;
use std::path::Path;

/// One interface's cumulative byte counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCounters {
    pub name: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

/// Snapshot of every non-loopback interface, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sample {
    pub devices: Vec<DeviceCounters>,
}

impl Sample {
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Interface names in file order.
    pub fn device_names(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.name.clone()).collect()
    }
}

/// Parse `/proc/net/dev` contents into a [`Sample`].
///
/// Header lines, the loopback device, and anything malformed are skipped.
pub fn parse_dev(contents: &str) -> Sample {
    let mut devices = Vec::new();

    for line in contents.lines().skip(2) {
        let (name, counters) = match line.split_once(':') {
            Some(parts) => parts,
            None => continue,
        };
        let name = name.trim();
        if name.is_empty() || name == "lo" {
            continue;
        }

        let mut fields = counters.split_whitespace();
        let rx_bytes = match fields.next().and_then(|f| f.parse().ok()) {
            Some(v) => v,
            None => continue,
        };
        // tx bytes sit 8 columns past rx bytes
        let tx_bytes = match fields.nth(7).and_then(|f| f.parse().ok()) {
            Some(v) => v,
            None => continue,
        };

        devices.push(DeviceCounters {
            name: name.to_string(),
            rx_bytes,
            tx_bytes,
        });
    }

    Sample { devices }
}

/// Read and parse the dev pseudo-file. An unreadable file is treated as
/// "no devices this tick", never an error.
pub fn read_dev(path: &Path) -> Sample {
    match fs::read_to_string(path) {
        Ok(contents) => parse_dev(&contents),
        Err(_) => Sample::default(),
    }
}
