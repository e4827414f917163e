//! netspeed configuration persistence (htoprc-style key=value format)
//!
//! Saves/loads settings to `$XDG_CONFIG_HOME/netspeed/netspeedrc`
//! (falling back to `~/.config`). The monitor takes a [`Config`] at
//! construction and is re-targeted with an explicit
//! [`update_config`](crate::Monitor::update_config) call; nothing watches
//! the file for changes.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::units::UnitSystem;

/// Poll interval bounds, milliseconds.
const TIMER_MIN_MS: u64 = 100;
const TIMER_MAX_MS: u64 = 10_000;

/// Digit-budget bounds for the formatter.
pub const DIGITS_MIN: u32 = 3;
pub const DIGITS_MAX: u32 = 10;

/// Get the config file path: `$XDG_CONFIG_HOME/netspeed/netspeedrc`
fn config_path() -> Option<PathBuf> {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".config"))
        })?;
    Some(base.join("netspeed").join("netspeedrc"))
}

/// Which device the headline stats follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    /// Every interface summed.
    All,
    /// Whichever interface currently holds the default route.
    DefaultGateway,
    /// A specific interface by name.
    Named(String),
}

impl DeviceSelector {
    /// The interface name to match against the sample, if any. `All`
    /// resolves to none; the gateway selector resolves through the most
    /// recent route lookup.
    pub fn resolve<'a>(&'a self, default_gw: Option<&'a str>) -> Option<&'a str> {
        match self {
            DeviceSelector::All => None,
            DeviceSelector::DefaultGateway => default_gw,
            DeviceSelector::Named(name) => Some(name),
        }
    }

    /// Config-file representation.
    pub fn as_key(&self) -> &str {
        match self {
            DeviceSelector::All => "all",
            DeviceSelector::DefaultGateway => "defaultGW",
            DeviceSelector::Named(name) => name,
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "" | "all" => DeviceSelector::All,
            "defaultGW" => DeviceSelector::DefaultGateway,
            name => DeviceSelector::Named(name.to_string()),
        }
    }
}

/// Persistable settings consumed by the monitor and the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Device the headline stats follow.
    pub device: DeviceSelector,
    /// Poll interval in milliseconds.
    pub timer_ms: u64,
    /// Total digit budget for formatted rates.
    pub digits: u32,
    /// Display bits instead of bytes.
    pub bits: bool,
    /// Scale with 1024 (IEC prefixes) instead of 1000.
    pub binary: bool,
    /// Frontend headline shows the up+down sum instead of the pair.
    pub show_sum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DeviceSelector::All,
            timer_ms: 1000,
            digits: 3,
            bits: false,
            binary: false,
            show_sum: false,
        }
    }
}

impl Config {
    /// Unit system implied by the `bits`/`binary` flags.
    pub fn unit(&self) -> UnitSystem {
        UnitSystem {
            bits: self.bits,
            binary: self.binary,
        }
    }

    /// Load config from file, returning defaults if file doesn't exist
    pub fn load() -> Self {
        let path = match config_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };

        Self::parse(&content)
    }

    /// Parse key=value lines; unknown keys and bad values are ignored,
    /// numeric values are clamped to their preference ranges.
    fn parse(content: &str) -> Self {
        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                match key {
                    "device" => cfg.device = DeviceSelector::from_key(value),
                    "timer" => {
                        if let Ok(v) = value.parse::<u64>() {
                            cfg.timer_ms = v.clamp(TIMER_MIN_MS, TIMER_MAX_MS);
                        }
                    }
                    "digits" => {
                        if let Ok(v) = value.parse::<u32>() {
                            cfg.digits = v.clamp(DIGITS_MIN, DIGITS_MAX);
                        }
                    }
                    "bits" => cfg.bits = value == "1",
                    "binary" => cfg.binary = value == "1",
                    "show_sum" => cfg.show_sum = value == "1",
                    _ => {} // Ignore unknown keys
                }
            }
        }

        cfg
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), String> {
        let path = match config_path() {
            Some(p) => p,
            None => return Err("Could not determine config path".into()),
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("Failed to create config dir: {}", e))?;
        }

        let mut file =
            fs::File::create(&path).map_err(|e| format!("Failed to create config file: {}", e))?;
        file.write_all(self.serialize().as_bytes())
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    fn serialize(&self) -> String {
        let b = |v: bool| if v { "1" } else { "0" };

        let mut lines = Vec::new();
        lines.push("# netspeed configuration file".to_string());
        lines.push(format!("device={}", self.device.as_key()));
        lines.push(format!("timer={}", self.timer_ms));
        lines.push(format!("digits={}", self.digits));
        lines.push(format!("bits={}", b(self.bits)));
        lines.push(format!("binary={}", b(self.binary)));
        lines.push(format!("show_sum={}", b(self.show_sum)));

        lines.join("\n") + "\n"
    }
}
