//! Interface type classification.
//!
//! Without a network daemon to ask, the type comes from a sysfs probe
//! (`/sys/class/net/<iface>/wireless`) plus the kernel's predictable
//! interface naming conventions.

use std::path::Path;

/// What kind of hardware sits behind an interface name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Ethernet,
    Wifi,
    Bluetooth,
    OlpcMesh,
    Wimax,
    Modem,
    Unknown,
}

impl DeviceType {
    /// Short lowercase label, suitable for display and config files.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceType::Ethernet => "ethernet",
            DeviceType::Wifi => "wifi",
            DeviceType::Bluetooth => "bluetooth",
            DeviceType::OlpcMesh => "olpcmesh",
            DeviceType::Wimax => "wimax",
            DeviceType::Modem => "modem",
            DeviceType::Unknown => "none",
        }
    }
}

/// Classify from the interface name alone.
pub fn classify_name(name: &str) -> DeviceType {
    if name.starts_with("wl") {
        DeviceType::Wifi
    } else if name.starts_with("en") || name.starts_with("eth") {
        DeviceType::Ethernet
    } else if name.starts_with("ww") || name.starts_with("ppp") {
        DeviceType::Modem
    } else if name.starts_with("bnep") || name.starts_with("bt") {
        DeviceType::Bluetooth
    } else if name.starts_with("msh") {
        DeviceType::OlpcMesh
    } else if name.starts_with("wmx") || name.starts_with("wimax") {
        DeviceType::Wimax
    } else {
        DeviceType::Unknown
    }
}

/// Classify with a sysfs probe first, falling back to the name.
///
/// A `wireless` directory under the interface's sysfs node is
/// authoritative for wifi regardless of how the interface is named.
pub fn classify(name: &str, sys_class_net: &Path) -> DeviceType {
    if sys_class_net.join(name).join("wireless").is_dir() {
        return DeviceType::Wifi;
    }
    classify_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_naming_convention() {
        assert_eq!(classify_name("eth0"), DeviceType::Ethernet);
        assert_eq!(classify_name("enp3s0"), DeviceType::Ethernet);
        assert_eq!(classify_name("wlan0"), DeviceType::Wifi);
        assert_eq!(classify_name("wlp2s0"), DeviceType::Wifi);
        assert_eq!(classify_name("wwan0"), DeviceType::Modem);
        assert_eq!(classify_name("ppp0"), DeviceType::Modem);
        assert_eq!(classify_name("bnep0"), DeviceType::Bluetooth);
        assert_eq!(classify_name("msh0"), DeviceType::OlpcMesh);
        assert_eq!(classify_name("wmx0"), DeviceType::Wimax);
        assert_eq!(classify_name("tun0"), DeviceType::Unknown);
    }

    #[test]
    fn sysfs_wireless_probe_overrides_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("odd0").join("wireless")).unwrap();

        assert_eq!(classify("odd0", dir.path()), DeviceType::Wifi);
        assert_eq!(classify("eth0", dir.path()), DeviceType::Ethernet);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(DeviceType::Wifi.label(), "wifi");
        assert_eq!(DeviceType::Unknown.label(), "none");
    }
}
