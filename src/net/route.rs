//! `/proc/net/route` parsing for default-gateway lookup.

use std::fs;
use std::path::Path;

/// Number of tab-separated columns in a well-formed route row.
const ROUTE_FIELDS: usize = 11;

/// An all-zero destination marks the default route.
const DEFAULT_DESTINATION: &str = "00000000";

/// Find the interface holding the default route.
///
/// Rows without exactly 11 tab-separated fields (the header line, empty
/// lines) are ignored. If several default routes exist the last one wins.
pub fn parse_route(contents: &str) -> Option<String> {
    let mut gateway = None;

    for line in contents.lines() {
        let fields: Vec<&str> = line.trim_start().split('\t').collect();
        if fields.len() != ROUTE_FIELDS {
            continue;
        }
        if fields[1] == DEFAULT_DESTINATION {
            gateway = Some(fields[0].to_string());
        }
    }

    gateway
}

/// Read and parse the route pseudo-file. Unreadable file → no gateway.
pub fn read_route(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .and_then(|contents| parse_route(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE: &str = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t00000000\t0102A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0
eth0\t0002A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0
wlan0\t0001A8C0\t00000000\t0001\t0\t0\t600\t00FFFFFF\t0\t0\t0
";

    #[test]
    fn finds_default_route_interface() {
        assert_eq!(parse_route(ROUTE).as_deref(), Some("eth0"));
    }

    #[test]
    fn no_default_route_yields_none() {
        let contents = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
eth0\t0002A8C0\t00000000\t0001\t0\t0\t100\t00FFFFFF\t0\t0\t0
";
        assert_eq!(parse_route(contents), None);
    }

    #[test]
    fn ignores_rows_with_wrong_column_count() {
        let contents = "\
eth9\t00000000
wlan0\t00000000\t0102A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
";
        assert_eq!(parse_route(contents).as_deref(), Some("wlan0"));
    }

    #[test]
    fn last_default_route_wins() {
        let contents = "\
eth0\t00000000\t0102A8C0\t0003\t0\t0\t100\t00000000\t0\t0\t0
wlan0\t00000000\t0102A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
";
        assert_eq!(parse_route(contents).as_deref(), Some("wlan0"));
    }

    #[test]
    fn missing_file_yields_none() {
        assert_eq!(read_route(Path::new("/nonexistent/net/route")), None);
    }
}
