//! End-to-end monitor tests against fixture pseudo-files.

use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use netspeed::{Config, DeviceSelector, Event, Monitor};

const DEV_HEADER: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
";

const ROUTE: &str = "\
Iface\tDestination\tGateway \tFlags\tRefCnt\tUse\tMetric\tMask\t\tMTU\tWindow\tIRTT
wlan0\t00000000\t0102A8C0\t0003\t0\t0\t600\t00000000\t0\t0\t0
wlan0\t0002A8C0\t00000000\t0001\t0\t0\t600\t00FFFFFF\t0\t0\t0
";

fn write_proc(root: &Path, dev_body: &str) {
    let net = root.join("net");
    fs::create_dir_all(&net).unwrap();
    fs::write(net.join("dev"), format!("{DEV_HEADER}{dev_body}")).unwrap();
    fs::write(net.join("route"), ROUTE).unwrap();
}

fn dev_line(name: &str, rx: u64, tx: u64) -> String {
    format!("{name}: {rx} 10 0 0 0 0 0 0 {tx} 10 0 0 0 0 0 0\n")
}

fn monitor_at(root: &Path, config: Config) -> Monitor {
    Monitor::with_roots(config, root, &root.join("sys"))
}

#[test]
fn full_cycle_menu_then_rates() {
    let dir = tempfile::tempdir().unwrap();
    let body = dev_line("lo", 500, 500) + &dev_line("eth0", 1000, 2000) + &dev_line("wlan0", 10, 20);
    write_proc(dir.path(), &body);

    let mut monitor = monitor_at(dir.path(), Config::default());

    // first tick: device list is new, so menu + addresses, no rates
    let events = monitor.tick();
    match &events[0] {
        Event::MenuChanged { devices, types } => {
            assert_eq!(devices, &["eth0".to_string(), "wlan0".to_string()]);
            assert_eq!(types.len(), 2);
        }
        other => panic!("expected MenuChanged, got {other:?}"),
    }
    match &events[1] {
        Event::Addresses(addrs) => {
            assert_eq!(addrs.len(), 2);
            // fixture interfaces don't exist on the host
            assert!(addrs.iter().all(|a| a.addrs.is_empty()));
        }
        other => panic!("expected Addresses, got {other:?}"),
    }
    assert_eq!(monitor.default_gateway(), Some("wlan0"));

    // second tick over the same device list: stats + per-device speeds
    thread::sleep(Duration::from_millis(10));
    let body = dev_line("lo", 600, 600) + &dev_line("eth0", 5000, 9000) + &dev_line("wlan0", 10, 20);
    write_proc(dir.path(), &body);

    let events = monitor.tick();
    match &events[0] {
        Event::Stats { sum, up, down } => {
            assert!(!sum.text.is_empty());
            assert_eq!(up.unit.chars().last(), Some('s'));
            assert_eq!(down.unit.chars().last(), Some('s'));
        }
        other => panic!("expected Stats, got {other:?}"),
    }
    match &events[1] {
        Event::Speeds(speeds) => {
            assert_eq!(speeds.len(), 2);
            assert_eq!(speeds[0].device, "eth0");
            assert_eq!(speeds[1].device, "wlan0");
            // wlan0 moved nothing this tick
            assert_eq!(speeds[1].up.text, "0");
            assert_eq!(speeds[1].down.text, "0");
        }
        other => panic!("expected Speeds, got {other:?}"),
    }
}

#[test]
fn loopback_never_reaches_the_device_list() {
    let dir = tempfile::tempdir().unwrap();
    let body = dev_line("lo", 500, 500) + &dev_line("eth0", 0, 0);
    write_proc(dir.path(), &body);

    let mut monitor = monitor_at(dir.path(), Config::default());
    match &monitor.tick()[0] {
        Event::MenuChanged { devices, .. } => assert_eq!(devices, &["eth0".to_string()]),
        other => panic!("expected MenuChanged, got {other:?}"),
    }
}

#[test]
fn device_churn_is_one_silent_rebaseline_tick() {
    let dir = tempfile::tempdir().unwrap();
    write_proc(dir.path(), &dev_line("eth0", 0, 0));

    let mut monitor = monitor_at(dir.path(), Config::default());
    monitor.tick();

    // a device appears: menu again, no stats
    write_proc(
        dir.path(),
        &(dev_line("eth0", 100, 100) + &dev_line("usb0", 0, 0)),
    );
    let events = monitor.tick();
    assert!(matches!(events[0], Event::MenuChanged { .. }));
    assert!(events.iter().all(|e| !matches!(e, Event::Stats { .. })));

    // stable again: rates resume
    let events = monitor.tick();
    assert!(matches!(events[0], Event::Stats { .. }));
}

#[test]
fn gateway_selection_formats_with_configured_units() {
    let dir = tempfile::tempdir().unwrap();
    write_proc(
        dir.path(),
        &(dev_line("eth0", 0, 0) + &dev_line("wlan0", 0, 0)),
    );

    let config = Config {
        device: DeviceSelector::DefaultGateway,
        bits: true,
        binary: false,
        ..Config::default()
    };
    let mut monitor = monitor_at(dir.path(), config);
    monitor.tick();

    let events = monitor.tick();
    match &events[0] {
        Event::Stats { sum, .. } => {
            // zero traffic on the gateway device, bit units configured
            assert_eq!(sum.text, "0");
            assert_eq!(sum.unit, "b/s");
        }
        other => panic!("expected Stats, got {other:?}"),
    }
}

#[test]
fn subscriber_and_return_batch_agree() {
    let dir = tempfile::tempdir().unwrap();
    write_proc(dir.path(), &dev_line("eth0", 0, 0));

    let seen: Rc<RefCell<usize>> = Rc::default();
    let sink = Rc::clone(&seen);

    let mut monitor = monitor_at(dir.path(), Config::default());
    monitor.subscribe(move |_| *sink.borrow_mut() += 1);

    let batch = monitor.tick();
    assert_eq!(*seen.borrow(), batch.len());
}
