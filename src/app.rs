//! Application state for the terminal frontend.
//!
//! The app is a passive view model: it consumes monitor events and holds
//! whatever the next draw needs. All measurement lives in the library.

use chrono::{DateTime, Local};

use netspeed::{Config, DeviceSelector, DeviceType, Event, FormattedSpeed};

/// Virtual selections shown above the real interfaces: ALL and the
/// default gateway.
pub const VIRTUAL_ROWS: usize = 2;

/// One interface row of the device table.
#[derive(Debug, Clone)]
pub struct DeviceRow {
    pub name: String,
    pub kind: DeviceType,
    pub up: FormattedSpeed,
    pub down: FormattedSpeed,
    pub addrs: Vec<String>,
}

impl DeviceRow {
    fn new(name: String, kind: DeviceType) -> Self {
        DeviceRow {
            name,
            kind,
            up: FormattedSpeed::default(),
            down: FormattedSpeed::default(),
            addrs: Vec::new(),
        }
    }
}

/// Main application state
pub struct App {
    pub should_quit: bool,

    /// Mirror of the monitor's configuration; input mutates this and
    /// pushes it back through `Monitor::update_config`.
    pub config: Config,

    // Device table
    pub rows: Vec<DeviceRow>,
    pub selected_index: usize,

    // Headline stats for the configured device
    pub sum: FormattedSpeed,
    pub up: FormattedSpeed,
    pub down: FormattedSpeed,
    pub have_stats: bool,

    pub default_gw: Option<String>,
    pub last_update: Option<DateTime<Local>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        App {
            should_quit: false,
            config,
            rows: Vec::new(),
            selected_index: 0,
            sum: FormattedSpeed::default(),
            up: FormattedSpeed::default(),
            down: FormattedSpeed::default(),
            have_stats: false,
            default_gw: None,
            last_update: None,
        }
    }

    /// Fold one tick's events into the view state.
    pub fn apply_events(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::Stats { sum, up, down } => {
                    self.sum = sum.clone();
                    self.up = up.clone();
                    self.down = down.clone();
                    self.have_stats = true;
                }
                Event::Speeds(speeds) => {
                    for speed in speeds {
                        if let Some(row) =
                            self.rows.iter_mut().find(|row| row.name == speed.device)
                        {
                            row.up = speed.up.clone();
                            row.down = speed.down.clone();
                        }
                    }
                }
                Event::MenuChanged { devices, types } => {
                    self.rows = devices
                        .iter()
                        .zip(types)
                        .map(|(name, kind)| DeviceRow::new(name.clone(), *kind))
                        .collect();
                    self.clamp_selection();
                }
                Event::Addresses(addr_lists) => {
                    for list in addr_lists {
                        if let Some(row) =
                            self.rows.iter_mut().find(|row| row.name == list.device)
                        {
                            row.addrs = list.addrs.clone();
                        }
                    }
                }
            }
        }
    }

    /// Total table rows: virtual selections plus one per interface.
    pub fn row_count(&self) -> usize {
        VIRTUAL_ROWS + self.rows.len()
    }

    /// The selector a table row stands for.
    pub fn selector_at(&self, index: usize) -> DeviceSelector {
        match index {
            0 => DeviceSelector::All,
            1 => DeviceSelector::DefaultGateway,
            n => match self.rows.get(n - VIRTUAL_ROWS) {
                Some(row) => DeviceSelector::Named(row.name.clone()),
                None => DeviceSelector::All,
            },
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.row_count() {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.row_count().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.row_count() {
            self.selected_index = self.row_count().saturating_sub(1);
        }
    }
}
