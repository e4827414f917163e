//! netspeed, a terminal network speed monitor.
//!
//! Polls `/proc/net/dev`, diffs byte counters between ticks, and shows
//! per-interface upload/download rates with a selectable device (any
//! interface, everything summed, or whatever holds the default route).
//!
//! Keybindings: arrows + Enter pick the monitored device, `s`/`b`/`i`
//! switch the display, `q` quits.

#![allow(dead_code)]

mod app;
mod input;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use netspeed::{Config, Monitor};

use app::App;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let config = Config::load();
    let mut app = App::new(config.clone());
    let mut monitor = Monitor::new(config);
    let mut last_tick = Instant::now();

    // Initial poll so the device list is there before the first draw
    run_tick(&mut app, &mut monitor);

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            return Ok(());
        }

        // Handle events with short timeout for responsiveness
        let timeout = Duration::from_millis(50);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // crossterm may fire Press and Release; only handle Press
                    if key.kind == KeyEventKind::Press {
                        input::handle_input(&mut app, &mut monitor, key);
                        if app.should_quit {
                            return Ok(());
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.select_prev(),
                        MouseEventKind::ScrollDown => app.select_next(),
                        _ => {}
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resize - will be handled on next draw
                }
                _ => {}
            }
        }

        // Check if it's time to poll the counters again; the interval is
        // re-read so config changes take effect without restarting
        let tick_rate = Duration::from_millis(monitor.config().timer_ms);
        let now = Instant::now();
        if now.duration_since(last_tick) >= tick_rate {
            run_tick(&mut app, &mut monitor);
            last_tick = now;
        }
    }
}

/// One poll: tick the monitor and fold the events into the view state.
fn run_tick(app: &mut App, monitor: &mut Monitor) {
    let events = monitor.tick();
    app.apply_events(&events);
    app.default_gw = monitor.default_gateway().map(str::to_string);
    app.last_update = Some(Local::now());
}
