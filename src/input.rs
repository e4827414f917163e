use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use netspeed::config::{DIGITS_MAX, DIGITS_MIN};
use netspeed::{Config, Monitor};

use crate::app::App;

/// Handle a single key input event.
pub fn handle_input(app: &mut App, monitor: &mut Monitor, key: KeyEvent) {
    match key.code {
        // ── Quit ──
        KeyCode::F(10) | KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── Navigation ──
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // ── Enter: monitor the device under the cursor ──
        KeyCode::Enter => {
            app.config.device = app.selector_at(app.selected_index);
            push_config(app, monitor);
        }

        // ── Display toggles ──
        KeyCode::Char('s') => {
            app.config.show_sum = !app.config.show_sum;
            push_config(app, monitor);
        }
        KeyCode::Char('b') => {
            app.config.bits = !app.config.bits;
            push_config(app, monitor);
        }
        KeyCode::Char('i') => {
            app.config.binary = !app.config.binary;
            push_config(app, monitor);
        }

        // ── Precision ──
        KeyCode::Char('+') | KeyCode::Char('=') => {
            if app.config.digits < DIGITS_MAX {
                app.config.digits += 1;
                push_config(app, monitor);
            }
        }
        KeyCode::Char('-') => {
            if app.config.digits > DIGITS_MIN {
                app.config.digits -= 1;
                push_config(app, monitor);
            }
        }

        // ── Reload the config file (explicit, nothing watches it) ──
        KeyCode::Char('r') => {
            app.config = Config::load();
            monitor.update_config(app.config.clone());
        }

        _ => {}
    }
}

/// Push the app's config mirror into the monitor and persist it.
fn push_config(app: &App, monitor: &mut Monitor) {
    monitor.update_config(app.config.clone());
    let _ = app.config.save();
}
