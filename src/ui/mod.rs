pub mod device_table;
pub mod footer;
pub mod header;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;

/// Fixed header height: device line, headline, settings line, spacer.
pub const HEADER_HEIGHT: u16 = 4;

/// Render the complete UI
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // headline stats
            Constraint::Min(3),                // device table
            Constraint::Length(1),             // key bar
        ])
        .split(size);

    header::draw_header(f, app, chunks[0]);
    device_table::draw_device_table(f, app, chunks[1]);
    footer::draw_footer(f, app, chunks[2]);
}
