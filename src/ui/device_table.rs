use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, VIRTUAL_ROWS};

/// Column headers and widths; 0 = takes remaining space.
const HEADERS: &[(&str, u16)] = &[
    ("DEVICE", 14),
    ("TYPE", 10),
    ("DOWN", 14),
    ("UP", 14),
    ("ADDRESSES", 0),
];

/// Draw the device table: two virtual selection rows (ALL, default
/// gateway) followed by one row per interface.
pub fn draw_device_table(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 2 {
        return;
    }

    // --- Column header row (full-width colored background) ---
    let header_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 1,
    };
    let header_style = Style::default().bg(Color::Green).fg(Color::Black);
    f.render_widget(
        Paragraph::new(" ".repeat(area.width as usize)).style(header_style),
        header_area,
    );

    let mut header_spans: Vec<Span> = Vec::new();
    for (name, width) in HEADERS {
        let padded = if *width == 0 {
            name.to_string()
        } else {
            format!("{:<width$}", name, width = *width as usize)
        };
        header_spans.push(Span::styled(padded, header_style));
    }
    f.render_widget(Paragraph::new(Line::from(header_spans)), header_area);

    // --- Data rows ---
    let visible = (area.height - 1) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for index in 0..app.row_count().min(visible) {
        lines.push(table_row(app, index, area.width as usize));
    }

    let rows_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };
    f.render_widget(Paragraph::new(lines), rows_area);
}

fn table_row(app: &App, index: usize, total_width: usize) -> Line<'static> {
    let is_cursor = index == app.selected_index;
    let is_active = app.selector_at(index) == app.config.device;

    let (name, kind, down, up, addrs) = match index {
        0 => (
            "ALL".to_string(),
            "-".to_string(),
            String::new(),
            String::new(),
            "every interface".to_string(),
        ),
        1 => (
            "Default GW".to_string(),
            "-".to_string(),
            String::new(),
            String::new(),
            match &app.default_gw {
                Some(gw) => format!("-> {}", gw),
                None => "(no default route)".to_string(),
            },
        ),
        n => {
            let row = &app.rows[n - VIRTUAL_ROWS];
            (
                row.name.clone(),
                row.kind.label().to_string(),
                format!("{} {}", row.down.text, row.down.unit),
                format!("{} {}", row.up.text, row.up.unit),
                row.addrs.join(", "),
            )
        }
    };

    let marker = if is_active { "●" } else { " " };
    let fixed: usize = HEADERS
        .iter()
        .map(|(_, w)| *w as usize)
        .filter(|w| *w > 0)
        .sum();
    // marker + space + 12-char name fill the DEVICE column
    let addr_width = total_width.saturating_sub(fixed);

    let text = format!(
        "{} {:<12}{:<10}{:<14}{:<14}{}",
        marker,
        truncate(&name, 12),
        kind,
        down,
        up,
        truncate(&addrs, addr_width),
    );

    let mut style = Style::default();
    if is_active {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if is_cursor {
        style = style.bg(Color::Indexed(237));
    }

    Line::from(Span::styled(text, style))
}

/// Truncate to a display width, unicode-aware.
fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
