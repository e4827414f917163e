use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Key definitions: (key_label, description)
const KEYS: &[(&str, &str)] = &[
    ("↑↓", "Select "),
    ("Enter", "Monitor "),
    ("s", "Sum "),
    ("b", "Bits "),
    ("i", "IEC "),
    ("+-", "Digits "),
    ("r", "Reload "),
    ("q", "Quit "),
];

/// Draw the bottom key bar: key in black-on-cyan, description in
/// light-on-dark, with the last update time at the right edge.
pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    // Full-width dark background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(Color::Indexed(234))),
        area,
    );

    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in KEYS {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            desc.to_string(),
            Style::default()
                .fg(Color::Indexed(252))
                .bg(Color::Indexed(234)),
        ));
    }

    if let Some(at) = app.last_update {
        spans.push(Span::styled(
            format!("  updated {}", at.format("%H:%M:%S")),
            Style::default()
                .fg(Color::Indexed(245))
                .bg(Color::Indexed(234)),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
