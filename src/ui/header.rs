use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use netspeed::DeviceSelector;

use crate::app::App;

/// Draw the three header lines: monitored device, headline rates, and the
/// active display settings.
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 3 {
        return;
    }

    let row = |offset: u16| Rect {
        x: area.x,
        y: area.y + offset,
        width: area.width,
        height: 1,
    };

    draw_device_line(f, app, row(0));
    draw_headline(f, app, row(1));
    draw_settings_line(f, app, row(2));
}

/// Draw: "Monitoring: Default Gateway -> eth0"
fn draw_device_line(f: &mut Frame, app: &App, area: Rect) {
    let device = match &app.config.device {
        DeviceSelector::All => "ALL (every interface summed)".to_string(),
        DeviceSelector::DefaultGateway => match &app.default_gw {
            Some(gw) => format!("Default Gateway -> {}", gw),
            None => "Default Gateway -> (no default route)".to_string(),
        },
        DeviceSelector::Named(name) => name.clone(),
    };

    let line = Line::from(vec![
        Span::styled(
            "Monitoring: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(device, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Draw the headline rates: either the up/down pair or their sum.
fn draw_headline(f: &mut Frame, app: &App, area: Rect) {
    let value = |speed: &netspeed::FormattedSpeed| {
        if app.have_stats {
            format!("{} {}", speed.text, speed.unit)
        } else {
            "---".to_string()
        }
    };

    let line = if app.config.show_sum {
        Line::from(vec![
            Span::styled("⇅ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                value(&app.sum),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("↓ ", Style::default().fg(Color::Green)),
            Span::styled(
                value(&app.down),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("↑ ", Style::default().fg(Color::Magenta)),
            Span::styled(
                value(&app.up),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };

    f.render_widget(Paragraph::new(line), area);
}

/// Draw: "Interval: 1000 ms   Digits: 3   Units: bytes, decimal"
fn draw_settings_line(f: &mut Frame, app: &App, area: Rect) {
    let units = format!(
        "{}, {}",
        if app.config.bits { "bits" } else { "bytes" },
        if app.config.binary { "binary" } else { "decimal" },
    );

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Gray);

    let line = Line::from(vec![
        Span::styled("Interval: ", label),
        Span::styled(format!("{} ms", app.config.timer_ms), value),
        Span::styled("   Digits: ", label),
        Span::styled(app.config.digits.to_string(), value),
        Span::styled("   Units: ", label),
        Span::styled(units, value),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
