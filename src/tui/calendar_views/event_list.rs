use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use calboard::{app::AppState, calendar::parse_local_timestamp};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let events = app.get_events_for_date(app.selected_date);

    let title = format!("Events on {}", app.selected_date.format("%B %d, %Y"));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No events", Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = New event on this day"),
        ]));
    } else {
        let selected_base = Style::default().bg(app.theme.selected_bg).add_modifier(Modifier::BOLD);

        for (idx, event) in events.iter().enumerate() {
            let time_str = parse_local_timestamp(&event.start)
                .map(|ts| ts.format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".to_string());
            let is_selected = idx == app.selected_event_index;

            let (time_style, title_style) = if is_selected {
                (selected_base.fg(Color::White), selected_base.fg(Color::White))
            } else {
                (Style::default().fg(Color::Green), Style::default().fg(Color::White))
            };

            let cursor = if is_selected { ">" } else { " " };

            lines.push(Line::from(vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled("■ ", Style::default().fg(app.theme.event_color(&event.color))),
                Span::styled(time_str, time_style),
                Span::raw(" "),
                Span::styled(event.title.as_str(), title_style),
            ]));

            if let Some(image) = &event.image {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("🖼 {}", image.label()), Style::default().fg(Color::DarkGray)),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("j/k", Style::default().fg(Color::Cyan)),
            Span::raw(" = Navigate | "),
            Span::styled("Enter/E", Style::default().fg(Color::Green)),
            Span::raw(" = Edit | "),
            Span::styled("x", Style::default().fg(Color::Red)),
            Span::raw(" = Delete"),
        ]));
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
