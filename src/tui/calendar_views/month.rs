use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::{Datelike, NaiveDate};
use calboard::{
    app::AppState,
    ui::{
        grid::{GridAdapter, GridRequest},
        month_view,
        theme::Theme,
    },
};

/// Draws the month grid into a terminal frame.
pub struct TerminalMonthGrid<'a, 'f> {
    frame: &'a mut Frame<'f>,
    area: Rect,
    theme: &'a Theme,
}

impl GridAdapter for TerminalMonthGrid<'_, '_> {
    fn render(&mut self, request: &GridRequest) {
        let layout = month_view::calculate_layout(request);
        let theme = self.theme;

        let month_name = NaiveDate::from_ymd_opt(layout.year, layout.month, 1)
            .map(|d| d.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", layout.year, layout.month));

        let header_style = Style::default().fg(theme.weekday_header);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(month_name, Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(
                ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                    .into_iter()
                    .map(|day| Span::styled(format!(" {}  ", day), header_style))
                    .collect::<Vec<_>>(),
            ),
        ];

        for week in &layout.weeks {
            let mut day_spans = Vec::new();

            for day_cell in &week.days {
                let day_text = day_cell
                    .date
                    .map(|date| format!(" {:>2}", date.day()))
                    .unwrap_or_else(|| "   ".to_string());

                let mut style = Style::default();
                if !day_cell.is_current_month {
                    style = style.fg(theme.inactive_day);
                } else if day_cell.is_selected {
                    style = style.bg(theme.selected_bg).fg(Color::White).add_modifier(Modifier::BOLD);
                } else if day_cell.is_today {
                    style = style.fg(theme.today).add_modifier(Modifier::BOLD);
                }

                let marker = match (&day_cell.lead_color, day_cell.event_count) {
                    (Some(color), 1) => Span::styled("• ", Style::default().fg(theme.event_color(color))),
                    (Some(color), _) => Span::styled("+ ", Style::default().fg(theme.event_color(color))),
                    (None, _) => Span::raw("  "),
                };

                day_spans.push(Span::styled(day_text, style));
                day_spans.push(marker);
                day_spans.push(Span::raw(" "));
            }

            lines.push(Line::from(day_spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("hjkl", Style::default().fg(Color::Cyan)),
            Span::raw(" = Navigate | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Open day/event | "),
            Span::styled("a", Style::default().fg(Color::Green)),
            Span::raw(" = Add | "),
            Span::styled("{ }", Style::default().fg(Color::Cyan)),
            Span::raw(" = Month"),
        ]));

        let content = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL));
        self.frame.render_widget(content, self.area);
    }
}

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let mut grid = TerminalMonthGrid {
        frame: f,
        area,
        theme: &app.theme,
    };
    app.render_grid(&mut grid);
}
