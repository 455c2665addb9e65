use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use calboard::{
    app::AppState,
    ui::table_view::{ImageCell, TableRow, table_rows},
};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let rows = table_rows(&app.store, &app.previews);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Events ({}) ", rows.len()));

    if rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No events yet", Style::default().fg(Color::DarkGray))),
            Line::from(vec![
                Span::styled("a", Style::default().fg(Color::Green)),
                Span::raw(" = Add event on the selected day"),
            ]),
        ])
        .alignment(ratatui::layout::Alignment::Center)
        .block(block);
        f.render_widget(empty, chunks[0]);
    } else {
        let header = Row::new(["Name", "Image", "Start", "End", "Color"])
            .style(Style::default().fg(app.theme.table_header).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let body: Vec<Row> = rows.iter().map(|row| table_row(row, app)).collect();

        let widths = [
            Constraint::Percentage(22),
            Constraint::Percentage(34),
            Constraint::Length(18),
            Constraint::Length(18),
            Constraint::Length(10),
        ];

        let table = Table::new(body, widths)
            .header(header)
            .block(block)
            .highlight_style(Style::default().bg(app.theme.selected_bg).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(Some(app.table_cursor));
        f.render_stateful_widget(table, chunks[0], &mut state);
    }

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("j/k", Style::default().fg(Color::Cyan)),
        Span::raw(" = Navigate | "),
        Span::styled("E/Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Edit | "),
        Span::styled("x", Style::default().fg(Color::Red)),
        Span::raw(" = Delete | "),
        Span::styled("a", Style::default().fg(Color::Green)),
        Span::raw(" = Add | "),
        Span::styled("v", Style::default().fg(Color::Magenta)),
        Span::raw(" = Calendar view"),
    ]));
    f.render_widget(hints, chunks[1]);
}

fn table_row<'a>(row: &'a TableRow, app: &AppState) -> Row<'a> {
    let image = match &row.image {
        ImageCell::Empty => Cell::from(Span::styled("-", Style::default().fg(Color::DarkGray))),
        ImageCell::Reference(reference) => Cell::from(reference.as_str()),
        ImageCell::Preview { reference, file_name, size } => Cell::from(format!(
            "{} ({}) {}",
            file_name,
            size,
            reference.as_deref().unwrap_or("")
        )),
    };

    let color = Cell::from(Line::from(vec![
        Span::styled("■ ", Style::default().fg(app.theme.event_color(&row.color))),
        Span::raw(row.color.as_str()),
    ]));

    Row::new(vec![
        Cell::from(row.title.as_str()),
        image,
        Cell::from(row.start.as_str()),
        Cell::from(row.end.as_str()),
        color,
    ])
}
