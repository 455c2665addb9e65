use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calboard::{app::AppState, ui::theme::Theme};

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60.min(area.width);
    let help_height = 23.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let section = |text: &'static str| {
        Line::from(vec![Span::styled(text, Style::default().fg(app.theme.help_section))])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("calboard Help", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        section("Views:"),
        Line::from("  v / T    - Toggle calendar / table view"),
        Line::from(""),
        section("Calendar:"),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Navigate events (or week if no events)"),
        Line::from("  J/K      - Previous/next week"),
        Line::from("  t        - Jump to today"),
        Line::from("  g/G      - First/last day of month"),
        Line::from("  { / }    - Previous/next month"),
        Line::from("  Enter    - New event on day / edit selected event"),
        Line::from(""),
        section("Table:"),
        Line::from("  j/k      - Move between rows"),
        Line::from("  E/Enter  - Edit row"),
        Line::from("  x/Del    - Delete row (no undo)"),
        Line::from(""),
        section("Both views:"),
        Line::from("  a        - Add event on the selected day"),
        Line::from("  E        - Edit selected event"),
        Line::from("  x        - Delete selected event"),
        Line::from(""),
        section("Edit form:"),
        Line::from("  Tab      - Next field (loads a typed image path)"),
        Line::from("  Enter    - Save"),
        Line::from("  Esc      - Cancel"),
        Line::from("  Del      - Clear image (on image field)"),
        Line::from(""),
        section("Commands:"),
        Line::from("  :q       - Quit"),
        Line::from("  :toggle  - Toggle view"),
        Line::from("  :view    - Show view (:view table)"),
        Line::from("  :new     - Create event (:new [title])"),
        Line::from("  :goto    - Jump to date (:goto 2025-12-25)"),
        Line::from(format!("  :theme   - {}", Theme::available_themes().join(", "))),
        Line::from("  :help    - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
