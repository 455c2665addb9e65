use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calboard::app::{AppState, Mode, NoticeLevel, ViewMode};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let title_text = format!(
        "calboard - {} View - {:?} Mode | v: Toggle to {} View",
        app.view_mode.label(),
        app.input_mode(),
        app.view_mode.toggled().label(),
    );

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    match app.view_mode {
        ViewMode::Calendar => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(60),
                    Constraint::Percentage(40),
                ])
                .split(main_chunks[1]);
            calendar_views::month::render(f, app, content_chunks[0]);
            calendar_views::event_list::render(f, app, content_chunks[1]);
        }
        ViewMode::Table => calendar_views::table::render(f, app, main_chunks[1]),
    }

    let (status_text, status_color, alignment) = if matches!(app.input_mode(), Mode::Command) {
        (app.command_buffer.clone(), app.theme.status_bar, Alignment::Left)
    } else if let Some(notice) = &app.notice {
        let color = match notice.level {
            NoticeLevel::Info => app.theme.today,
            NoticeLevel::Warning => app.theme.warning,
        };
        (notice.text.clone(), color, Alignment::Center)
    } else {
        (
            format!("Events: {} | Press 'q' to quit, '?' for help", app.store.len()),
            app.theme.status_bar,
            Alignment::Center,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);

    if app.session.is_open() {
        dialogs::event_form::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}
