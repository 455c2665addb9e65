use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calboard::{
    app::{AppState, FormField},
    calendar::EventImage,
};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(draft) = app.session.draft() else {
        return;
    };
    let event = &draft.event;
    let warnings = app.draft_warnings();

    let area = f.size();
    let form_width = 70.min(area.width);
    let form_height = (16 + warnings.len() as u16).min(area.height);
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;
    let label = |text: &'static str, field: FormField| {
        let color = if app.form_focus == field { active_color } else { inactive_color };
        Span::styled(text, Style::default().fg(color))
    };

    let form_title = if draft.is_editing() { "Edit Event" } else { "Add Event" };

    let image_text = if !app.image_path_input.is_empty() {
        app.image_path_input.clone()
    } else {
        match &event.image {
            Some(EventImage::Local(image)) => format!("{} ({})", image.file_name, image.size_label()),
            Some(EventImage::Saved(reference)) => reference.clone(),
            None => String::new(),
        }
    };
    let image_hint = if app.form_focus == FormField::Image && app.image_path_input.is_empty() {
        " [type a file path or URL, Del clears]"
    } else {
        ""
    };

    let mut form_text = vec![
        Line::from(vec![Span::styled(form_title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![label("Title: ", FormField::Title), Span::raw(event.title.as_str())]),
        Line::from(""),
        Line::from(vec![
            label("Image: ", FormField::Image),
            Span::raw(image_text),
            Span::styled(image_hint, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Start: ", FormField::Start),
            Span::raw(event.start.as_str()),
            Span::styled("  (YYYY-MM-DDTHH:MM)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(vec![label("End:   ", FormField::End), Span::raw(event.end.as_str())]),
        Line::from(""),
        Line::from(vec![
            label("Color: ", FormField::Color),
            Span::styled("■ ", Style::default().fg(app.theme.event_color(&event.color))),
            Span::raw(event.color.as_str()),
        ]),
        Line::from(""),
    ];

    for warning in &warnings {
        form_text.push(Line::from(vec![Span::styled(
            format!("! {}", warning),
            Style::default().fg(app.theme.warning),
        )]));
    }

    form_text.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" = Next field | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Save | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Cancel"),
    ]));

    let block_title = if draft.is_editing() { " Edit Event " } else { " New Event " };

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(block_title)
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}
