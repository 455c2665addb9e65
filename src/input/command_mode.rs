use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Intent, Mode, Notice, ViewMode};
use crate::editing::FieldUpdate;
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Toggle,
    View(ViewMode),
    Goto(NaiveDate),
    NewEvent(Option<String>),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };
    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "toggle" | "t" => Command::Toggle,
        "help" => Command::Help,
        "view" => match parts.get(1).and_then(|name| ViewMode::from_name(name)) {
            Some(view) => Command::View(view),
            None => Command::Error("view requires 'calendar' or 'table'".to_string()),
        },
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date argument".to_string())
            } else if let Ok(date) = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d") {
                Command::Goto(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Runs a parsed command. Returns true when the application should exit.
pub fn execute(command: Command, state: &mut AppState) -> bool {
    state.command_buffer.clear();
    state.mode = Mode::Normal;

    match command {
        Command::Quit => return true,
        Command::Toggle => state.dispatch(Intent::ToggleView),
        Command::View(view) => {
            if state.view_mode != view {
                state.dispatch(Intent::ToggleView);
            }
        }
        Command::Goto(date) => {
            state.selected_date = date;
            state.reset_event_selection();
        }
        Command::NewEvent(title) => {
            let date = state.selected_date_string();
            state.dispatch(Intent::DateActivated(date));
            if let Some(title) = title {
                state.dispatch(Intent::UpdateField(FieldUpdate::Title(title)));
            }
        }
        Command::Theme(name) => {
            state.theme = Theme::get_by_name(&name);
            if state.theme.name != name.to_lowercase() {
                state.notice = Some(Notice::warning(format!(
                    "Unknown theme '{}', available: {}",
                    name,
                    Theme::available_themes().join(", ")
                )));
            }
        }
        Command::Help => {
            state.show_help = true;
            state.help_scroll = 0;
        }
        Command::Error(message) => {
            tracing::debug!("Command error: {}", message);
            state.notice = Some(Notice::warning(message));
        }
    }
    false
}

/// Returns true when the application should exit.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            execute(command, state)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        _ => false,
    }
}
