use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::{AppState, Intent, Mode, ViewMode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('v') | KeyCode::Char('T') => state.dispatch(Intent::ToggleView),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => show_help(state),
        _ => match state.view_mode {
            ViewMode::Calendar => handle_calendar_key(key, state),
            ViewMode::Table => handle_table_key(key, state),
        },
    }
}

fn handle_calendar_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') => move_days(state, -1),
        KeyCode::Char('l') => move_days(state, 1),
        KeyCode::Char('j') => {
            if has_events_on_selected_date(state) {
                state.move_event_selection_down();
            } else {
                move_days(state, 7);
            }
        }
        KeyCode::Char('k') => {
            if has_events_on_selected_date(state) {
                state.move_event_selection_up();
            } else {
                move_days(state, -7);
            }
        }
        KeyCode::Char('J') => move_days(state, 7),
        KeyCode::Char('K') => move_days(state, -7),
        KeyCode::Char('t') => jump_to_today(state),
        KeyCode::Char('g') => move_to_start_of_month(state),
        KeyCode::Char('G') => move_to_end_of_month(state),
        KeyCode::Char('{') => move_months(state, -1),
        KeyCode::Char('}') => move_months(state, 1),
        KeyCode::Enter => {
            let occurrence = state.activate_focused_cell();
            state.dispatch(occurrence.into());
        }
        KeyCode::Char('a') => {
            let date = state.selected_date_string();
            state.dispatch(Intent::DateActivated(date));
        }
        KeyCode::Char('E') => {
            if let Some(id) = state.get_selected_event().map(|event| event.id.clone()) {
                state.dispatch(Intent::EditRequested(id));
            }
        }
        KeyCode::Char('x') => {
            if let Some(id) = state.get_selected_event().map(|event| event.id.clone()) {
                state.dispatch(Intent::DeleteRequested(id));
            }
        }
        _ => {}
    }
}

fn handle_table_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('j') | KeyCode::Down => state.move_table_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_table_cursor_up(),
        KeyCode::Char('g') => state.table_cursor = 0,
        KeyCode::Char('G') => state.table_cursor = state.store.len().saturating_sub(1),
        KeyCode::Char('E') | KeyCode::Enter => {
            if let Some(id) = state.selected_row_id() {
                state.dispatch(Intent::EditRequested(id));
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some(id) = state.selected_row_id() {
                state.dispatch(Intent::DeleteRequested(id));
            }
        }
        KeyCode::Char('a') => {
            let date = state.selected_date_string();
            state.dispatch(Intent::DateActivated(date));
        }
        _ => {}
    }
}

fn has_events_on_selected_date(state: &AppState) -> bool {
    !state.get_events_for_date(state.selected_date).is_empty()
}

fn select_date(state: &mut AppState, date: NaiveDate) {
    if date != state.selected_date {
        state.selected_date = date;
        state.reset_event_selection();
    }
}

fn move_days(state: &mut AppState, days: i64) {
    let moved = if days >= 0 {
        state.selected_date.checked_add_days(Days::new(days as u64))
    } else {
        state.selected_date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    if let Some(new_date) = moved {
        select_date(state, new_date);
    }
}

fn move_months(state: &mut AppState, months: i32) {
    let moved = if months >= 0 {
        state.selected_date.checked_add_months(Months::new(months as u32))
    } else {
        state.selected_date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    if let Some(new_date) = moved {
        select_date(state, new_date);
    }
}

fn jump_to_today(state: &mut AppState) {
    select_date(state, chrono::Local::now().date_naive());
}

fn move_to_start_of_month(state: &mut AppState) {
    if let Some(first) = state.selected_date.with_day(1) {
        select_date(state, first);
    }
}

fn move_to_end_of_month(state: &mut AppState) {
    let last_day = state
        .selected_date
        .with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next_first| next_first.pred_opt());

    if let Some(last_day) = last_day {
        select_date(state, last_day);
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn show_help(state: &mut AppState) {
    state.show_help = true;
    state.help_scroll = 0;
}
