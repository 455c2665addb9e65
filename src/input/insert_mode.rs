use crossterm::event::KeyCode;

use crate::app::{AppState, FormField, Intent, Notice};
use crate::calendar::{EventImage, LocalImage};
use crate::editing::FieldUpdate;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if !state.session.is_open() {
        return;
    }

    match key {
        KeyCode::Esc => state.dispatch(Intent::Cancel),
        KeyCode::Enter => {
            if attach_pending_image(state) {
                state.dispatch(Intent::Save);
            }
        }
        KeyCode::Tab => {
            if state.form_focus == FormField::Image {
                attach_pending_image(state);
            }
            state.form_focus = state.form_focus.next();
        }
        KeyCode::BackTab => {
            if state.form_focus == FormField::Image {
                attach_pending_image(state);
            }
            state.form_focus = state.form_focus.prev();
        }
        KeyCode::Delete if state.form_focus == FormField::Image => {
            state.image_path_input.clear();
            state.dispatch(Intent::UpdateField(FieldUpdate::Image(None)));
        }
        KeyCode::Backspace => edit_focused_text(state, |text| {
            text.pop();
        }),
        KeyCode::Char(c) => edit_focused_text(state, |text| text.push(c)),
        _ => {}
    }
}

fn edit_focused_text(state: &mut AppState, edit: impl FnOnce(&mut String)) {
    let Some(draft) = state.session.draft() else {
        return;
    };

    let update = match state.form_focus {
        FormField::Image => {
            edit(&mut state.image_path_input);
            return;
        }
        FormField::Title => {
            let mut title = draft.event.title.clone();
            edit(&mut title);
            FieldUpdate::Title(title)
        }
        FormField::Start => {
            let mut start = draft.event.start.clone();
            edit(&mut start);
            FieldUpdate::Start(start)
        }
        FormField::End => {
            let mut end = draft.event.end.clone();
            edit(&mut end);
            FieldUpdate::End(end)
        }
        FormField::Color => {
            let mut color = draft.event.color.clone();
            edit(&mut color);
            FieldUpdate::Color(color)
        }
    };

    state.dispatch(Intent::UpdateField(update));
}

/// Turns whatever was typed into the image field into an image on the draft.
/// Returns false when the file could not be read; the typed path is kept so
/// it can be corrected.
fn attach_pending_image(state: &mut AppState) -> bool {
    let input = state.image_path_input.trim().to_string();
    if input.is_empty() {
        return true;
    }

    let image = if input.starts_with("http://") || input.starts_with("https://") {
        EventImage::Saved(input)
    } else {
        match LocalImage::load(&input) {
            Ok(image) => EventImage::Local(image),
            Err(e) => {
                tracing::warn!("Could not attach image {}: {}", input, e);
                state.notice = Some(Notice::warning(format!("Image not attached: {}", e)));
                return false;
            }
        }
    };

    state.image_path_input.clear();
    state.dispatch(Intent::UpdateField(FieldUpdate::Image(Some(image))));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NoticeLevel;
    use crate::calendar::Event;
    use tempfile::TempDir;

    fn state_with_create_draft() -> AppState {
        let mut state = AppState::new();
        state.dispatch(Intent::DateActivated("2024-06-01T10:00".to_string()));
        state
    }

    fn draft_event(state: &AppState) -> &Event {
        &state.session.draft().unwrap().event
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(KeyCode::Char(c), state);
        }
    }

    #[test]
    fn tab_moves_to_next_field() {
        let mut state = state_with_create_draft();
        assert_eq!(state.form_focus, FormField::Title);

        handle_key(KeyCode::Tab, &mut state);

        assert_eq!(state.form_focus, FormField::Image);
    }

    #[test]
    fn backtab_wraps_to_color() {
        let mut state = state_with_create_draft();
        handle_key(KeyCode::BackTab, &mut state);
        assert_eq!(state.form_focus, FormField::Color);
    }

    #[test]
    fn typing_edits_title() {
        let mut state = state_with_create_draft();

        handle_key(KeyCode::Backspace, &mut state);
        type_text(&mut state, "s!");

        assert_eq!(draft_event(&state).title, "New Evens!");
    }

    #[test]
    fn typing_edits_end_time() {
        let mut state = state_with_create_draft();
        state.form_focus = FormField::End;

        for _ in 0..5 {
            handle_key(KeyCode::Backspace, &mut state);
        }
        type_text(&mut state, "11:30");

        assert_eq!(draft_event(&state).end, "2024-06-01T11:30");
        assert_eq!(draft_event(&state).start, "2024-06-01T10:00");
    }

    #[test]
    fn escape_discards_draft() {
        let mut state = state_with_create_draft();
        type_text(&mut state, " 2");

        handle_key(KeyCode::Esc, &mut state);

        assert!(!state.session.is_open());
        assert!(state.store.is_empty());
    }

    #[test]
    fn enter_saves_draft() {
        let mut state = state_with_create_draft();

        handle_key(KeyCode::Enter, &mut state);

        assert!(!state.session.is_open());
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn image_path_is_loaded_when_leaving_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flyer.png");
        std::fs::write(&path, b"png").unwrap();
        let mut state = state_with_create_draft();
        state.form_focus = FormField::Image;

        type_text(&mut state, &path.display().to_string());
        handle_key(KeyCode::Tab, &mut state);

        match &draft_event(&state).image {
            Some(EventImage::Local(image)) => assert_eq!(image.file_name, "flyer.png"),
            other => panic!("expected local image, got {:?}", other),
        }
        assert!(state.image_path_input.is_empty());
        assert_eq!(state.form_focus, FormField::Start);
    }

    #[test]
    fn url_becomes_saved_reference() {
        let mut state = state_with_create_draft();
        state.form_focus = FormField::Image;

        type_text(&mut state, "https://img.example/cake.jpg");
        handle_key(KeyCode::Enter, &mut state);

        let saved = &state.store.list_events()[0];
        assert_eq!(saved.image, Some(EventImage::Saved("https://img.example/cake.jpg".to_string())));
    }

    #[test]
    fn unreadable_image_blocks_save_and_keeps_input() {
        let mut state = state_with_create_draft();
        state.form_focus = FormField::Image;

        type_text(&mut state, "/definitely/not/here.png");
        handle_key(KeyCode::Enter, &mut state);

        assert!(state.session.is_open());
        assert_eq!(state.image_path_input, "/definitely/not/here.png");
        assert_eq!(state.notice.as_ref().map(|n| &n.level), Some(&NoticeLevel::Warning));
    }

    #[test]
    fn unreadable_image_does_not_block_cancel() {
        let mut state = state_with_create_draft();
        state.form_focus = FormField::Image;
        type_text(&mut state, "/definitely/not/here.png");

        handle_key(KeyCode::Esc, &mut state);

        assert!(!state.session.is_open());
        assert!(state.image_path_input.is_empty());
    }

    #[test]
    fn delete_clears_image() {
        let mut state = state_with_create_draft();
        state.dispatch(Intent::UpdateField(FieldUpdate::Image(Some(EventImage::Saved(
            "x".to_string(),
        )))));
        state.form_focus = FormField::Image;

        handle_key(KeyCode::Delete, &mut state);

        assert_eq!(draft_event(&state).image, None);
    }

    #[test]
    fn keys_without_draft_are_ignored() {
        let mut state = AppState::new();
        handle_key(KeyCode::Char('x'), &mut state);
        handle_key(KeyCode::Enter, &mut state);
        assert!(state.store.is_empty());
    }
}
