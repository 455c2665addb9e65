use chrono::{Local, NaiveDate};

use crate::calendar::{Event, EventIdGenerator, EventStore};
use crate::editing::{EditSession, EventDefaults, FieldUpdate, ValidationWarning, validate};
use crate::editing::validation::summarize;
use crate::ui::grid::{GridAdapter, GridEvent, GridOccurrence, GridRequest, GridView};
use crate::ui::previews::PreviewRegistry;
use crate::ui::table_view::rendered_images;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ViewMode {
    #[default]
    Calendar,
    Table,
}

impl ViewMode {
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Calendar => ViewMode::Table,
            ViewMode::Table => ViewMode::Calendar,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Calendar => "Calendar",
            ViewMode::Table => "Table",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "calendar" | "grid" => Some(ViewMode::Calendar),
            "table" | "list" => Some(ViewMode::Table),
            _ => None,
        }
    }
}

/// Fields of the edit form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FormField {
    #[default]
    Title,
    Image,
    Start,
    End,
    Color,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Image,
            FormField::Image => FormField::Start,
            FormField::Start => FormField::End,
            FormField::End => FormField::Color,
            FormField::Color => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Color,
            FormField::Image => FormField::Title,
            FormField::Start => FormField::Image,
            FormField::End => FormField::Start,
            FormField::Color => FormField::End,
        }
    }
}

/// A user action reaching the core from the grid, the table or the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    ToggleView,
    DateActivated(String),
    EventActivated(GridEvent),
    EditRequested(String),
    DeleteRequested(String),
    UpdateField(FieldUpdate),
    Save,
    Cancel,
}

impl From<GridOccurrence> for Intent {
    fn from(occurrence: GridOccurrence) -> Self {
        match occurrence {
            GridOccurrence::DateActivated(date) => Intent::DateActivated(date),
            GridOccurrence::EventActivated(event) => Intent::EventActivated(event),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }
}

pub struct AppState {
    pub mode: Mode,
    pub view_mode: ViewMode,
    pub store: EventStore,
    pub session: EditSession,
    pub ids: EventIdGenerator,
    pub defaults: EventDefaults,
    pub previews: PreviewRegistry,
    pub selected_date: NaiveDate,
    pub selected_event_index: usize,
    pub table_cursor: usize,
    pub form_focus: FormField,
    pub image_path_input: String,
    pub command_buffer: String,
    pub notice: Option<Notice>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
}

/// Applies one intent and hands the state back.
pub fn update(mut state: AppState, intent: Intent) -> AppState {
    state.dispatch(intent);
    state
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            view_mode: ViewMode::default(),
            store: EventStore::new(),
            session: EditSession::default(),
            ids: EventIdGenerator::new(),
            defaults: EventDefaults::default(),
            previews: PreviewRegistry::new(),
            selected_date: Local::now().date_naive(),
            selected_event_index: 0,
            table_cursor: 0,
            form_focus: FormField::default(),
            image_path_input: String::new(),
            command_buffer: String::new(),
            notice: None,
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn with_defaults(mut self, defaults: EventDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Insert whenever a draft is open, regardless of the stored mode.
    pub fn input_mode(&self) -> Mode {
        if self.session.is_open() {
            Mode::Insert
        } else {
            self.mode.clone()
        }
    }

    pub fn dispatch(&mut self, intent: Intent) {
        tracing::debug!("Dispatching {}", intent_name(&intent));
        match intent {
            Intent::ToggleView => {
                self.view_mode.toggle();
                self.clamp_table_cursor();
                tracing::info!("Switched to {} view", self.view_mode.label());
            }
            Intent::DateActivated(date) => {
                self.session.open_for_create(&date, &mut self.ids, &self.defaults);
                self.reset_form();
            }
            Intent::EventActivated(event) => {
                self.session.open_for_edit(event.into_event());
                self.reset_form();
            }
            Intent::EditRequested(id) => match self.store.get(&id).cloned() {
                Some(event) => {
                    self.session.open_for_edit(event);
                    self.reset_form();
                }
                None => {
                    tracing::warn!("Edit requested for unknown event {}", id);
                    self.notice = Some(Notice::warning(format!("No event with id {}", id)));
                }
            },
            Intent::DeleteRequested(id) => {
                let title = self.store.get(&id).map(|event| event.title.clone());
                self.store.remove(&id);
                self.session.discard();
                self.clamp_table_cursor();
                self.clamp_event_selection();
                if let Some(title) = title {
                    tracing::info!("Deleted event {}", id);
                    self.notice = Some(Notice::info(format!("Deleted '{}'", title)));
                }
            }
            Intent::UpdateField(update) => self.session.update_field(update),
            Intent::Save => {
                let warnings = self.draft_warnings();
                if let Some(event) = self.session.commit(&mut self.store) {
                    self.ids.observe(&event.id);
                    self.notice = Some(saved_notice(&event, &warnings));
                }
                self.image_path_input.clear();
            }
            Intent::Cancel => {
                self.session.discard();
                self.image_path_input.clear();
            }
        }
    }

    fn reset_form(&mut self) {
        self.form_focus = FormField::default();
        self.image_path_input.clear();
        self.mode = Mode::Normal;
    }

    pub fn draft_warnings(&self) -> Vec<ValidationWarning> {
        self.session
            .draft()
            .map(|draft| validate(&draft.event))
            .unwrap_or_default()
    }

    pub fn add_event(&mut self, event: Event) {
        self.ids.observe(&event.id);
        self.store.upsert(event);
    }

    pub fn get_events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.store.events_on(date)
    }

    pub fn get_selected_event(&self) -> Option<&Event> {
        self.get_events_for_date(self.selected_date)
            .get(self.selected_event_index)
            .copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let event_count = self.get_events_for_date(self.selected_date).len();
        if event_count > 0 && self.selected_event_index < event_count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        self.selected_event_index = self.selected_event_index.saturating_sub(1);
    }

    pub fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }

    fn clamp_event_selection(&mut self) {
        let event_count = self.get_events_for_date(self.selected_date).len();
        self.selected_event_index = self.selected_event_index.min(event_count.saturating_sub(1));
    }

    pub fn move_table_cursor_down(&mut self) {
        if self.table_cursor + 1 < self.store.len() {
            self.table_cursor += 1;
        }
    }

    pub fn move_table_cursor_up(&mut self) {
        self.table_cursor = self.table_cursor.saturating_sub(1);
    }

    fn clamp_table_cursor(&mut self) {
        self.table_cursor = self.table_cursor.min(self.store.len().saturating_sub(1));
    }

    pub fn selected_row_id(&self) -> Option<String> {
        self.store
            .list_events()
            .get(self.table_cursor)
            .map(|event| event.id.clone())
    }

    pub fn selected_date_string(&self) -> String {
        self.selected_date.format("%Y-%m-%d").to_string()
    }

    pub fn grid_events(&self) -> Vec<GridEvent> {
        self.store.list_events().iter().map(GridEvent::from_event).collect()
    }

    pub fn grid_request(&self) -> GridRequest {
        GridRequest {
            view: GridView::Month,
            focus: self.selected_date,
            today: Local::now().date_naive(),
            selected_event: self.get_selected_event().map(|event| event.id.clone()),
            events: self.grid_events(),
        }
    }

    pub fn render_grid(&self, adapter: &mut dyn GridAdapter) {
        adapter.render(&self.grid_request());
    }

    /// What the grid reports when the focused cell is activated: the
    /// selected event if the day has one, the day itself otherwise.
    pub fn activate_focused_cell(&self) -> GridOccurrence {
        match self.get_selected_event() {
            Some(event) => GridOccurrence::EventActivated(GridEvent::from_event(event)),
            None => GridOccurrence::DateActivated(self.selected_date_string()),
        }
    }

    /// Brings preview references in line with what is on screen.
    pub fn refresh_previews(&mut self) {
        match self.view_mode {
            ViewMode::Table => self.previews.retain_rendered(rendered_images(&self.store)),
            ViewMode::Calendar => self.previews.revoke_all(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn saved_notice(event: &Event, warnings: &[ValidationWarning]) -> Notice {
    if warnings.is_empty() {
        Notice::info(format!("Saved '{}'", event.title))
    } else {
        Notice::warning(format!("Saved '{}' with warnings: {}", event.title, summarize(warnings)))
    }
}

fn intent_name(intent: &Intent) -> &'static str {
    match intent {
        Intent::ToggleView => "ToggleView",
        Intent::DateActivated(_) => "DateActivated",
        Intent::EventActivated(_) => "EventActivated",
        Intent::EditRequested(_) => "EditRequested",
        Intent::DeleteRequested(_) => "DeleteRequested",
        Intent::UpdateField(_) => "UpdateField",
        Intent::Save => "Save",
        Intent::Cancel => "Cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{EventImage, LocalImage};
    use crate::ui::grid::MockGridAdapter;
    use pretty_assertions::assert_eq;

    fn event(id: &str, title: &str) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            start: "2024-06-01T10:00".to_string(),
            end: "2024-06-01T11:00".to_string(),
            color: "#3788d8".to_string(),
            image: None,
        }
    }

    fn state_with(events: &[Event]) -> AppState {
        let mut state = AppState::new();
        state.selected_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        for e in events {
            state.add_event(e.clone());
        }
        state
    }

    #[test]
    fn new_app_starts_in_calendar_view() {
        let app = AppState::new();
        assert_eq!(app.view_mode, ViewMode::Calendar);
        assert_eq!(app.input_mode(), Mode::Normal);
        assert!(app.store.is_empty());
        assert!(!app.session.is_open());
    }

    #[test]
    fn toggling_twice_returns_to_start_without_touching_store() {
        let state = state_with(&[event("1", "A")]);
        let before = state.store.clone();

        let state = update(state, Intent::ToggleView);
        assert_eq!(state.view_mode, ViewMode::Table);
        let state = update(state, Intent::ToggleView);

        assert_eq!(state.view_mode, ViewMode::Calendar);
        assert_eq!(state.store, before);
    }

    #[test]
    fn view_mode_names_parse() {
        assert_eq!(ViewMode::from_name("Table"), Some(ViewMode::Table));
        assert_eq!(ViewMode::from_name("calendar"), Some(ViewMode::Calendar));
        assert_eq!(ViewMode::from_name("agenda"), None);
    }

    #[test]
    fn create_then_save_on_empty_store() {
        let state = AppState::new();

        let state = update(state, Intent::DateActivated("2024-06-01T10:00".to_string()));
        assert_eq!(state.input_mode(), Mode::Insert);
        let state = update(state, Intent::Save);

        let events = state.store.list_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "New Event");
        assert_eq!(events[0].start, "2024-06-01T10:00");
        assert_eq!(events[0].end, "2024-06-01T10:00");
        assert_eq!(state.input_mode(), Mode::Normal);
    }

    #[test]
    fn edit_title_and_save_replaces_event() {
        let state = state_with(&[event("1", "A")]);

        let state = update(state, Intent::EditRequested("1".to_string()));
        let state = update(state, Intent::UpdateField(FieldUpdate::Title("B".to_string())));
        let state = update(state, Intent::Save);

        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.list_events()[0].id, "1");
        assert_eq!(state.store.list_events()[0].title, "B");
    }

    #[test]
    fn cancel_discards_edits() {
        let original = event("1", "A");
        let state = state_with(&[original.clone()]);

        let state = update(state, Intent::EditRequested("1".to_string()));
        let state = update(state, Intent::UpdateField(FieldUpdate::Title("X".to_string())));
        let state = update(state, Intent::Cancel);

        assert!(!state.session.is_open());
        assert_eq!(state.store.get("1"), Some(&original));
    }

    #[test]
    fn delete_removes_only_that_event() {
        let state = state_with(&[event("1", "A"), event("2", "B")]);

        let state = update(state, Intent::DeleteRequested("1".to_string()));

        let ids: Vec<_> = state.store.list_events().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["2".to_string()]);
        assert_eq!(state.notice, Some(Notice::info("Deleted 'A'")));
    }

    #[test]
    fn delete_of_missing_event_changes_nothing() {
        let state = state_with(&[event("1", "A")]);
        let before = state.store.clone();

        let state = update(state, Intent::DeleteRequested("nope".to_string()));

        assert_eq!(state.store, before);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn delete_closes_open_draft() {
        let state = state_with(&[event("1", "A"), event("2", "B")]);
        let state = update(state, Intent::EditRequested("2".to_string()));

        let state = update(state, Intent::DeleteRequested("1".to_string()));

        assert!(!state.session.is_open());
    }

    #[test]
    fn table_cursor_clamps_after_deleting_last_row() {
        let mut state = state_with(&[event("1", "A"), event("2", "B")]);
        state.table_cursor = 1;

        state.dispatch(Intent::DeleteRequested("2".to_string()));

        assert_eq!(state.table_cursor, 0);
        assert_eq!(state.selected_row_id(), Some("1".to_string()));
    }

    #[test]
    fn edit_request_for_unknown_id_leaves_session_closed() {
        let state = state_with(&[]);
        let state = update(state, Intent::EditRequested("ghost".to_string()));

        assert!(!state.session.is_open());
        assert_eq!(state.notice.map(|n| n.level), Some(NoticeLevel::Warning));
    }

    #[test]
    fn saving_with_problems_reports_warnings_but_commits() {
        let state = AppState::new();
        let state = update(state, Intent::DateActivated("2024-06-02T10:00".to_string()));
        let state = update(state, Intent::UpdateField(FieldUpdate::Title(String::new())));
        let state = update(state, Intent::UpdateField(FieldUpdate::End("2024-06-01T10:00".to_string())));

        assert_eq!(state.draft_warnings().len(), 2);
        let state = update(state, Intent::Save);

        assert_eq!(state.store.len(), 1);
        let notice = state.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.text, "Saved '' with warnings: title is empty; end is before start");
    }

    #[test]
    fn focused_empty_day_activates_date() {
        let state = state_with(&[]);
        assert_eq!(
            state.activate_focused_cell(),
            GridOccurrence::DateActivated("2024-06-01".to_string())
        );
    }

    #[test]
    fn saved_grid_event_id_is_never_reissued() {
        let later = chrono::Utc::now().timestamp_millis() + 60_000;
        let mut incoming = event(&later.to_string(), "From grid");
        incoming.start = "2024-06-02T09:00".to_string();
        incoming.end = "2024-06-02T10:00".to_string();
        let state = update(AppState::new(), Intent::EventActivated(GridEvent::from_event(&incoming)));
        let state = update(state, Intent::Save);

        let state = update(state, Intent::DateActivated("2024-06-03".to_string()));
        assert_ne!(state.session.draft().map(|d| d.event.id.clone()), Some(incoming.id.clone()));
        let mut state = update(state, Intent::Save);
        assert_eq!(state.store.len(), 2);

        let reissued = state.ids.next_id_at(later);
        assert!(state.store.get(&reissued).is_none());
        assert_eq!(state.store.get(&incoming.id).map(|e| e.title.as_str()), Some("From grid"));
    }

    #[test]
    fn focused_event_round_trips_through_grid() {
        let mut with_image = event("1", "A");
        with_image.image = Some(EventImage::Local(LocalImage::new("a.png", vec![1])));
        let state = state_with(&[with_image.clone()]);

        let intent = Intent::from(state.activate_focused_cell());
        let state = update(state, intent);

        assert_eq!(state.session.draft().unwrap().event, with_image);
        let state = update(state, Intent::Save);
        assert_eq!(state.store.list_events(), &[with_image]);
    }

    #[test]
    fn consecutive_creates_get_distinct_ids() {
        let state = AppState::new();
        let state = update(state, Intent::DateActivated("2024-06-01".to_string()));
        let state = update(state, Intent::Save);
        let state = update(state, Intent::DateActivated("2024-06-01".to_string()));
        let state = update(state, Intent::Save);

        let events = state.store.list_events();
        assert_eq!(events.len(), 2);
        assert_ne!(events[0].id, events[1].id);
    }

    #[test]
    fn grid_receives_the_store_snapshot() {
        let state = state_with(&[event("1", "A"), event("2", "B")]);
        let mut adapter = MockGridAdapter::new();
        adapter
            .expect_render()
            .withf(|request| {
                request.events.iter().map(|e| e.id.as_str()).collect::<Vec<_>>() == vec!["1", "2"]
                    && request.selected_event.as_deref() == Some("1")
            })
            .times(1)
            .return_const(());

        state.render_grid(&mut adapter);
    }

    #[test]
    fn previews_follow_the_table() {
        let mut with_image = event("1", "A");
        with_image.image = Some(EventImage::Local(LocalImage::new("a.png", vec![1])));
        let mut state = state_with(&[with_image]);

        state.refresh_previews();
        assert!(state.previews.is_empty());

        state.dispatch(Intent::ToggleView);
        state.refresh_previews();
        assert_eq!(state.previews.len(), 1);

        state.dispatch(Intent::DeleteRequested("1".to_string()));
        state.refresh_previews();
        assert!(state.previews.is_empty());
    }

    #[test]
    fn form_focus_cycles_through_all_fields() {
        let mut field = FormField::Title;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Color);
    }

    #[test]
    fn event_selection_stays_within_day() {
        let mut state = state_with(&[event("1", "A"), event("2", "B")]);
        state.move_event_selection_down();
        state.move_event_selection_down();
        assert_eq!(state.get_selected_event().map(|e| e.id.as_str()), Some("2"));
        state.move_event_selection_up();
        state.move_event_selection_up();
        assert_eq!(state.selected_event_index, 0);
    }
}
