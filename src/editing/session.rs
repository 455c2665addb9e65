use crate::calendar::{
    DEFAULT_COLOR, DEFAULT_TITLE, Event, EventIdGenerator, EventImage, EventStore,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EventDefaults {
    pub title: String,
    pub color: String,
}

impl Default for EventDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DraftOrigin {
    Create,
    Edit,
}

/// An event under construction or edit, not yet written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub event: Event,
    pub origin: DraftOrigin,
}

impl Draft {
    pub fn is_editing(&self) -> bool {
        self.origin == DraftOrigin::Edit
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.event.title = title.into();
    }

    pub fn set_start(&mut self, start: impl Into<String>) {
        self.event.start = start.into();
    }

    pub fn set_end(&mut self, end: impl Into<String>) {
        self.event.end = end.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.event.color = color.into();
    }

    pub fn set_image(&mut self, image: Option<EventImage>) {
        self.event.image = image;
    }

    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(title) => self.set_title(title),
            FieldUpdate::Start(start) => self.set_start(start),
            FieldUpdate::End(end) => self.set_end(end),
            FieldUpdate::Color(color) => self.set_color(color),
            FieldUpdate::Image(image) => self.set_image(image),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Title(String),
    Start(String),
    End(String),
    Color(String),
    Image(Option<EventImage>),
}

/// Zero or one draft. Every write to the store made through editing goes
/// through [`EditSession::commit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Open(Draft),
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open(_))
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditSession::Open(draft) => Some(draft),
            EditSession::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            EditSession::Open(draft) => Some(draft),
            EditSession::Closed => None,
        }
    }

    /// Opens a fresh draft spanning `date`. An already-open draft is replaced.
    pub fn open_for_create(
        &mut self,
        date: &str,
        ids: &mut EventIdGenerator,
        defaults: &EventDefaults,
    ) {
        let event = Event {
            id: ids.next_id(),
            title: defaults.title.clone(),
            start: date.to_string(),
            end: date.to_string(),
            color: defaults.color.clone(),
            image: None,
        };
        tracing::info!("Opening create draft {} for {}", event.id, date);
        self.open(Draft { event, origin: DraftOrigin::Create });
    }

    pub fn open_for_edit(&mut self, event: Event) {
        tracing::info!("Opening edit draft for {}", event.id);
        self.open(Draft { event, origin: DraftOrigin::Edit });
    }

    fn open(&mut self, draft: Draft) {
        if let EditSession::Open(previous) = self {
            tracing::debug!("Discarding open draft {}", previous.event.id);
        }
        *self = EditSession::Open(draft);
    }

    /// No-op when nothing is open.
    pub fn update_field(&mut self, update: FieldUpdate) {
        if let Some(draft) = self.draft_mut() {
            draft.apply(update);
        }
    }

    /// Upserts the draft and closes the session. Returns the committed event.
    pub fn commit(&mut self, store: &mut EventStore) -> Option<Event> {
        match std::mem::take(self) {
            EditSession::Open(draft) => {
                tracing::info!("Committing draft {}", draft.event.id);
                store.upsert(draft.event.clone());
                Some(draft.event)
            }
            EditSession::Closed => None,
        }
    }

    pub fn discard(&mut self) {
        if let EditSession::Open(draft) = std::mem::take(self) {
            tracing::info!("Discarded draft {}", draft.event.id);
        }
    }
}
