use chrono::NaiveDate;

use crate::calendar::Event;

/// In-memory, insertion-ordered collection of events.
///
/// `upsert` and `remove` are the only mutation entry points. Ids stay unique
/// because `upsert` replaces in place whenever the id is already present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    pub fn upsert(&mut self, event: Event) {
        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(existing) => {
                tracing::debug!("Replacing event {}", event.id);
                *existing = event;
            }
            None => {
                tracing::debug!("Appending event {}", event.id);
                self.events.push(event);
            }
        }
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        if self.events.len() == before {
            tracing::debug!("Remove of unknown event {} ignored", id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.start_date() == Some(date))
            .collect()
    }
}
