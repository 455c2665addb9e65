use uuid::Uuid;

use crate::calendar::{EventImage, EventStore};
use crate::ui::previews::PreviewRegistry;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageCell {
    Empty,
    Reference(String),
    Preview { reference: Option<String>, file_name: String, size: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub image: ImageCell,
    pub start: String,
    pub end: String,
    pub color: String,
}

/// Local image handles the table will show for the current store snapshot.
pub fn rendered_images(store: &EventStore) -> Vec<Uuid> {
    store
        .list_events()
        .iter()
        .filter_map(|event| match &event.image {
            Some(EventImage::Local(image)) => Some(image.handle),
            _ => None,
        })
        .collect()
}

pub fn table_rows(store: &EventStore, previews: &PreviewRegistry) -> Vec<TableRow> {
    store
        .list_events()
        .iter()
        .map(|event| TableRow {
            id: event.id.clone(),
            title: event.title.clone(),
            image: match &event.image {
                None => ImageCell::Empty,
                Some(EventImage::Saved(reference)) => ImageCell::Reference(reference.clone()),
                Some(EventImage::Local(image)) => ImageCell::Preview {
                    reference: previews.get(&image.handle).map(str::to_string),
                    file_name: image.file_name.clone(),
                    size: image.size_label(),
                },
            },
            start: event.start.clone(),
            end: event.end.clone(),
            color: event.color.clone(),
        })
        .collect()
}
