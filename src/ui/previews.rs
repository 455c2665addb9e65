use std::collections::{HashMap, HashSet};

use uuid::Uuid;

/// Transient `blob:` references for images that only exist as bytes in memory.
///
/// References are created when an image is rendered and revoked as soon as it
/// is no longer on screen, so repeated edits do not pile them up.
#[derive(Debug, Default)]
pub struct PreviewRegistry {
    references: HashMap<Uuid, String>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, image: &Uuid) -> Option<&str> {
        self.references.get(image).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Makes the live set of references exactly `rendered`.
    pub fn retain_rendered<I>(&mut self, rendered: I)
    where
        I: IntoIterator<Item = Uuid>,
    {
        let rendered: HashSet<Uuid> = rendered.into_iter().collect();

        self.references.retain(|image, reference| {
            let keep = rendered.contains(image);
            if !keep {
                tracing::debug!("Revoked preview {}", reference);
            }
            keep
        });

        for image in rendered {
            self.references.entry(image).or_insert_with(|| {
                let reference = format!("blob:calboard/{}", Uuid::new_v4());
                tracing::debug!("Created preview {} for image {}", reference, image);
                reference
            });
        }
    }

    pub fn revoke_all(&mut self) {
        self.retain_rendered(std::iter::empty());
    }
}
