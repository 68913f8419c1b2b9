use crate::{Artwork, ArtworkId};

/// Ordered set of selected record ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    ids: Vec<ArtworkId>,
}

impl Selection {
    pub fn ids(&self) -> &[ArtworkId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Flips membership of `id`; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: ArtworkId) -> bool {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn replace_with(&mut self, records: &[Artwork]) {
        self.ids = records.iter().map(|record| record.id).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}
