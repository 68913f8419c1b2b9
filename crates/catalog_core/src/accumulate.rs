use std::collections::HashSet;

use crate::{Artwork, ArtworkId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    pub added: usize,
    pub skipped: usize,
}

/// Records fetched so far, in first-seen order, unique by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Accumulated {
    records: Vec<Artwork>,
    ids: HashSet<ArtworkId>,
}

impl Accumulated {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    pub fn get(&self, id: ArtworkId) -> Option<&Artwork> {
        if !self.contains(id) {
            return None;
        }
        self.records.iter().find(|record| record.id == id)
    }

    /// The first `count` records, or all of them if fewer are held.
    pub fn prefix(&self, count: usize) -> &[Artwork] {
        &self.records[..count.min(self.records.len())]
    }

    /// Appends records whose id has not been seen yet. Existing entries win.
    pub fn merge(&mut self, incoming: impl IntoIterator<Item = Artwork>) -> MergeStats {
        let mut stats = MergeStats::default();
        for record in incoming {
            if self.ids.insert(record.id) {
                self.records.push(record);
                stats.added += 1;
            } else {
                stats.skipped += 1;
            }
        }
        stats
    }
}

/// Value-level merge: `existing` followed by the unseen records of `incoming`.
pub fn merge(existing: &[Artwork], incoming: &[Artwork]) -> Vec<Artwork> {
    let mut accumulated = Accumulated::new();
    accumulated.merge(existing.iter().cloned());
    accumulated.merge(incoming.iter().cloned());
    accumulated.records
}
