//! Ordered registry of live bubbles, keyed by id.
use bevy::prelude::*;

use super::components::BubbleId;

/// The authoritative collection of currently-live bubbles.
///
/// Entries keep insertion order. Every mutation goes through `insert`,
/// `remove`, or `drain`, so the ledger can never hold a duplicate id as long
/// as ids come from [`super::components::BubbleIdGenerator`].
#[derive(Resource, Debug, Default)]
pub struct BubbleLedger {
    entries: Vec<(BubbleId, Entity)>,
}

impl BubbleLedger {
    /// Append a newly spawned bubble.
    pub fn insert(&mut self, id: BubbleId, entity: Entity) {
        self.entries.push((id, entity));
    }

    /// Remove the entry with the given id, returning its entity.
    ///
    /// Removing an id that is not present is a no-op and returns `None`,
    /// so a second removal of the same id never disturbs the collection.
    pub fn remove(&mut self, id: BubbleId) -> Option<Entity> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Take every entry out of the ledger, leaving it empty.
    ///
    /// Used by the teardown sweep so nothing can fire after disposal.
    pub fn drain(&mut self) -> Vec<(BubbleId, Entity)> {
        std::mem::take(&mut self.entries)
    }

    pub fn contains(&self, id: BubbleId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate live entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BubbleId, Entity)> + '_ {
        self.entries.iter().copied()
    }
}
