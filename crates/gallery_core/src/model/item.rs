//! Draggable item model.
//!
//! # Responsibility
//! - Define the record moved between transfer columns.
//! - Provide the built-in sample seeds shown on first launch.
//!
//! # Invariants
//! - `id` is the only identity; `label` and `tag` are display metadata.
//! - Items are never mutated by core state machines.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a draggable item.
pub type ItemId = Uuid;

/// Display color tag. Opaque to core logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemTag {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
}

/// One card that can be dragged between columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraggableItem {
    pub id: ItemId,
    pub label: String,
    pub tag: ItemTag,
}

impl DraggableItem {
    /// Creates an item with a generated id.
    pub fn new(label: impl Into<String>, tag: ItemTag) -> Self {
        Self::with_id(Uuid::new_v4(), label, tag)
    }

    /// Creates an item with a caller-provided id.
    pub fn with_id(id: ItemId, label: impl Into<String>, tag: ItemTag) -> Self {
        Self {
            id,
            label: label.into(),
            tag,
        }
    }
}

/// Equality is identity: two items with the same `id` are the same item even
/// if display metadata differs.
impl PartialEq for DraggableItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DraggableItem {}

/// Default left column seed.
pub fn sample_left() -> Vec<DraggableItem> {
    vec![
        DraggableItem::new("Alpha", ItemTag::Blue),
        DraggableItem::new("Bravo", ItemTag::Green),
        DraggableItem::new("Charlie", ItemTag::Purple),
    ]
}

/// Default right column seed.
pub fn sample_right() -> Vec<DraggableItem> {
    vec![
        DraggableItem::new("Delta", ItemTag::Orange),
        DraggableItem::new("Echo", ItemTag::Pink),
    ]
}

#[cfg(test)]
mod tests {
    use super::{sample_left, sample_right, DraggableItem, ItemTag};
    use std::collections::HashSet;

    #[test]
    fn equality_uses_id_only() {
        let item = DraggableItem::new("Alpha", ItemTag::Blue);
        let relabeled = DraggableItem::with_id(item.id, "Renamed", ItemTag::Pink);
        assert_eq!(item, relabeled);
        assert_ne!(item, DraggableItem::new("Alpha", ItemTag::Blue));
    }

    #[test]
    fn sample_seeds_have_unique_ids() {
        let ids: HashSet<_> = sample_left()
            .into_iter()
            .chain(sample_right())
            .map(|item| item.id)
            .collect();
        assert_eq!(ids.len(), 5);
    }
}
