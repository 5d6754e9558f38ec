//! Two-column drag-and-drop transfer model.
//!
//! # Responsibility
//! - Own the `Left` and `Right` item columns.
//! - Apply drag completions as atomic move/reorder transitions.
//!
//! # Invariants
//! - An item id lives in at most one column; items are moved, never lost.
//! - Lookup searches `Left` before `Right`.
//! - A drop onto a column that already holds the id changes nothing.
//! - Invalid input is a soft failure (`false`), never a panic or error.
//! - One drag gesture moves its item at most once, whatever the number of
//!   targets it is dropped on.

use crate::context::AppContext;
use crate::model::item::{DraggableItem, ItemId};
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// One of the two transfer columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle for one in-flight drag gesture.
///
/// Every drop target reached by the same gesture reports the same handle;
/// only the first successful drop is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragGesture {
    id: u64,
    item_id: ItemId,
}

impl DragGesture {
    pub fn item_id(&self) -> ItemId {
        self.item_id
    }
}

/// Owner of both columns for one drag-and-drop surface.
#[derive(Debug)]
pub struct TransferListPair {
    left: Vec<DraggableItem>,
    right: Vec<DraggableItem>,
    context: AppContext,
    open_gestures: HashMap<u64, ItemId>,
    next_gesture_id: u64,
}

impl TransferListPair {
    /// Creates the pair from two seed lists.
    ///
    /// Seeds are taken as-is; callers are expected to hand in unique ids.
    pub fn new(context: AppContext, left: Vec<DraggableItem>, right: Vec<DraggableItem>) -> Self {
        Self {
            left,
            right,
            context,
            open_gestures: HashMap::new(),
            next_gesture_id: 0,
        }
    }

    pub fn left(&self) -> &[DraggableItem] {
        &self.left
    }

    pub fn right(&self) -> &[DraggableItem] {
        &self.right
    }

    pub fn items(&self, column: Column) -> &[DraggableItem] {
        match column {
            Column::Left => &self.left,
            Column::Right => &self.right,
        }
    }

    /// Total number of items across both columns.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// Column currently holding `item_id`, left first.
    pub fn locate(&self, item_id: ItemId) -> Option<Column> {
        [Column::Left, Column::Right]
            .into_iter()
            .find(|column| position(self.items(*column), item_id).is_some())
    }

    /// Moves `item_id` to the end of `destination`.
    ///
    /// Returns `true` only when a move happened. Unknown ids and drops onto a
    /// column already holding the id return `false` with no state change.
    pub fn transfer(&mut self, item_id: ItemId, destination: Column) -> bool {
        let Some(source) = self.locate(item_id) else {
            debug!("event=transfer module=transfer status=skipped reason=unknown_id item_id={item_id}");
            return false;
        };

        if position(self.items(source.other()), item_id).is_some() {
            // Lookup resolved to `source`, but the id also sits in the other column.
            warn!(
                "event=transfer module=transfer status=invariant_violation reason=id_in_both_columns item_id={item_id} resolved={source}"
            );
        }

        if position(self.items(destination), item_id).is_some() {
            debug!(
                "event=transfer module=transfer status=skipped reason=already_in_destination item_id={item_id} destination={destination}"
            );
            return false;
        }

        let Some(index) = position(self.items(source), item_id) else {
            return false;
        };
        let item = self.column_mut(source).remove(index);
        self.context
            .logger()
            .log(&format!("Dropped {} to {}", item.label, destination), "dnd");
        self.column_mut(destination).push(item);
        true
    }

    /// Opens a drag gesture for an item currently in either column.
    ///
    /// Returns `None` for an unknown id.
    pub fn begin_drag(&mut self, item_id: ItemId) -> Option<DragGesture> {
        self.locate(item_id)?;
        let gesture = DragGesture {
            id: self.next_gesture_id,
            item_id,
        };
        self.next_gesture_id = self.next_gesture_id.wrapping_add(1);
        self.open_gestures.insert(gesture.id, item_id);
        Some(gesture)
    }

    /// Applies a drop reported by `gesture` onto `destination`.
    ///
    /// The first drop that moves the item closes the gesture; every later
    /// drop from it returns `false`. A drop that moves nothing leaves the
    /// gesture open.
    pub fn drop_gesture(&mut self, gesture: DragGesture, destination: Column) -> bool {
        if self.open_gestures.get(&gesture.id) != Some(&gesture.item_id) {
            debug!(
                "event=drop module=transfer status=skipped reason=gesture_closed item_id={} destination={destination}",
                gesture.item_id
            );
            return false;
        }
        let moved = self.transfer(gesture.item_id, destination);
        if moved {
            self.open_gestures.remove(&gesture.id);
        }
        moved
    }

    /// Closes a gesture that ended without a drop.
    pub fn cancel_drag(&mut self, gesture: DragGesture) {
        self.open_gestures.remove(&gesture.id);
    }

    /// Repositions one item inside `column`.
    ///
    /// `from` must be a valid index; `to` is clamped to the last index.
    /// Returns `true` when the order changed.
    pub fn reorder(&mut self, column: Column, from: usize, to: usize) -> bool {
        let items = self.column_mut(column);
        if from >= items.len() {
            debug!(
                "event=reorder module=transfer status=skipped reason=index_out_of_range column={column} from={from} len={}",
                items.len()
            );
            return false;
        }
        let to = to.min(items.len() - 1);
        if from == to {
            return false;
        }
        let item = items.remove(from);
        items.insert(to, item);
        true
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<DraggableItem> {
        match column {
            Column::Left => &mut self.left,
            Column::Right => &mut self.right,
        }
    }
}

fn position(items: &[DraggableItem], item_id: ItemId) -> Option<usize> {
    items.iter().position(|item| item.id == item_id)
}
