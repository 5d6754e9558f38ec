use gallery_core::{
    sample_left, sample_right, AppContext, Analytics, Column, DraggableItem, EventLogger,
    FeatureFlags, ItemTag, TransferListPair,
};
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct RecordingSink {
    lines: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    fn lines(&self) -> Vec<(String, String)> {
        self.lines.lock().unwrap().clone()
    }
}

impl EventLogger for RecordingSink {
    fn log(&self, message: &str, category: &str) {
        self.lines
            .lock()
            .unwrap()
            .push((message.to_string(), category.to_string()));
    }
}

impl Analytics for RecordingSink {
    fn track(&self, _event: &str, _params: &BTreeMap<String, String>) {}
}

fn context_with(sink: &Arc<RecordingSink>) -> AppContext {
    AppContext::new(sink.clone(), sink.clone(), FeatureFlags::default())
}

fn item(label: &str) -> DraggableItem {
    DraggableItem::new(label, ItemTag::Green)
}

fn labels(items: &[DraggableItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

struct Seeded {
    pair: TransferListPair,
    ids: BTreeMap<&'static str, Uuid>,
    sink: Arc<RecordingSink>,
}

fn seeded_abc_de() -> Seeded {
    let sink = Arc::new(RecordingSink::default());
    let left = vec![item("A"), item("B"), item("C")];
    let right = vec![item("D"), item("E")];
    let ids = ["A", "B", "C", "D", "E"]
        .into_iter()
        .zip(left.iter().chain(right.iter()).map(|item| item.id))
        .collect();
    Seeded {
        pair: TransferListPair::new(context_with(&sink), left, right),
        ids,
        sink,
    }
}

#[test]
fn transfer_scenario_moves_then_second_drop_is_noop() {
    let Seeded {
        mut pair,
        ids,
        sink,
    } = seeded_abc_de();

    assert!(pair.transfer(ids["B"], Column::Right));
    assert_eq!(labels(pair.left()), ["A", "C"]);
    assert_eq!(labels(pair.right()), ["D", "E", "B"]);

    assert!(!pair.transfer(ids["B"], Column::Right));
    assert_eq!(labels(pair.left()), ["A", "C"]);
    assert_eq!(labels(pair.right()), ["D", "E", "B"]);

    assert_eq!(
        sink.lines(),
        vec![("Dropped B to right".to_string(), "dnd".to_string())]
    );
}

#[test]
fn drop_onto_own_column_keeps_position() {
    let Seeded { mut pair, ids, .. } = seeded_abc_de();

    assert!(!pair.transfer(ids["A"], Column::Left));
    assert!(!pair.transfer(ids["A"], Column::Left));
    assert_eq!(labels(pair.left()), ["A", "B", "C"]);
    assert_eq!(labels(pair.right()), ["D", "E"]);
}

#[test]
fn unknown_id_is_safe() {
    let Seeded {
        mut pair, sink, ..
    } = seeded_abc_de();

    assert!(!pair.transfer(Uuid::new_v4(), Column::Left));
    assert!(!pair.transfer(Uuid::new_v4(), Column::Right));
    assert_eq!(labels(pair.left()), ["A", "B", "C"]);
    assert_eq!(labels(pair.right()), ["D", "E"]);
    assert!(sink.lines().is_empty());
}

#[test]
fn right_to_left_appends_at_end() {
    let Seeded { mut pair, ids, .. } = seeded_abc_de();

    assert!(pair.transfer(ids["D"], Column::Left));
    assert_eq!(labels(pair.left()), ["A", "B", "C", "D"]);
    assert_eq!(labels(pair.right()), ["E"]);
    assert_eq!(pair.locate(ids["D"]), Some(Column::Left));
}

#[test]
fn repeated_transfers_never_duplicate_or_lose_items() {
    let sink = Arc::new(RecordingSink::default());
    let left = sample_left();
    let right = sample_right();
    let seeded: Vec<Uuid> = left.iter().chain(right.iter()).map(|item| item.id).collect();
    let mut pair = TransferListPair::new(context_with(&sink), left, right);

    // Deterministic pseudo-random walk over ids and destinations.
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    for _ in 0..500 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let id = seeded[(state % seeded.len() as u64) as usize];
        let destination = if state & 0x100 == 0 {
            Column::Left
        } else {
            Column::Right
        };
        let before = pair.locate(id);
        let moved = pair.transfer(id, destination);
        assert_eq!(moved, before != Some(destination));
        assert_eq!(pair.locate(id), Some(destination));

        let left_ids: HashSet<Uuid> = pair.left().iter().map(|item| item.id).collect();
        let right_ids: HashSet<Uuid> = pair.right().iter().map(|item| item.id).collect();
        assert!(left_ids.is_disjoint(&right_ids));
        assert_eq!(left_ids.len() + right_ids.len(), seeded.len());
        assert_eq!(pair.len(), seeded.len());
    }
}

#[test]
fn id_present_in_both_columns_resolves_left_first() {
    let sink = Arc::new(RecordingSink::default());
    let shared = item("Shared");
    let mut pair = TransferListPair::new(
        context_with(&sink),
        vec![item("A"), shared.clone()],
        vec![shared.clone(), item("Z")],
    );

    assert_eq!(pair.locate(shared.id), Some(Column::Left));

    // Destination already holds the id: nothing is removed or inserted.
    assert!(!pair.transfer(shared.id, Column::Right));
    assert_eq!(labels(pair.left()), ["A", "Shared"]);
    assert_eq!(labels(pair.right()), ["Shared", "Z"]);
    assert!(sink.lines().is_empty());
}

#[test]
fn gesture_dropped_on_two_targets_moves_once() {
    let Seeded {
        mut pair,
        ids,
        sink,
    } = seeded_abc_de();

    let gesture = pair.begin_drag(ids["C"]).expect("seeded id");
    assert!(pair.drop_gesture(gesture, Column::Right));
    assert!(!pair.drop_gesture(gesture, Column::Left));

    assert_eq!(pair.locate(ids["C"]), Some(Column::Right));
    assert_eq!(labels(pair.left()), ["A", "B"]);
    assert_eq!(labels(pair.right()), ["D", "E", "C"]);
    assert_eq!(sink.lines().len(), 1);
}

#[test]
fn gesture_stays_open_until_a_drop_moves_the_item() {
    let Seeded { mut pair, ids, .. } = seeded_abc_de();

    let gesture = pair.begin_drag(ids["A"]).expect("seeded id");
    assert!(!pair.drop_gesture(gesture, Column::Left));
    assert!(pair.drop_gesture(gesture, Column::Right));
    assert!(!pair.drop_gesture(gesture, Column::Left));
    assert_eq!(pair.locate(ids["A"]), Some(Column::Right));

    // A fresh gesture for the same item can move it back.
    let next = pair.begin_drag(ids["A"]).expect("seeded id");
    assert!(pair.drop_gesture(next, Column::Left));
    assert_eq!(labels(pair.left()), ["B", "C", "A"]);
}

#[test]
fn cancelled_or_unknown_gestures_do_nothing() {
    let Seeded { mut pair, ids, .. } = seeded_abc_de();

    assert!(pair.begin_drag(Uuid::new_v4()).is_none());

    let gesture = pair.begin_drag(ids["B"]).expect("seeded id");
    assert_eq!(gesture.item_id(), ids["B"]);
    pair.cancel_drag(gesture);
    assert!(!pair.drop_gesture(gesture, Column::Right));
    assert_eq!(labels(pair.left()), ["A", "B", "C"]);
    assert_eq!(labels(pair.right()), ["D", "E"]);
}

#[test]
fn reorder_after_transfer_only_touches_one_column() {
    let Seeded { mut pair, ids, .. } = seeded_abc_de();

    assert!(pair.transfer(ids["A"], Column::Right));
    assert!(pair.reorder(Column::Right, 2, 0));
    assert_eq!(labels(pair.right()), ["A", "D", "E"]);
    assert_eq!(labels(pair.left()), ["B", "C"]);
}
