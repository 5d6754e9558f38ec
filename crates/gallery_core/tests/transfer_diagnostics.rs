use gallery_core::{AppContext, Column, DraggableItem, ItemTag, TransferListPair};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

struct CapturedLog {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturedLog {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.lines
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURED: CapturedLog = CapturedLog {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn invariant_warnings_for(label: &str) -> usize {
    CAPTURED
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, line)| {
            *level == Level::Warn
                && line.contains("status=invariant_violation")
                && line.contains(label)
        })
        .count()
}

fn install() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURED).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });
}

fn pair_with_shared(shared: &DraggableItem) -> TransferListPair {
    TransferListPair::new(
        AppContext::default(),
        vec![DraggableItem::new("A", ItemTag::Blue), shared.clone()],
        vec![shared.clone(), DraggableItem::new("Z", ItemTag::Pink)],
    )
}

#[test]
fn id_in_both_columns_warns_for_either_destination() {
    install();
    let shared = DraggableItem::new("Shared", ItemTag::Green);
    let marker = format!("item_id={}", shared.id);

    let mut pair = pair_with_shared(&shared);
    assert!(!pair.transfer(shared.id, Column::Right));
    assert_eq!(invariant_warnings_for(&marker), 1);

    assert!(!pair.transfer(shared.id, Column::Left));
    assert_eq!(invariant_warnings_for(&marker), 2);

    assert_eq!(pair.left().len(), 2);
    assert_eq!(pair.right().len(), 2);
}

#[test]
fn clean_transfer_emits_no_invariant_warning() {
    install();
    let item = DraggableItem::new("Solo", ItemTag::Orange);
    let marker = format!("item_id={}", item.id);
    let mut pair = TransferListPair::new(AppContext::default(), vec![item.clone()], Vec::new());

    assert!(pair.transfer(item.id, Column::Right));
    assert!(pair.transfer(item.id, Column::Left));
    assert_eq!(invariant_warnings_for(&marker), 0);
}
