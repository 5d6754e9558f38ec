use gallery_core::{
    AppContext, InMemoryNotesRepository, Note, NotesRepoError, NotesRepository, NotesService,
    NotesServiceError,
};

#[test]
fn initial_list_contains_demo_note() {
    let service = NotesService::new(InMemoryNotesRepository::new(), AppContext::default());
    let notes = service.list_notes();
    assert!(!notes.is_empty());
    assert_eq!(notes[0].title, "Hello");
}

#[test]
fn add_note_appends_in_order() {
    let service = NotesService::new(InMemoryNotesRepository::new(), AppContext::default());
    let before = service.list_notes();

    let first = service.add_note("Test", "Note").unwrap();
    let second = service.add_note("  Second  ", "body").unwrap();

    let after = service.list_notes();
    assert_eq!(after.len(), before.len() + 2);
    assert_eq!(after[after.len() - 2], first);
    assert_eq!(after[after.len() - 1], second);
    assert_eq!(second.title, "Second");
    assert_eq!(service.get_note(first.id), Some(first));
}

#[test]
fn blank_title_is_rejected() {
    let service = NotesService::new(
        InMemoryNotesRepository::with_notes(Vec::new()),
        AppContext::default(),
    );

    let err = service.add_note("   ", "body").unwrap_err();
    assert_eq!(err, NotesServiceError::InvalidTitle);
    assert!(service.list_notes().is_empty());
}

#[test]
fn repository_is_shareable_across_threads() {
    let repo = std::sync::Arc::new(InMemoryNotesRepository::with_notes(Vec::new()));
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let repo = repo.clone();
            std::thread::spawn(move || {
                repo.add(Note::new(format!("note-{worker}"), "")).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(repo.list().len(), 4);

    let existing = repo.list()[0].clone();
    assert_eq!(
        repo.add(existing.clone()),
        Err(NotesRepoError::Duplicate(existing.id))
    );
}
