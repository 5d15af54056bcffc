use std::cell::Cell;

use super::*;
use crate::error::FretboardError;
use crate::guitar::{builtin_entries, builtin_shapes, BaseString, ChordShape, Fret};

/// Memory store that counts fetches.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    fetches: Cell<usize>,
}

impl ShapeStore for CountingStore {
    fn fetch(&self, chord_type: &str) -> Result<Option<ShapeDocument>, FretboardError> {
        self.fetches.set(self.fetches.get() + 1);
        self.inner.fetch(chord_type)
    }

    fn write(
        &mut self,
        chord_type: &str,
        name: &str,
        shapes: &[ChordShape],
    ) -> Result<ShapeDocument, FretboardError> {
        self.inner.write(chord_type, name, shapes)
    }

    fn list(&self) -> Result<Vec<CatalogEntry>, FretboardError> {
        self.inner.list()
    }
}

struct FailingStore;

impl FailingStore {
    fn error(chord_type: &str) -> FretboardError {
        FretboardError::Store {
            chord_type: chord_type.to_string(),
            message: "unreachable".to_string(),
        }
    }
}

impl ShapeStore for FailingStore {
    fn fetch(&self, chord_type: &str) -> Result<Option<ShapeDocument>, FretboardError> {
        Err(Self::error(chord_type))
    }

    fn write(&mut self, chord_type: &str, _: &str, _: &[ChordShape]) -> Result<ShapeDocument, FretboardError> {
        Err(Self::error(chord_type))
    }

    fn list(&self) -> Result<Vec<CatalogEntry>, FretboardError> {
        Err(Self::error("*"))
    }
}

fn barre_shape() -> ChordShape {
    ChordShape::new(BaseString::Sixth, [0, 2, 2, 1, 0, 0])
        .named("Pestana")
        .with_fingers([1, 3, 4, 2, 1, 1])
}

#[test]
fn test_empty_store_uses_builtin_then_major() {
    let mut library = ShapeLibrary::new(MemoryStore::new());
    assert_eq!(library.shapes("m7"), builtin_shapes("m7").unwrap().to_vec());
    assert_eq!(library.shapes("sus4"), builtin_shapes("major").unwrap().to_vec());
    assert!(!library.is_cached("m7"));
}

#[test]
fn test_found_document_is_cached() {
    let mut store = CountingStore::default();
    store.write("major", "Maior", &[barre_shape()]).unwrap();
    let mut library = ShapeLibrary::new(store);

    assert_eq!(library.shapes("major"), vec![barre_shape()]);
    assert_eq!(library.shapes("major"), vec![barre_shape()]);
    assert_eq!(library.store().fetches.get(), 1);

    // a miss is fetched every time
    library.shapes("minor");
    library.shapes("minor");
    assert_eq!(library.store().fetches.get(), 3);

    library.invalidate("major");
    library.shapes("major");
    assert_eq!(library.store().fetches.get(), 4);
}

#[test]
fn test_empty_document_falls_back() {
    let mut store = MemoryStore::new();
    store.write("dim", "Diminuto", &[]).unwrap();
    let mut library = ShapeLibrary::new(store);
    assert_eq!(library.shapes("dim"), builtin_shapes("dim").unwrap().to_vec());
}

#[test]
fn test_store_failure_falls_back_without_caching() {
    let mut library = ShapeLibrary::new(FailingStore);
    assert_eq!(library.shapes("dom7"), builtin_shapes("dom7").unwrap().to_vec());
    assert!(!library.is_cached("dom7"));
    assert!(library.document("dom7").is_none());
    assert!(library.entries().is_err());
}

#[test]
fn test_late_fetch_only_updates_its_own_slot() {
    let mut library = ShapeLibrary::new(MemoryStore::new());
    let minor = ShapeDocument::new("Menor", vec![barre_shape()]);

    // the user already moved on to "major" when the "minor" fetch lands
    let current = library.shapes("major");
    let late = library.apply_fetch("minor", Ok(Some(minor.clone())));

    assert_eq!(late, minor.shapes);
    assert!(library.is_cached("minor"));
    assert!(!library.is_cached("major"));
    assert_eq!(library.shapes("major"), current);
}

#[test]
fn test_save_validates_and_refreshes() {
    let mut library = ShapeLibrary::new(CountingStore::default());

    let mut bad = barre_shape();
    bad.fingers = Some([1, 3, 4, 2, 9, 1]);
    let err = library.save("major", "Maior", &[barre_shape(), bad]).unwrap_err();
    assert!(matches!(err, FretboardError::InvalidShape { index: 2, .. }));

    let err = library.save("major", "Maior", &[]).unwrap_err();
    assert!(matches!(err, FretboardError::InvalidShape { index: 0, .. }));

    let err = library.save("../major", "Maior", &[barre_shape()]).unwrap_err();
    assert!(matches!(err, FretboardError::InvalidChordTypeId(_)));

    library.save("major", "Maior", &[barre_shape()]).unwrap();
    assert!(library.is_cached("major"));
    assert_eq!(library.shapes("major"), vec![barre_shape()]);
    assert_eq!(library.store().fetches.get(), 0);

    let stored = library.store().fetch("major").unwrap().unwrap();
    assert!(stored.updated_at.is_some());
}

#[test]
fn test_save_failure_propagates() {
    let mut library = ShapeLibrary::new(FailingStore);
    let err = library.save("major", "Maior", &[barre_shape()]).unwrap_err();
    assert!(matches!(err, FretboardError::Store { .. }));
    assert!(!library.is_cached("major"));
}

#[test]
fn test_entries_are_ordered_and_primed() {
    let mut store = MemoryStore::new();
    store.write("minor", "Menor", &[barre_shape()]).unwrap();
    store.write("aug", "Aumentado", &[barre_shape()]).unwrap();
    store.write("major", "Maior", &[barre_shape()]).unwrap();
    let mut library = ShapeLibrary::new(store);

    let names: Vec<String> = library
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.document.name)
        .collect();
    assert_eq!(names, vec!["Aumentado", "Maior", "Menor"]);
    assert!(library.is_cached("aug"));
    assert!(library.is_cached("minor"));

    library.clear();
    assert!(!library.is_cached("aug"));
}

#[test]
fn test_seed_writes_every_builtin_entry() {
    let mut store = MemoryStore::new();
    let written = seed(&mut store).unwrap();
    assert_eq!(written, builtin_entries().len());
    assert_eq!(store.len(), written);

    let add9 = store.fetch("add9").unwrap().unwrap();
    assert_eq!(add9.name, "Maior com 9ª (add9)");
    assert_eq!(add9.shapes, builtin_shapes("add9").unwrap().to_vec());
}

#[test]
fn test_directory_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirectoryStore::new(dir.path().join("shapes"));

    assert!(store.fetch("major").unwrap().is_none());
    assert!(store.list().unwrap().is_empty());

    store.write("major", "Maior", &[barre_shape()]).unwrap();
    let path = dir.path().join("shapes").join("major.json");
    assert!(path.is_file());

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"baseString\": 6"));
    assert!(raw.contains("\"updatedAt\""));

    let document = store.fetch("major").unwrap().unwrap();
    assert_eq!(document.name, "Maior");
    assert_eq!(document.shapes[0].frets[3], Fret::Fretted(1));

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "major");
}

#[test]
fn test_directory_store_rejects_bad_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirectoryStore::new(dir.path());
    for id in ["", "  ", "a/b", "..", "x\\y"] {
        assert!(matches!(
            store.write(id, "x", &[barre_shape()]),
            Err(FretboardError::InvalidChordTypeId(_))
        ));
        assert!(store.fetch(id).is_err());
    }
}

#[test]
fn test_malformed_document_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    // five strings only
    std::fs::write(
        dir.path().join("major.json"),
        r#"{"name":"Maior","shapes":[{"baseString":6,"frets":[0,2,2,1,0]}]}"#,
    )
    .unwrap();

    let store = DirectoryStore::new(dir.path());
    assert!(matches!(store.fetch("major"), Err(FretboardError::Store { .. })));

    let mut library = ShapeLibrary::new(store);
    assert_eq!(library.shapes("major"), builtin_shapes("major").unwrap().to_vec());
}

#[test]
fn test_listing_skips_malformed_documents() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = DirectoryStore::new(dir.path());
    store.write("minor", "Menor", &[barre_shape()]).unwrap();
    std::fs::write(dir.path().join("major.json"), "{ not json").unwrap();

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "minor");

    let mut library = ShapeLibrary::new(store);
    assert_eq!(library.entries().unwrap().len(), 1);
    assert!(library.is_cached("minor"));
}

#[test]
fn test_diagrams_for_every_shape() {
    let mut library = ShapeLibrary::new(MemoryStore::new());
    let diagrams = library.diagrams("G", "dom7");
    assert_eq!(diagrams.len(), 5);
    assert!(diagrams.iter().all(|d| d.root == "G"));
    assert_eq!(diagrams[0].label.as_deref(), Some("Formato de C7 (CAGED)"));

    // a stored document wins over the built-in set
    library.save("dom7", "Dominante", &[barre_shape()]).unwrap();
    let diagrams = library.diagrams("G", "dom7");
    assert_eq!(diagrams.len(), 1);
    assert_eq!(diagrams[0].label.as_deref(), Some("Pestana"));
}

#[test]
fn test_editor_operations() {
    let mut library = ShapeLibrary::new(MemoryStore::new());
    let mut editor = ShapeEditor::open(&mut library, "dim7");
    assert_eq!(editor.name(), "Diminuto");
    assert_eq!(editor.shapes().len(), 1);
    assert!(!editor.is_dirty());

    let index = editor.add_shape();
    assert_eq!(index, 1);
    assert_eq!(editor.shapes()[1], ChordShape::blank());
    assert!(editor.is_dirty());

    editor.replace(1, barre_shape()).unwrap();
    assert!(matches!(
        editor.replace(5, barre_shape()),
        Err(FretboardError::InvalidShape { index: 6, .. })
    ));

    let removed = editor.remove(0).unwrap();
    assert_eq!(removed.name.as_deref(), Some("Formato Diminuto"));
    assert!(editor.remove(3).is_err());

    library.save("major", "Maior", &[barre_shape()]).unwrap();
    assert!(library.is_cached("major"));
    editor.commit(&mut library).unwrap();
    assert!(!editor.is_dirty());
    assert!(!library.is_cached("major"));
    assert_eq!(library.shapes("dim7"), vec![barre_shape()]);

    let reopened = ShapeEditor::open(&mut library, "dim7");
    assert_eq!(reopened.shapes(), &[barre_shape()]);
}

#[test]
fn test_editor_commit_rejects_invalid_shapes() {
    let mut library = ShapeLibrary::new(MemoryStore::new());
    let mut editor = ShapeEditor::new("aug", "Aumentado", vec![]);
    assert!(editor.commit(&mut library).is_err());

    editor.add_shape();
    let mut shape = ChordShape::blank();
    shape.root_fret_offset = Some(12);
    editor.replace(0, shape).unwrap();
    assert!(editor.commit(&mut library).is_err());
    assert!(editor.is_dirty());
    assert!(library.store().is_empty());
}
