//! Shape catalog backends.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::document::{validate_chord_type_id, CatalogEntry, ShapeDocument};
use crate::error::FretboardError;
use crate::guitar::{builtin_entries, ChordShape};

/// Keyed document storage for chord shapes.
pub trait ShapeStore {
    /// Document stored under `chord_type`, or `None` if there is none.
    fn fetch(&self, chord_type: &str) -> Result<Option<ShapeDocument>, FretboardError>;

    /// Replace the document under `chord_type`, stamping its update time.
    /// Returns the document as stored.
    fn write(
        &mut self,
        chord_type: &str,
        name: &str,
        shapes: &[ChordShape],
    ) -> Result<ShapeDocument, FretboardError>;

    /// Every stored document, ordered by display name. Documents that
    /// cannot be decoded are left out.
    fn list(&self) -> Result<Vec<CatalogEntry>, FretboardError>;
}

impl<T: ShapeStore + ?Sized> ShapeStore for Box<T> {
    fn fetch(&self, chord_type: &str) -> Result<Option<ShapeDocument>, FretboardError> {
        (**self).fetch(chord_type)
    }

    fn write(
        &mut self,
        chord_type: &str,
        name: &str,
        shapes: &[ChordShape],
    ) -> Result<ShapeDocument, FretboardError> {
        (**self).write(chord_type, name, shapes)
    }

    fn list(&self) -> Result<Vec<CatalogEntry>, FretboardError> {
        (**self).list()
    }
}

fn sort_entries(entries: &mut [CatalogEntry]) {
    entries.sort_by(|a, b| {
        a.document
            .name
            .cmp(&b.document.name)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Store kept in memory. An empty one leaves every lookup to the built-in catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, ShapeDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl ShapeStore for MemoryStore {
    fn fetch(&self, chord_type: &str) -> Result<Option<ShapeDocument>, FretboardError> {
        Ok(self.documents.get(chord_type).cloned())
    }

    fn write(
        &mut self,
        chord_type: &str,
        name: &str,
        shapes: &[ChordShape],
    ) -> Result<ShapeDocument, FretboardError> {
        validate_chord_type_id(chord_type)?;
        let document = ShapeDocument::new(name, shapes.to_vec()).stamped();
        self.documents.insert(chord_type.to_string(), document.clone());
        Ok(document)
    }

    fn list(&self) -> Result<Vec<CatalogEntry>, FretboardError> {
        let mut entries: Vec<CatalogEntry> = self
            .documents
            .iter()
            .map(|(id, document)| CatalogEntry {
                id: id.clone(),
                document: document.clone(),
            })
            .collect();
        sort_entries(&mut entries);
        Ok(entries)
    }
}

/// Store holding one JSON file per chord type: `<dir>/<chord_type>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, chord_type: &str) -> Result<PathBuf, FretboardError> {
        validate_chord_type_id(chord_type)?;
        Ok(self.root.join(format!("{}.json", chord_type)))
    }

    fn read_document(path: &Path, chord_type: &str) -> Result<ShapeDocument, FretboardError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FretboardError::Store {
            chord_type: chord_type.to_string(),
            message: e.to_string(),
        })
    }
}

impl ShapeStore for DirectoryStore {
    fn fetch(&self, chord_type: &str) -> Result<Option<ShapeDocument>, FretboardError> {
        let path = self.document_path(chord_type)?;
        if !path.is_file() {
            return Ok(None);
        }
        Self::read_document(&path, chord_type).map(Some)
    }

    fn write(
        &mut self,
        chord_type: &str,
        name: &str,
        shapes: &[ChordShape],
    ) -> Result<ShapeDocument, FretboardError> {
        let path = self.document_path(chord_type)?;
        let document = ShapeDocument::new(name, shapes.to_vec()).stamped();
        fs::create_dir_all(&self.root)?;
        fs::write(&path, serde_json::to_string_pretty(&document)?)?;
        log::debug!("wrote {}", path.display());
        Ok(document)
    }

    fn list(&self) -> Result<Vec<CatalogEntry>, FretboardError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.root)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let document = match Self::read_document(&path, id) {
                Ok(document) => document,
                Err(e) => {
                    log::warn!("skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            entries.push(CatalogEntry {
                id: id.to_string(),
                document,
            });
        }
        sort_entries(&mut entries);
        Ok(entries)
    }
}

/// Write every built-in chord type into `store`. Returns how many were written.
pub fn seed<S: ShapeStore + ?Sized>(store: &mut S) -> Result<usize, FretboardError> {
    let entries = builtin_entries();
    for entry in &entries {
        store.write(entry.chord_type, entry.name, &entry.shapes)?;
        log::info!("seeded '{}' with {} shapes", entry.chord_type, entry.shapes.len());
    }
    Ok(entries.len())
}
