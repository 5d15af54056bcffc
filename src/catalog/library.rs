//! Cached shape lookup over a [`ShapeStore`].
//!
//! Lookup order for a chord type: cached document, store, built-in shapes for
//! that type, built-in major shapes. Store failures never reach the caller of
//! [`ShapeLibrary::shapes`]; they are logged and the built-in tier answers.

use std::collections::HashMap;

use super::document::{validate_chord_type_id, validate_shapes, CatalogEntry, ShapeDocument};
use super::store::ShapeStore;
use crate::error::FretboardError;
use crate::guitar::{
    builtin_shapes_or_major, chord_diagram, chord_variation, ChordDiagram, ChordShape,
    ChordVariation,
};

pub struct ShapeLibrary<S> {
    store: S,
    cache: HashMap<String, ShapeDocument>,
}

impl<S: ShapeStore> ShapeLibrary<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: HashMap::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn is_cached(&self, chord_type: &str) -> bool {
        self.cache.contains_key(chord_type)
    }

    /// Shapes to draw for `chord_type`. Never empty.
    pub fn shapes(&mut self, chord_type: &str) -> Vec<ChordShape> {
        if let Some(document) = self.cache.get(chord_type) {
            return shapes_or_builtin(chord_type, Some(document));
        }
        let fetched = self.store.fetch(chord_type);
        self.apply_fetch(chord_type, fetched)
    }

    /// Record the outcome of a fetch for `chord_type` and resolve its shapes.
    ///
    /// Only the slot for `chord_type` is touched, so a result that arrives
    /// after the caller moved on to another chord type cannot overwrite it.
    pub fn apply_fetch(
        &mut self,
        chord_type: &str,
        result: Result<Option<ShapeDocument>, FretboardError>,
    ) -> Vec<ChordShape> {
        match result {
            Ok(Some(document)) => {
                let shapes = shapes_or_builtin(chord_type, Some(&document));
                self.cache.insert(chord_type.to_string(), document);
                shapes
            }
            Ok(None) => {
                log::debug!("no stored shapes for '{}', using built-in", chord_type);
                shapes_or_builtin(chord_type, None)
            }
            Err(e) => {
                log::warn!("failed to fetch shapes for '{}': {}", chord_type, e);
                shapes_or_builtin(chord_type, None)
            }
        }
    }

    /// Stored document for `chord_type`, from the cache when possible.
    pub fn document(&mut self, chord_type: &str) -> Option<ShapeDocument> {
        if let Some(document) = self.cache.get(chord_type) {
            return Some(document.clone());
        }
        match self.store.fetch(chord_type) {
            Ok(Some(document)) => {
                self.cache.insert(chord_type.to_string(), document.clone());
                Some(document)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("failed to fetch shapes for '{}': {}", chord_type, e);
                None
            }
        }
    }

    /// Diagram of one variation of `chord_type` at `root`. The index wraps.
    pub fn variation(&mut self, root: &str, chord_type: &str, index: i64) -> Option<ChordVariation> {
        let shapes = self.shapes(chord_type);
        chord_variation(root, &shapes, index)
    }

    /// One diagram per shape of `chord_type`, all placed at `root`.
    pub fn diagrams(&mut self, root: &str, chord_type: &str) -> Vec<ChordDiagram> {
        self.shapes(chord_type)
            .iter()
            .map(|shape| chord_diagram(root, shape))
            .collect()
    }

    pub fn invalidate(&mut self, chord_type: &str) {
        self.cache.remove(chord_type);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Validate and write shapes, then refresh the cached slot.
    pub fn save(
        &mut self,
        chord_type: &str,
        name: &str,
        shapes: &[ChordShape],
    ) -> Result<(), FretboardError> {
        validate_chord_type_id(chord_type)?;
        validate_shapes(shapes)?;
        match self.store.write(chord_type, name, shapes) {
            Ok(document) => {
                log::info!("saved {} shapes for '{}'", document.shapes.len(), chord_type);
                self.cache.insert(chord_type.to_string(), document);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to save shapes for '{}': {}", chord_type, e);
                Err(e)
            }
        }
    }

    /// Every stored document ordered by name. Listed documents are cached.
    pub fn entries(&mut self) -> Result<Vec<CatalogEntry>, FretboardError> {
        let entries = self.store.list()?;
        for entry in &entries {
            self.cache.insert(entry.id.clone(), entry.document.clone());
        }
        Ok(entries)
    }
}

fn shapes_or_builtin(chord_type: &str, document: Option<&ShapeDocument>) -> Vec<ChordShape> {
    match document {
        Some(document) if !document.shapes.is_empty() => document.shapes.clone(),
        _ => builtin_shapes_or_major(chord_type).to_vec(),
    }
}
