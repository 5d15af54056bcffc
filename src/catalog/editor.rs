//! Working copy of one catalog document for administrative edits.

use super::library::ShapeLibrary;
use super::store::ShapeStore;
use crate::error::FretboardError;
use crate::guitar::{builtin_entries, builtin_shapes_or_major, ChordShape};

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEditor {
    chord_type: String,
    name: String,
    shapes: Vec<ChordShape>,
    dirty: bool,
}

impl ShapeEditor {
    pub fn new(chord_type: &str, name: &str, shapes: Vec<ChordShape>) -> Self {
        Self {
            chord_type: chord_type.to_string(),
            name: name.to_string(),
            shapes,
            dirty: false,
        }
    }

    /// Start editing `chord_type` from the stored document, or from the
    /// built-in shapes when the store has none.
    pub fn open<S: ShapeStore>(library: &mut ShapeLibrary<S>, chord_type: &str) -> Self {
        match library.document(chord_type) {
            Some(document) => Self::new(chord_type, &document.name, document.shapes),
            None => {
                let name = builtin_entries()
                    .into_iter()
                    .find(|e| e.chord_type == chord_type)
                    .map(|e| e.name)
                    .unwrap_or(chord_type);
                Self::new(chord_type, name, builtin_shapes_or_major(chord_type).to_vec())
            }
        }
    }

    pub fn chord_type(&self) -> &str {
        &self.chord_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
        self.dirty = true;
    }

    pub fn shapes(&self) -> &[ChordShape] {
        &self.shapes
    }

    /// Whether anything changed since opening or the last commit.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append a blank shape and return its index.
    pub fn add_shape(&mut self) -> usize {
        self.shapes.push(ChordShape::blank());
        self.dirty = true;
        self.shapes.len() - 1
    }

    pub fn replace(&mut self, index: usize, shape: ChordShape) -> Result<(), FretboardError> {
        let slot = self
            .shapes
            .get_mut(index)
            .ok_or_else(|| missing_shape(index))?;
        *slot = shape;
        self.dirty = true;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ChordShape, FretboardError> {
        if index >= self.shapes.len() {
            return Err(missing_shape(index));
        }
        self.dirty = true;
        Ok(self.shapes.remove(index))
    }

    /// Save the working copy through `library` and drop every cached document
    /// so the next lookups read the new state.
    pub fn commit<S: ShapeStore>(&mut self, library: &mut ShapeLibrary<S>) -> Result<(), FretboardError> {
        library.save(&self.chord_type, &self.name, &self.shapes)?;
        library.clear();
        self.dirty = false;
        Ok(())
    }
}

fn missing_shape(index: usize) -> FretboardError {
    FretboardError::InvalidShape {
        index: index + 1,
        message: "no shape at this position".to_string(),
    }
}
