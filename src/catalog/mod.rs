//! # Catalog Module
//!
//! The editable shape catalog: a keyed store of chord shape documents that
//! takes precedence over the built-in shapes in `guitar`.
//!
//! ## Sub-modules
//! - `document` - [`ShapeDocument`] wire schema and write-path validation
//! - `store` - the [`ShapeStore`] trait with in-memory and directory backends
//! - `library` - [`ShapeLibrary`], the cached two-tier lookup
//! - `editor` - [`ShapeEditor`] for add/replace/remove/commit
//!
//! ## Example
//! ```rust
//! use fretboard::catalog::{MemoryStore, ShapeLibrary};
//!
//! // Nothing stored yet, so the built-in shapes answer.
//! let mut library = ShapeLibrary::new(MemoryStore::new());
//! let shapes = library.shapes("dom7");
//! assert_eq!(shapes[0].name.as_deref(), Some("Formato de C7 (CAGED)"));
//! assert!(!library.is_cached("dom7"));
//! ```

mod document;
mod editor;
mod library;
mod store;

#[cfg(test)]
mod tests;

pub use document::{validate_chord_type_id, validate_shapes, CatalogEntry, ShapeDocument};
pub use editor::ShapeEditor;
pub use library::ShapeLibrary;
pub use store::{seed, DirectoryStore, MemoryStore, ShapeStore};
