//! Wire schema of the shape catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FretboardError;
use crate::guitar::ChordShape;

/// One stored chord type: display name, its shapes, and when it last changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDocument {
    pub name: String,
    #[serde(default)]
    pub shapes: Vec<ChordShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ShapeDocument {
    pub fn new(name: &str, shapes: Vec<ChordShape>) -> Self {
        Self {
            name: name.to_string(),
            shapes,
            updated_at: None,
        }
    }

    /// Same document with `updated_at` set to now.
    pub fn stamped(mut self) -> Self {
        self.updated_at = Some(Utc::now());
        self
    }
}

/// A document together with the chord type id it is stored under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    #[serde(flatten)]
    pub document: ShapeDocument,
}

/// Reject ids that cannot name a stored document.
pub fn validate_chord_type_id(id: &str) -> Result<(), FretboardError> {
    let bad = id.trim().is_empty()
        || id.contains(['/', '\\'])
        || id == "."
        || id == "..";
    if bad {
        return Err(FretboardError::InvalidChordTypeId(id.to_string()));
    }
    Ok(())
}

/// Checks run before shapes are written. Shape numbers in errors start at 1.
pub fn validate_shapes(shapes: &[ChordShape]) -> Result<(), FretboardError> {
    if shapes.is_empty() {
        return Err(FretboardError::InvalidShape {
            index: 0,
            message: "a chord type needs at least one shape".to_string(),
        });
    }
    for (i, shape) in shapes.iter().enumerate() {
        shape
            .validate()
            .map_err(|message| FretboardError::InvalidShape { index: i + 1, message })?;
    }
    Ok(())
}
