//! # Error Types
//!
//! This module defines the error type shared by the whole crate.
//!
//! Most of the theory and fretboard code never fails: unknown notes, scale
//! names and chord types resolve to documented fallbacks instead. Errors only
//! surface where a caller has to know something went wrong:
//!
//! - `UnknownChordType` / `UnknownScaleMode` - string keys that select a formula
//! - `InvalidShape` / `InvalidChordTypeId` - rejected admin writes
//! - `Store` - the shape catalog could not be read or written
//! - `Io` / `Json` / `Config` - transport and configuration failures
//!
//! ## Usage
//! ```rust
//! use fretboard::{compute_chord, FretboardError};
//!
//! match compute_chord("C", "dom13", &[]) {
//!     Ok(chord) => println!("{}", chord.symbol),
//!     Err(FretboardError::UnknownChordType(key)) => eprintln!("no formula for {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretboardError {
    /// A chord type id that has no formula.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::UnknownChordType("dom13".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord type: dom13");
    /// ```
    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    /// Harmonic field mode other than `major` or `minor`.
    #[error("Unknown harmonic field mode: {0}")]
    UnknownScaleMode(String),

    /// A shape refused by the catalog write path.
    ///
    /// # Example
    /// ```
    /// # use fretboard::FretboardError;
    /// let err = FretboardError::InvalidShape {
    ///     index: 2,
    ///     message: "finger 7 on string 3 is out of range 0-4".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid shape #2: finger 7 on string 3 is out of range 0-4"
    /// );
    /// ```
    #[error("Invalid shape #{index}: {message}")]
    InvalidShape { index: usize, message: String },

    /// A catalog key that cannot name a stored document.
    #[error("Invalid chord type id: {0:?}")]
    InvalidChordTypeId(String),

    /// The shape catalog failed for a given chord type.
    #[error("Shape store error for '{chord_type}': {message}")]
    Store { chord_type: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed shape document: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration file.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
