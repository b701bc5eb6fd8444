//! # Error Types
//!
//! This module defines the error type for the Blues Flow engine.
//!
//! The harmonic core itself never fails: unknown chord symbols, unknown
//! slash-bass degrees and malformed note names all resolve to a defined
//! fallback. Errors only surface at the edges of the crate:
//! - `Metadata` - YAML progression files that cannot be deserialized
//! - `InvalidProgression` - a progression that breaks the 12-bar form or id rules
//! - `UnknownProgression` - an id lookup that found nothing
//! - `BarOutOfRange` - a bar index past the end of the chorus
//! - `Io` - reading a progression file from disk
//!
//! ## Usage
//! ```rust
//! use blues_flow::{parse_progressions, BluesError};
//!
//! let yaml = "- id: 1\n  name: Short\n  chords: [I7, IV7]\n";
//! match parse_progressions(yaml) {
//!     Ok(progressions) => println!("loaded {}", progressions.len()),
//!     Err(BluesError::InvalidProgression { id, message }) => {
//!         eprintln!("progression {} rejected: {}", id, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BluesError {
    /// Progression YAML could not be deserialized.
    ///
    /// # Example
    /// ```
    /// # use blues_flow::BluesError;
    /// let err = BluesError::Metadata("expected a sequence".to_string());
    /// assert_eq!(err.to_string(), "Invalid progression file: expected a sequence");
    /// ```
    #[error("Invalid progression file: {0}")]
    Metadata(String),

    /// A progression failed validation (bar count, id, name).
    ///
    /// # Example
    /// ```
    /// # use blues_flow::BluesError;
    /// let err = BluesError::InvalidProgression {
    ///     id: 7,
    ///     message: "expected 12 chords, found 11".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid progression 7: expected 12 chords, found 11");
    /// ```
    #[error("Invalid progression {id}: {message}")]
    InvalidProgression { id: u32, message: String },

    /// No progression with the requested id.
    #[error("Unknown progression id: {0}")]
    UnknownProgression(u32),

    /// Bar index (zero-based) past the end of the form.
    #[error("Bar {bar} is out of range for a {bars}-bar progression")]
    BarOutOfRange { bar: usize, bars: usize },

    /// A progression file could not be read.
    ///
    /// # Example
    /// ```
    /// # use blues_flow::load_progressions;
    /// let err = load_progressions("no/such/progressions.yaml").unwrap_err();
    /// assert!(err.to_string().starts_with("I/O error:"));
    /// ```
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
