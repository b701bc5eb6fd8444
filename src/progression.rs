//! # Progression Data Model
//!
//! A progression is one 12-bar blues chorus: twelve chord symbols, one per
//! bar, plus an id, a name and an optional description.
//!
//! ## Turnaround
//! The form repeats, so the bar after bar 12 is bar 1. [`Progression::next_chord`]
//! applies that wrap, which is what gives the last bar's walking bass its
//! approach into the top of the next chorus.
//!
//! ## Loading From YAML
//! User-defined progression sets can be read from a YAML list. Each record is
//! first deserialized into a [`RawProgression`] and then validated:
//!
//! ```yaml
//! - id: 100
//!   name: Quick Change
//!   description: IV in bar 2
//!   chords: [I7, IV7, I7, I7, IV7, IV7, I7, I7, V7, IV7, I7, V7]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::BluesError;

/// Bars in one chorus of the blues form.
pub const BARS_PER_CHORUS: usize = 12;

/// A labeled 12-bar progression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub id: u32,
    pub name: String,
    pub chords: [String; BARS_PER_CHORUS],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Progression {
    /// Chord symbol of the bar after `bar` (zero-based), wrapping 12 -> 1.
    ///
    /// ```
    /// use blues_flow::progression_by_id;
    ///
    /// let basic = progression_by_id(2).unwrap();
    /// assert_eq!(basic.next_chord(0), "I7");
    /// assert_eq!(basic.next_chord(8), "IV7");
    /// assert_eq!(basic.next_chord(11), "I7");
    /// ```
    pub fn next_chord(&self, bar: usize) -> &str {
        &self.chords[(bar + 1) % BARS_PER_CHORUS]
    }

    /// Chord symbol at a zero-based bar, if the bar exists.
    pub fn chord_at(&self, bar: usize) -> Option<&str> {
        self.chords.get(bar).map(String::as_str)
    }
}

/// Progression record as written in a YAML file, before validation.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct RawProgression {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub chords: Vec<String>,
    pub description: Option<String>,
}

impl TryFrom<RawProgression> for Progression {
    type Error = BluesError;

    fn try_from(raw: RawProgression) -> Result<Self, Self::Error> {
        if raw.id == 0 {
            return Err(BluesError::InvalidProgression {
                id: raw.id,
                message: "id must be a positive integer".to_string(),
            });
        }
        if raw.name.trim().is_empty() {
            return Err(BluesError::InvalidProgression {
                id: raw.id,
                message: "name must not be empty".to_string(),
            });
        }
        let found = raw.chords.len();
        let chords: [String; BARS_PER_CHORUS] =
            raw.chords
                .try_into()
                .map_err(|_| BluesError::InvalidProgression {
                    id: raw.id,
                    message: format!("expected {} chords, found {}", BARS_PER_CHORUS, found),
                })?;

        Ok(Progression {
            id: raw.id,
            name: raw.name,
            chords,
            description: raw.description.filter(|d| !d.trim().is_empty()),
        })
    }
}

/// Parse and validate a YAML list of progressions.
///
/// # Errors
/// - [`BluesError::Metadata`] if the YAML does not deserialize
/// - [`BluesError::InvalidProgression`] if a progression has the wrong bar
///   count, a zero id, an empty name, or reuses an earlier id
pub fn parse_progressions(yaml: &str) -> Result<Vec<Progression>, BluesError> {
    let raw: Vec<RawProgression> =
        serde_yaml::from_str(yaml).map_err(|e| BluesError::Metadata(e.to_string()))?;

    let mut seen = HashSet::new();
    let mut progressions = Vec::with_capacity(raw.len());
    for record in raw {
        let progression = Progression::try_from(record)?;
        if !seen.insert(progression.id) {
            return Err(BluesError::InvalidProgression {
                id: progression.id,
                message: "duplicate id".to_string(),
            });
        }
        progressions.push(progression);
    }
    log::debug!("loaded {} progressions from YAML", progressions.len());
    Ok(progressions)
}

/// Read and validate a YAML progression file.
pub fn load_progressions(path: impl AsRef<Path>) -> Result<Vec<Progression>, BluesError> {
    let source = std::fs::read_to_string(path.as_ref())?;
    parse_progressions(&source)
}
