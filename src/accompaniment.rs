//! # Accompaniment
//!
//! Per-bar note data for a playback collaborator.
//!
//! The engine does not schedule anything. A player walks the form on its own
//! transport and asks for bar N; it gets back the keyboard voicing for the
//! bar's primary chord (and for the second chord of a compound bar) plus
//! the four walking-bass notes.
//!
//! ## Example
//! ```rust
//! use blues_flow::{accompany_bar, progression_by_id};
//!
//! let basic = progression_by_id(1).unwrap();
//! let bar = accompany_bar(basic, 4)?;
//!
//! assert_eq!(bar.chord, "IV7");
//! assert_eq!(bar.voicing, ["A3", "Eb4", "G4"]);
//! assert_eq!(bar.bass, ["F2", "A2", "C2", "E2"]);
//! # Ok::<(), blues_flow::BluesError>(())
//! ```

use serde::Serialize;

use crate::error::BluesError;
use crate::progression::{Progression, BARS_PER_CHORUS};
use crate::symbol::second_symbol;
use crate::voicing::{resolve_bass_root, resolve_voicing, voicing_for, Resolution};
use crate::walking_bass::{walking_bass, BEATS_PER_BAR};

/// Everything to sound for one bar.
///
/// # Fields
/// - `bar`: zero-based bar index within the chorus
/// - `chord`: the bar's chord symbol as written
/// - `voicing`: upper-structure piano notes for the primary symbol
/// - `second_voicing`: piano notes for the second half of a compound bar
/// - `bass`: walking bass, one note per beat
/// - `voicing_resolution` / `bass_resolution`: whether lookups hit the tables
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarNotes {
    pub bar: usize,
    pub chord: String,
    pub voicing: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_voicing: Option<Vec<&'static str>>,
    pub bass: [String; BEATS_PER_BAR],
    pub voicing_resolution: Resolution,
    pub bass_resolution: Resolution,
}

/// Notes for one bar of a progression. The last bar's bass approaches bar 1.
///
/// # Errors
/// [`BluesError::BarOutOfRange`] if `bar` is 12 or more.
pub fn accompany_bar(progression: &Progression, bar: usize) -> Result<BarNotes, BluesError> {
    let chord = progression.chord_at(bar).ok_or(BluesError::BarOutOfRange {
        bar,
        bars: BARS_PER_CHORUS,
    })?;
    Ok(bar_notes(progression, bar, chord))
}

/// Notes for every bar of a progression, in order.
pub fn accompany(progression: &Progression) -> Vec<BarNotes> {
    progression
        .chords
        .iter()
        .enumerate()
        .map(|(bar, chord)| bar_notes(progression, bar, chord))
        .collect()
}

fn bar_notes(progression: &Progression, bar: usize, chord: &str) -> BarNotes {
    let (voicing, voicing_resolution) = resolve_voicing(chord);
    let (_, bass_resolution) = resolve_bass_root(chord);
    let second_voicing = second_symbol(chord).map(|second| voicing_for(second).notes.to_vec());

    BarNotes {
        bar,
        chord: chord.to_string(),
        voicing: voicing.notes.to_vec(),
        second_voicing,
        bass: walking_bass(chord, progression.next_chord(bar)),
        voicing_resolution,
        bass_resolution,
    }
}
