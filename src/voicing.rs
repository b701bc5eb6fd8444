//! # Voicing Table
//!
//! Static mapping from a canonical chord symbol to a keyboard voicing.
//!
//! Each entry holds a rootless upper-structure voicing for the piano, the
//! root in bass register, the four chord tones the walking bass draws from,
//! and the chord quality. Dominant sevenths use 3-7-9 voicings; minor and
//! major sevenths use 3-5-7 shells.
//!
//! ## Fallback Policy
//! Lookup never fails. A symbol missing from the table is retried with ASCII
//! accidentals respelled (`bVI7` -> `♭VI7`), and if that also misses, the
//! tonic dominant seventh (`I7`) is used. [`resolve_voicing`] and
//! [`resolve_bass_root`] report which path was taken.
//!
//! ## Spelling
//! Entries keep the accidental spelling they were written with. Some use
//! sharps and some flats for the same pitch class (`A#3` in `#IV7`, `Bb3`
//! in `♭V7`); callers may depend on the exact strings, so nothing here
//! normalizes them.

use serde::Serialize;

use crate::symbol::{primary_symbol, respell, slash_bass};
use Quality::*;

/// Harmonic quality of a voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quality {
    DominantSeventh,
    MajorSeventh,
    MinorSeventh,
    DiminishedSeventh,
    MinorTriad,
}

impl Quality {
    /// Qualities whose third sits three semitones above the root.
    pub fn has_minor_third(self) -> bool {
        matches!(
            self,
            Quality::MinorSeventh | Quality::MinorTriad | Quality::DiminishedSeventh
        )
    }
}

/// A keyboard voicing for one canonical chord symbol.
///
/// # Fields
/// - `notes`: upper-structure piano notes, no root (e.g. `["E3", "Bb3", "D4"]`)
/// - `root`: bass-register root (e.g. `"C2"`)
/// - `chord_tones`: root, 3rd, 5th and 7th as pitch-class names, unordered
/// - `quality`: chord quality tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub notes: &'static [&'static str],
    pub root: &'static str,
    pub chord_tones: [&'static str; 4],
    pub quality: Quality,
}

/// How a lookup was satisfied, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// The symbol matched a table entry as written.
    Exact,
    /// The symbol matched after rewriting ASCII accidentals.
    Respelled,
    /// Nothing matched; the default was used.
    Fallback,
}

/// Symbol whose voicing stands in for anything the table does not know.
pub const FALLBACK_SYMBOL: &str = "I7";

const fn entry(
    symbol: &'static str,
    notes: &'static [&'static str],
    root: &'static str,
    chord_tones: [&'static str; 4],
    quality: Quality,
) -> (&'static str, Voicing) {
    (
        symbol,
        Voicing {
            notes,
            root,
            chord_tones,
            quality,
        },
    )
}

/// Canonical voicings. The first entry is the fallback.
pub static VOICINGS: &[(&str, Voicing)] = &[
    // Dominant sevenths: 3-7-9
    entry("I7", &["E3", "Bb3", "D4"], "C2", ["C", "E", "G", "Bb"], DominantSeventh),
    entry("IV7", &["A3", "Eb4", "G4"], "F2", ["F", "A", "C", "Eb"], DominantSeventh),
    entry("V7", &["B3", "F4", "A4"], "G2", ["G", "B", "D", "F"], DominantSeventh),
    entry("II7", &["F#3", "C4", "E4"], "D2", ["D", "F#", "A", "C"], DominantSeventh),
    entry("VI7", &["C#4", "G4", "B4"], "A2", ["A", "C#", "E", "G"], DominantSeventh),
    entry("VII7", &["D#4", "A4", "C#5"], "B2", ["B", "D#", "F#", "A"], DominantSeventh),
    entry("♭VI7", &["C4", "Gb4", "Bb4"], "Ab2", ["Ab", "C", "Eb", "Gb"], DominantSeventh),
    entry("♭V7", &["Bb3", "E4", "Ab4"], "Gb2", ["Gb", "Bb", "Db", "E"], DominantSeventh),
    entry("#IV7", &["A#3", "E4", "G#4"], "F#2", ["F#", "A#", "C#", "E"], DominantSeventh),
    entry("III7", &["G#3", "D4", "F#4"], "E2", ["E", "G#", "B", "D"], DominantSeventh),
    // Minor sevenths: b3-5-b7
    entry("ii-7", &["F3", "A3", "C4"], "D2", ["D", "F", "A", "C"], MinorSeventh),
    entry("ii-", &["F3", "A3", "C4"], "D2", ["D", "F", "A", "C"], MinorSeventh),
    entry("iii-", &["G3", "B3", "D4"], "E2", ["E", "G", "B", "D"], MinorSeventh),
    entry("vi7", &["C4", "E4", "G4"], "A2", ["A", "C", "E", "G"], MinorSeventh),
    entry("vi-", &["C4", "E4", "G4"], "A2", ["A", "C", "E", "G"], MinorSeventh),
    entry("v-", &["Bb3", "D4", "F4"], "G2", ["G", "Bb", "D", "F"], MinorSeventh),
    entry("vii-", &["D4", "F#4", "A4"], "B2", ["B", "D", "F#", "A"], MinorSeventh),
    entry("iv-", &["Ab3", "C4", "Eb4"], "F2", ["F", "Ab", "C", "Eb"], MinorSeventh),
    entry("i-", &["Eb3", "G3", "Bb3"], "C2", ["C", "Eb", "G", "Bb"], MinorSeventh),
    entry("#i-", &["E3", "G#3", "B3"], "C#2", ["C#", "E", "G#", "B"], MinorSeventh),
    entry("♭vi-", &["B3", "Eb4", "Gb4"], "Ab2", ["Ab", "B", "Eb", "Gb"], MinorSeventh),
    entry("♭vii-", &["Db4", "F4", "Ab4"], "Bb2", ["Bb", "Db", "F", "Ab"], MinorSeventh),
    entry("ii7", &["F3", "A3", "C4"], "D2", ["D", "F", "A", "C"], MinorSeventh),
    // Major sevenths: 3-5-7
    entry("Imaj", &["E3", "G3", "B3"], "C2", ["C", "E", "G", "B"], MajorSeventh),
    entry("IVmaj", &["A3", "C4", "E4"], "F2", ["F", "A", "C", "E"], MajorSeventh),
    entry("VIImaj", &["D#4", "F#4", "A#4"], "B2", ["B", "D#", "F#", "A#"], MajorSeventh),
    entry("♭VIImaj", &["D4", "F4", "A4"], "Bb2", ["Bb", "D", "F", "A"], MajorSeventh),
    entry("♭VImaj", &["C4", "Eb4", "G4"], "Ab2", ["Ab", "C", "Eb", "G"], MajorSeventh),
    entry("♭Vmaj", &["Bb3", "Db4", "F4"], "Gb2", ["Gb", "Bb", "Db", "F"], MajorSeventh),
    // Diminished sevenths
    entry("iv°7", &["Ab3", "B3", "D4"], "F2", ["F", "Ab", "B", "D"], DiminishedSeventh),
    entry("#iv°7", &["A3", "C4", "Eb4"], "F#2", ["F#", "A", "C", "Eb"], DiminishedSeventh),
];

/// Roman-numeral degree to bass pitch, for the part after `/` in a slash chord.
pub static BASS_DEGREES: &[(&str, &str)] = &[
    ("I", "C2"),
    ("II", "D2"),
    ("III", "E2"),
    ("IV", "F2"),
    ("V", "G2"),
    ("VI", "A2"),
    ("VII", "B2"),
    ("♭VII", "Bb2"),
    ("♭VI", "Ab2"),
    ("♭V", "Gb2"),
    ("♭III", "Eb2"),
    ("♭II", "Db2"),
];

/// Exact match first, then a retry with ASCII accidentals respelled.
fn lookup<T>(table: &'static [(&'static str, T)], key: &str) -> Option<(&'static T, Resolution)> {
    let find = |k: &str| table.iter().find(|(name, _)| *name == k).map(|(_, v)| v);
    if let Some(value) = find(key) {
        return Some((value, Resolution::Exact));
    }
    let respelled = respell(key)?;
    find(respelled.as_str()).map(|value| (value, Resolution::Respelled))
}

fn fallback_voicing() -> &'static Voicing {
    &VOICINGS[0].1
}

/// Look up the table entry for a canonical symbol, without any fallback.
pub fn table_entry(symbol: &str) -> Option<&'static Voicing> {
    VOICINGS
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, voicing)| voicing)
}

/// Voicing for a chord symbol, along with how it was found.
pub fn resolve_voicing(chord_symbol: &str) -> (&'static Voicing, Resolution) {
    let primary = primary_symbol(chord_symbol);
    if let Some(found) = lookup(VOICINGS, primary) {
        return found;
    }
    log::debug!(
        "no voicing for {:?} (primary {:?}), using {}",
        chord_symbol,
        primary,
        FALLBACK_SYMBOL
    );
    (fallback_voicing(), Resolution::Fallback)
}

/// Voicing for a chord symbol. Unknown symbols get the `I7` voicing.
///
/// Lookup is not strictly exact-match: ASCII accidentals are accepted, so
/// `bVI7` gets the `♭VI7` voicing (and an `Ab2` walking line) instead of
/// the `I7` fallback. Use [`resolve_voicing`] to tell the two apart.
///
/// # Example
/// ```
/// use blues_flow::voicing_for;
///
/// let v = voicing_for("IV7");
/// assert_eq!(v.notes, ["A3", "Eb4", "G4"]);
/// assert_eq!(v.root, "F2");
///
/// // compound and slash forms resolve their primary symbol
/// assert_eq!(voicing_for("ii- V7").root, "D2");
/// assert_eq!(voicing_for("v-/I").root, "G2");
///
/// // unknown symbols fall back to the tonic dominant seventh
/// assert_eq!(voicing_for("XYZ").root, "C2");
/// ```
pub fn voicing_for(chord_symbol: &str) -> &'static Voicing {
    resolve_voicing(chord_symbol).0
}

/// Bass-register root for a chord symbol, along with how it was found.
///
/// For slash chords the degree after `/` wins when the degree table knows
/// it; otherwise the upper symbol's voicing root is used and the resolution
/// is reported as [`Resolution::Fallback`].
pub fn resolve_bass_root(chord_symbol: &str) -> (&'static str, Resolution) {
    match slash_bass(chord_symbol) {
        Some(degree) => match lookup(BASS_DEGREES, degree) {
            Some((root, resolution)) => (*root, resolution),
            None => {
                log::debug!(
                    "no bass degree {:?} in {:?}, using the upper chord's root",
                    degree,
                    chord_symbol
                );
                (voicing_for(chord_symbol).root, Resolution::Fallback)
            }
        },
        None => {
            let (voicing, resolution) = resolve_voicing(chord_symbol);
            (voicing.root, resolution)
        }
    }
}

/// Bass-register root for a chord symbol.
///
/// # Example
/// ```
/// use blues_flow::bass_root_for;
///
/// assert_eq!(bass_root_for("IV7"), "F2");
/// assert_eq!(bass_root_for("v-/I"), "C2");
/// assert_eq!(bass_root_for("IV7/♭VII"), "Bb2");
/// assert_eq!(bass_root_for("I7/Imaj"), "C2");
/// ```
pub fn bass_root_for(chord_symbol: &str) -> &'static str {
    resolve_bass_root(chord_symbol).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Quality::*;
    use std::collections::HashSet;

    fn tone_set(voicing: &Voicing) -> HashSet<&'static str> {
        voicing.chord_tones.iter().copied().collect()
    }

    #[test]
    fn test_i7_chord_tones() {
        let expected: HashSet<&str> = ["C", "E", "G", "Bb"].into_iter().collect();
        for symbol in ["I7", "I7 IV7", "I7/V", "I7/Imaj", "unknown", "", "i7"] {
            assert_eq!(tone_set(voicing_for(symbol)), expected, "symbol {:?}", symbol);
        }
    }

    #[test]
    fn test_table_symbols_are_unique() {
        let mut seen = HashSet::new();
        for (symbol, _) in VOICINGS {
            assert!(seen.insert(*symbol), "duplicate entry {}", symbol);
        }
        assert_eq!(VOICINGS.len(), 31);
    }

    #[test]
    fn test_every_entry_is_well_formed() {
        use crate::pitch::{PitchClass, PitchedNote};

        for (symbol, voicing) in VOICINGS {
            assert_eq!(voicing.notes.len(), 3, "{}", symbol);
            let root = PitchedNote::parse(voicing.root);
            assert_eq!(root.octave(), 2, "{} root should sit in the bass register", symbol);
            assert_eq!(
                PitchClass::from_name(voicing.chord_tones[0]),
                Some(root.pitch_class()),
                "{} first chord tone should be the root",
                symbol
            );
            for tone in voicing.chord_tones {
                assert!(PitchClass::from_name(tone).is_some(), "{} tone {}", symbol, tone);
            }
        }
    }

    #[test]
    fn test_chord_tones_match_quality() {
        use crate::pitch::PitchClass;

        for (symbol, voicing) in VOICINGS {
            let tones: Vec<u8> = voicing
                .chord_tones
                .iter()
                .filter_map(|t| PitchClass::from_name(t))
                .map(|pc| pc.value())
                .collect();
            let root = PitchClass::new(tones[0] as i32);
            let intervals: Vec<u8> = tones
                .iter()
                .map(|&t| root.interval_to(PitchClass::new(t as i32)))
                .collect();
            let expected: &[u8] = match voicing.quality {
                DominantSeventh => &[0, 4, 7, 10],
                MajorSeventh => &[0, 4, 7, 11],
                MinorSeventh => &[0, 3, 7, 10],
                DiminishedSeventh => &[0, 3, 6, 9],
                MinorTriad => &[0, 3, 7],
            };
            assert_eq!(intervals, expected, "{}", symbol);
        }
    }

    #[test]
    fn test_resolution_status() {
        assert_eq!(resolve_voicing("V7").1, Resolution::Exact);
        assert_eq!(resolve_voicing("ii- V7").1, Resolution::Exact);
        assert_eq!(resolve_voicing("Z9").1, Resolution::Fallback);

        let (voicing, resolution) = resolve_voicing("bVI7");
        assert_eq!(resolution, Resolution::Respelled);
        assert_eq!(voicing, voicing_for("♭VI7"));
        assert_eq!(voicing.root, "Ab2");
    }

    #[test]
    fn test_table_entry_is_exact_only() {
        assert_eq!(table_entry("♭VI7").map(|v| v.root), Some("Ab2"));
        assert_eq!(table_entry("bVI7"), None);
        assert_eq!(table_entry("ii- V7"), None);
    }

    #[test]
    fn test_compound_over_slash_falls_back() {
        // the slash cut keeps "ii- V7", which is not a table symbol
        assert_eq!(resolve_voicing("ii- V7/IV"), (voicing_for("I7"), Resolution::Fallback));
        assert_eq!(bass_root_for("ii- V7/IV"), "F2");
    }

    #[test]
    fn test_fallback_is_tonic_dominant() {
        let fallback = voicing_for("nonsense");
        assert_eq!(fallback.quality, DominantSeventh);
        assert_eq!(fallback.root, "C2");
        assert_eq!(fallback.notes, ["E3", "Bb3", "D4"]);
    }

    #[test]
    fn test_slash_bass_root() {
        assert_eq!(bass_root_for("v-/I"), "C2");
        assert_ne!(bass_root_for("v-/I"), voicing_for("v-/I").root);
        assert_eq!(bass_root_for("i-/IV"), "F2");
        assert_eq!(bass_root_for("I7/V"), "G2");
        assert_eq!(bass_root_for("IV7/♭VII"), "Bb2");
        assert_eq!(resolve_bass_root("IV7/bVII"), ("Bb2", Resolution::Respelled));
    }

    #[test]
    fn test_slash_bass_unknown_degree_uses_upper_root() {
        assert_eq!(resolve_bass_root("I7/Imaj"), ("C2", Resolution::Fallback));
        assert_eq!(bass_root_for("V7/#IV"), "G2");
        assert_eq!(bass_root_for("ii-/"), "D2");
    }

    #[test]
    fn test_plain_bass_root_is_voicing_root() {
        for (symbol, voicing) in VOICINGS {
            assert_eq!(bass_root_for(symbol), voicing.root);
            assert_eq!(resolve_bass_root(symbol).1, Resolution::Exact);
        }
    }

    #[test]
    fn test_known_mixed_spelling() {
        // Same pitch classes, different spellings across entries. Pinned on purpose.
        assert_eq!(voicing_for("#IV7").notes[0], "A#3");
        assert_eq!(voicing_for("♭V7").notes[0], "Bb3");
        assert_eq!(voicing_for("♭V7").chord_tones[3], "E");
    }

    #[test]
    fn test_minor_third_qualities() {
        assert!(MinorSeventh.has_minor_third());
        assert!(MinorTriad.has_minor_third());
        assert!(DiminishedSeventh.has_minor_third());
        assert!(!DominantSeventh.has_minor_third());
        assert!(!MajorSeventh.has_minor_third());
    }
}
