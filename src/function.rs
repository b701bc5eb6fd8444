//! Harmonic-function grouping of chord symbols, for display.
//!
//! This is a loose substring classifier meant for colouring a chord chart.
//! Rules overlap and are checked in order, so e.g. `#iv°7` lands in
//! `Subdominant` before the diminished rule is reached, and `♭II` is a
//! `Dominant`. Voicing and bass lookup never go through here.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordFunction {
    Tonic,
    Subdominant,
    Dominant,
    Minor,
    Diminished,
    Chromatic,
    Other,
}

impl ChordFunction {
    /// Group a chord symbol by the first chord it names.
    ///
    /// ```
    /// use blues_flow::function::ChordFunction;
    ///
    /// assert_eq!(ChordFunction::classify("I7"), ChordFunction::Tonic);
    /// assert_eq!(ChordFunction::classify("IV7/♭VII"), ChordFunction::Subdominant);
    /// assert_eq!(ChordFunction::classify("ii- V7"), ChordFunction::Minor);
    /// ```
    pub fn classify(chord_symbol: &str) -> Self {
        let first = chord_symbol.split(' ').next().unwrap_or_default();
        let c = first.split('/').next().unwrap_or_default();

        if matches!(c, "I7" | "Imaj" | "I") {
            ChordFunction::Tonic
        } else if c.contains("IV") || c.contains("iv") {
            ChordFunction::Subdominant
        } else if c.contains('V') || c.contains("II") {
            ChordFunction::Dominant
        } else if ["vi", "iii", "ii", "v-", "i-"].iter().any(|p| c.contains(p)) {
            ChordFunction::Minor
        } else if c.contains('°') || c.contains("dim") {
            ChordFunction::Diminished
        } else if c.contains('♭') || c.contains('#') {
            ChordFunction::Chromatic
        } else {
            ChordFunction::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChordFunction::Tonic => "Tonic (I)",
            ChordFunction::Subdominant => "Subdominant (IV)",
            ChordFunction::Dominant => "Dominant (V, II, VII)",
            ChordFunction::Minor => "Minor (ii, iii, vi)",
            ChordFunction::Diminished => "Diminished",
            ChordFunction::Chromatic => "Chromatic",
            ChordFunction::Other => "Other",
        }
    }
}

impl fmt::Display for ChordFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ChordFunction::*;

    #[test]
    fn test_tonic_is_exact_match() {
        assert_eq!(ChordFunction::classify("I7"), Tonic);
        assert_eq!(ChordFunction::classify("Imaj"), Tonic);
        assert_eq!(ChordFunction::classify("I7/V"), Tonic);
        assert_eq!(ChordFunction::classify("I7/Imaj"), Tonic);
    }

    #[test]
    fn test_subdominant() {
        for symbol in ["IV7", "IVmaj", "#IV7", "iv-", "iv°7", "#iv°7"] {
            assert_eq!(ChordFunction::classify(symbol), Subdominant, "{}", symbol);
        }
    }

    #[test]
    fn test_dominant_catches_any_upper_v_or_ii() {
        for symbol in ["V7", "II7", "VI7", "VII7", "III7", "♭VI7", "♭V7", "VIImaj", "♭VImaj"] {
            assert_eq!(ChordFunction::classify(symbol), Dominant, "{}", symbol);
        }
    }

    #[test]
    fn test_minor() {
        for symbol in ["ii-7", "iii-", "vi7", "v-", "vii-", "i-", "#i-", "♭vi-", "v-/I", "i-/IV"] {
            assert_eq!(ChordFunction::classify(symbol), Minor, "{}", symbol);
        }
    }

    #[test]
    fn test_overlapping_rules_resolve_in_order() {
        assert_eq!(ChordFunction::classify("#iv°7"), Subdominant);
        assert_eq!(ChordFunction::classify("°7"), Diminished);
        assert_eq!(ChordFunction::classify("dim"), Diminished);
        assert_eq!(ChordFunction::classify("♭II"), Dominant);
        assert_eq!(ChordFunction::classify("♭"), Chromatic);
        assert_eq!(ChordFunction::classify("Cmaj7"), Other);
        assert_eq!(ChordFunction::classify(""), Other);
    }

    #[test]
    fn test_first_chord_of_compound_bar() {
        assert_eq!(ChordFunction::classify("iii- VI7"), Minor);
        assert_eq!(ChordFunction::classify("♭VI7 V7"), Dominant);
    }
}
