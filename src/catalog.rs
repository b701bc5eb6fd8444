//! # Progression Catalog
//!
//! The built-in library of 18 labeled 12-bar blues variations, from the
//! basic three-chord form through bebop substitutions, diminished passing
//! chords and slash-bass grooves.
//!
//! The catalog is built once on first access and is read-only afterwards.

use rand::Rng;
use std::sync::LazyLock;

use crate::progression::{Progression, BARS_PER_CHORUS};

type Entry = (u32, &'static str, [&'static str; BARS_PER_CHORUS], &'static str);

#[rustfmt::skip]
const ENTRIES: &[Entry] = &[
    (1, "Basic Blues",
        ["I7", "I7", "I7", "I7", "IV7", "IV7", "I7", "I7", "V7", "V7", "I7", "I7"],
        "The foundation - where it all begins"),
    (2, "Classic V-IV Turnaround",
        ["I7", "I7", "I7", "I7", "IV7", "IV7", "I7", "I7", "V7", "IV7", "I7", "V7"],
        "That sweet turnaround that pulls you back"),
    (3, "Dominant II-V",
        ["I7", "IV7", "I7", "I7", "IV7", "IV7", "I7", "I7", "II7", "V7", "I7", "V7"],
        "Jazz influence creeping in"),
    (4, "Dominant 6-2-5-1",
        ["I7", "IV7", "I7", "I7", "IV7", "IV7", "I7", "VI7", "II7", "V7", "I7", "V7"],
        "The classic cycle of fifths"),
    (5, "Diatonic 6-2-5-1",
        ["I7", "IV7", "I7", "I7", "IV7", "IV7", "I7", "VI7", "ii-7", "V7", "I7", "ii- V7"],
        "Smooth minor chord substitution"),
    (6, "IV of IV + ♭VI Turnaround",
        ["I7", "IV7", "I7", "I7", "IV7", "VII7", "I7", "VI7", "♭VI7", "V7", "I7", "♭VI7 V7"],
        "Chromatic magic with the flat six"),
    (7, "2-5 Delays + Minor Subdom",
        ["I7", "IV7", "I7", "v- I7", "IV7", "VII7", "I7", "iii- VI7", "ii-7", "V7", "iii- VI7", "ii- V7"],
        "Bebop sophistication"),
    (8, "Minor Subdom Extended",
        ["I7", "IV7", "I7", "v- I7", "IV7", "VII7", "iii-", "VI7", "ii-7", "V7", "iii- VI7", "ii- V7"],
        "Deep minor territory"),
    (9, "Bebop Plagal Cadence",
        ["I7", "IV7", "I7", "v- I7", "IV7", "IV7", "I7", "vi7", "ii7", "V7", "vi7", "I7"],
        "That churchy plagal feel"),
    (10, "Diminished Passing Chords",
        ["Imaj", "vii- III7", "vi- II7", "v- I7", "IV7", "#iv°7", "I7", "IV7", "iv°7", "I7", "IV7", "iv°7"],
        "Spooky diminished movement"),
    (11, "Diminished Pedal Point",
        ["Imaj", "vii- ♭vii-", "vi- ♭vi-", "v- ♭V7", "IVmaj", "iv-", "iv°7", "I7", "Imaj", "iv°7", "I7", "Imaj"],
        "Hypnotic pedal tones"),
    (12, "Major Seventh Cycle",
        ["Imaj", "IVmaj", "iii- ii-", "#i- ♭V7", "IVmaj", "Imaj", "iv°7", "I7", "Imaj", "iv°7", "I7", "Imaj"],
        "Lush major seventh harmony"),
    (13, "Major Diminished Variation",
        ["Imaj", "IVmaj", "iii- ii-", "#i- ♭V7", "IVmaj", "Imaj", "iv°7", "I7", "Imaj", "iv°7", "I7", "Imaj"],
        "Major meets diminished"),
    (14, "Major IV Diminished Mix",
        ["Imaj", "vii- III7", "vi- II7", "v- I7", "IVmaj", "iv°7", "I7", "Imaj", "iv°7", "I7", "Imaj", "iv°7"],
        "Mixing major and diminished colors"),
    (15, "Major Diminished Interchange",
        ["Imaj", "vii- III7", "vi- II7", "#i- ♭V7", "IVmaj", "iv°7", "I7", "Imaj", "iv°7", "I7", "Imaj", "iv°7"],
        "Chromatic interchange mastery"),
    (16, "Major IV Contrast",
        ["#i- #IV7", "vii- III7", "vi- II7", "v- I7", "IVmaj", "Imaj", "iv°7", "I7", "Imaj", "iv°7", "I7", "Imaj"],
        "Bold harmonic contrast"),
    (17, "Major Diminished Mix-up",
        ["Imaj", "#i- ♭V7", "VIImaj ♭VIImaj", "♭VImaj ♭Vmaj", "IVmaj", "Imaj", "iv°7", "I7", "Imaj", "iv°7", "I7", "Imaj"],
        "Wild chromatic adventure"),
    (18, "Slash Bass Blues",
        ["v-/I", "i-/IV", "v-/I", "v-/I", "i-/IV", "I7/V", "I7/V", "IV7/♭VII", "IV7/♭VII", "I7/V", "I7/V", "I7/V"],
        "Groovy slash bass movement"),
];

static CATALOG: LazyLock<Vec<Progression>> = LazyLock::new(|| {
    ENTRIES
        .iter()
        .map(|(id, name, chords, description)| Progression {
            id: *id,
            name: name.to_string(),
            chords: chords.map(str::to_string),
            description: Some(description.to_string()),
        })
        .collect()
});

/// Every built-in progression, ordered by id.
///
/// ```
/// use blues_flow::all_progressions;
///
/// let all = all_progressions();
/// assert_eq!(all.len(), 18);
/// assert_eq!(all[0].name, "Basic Blues");
/// ```
pub fn all_progressions() -> &'static [Progression] {
    &CATALOG
}

/// Look up a built-in progression by id.
pub fn progression_by_id(id: u32) -> Option<&'static Progression> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Pick a built-in progression uniformly at random.
///
/// The caller owns the randomness source, so a seeded generator gives a
/// repeatable shuffle.
///
/// ```
/// use blues_flow::random_progression;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(12);
/// let picked = random_progression(&mut rng);
/// assert!((1..=18).contains(&picked.id));
/// ```
pub fn random_progression<R: Rng + ?Sized>(rng: &mut R) -> &'static Progression {
    &CATALOG[rng.gen_range(0..CATALOG.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{primary_symbol, second_symbol};
    use crate::voicing::{resolve_voicing, Resolution};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique_and_sequential() {
        let ids: Vec<u32> = all_progressions().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=18).collect::<Vec<u32>>());
    }

    #[test]
    fn test_every_progression_has_twelve_bars() {
        for progression in all_progressions() {
            assert_eq!(progression.chords.len(), 12, "{}", progression.name);
            assert!(progression.description.is_some());
        }
    }

    #[test]
    fn test_catalog_symbols_resolve_to_table_entries() {
        for progression in all_progressions() {
            for chord in &progression.chords {
                let (_, resolution) = resolve_voicing(primary_symbol(chord));
                assert_eq!(
                    resolution,
                    Resolution::Exact,
                    "{} bar {:?} primary symbol falls back",
                    progression.name,
                    chord
                );
                if let Some(second) = second_symbol(chord) {
                    assert_eq!(
                        resolve_voicing(second).1,
                        Resolution::Exact,
                        "{} bar {:?} second half falls back",
                        progression.name,
                        chord
                    );
                }
            }
        }
    }

    #[test]
    fn test_progression_by_id() {
        let slash = progression_by_id(18).unwrap();
        assert_eq!(slash.name, "Slash Bass Blues");
        assert_eq!(slash.chords[0], "v-/I");
        assert!(progression_by_id(0).is_none());
        assert!(progression_by_id(19).is_none());
    }

    #[test]
    fn test_random_progression_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(0xB1_0E5);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let picked = random_progression(&mut rng);
            assert!(progression_by_id(picked.id).is_some());
            seen.insert(picked.id);
        }
        assert_eq!(seen.len(), all_progressions().len());
    }

    #[test]
    fn test_random_progression_is_repeatable_with_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(random_progression(&mut a).id, random_progression(&mut b).id);
        }
    }
}
