//! Pitch arithmetic
//!
//! Conversion between pitch-class names and integer pitch classes (0-11),
//! plus parsing of pitched note names such as `"Bb3"` or `"F#2"`.
//!
//! Spelling is never normalized on the way through: a `PitchedNote` parsed
//! from `"A#2"` renders back as `"A#2"`, not `"Bb2"`.

use serde::Serialize;
use std::fmt;

/// Flat spelling, indexed by pitch class.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Sharp spelling, indexed by pitch class.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Octave used for every generated bass note after the downbeat.
pub const BASS_OCTAVE: u8 = 2;

/// Integer pitch class, always in 0..12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from any semitone count, reducing modulo 12.
    pub fn new(semitone: i32) -> Self {
        Self(semitone.rem_euclid(12) as u8)
    }

    /// Parse a pitch-class name: a letter A-G with at most one `#` or `b`.
    ///
    /// ```
    /// use blues_flow::pitch::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_name("Bb").map(|p| p.value()), Some(10));
    /// assert_eq!(PitchClass::from_name("A#"), PitchClass::from_name("Bb"));
    /// assert_eq!(PitchClass::from_name("H"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let base = letter_semitone(chars.next()?)?;
        let accidental = match chars.next() {
            None => 0,
            Some('#') => 1,
            Some('b') => -1,
            Some(_) => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(base + accidental))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Upward distance in semitones from `self` to `other` (0..12).
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.0 as usize]
    }

    pub fn sharp_name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }
}

fn letter_semitone(letter: char) -> Option<i32> {
    let semitone = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    Some(semitone)
}

/// A pitch class at a concrete octave, keeping the spelling it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchedNote {
    spelling: String,
    pitch_class: PitchClass,
    octave: u8,
}

impl PitchedNote {
    /// Build a note from a pitch-class name and octave. Unknown names fall back to C.
    pub fn new(spelling: &str, octave: u8) -> Self {
        match PitchClass::from_name(spelling) {
            Some(pitch_class) => Self {
                spelling: spelling.to_string(),
                pitch_class,
                octave,
            },
            None => Self {
                spelling: "C".to_string(),
                pitch_class: PitchClass::C,
                octave,
            },
        }
    }

    /// Parse a pitched note name like `"F#2"`.
    ///
    /// Scans for the first letter A-G, an optional `#`/`b` and a single octave
    /// digit; surrounding text is ignored. Anything unparseable yields C2.
    ///
    /// ```
    /// use blues_flow::pitch::PitchedNote;
    ///
    /// let note = PitchedNote::parse("Ab2");
    /// assert_eq!(note.pitch_class().value(), 8);
    /// assert_eq!(note.octave(), 2);
    /// assert_eq!(PitchedNote::parse("??").to_string(), "C2");
    /// ```
    pub fn parse(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        for start in 0..chars.len() {
            if let Some(note) = Self::parse_at(&chars[start..]) {
                return note;
            }
        }
        Self {
            spelling: "C".to_string(),
            pitch_class: PitchClass::C,
            octave: BASS_OCTAVE,
        }
    }

    fn parse_at(chars: &[char]) -> Option<Self> {
        let letter = *chars.first()?;
        let base = letter_semitone(letter)?;
        let mut idx = 1;
        let accidental = match chars.get(idx) {
            Some('#') => {
                idx += 1;
                1
            }
            Some('b') => {
                idx += 1;
                -1
            }
            _ => 0,
        };
        let octave = chars.get(idx)?.to_digit(10)? as u8;
        Some(Self {
            spelling: chars[..idx].iter().collect(),
            pitch_class: PitchClass::new(base + accidental),
            octave,
        })
    }

    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch_class
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }
}

impl fmt::Display for PitchedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spelling, self.octave)
    }
}
