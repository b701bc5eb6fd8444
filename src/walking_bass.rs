//! # Walking Bass Generator
//!
//! Produces four quarter-note bass pitches per bar of 4/4.
//!
//! ## Beat Selection
//! 1. Root of the current chord, exactly as the bass-root lookup spells it
//! 2. Third if it is a chord tone, else fifth, else root
//! 3. Fifth if it is a chord tone, else root (may repeat beat 2)
//! 4. Chromatic approach to the next bar's root
//!
//! The third is a minor third (+3) for minor-seventh, minor-triad and
//! diminished-seventh chords and a major third (+4) otherwise; the fifth is
//! always +7. Intervals are measured from the beat-1 root, so a slash chord
//! such as `v-/I` looks for its third and fifth above the slash bass while
//! still drawing candidate tones from the upper chord.
//!
//! ## Approach Note
//! With `diff` the upward distance from the current root to the next root,
//! `diff <= 6` approaches from a semitone below and anything wider from a
//! semitone above. Approach notes are spelled with flats.
//!
//! Everything after beat 1 is rendered in octave 2.

use crate::pitch::{PitchClass, PitchedNote, BASS_OCTAVE};
use crate::progression::Progression;
use crate::voicing::{bass_root_for, voicing_for, Voicing};

/// Notes in one bar of walking bass.
pub const BEATS_PER_BAR: usize = 4;

/// Walking bass for one bar, leading into `next_chord`.
///
/// # Example
/// ```
/// use blues_flow::walking_bass;
///
/// // C up to F is five semitones: approach from below
/// assert_eq!(walking_bass("I7", "IV7"), ["C2", "E2", "G2", "E2"]);
///
/// // C up to G is seven semitones: approach from above
/// assert_eq!(walking_bass("I7", "V7"), ["C2", "E2", "G2", "Ab2"]);
/// ```
pub fn walking_bass(current_chord: &str, next_chord: &str) -> [String; BEATS_PER_BAR] {
    let voicing = voicing_for(current_chord);
    let current_root = bass_root_for(current_chord);
    let root = PitchedNote::parse(current_root);
    let next_root = PitchedNote::parse(bass_root_for(next_chord));

    let third_interval = if voicing.quality.has_minor_third() { 3 } else { 4 };
    let third = find_tone(voicing, root.pitch_class().transpose(third_interval));
    let fifth = find_tone(voicing, root.pitch_class().transpose(7));

    let beat2 = third.or(fifth).unwrap_or(root.spelling());
    let beat3 = fifth.unwrap_or(root.spelling());
    let beat4 = approach_note(root.pitch_class(), next_root.pitch_class());

    let line = [
        current_root.to_string(),
        in_bass_octave(beat2),
        in_bass_octave(beat3),
        in_bass_octave(beat4.flat_name()),
    ];
    log::trace!("walking bass {} -> {}: {:?}", current_chord, next_chord, line);
    line
}

/// Chromatic neighbour of `next` on the side that shortens the motion from `current`.
///
/// ```
/// use blues_flow::pitch::PitchClass;
/// use blues_flow::walking_bass::approach_note;
///
/// let c = PitchClass::new(0);
/// assert_eq!(approach_note(c, PitchClass::new(5)).flat_name(), "E");
/// assert_eq!(approach_note(c, PitchClass::new(7)).flat_name(), "Ab");
/// ```
pub fn approach_note(current: PitchClass, next: PitchClass) -> PitchClass {
    if current.interval_to(next) <= 6 {
        next.transpose(-1)
    } else {
        next.transpose(1)
    }
}

/// Walking bass for every bar of a progression; bar 12 turns around to bar 1.
pub fn chorus_bass_line(progression: &Progression) -> Vec<[String; BEATS_PER_BAR]> {
    progression
        .chords
        .iter()
        .enumerate()
        .map(|(bar, chord)| walking_bass(chord, progression.next_chord(bar)))
        .collect()
}

fn find_tone(voicing: &Voicing, target: PitchClass) -> Option<&'static str> {
    voicing
        .chord_tones
        .iter()
        .copied()
        .find(|tone| PitchClass::from_name(tone) == Some(target))
}

fn in_bass_octave(spelling: &str) -> String {
    format!("{}{}", spelling, BASS_OCTAVE)
}
