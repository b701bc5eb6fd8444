pub mod accompaniment;
pub mod catalog;
pub mod error;
pub mod flowchart;
pub mod function;
pub mod pitch;
pub mod progression;
pub mod symbol;
pub mod voicing;
pub mod walking_bass;

pub use accompaniment::{accompany, accompany_bar, BarNotes};
pub use catalog::{all_progressions, progression_by_id, random_progression};
pub use error::*;
pub use function::ChordFunction;
pub use pitch::{PitchClass, PitchedNote};
pub use progression::{load_progressions, parse_progressions, Progression, BARS_PER_CHORUS};
pub use symbol::primary_symbol;
pub use voicing::{bass_root_for, voicing_for, Quality, Resolution, Voicing};
pub use walking_bass::{chorus_bass_line, walking_bass};

/// Render every bar of a built-in progression.
/// This is the main entry point for a player that works from the catalog.
pub fn accompany_by_id(id: u32) -> Result<Vec<BarNotes>, BluesError> {
    let progression = progression_by_id(id).ok_or(BluesError::UnknownProgression(id))?;
    Ok(accompany(progression))
}
