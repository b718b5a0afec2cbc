//! Scale definitions and degree arithmetic.
//!
//! A scale is an ascending set of semitone intervals measured from the
//! key. Membership and degree labels work on pitch classes only, so
//! they apply uniformly to every octave on the board.

use serde::{Deserialize, Serialize};

use crate::fretboard::{note_at, FRET_COUNT, STRING_COUNT};
use crate::model::{Note, PitchClass};

/// One of the supported scale types.
///
/// Serialized as its lowercase name. Deserialization is total: an
/// unrecognized name falls back to Major rather than failing, the same
/// policy as [`ScaleKind::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScaleKind {
    Major,
    Minor,
    Pentatonic,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
}

impl ScaleKind {
    /// Ascending semitone offsets from the key. Five entries for the
    /// pentatonic, seven for everything else; always starts at 0.
    pub const fn intervals(self) -> &'static [u8] {
        match self {
            ScaleKind::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleKind::Minor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleKind::Pentatonic => &[0, 2, 4, 7, 9],
            ScaleKind::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleKind::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleKind::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleKind::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleKind::Locrian => &[0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// Lowercase canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::Minor => "minor",
            ScaleKind::Pentatonic => "pentatonic",
            ScaleKind::Dorian => "dorian",
            ScaleKind::Phrygian => "phrygian",
            ScaleKind::Lydian => "lydian",
            ScaleKind::Mixolydian => "mixolydian",
            ScaleKind::Locrian => "locrian",
        }
    }

    /// Look up a scale by its canonical name. Total: unknown names fall
    /// back to Major so a stale or misspelled selection still renders.
    pub fn from_name(name: &str) -> ScaleKind {
        match name {
            "major" => ScaleKind::Major,
            "minor" => ScaleKind::Minor,
            "pentatonic" => ScaleKind::Pentatonic,
            "dorian" => ScaleKind::Dorian,
            "phrygian" => ScaleKind::Phrygian,
            "lydian" => ScaleKind::Lydian,
            "mixolydian" => ScaleKind::Mixolydian,
            "locrian" => ScaleKind::Locrian,
            _ => ScaleKind::Major,
        }
    }

    /// Whether `pitch_class` belongs to this scale built on `key`.
    pub fn contains(self, key: PitchClass, pitch_class: PitchClass) -> bool {
        self.intervals().contains(&key.interval_to(pitch_class))
    }

    /// Degree label of a pitch class relative to `key`.
    ///
    /// Scale members get their 1-based degree ("1".."7", or "1".."5"
    /// for the pentatonic). A non-member is labeled as the flat of the
    /// next scale degree above it; past the top of the scale this wraps
    /// to the first degree an octave up, so the label is always a flat
    /// of a higher degree, never a sharp of a lower one.
    pub fn degree_label(self, key: PitchClass, pitch_class: PitchClass) -> String {
        let relative = key.interval_to(pitch_class);
        let intervals = self.intervals();
        if let Some(position) = intervals.iter().position(|&i| i == relative) {
            return (position + 1).to_string();
        }
        let higher = intervals
            .iter()
            .copied()
            .filter(|&i| i > relative)
            .min()
            .unwrap_or(intervals[0] + 12);
        let degree = intervals
            .iter()
            .position(|&i| i == higher % 12)
            .map_or(1, |p| p + 1);
        format!("♭{}", degree)
    }
}

impl Default for ScaleKind {
    fn default() -> Self {
        ScaleKind::Major
    }
}

impl From<String> for ScaleKind {
    fn from(name: String) -> Self {
        ScaleKind::from_name(&name)
    }
}

impl From<ScaleKind> for String {
    fn from(kind: ScaleKind) -> Self {
        kind.name().to_string()
    }
}

/// One note for every board position whose pitch class belongs to the
/// scale, ordered by string then fret.
pub fn all_scale_notes(key: PitchClass, kind: ScaleKind) -> Vec<Note> {
    let mut notes = Vec::new();
    for string in 0..STRING_COUNT {
        for fret in 0..=FRET_COUNT {
            let note = note_at(string, fret);
            if kind.contains(key, note.pitch_class) {
                notes.push(note);
            }
        }
    }
    notes
}
