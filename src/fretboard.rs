//! Standard-tuning fretboard geometry.
//!
//! Maps (string, fret) positions to pitches for a six-string guitar in
//! standard tuning with 24 frets. String 0 is the highest-pitched
//! string (thin E), matching the top row of the rendered board.

use crate::model::{Note, PitchClass};

/// Number of strings on the board.
pub const STRING_COUNT: usize = 6;

/// Highest fret number; fret 0 is the open string, so each string has
/// `FRET_COUNT + 1` playable positions.
pub const FRET_COUNT: usize = 24;

/// Open-string pitch classes from string 0 (thin E) to string 5 (thick E).
pub const STANDARD_TUNING: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::B,
    PitchClass::G,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
];

/// Octave assigned to chromatic index 0 of each open string. Octaves are
/// display-only; shifting this constant shifts every note equally.
const BASE_OCTAVE: i32 = 4;

/// The note sounding at a board position.
///
/// # Panics
///
/// Panics if `string >= STRING_COUNT` or `fret > FRET_COUNT`.
pub fn note_at(string: usize, fret: usize) -> Note {
    assert!(string < STRING_COUNT, "string index out of range: {}", string);
    assert!(fret <= FRET_COUNT, "fret out of range: {}", fret);

    let total = STANDARD_TUNING[string].index() as usize + fret;
    Note {
        pitch_class: PitchClass::from_index((total % 12) as u8),
        octave: (total / 12) as i32 + BASE_OCTAVE,
        string,
        fret,
        pattern_index: None,
    }
}

/// Every position on the board sounding the given pitch class, ordered
/// by string then fret.
pub fn positions_of(pitch_class: PitchClass) -> Vec<Note> {
    let mut notes = Vec::new();
    for string in 0..STRING_COUNT {
        for fret in 0..=FRET_COUNT {
            let note = note_at(string, fret);
            if note.pitch_class == pitch_class {
                notes.push(note);
            }
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_strings_match_tuning() {
        for string in 0..STRING_COUNT {
            let note = note_at(string, 0);
            assert_eq!(note.pitch_class, STANDARD_TUNING[string]);
            assert_eq!(note.fret, 0);
        }
    }

    #[test]
    fn twelfth_fret_repeats_pitch_class_an_octave_up() {
        for string in 0..STRING_COUNT {
            let open = note_at(string, 0);
            let octave_up = note_at(string, 12);
            assert_eq!(octave_up.pitch_class, open.pitch_class);
            assert_eq!(octave_up.octave, open.octave + 1);
        }
    }

    #[test]
    fn pitch_walks_chromatically_along_a_string() {
        for fret in 0..FRET_COUNT {
            let here = note_at(2, fret);
            let next = note_at(2, fret + 1);
            assert_eq!(next.pitch_class, here.pitch_class.transpose(1));
        }
    }

    #[test]
    fn known_positions() {
        // String 2 (G), fret 2 is A in the same octave block.
        let a = note_at(2, 2);
        assert_eq!(a.pitch_class, PitchClass::A);
        // String 0 (E, index 4): fret 8 passes the octave boundary.
        assert_eq!(note_at(0, 7).octave, note_at(0, 0).octave);
        assert_eq!(note_at(0, 8).octave, note_at(0, 0).octave + 1);
    }

    #[test]
    fn positions_of_counts_every_occurrence() {
        // A string whose open pitch matches contributes frets 0, 12 and
        // 24; every other string contributes two frets.
        assert_eq!(positions_of(PitchClass::A).len(), 13);
        // Both E strings are open E.
        assert_eq!(positions_of(PitchClass::E).len(), 14);
    }

    #[test]
    #[should_panic(expected = "fret out of range")]
    fn rejects_fret_past_the_board() {
        note_at(0, FRET_COUNT + 1);
    }
}
