//! Fingering pattern templates and transposition.
//!
//! Two fixed families of box patterns are built in: seven
//! three-notes-per-string positions and the five CAGED shapes. All
//! templates are authored in the key of C; selecting another key
//! shifts every fret by the key's chromatic offset.

use serde::{Deserialize, Serialize};

use crate::fretboard::{note_at, FRET_COUNT};
use crate::model::{Note, PitchClass};

/// A fixed fingering shape: frets to press on each string, plus the
/// color the shape is drawn in.
#[derive(Debug, Clone, Copy)]
pub struct PatternTemplate {
    /// Display name ("Position 3", "A shape", …)
    pub name: &'static str,
    /// Frets per string, index 0 = thin E; ascending within a string
    pub frets: [&'static [usize]; 6],
    /// Hex display color, "#RRGGBB"
    pub color: &'static str,
}

/// A family of fingering templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternFamily {
    /// Seven positions of three notes per string, covering the board.
    #[serde(rename = "3NPS")]
    ThreeNotesPerString,
    /// The five open-chord-derived CAGED shapes.
    #[serde(rename = "CAGED")]
    Caged,
}

impl PatternFamily {
    /// The fixed template table for this family.
    pub fn templates(self) -> &'static [PatternTemplate] {
        match self {
            PatternFamily::ThreeNotesPerString => &PATTERNS_3NPS,
            PatternFamily::Caged => &PATTERNS_CAGED,
        }
    }
}

impl Default for PatternFamily {
    fn default() -> Self {
        PatternFamily::ThreeNotesPerString
    }
}

/// Three-notes-per-string positions for the major scale, in C.
pub static PATTERNS_3NPS: [PatternTemplate; 7] = [
    PatternTemplate {
        name: "Position 1",
        frets: [&[3, 5, 7], &[3, 5, 6], &[2, 4, 5], &[2, 3, 5], &[2, 3, 5], &[1, 3, 5]],
        color: "#FF5252",
    },
    PatternTemplate {
        name: "Position 2",
        frets: [&[5, 7, 8], &[5, 6, 8], &[4, 5, 7], &[3, 5, 7], &[3, 5, 7], &[3, 5, 7]],
        color: "#FF9800",
    },
    PatternTemplate {
        name: "Position 3",
        frets: [&[7, 8, 10], &[6, 8, 10], &[5, 7, 9], &[5, 7, 9], &[5, 7, 8], &[5, 7, 8]],
        color: "#FFC107",
    },
    PatternTemplate {
        name: "Position 4",
        frets: [
            &[8, 10, 12],
            &[8, 10, 12],
            &[7, 9, 10],
            &[7, 9, 10],
            &[7, 8, 10],
            &[7, 8, 10],
        ],
        color: "#4CAF50",
    },
    PatternTemplate {
        name: "Position 5",
        frets: [
            &[10, 12, 13],
            &[10, 12, 13],
            &[9, 10, 12],
            &[9, 10, 12],
            &[8, 10, 12],
            &[8, 10, 12],
        ],
        color: "#2196F3",
    },
    PatternTemplate {
        name: "Position 6",
        frets: [
            &[12, 13, 15],
            &[12, 13, 15],
            &[10, 12, 14],
            &[10, 12, 14],
            &[10, 12, 14],
            &[10, 12, 13],
        ],
        color: "#673AB7",
    },
    PatternTemplate {
        name: "Position 7",
        frets: [
            &[13, 15, 17],
            &[13, 15, 17],
            &[12, 14, 16],
            &[12, 14, 15],
            &[12, 14, 15],
            &[12, 13, 15],
        ],
        color: "#9C27B0",
    },
];

/// CAGED shapes for the major scale, in C. Some strings carry only two
/// notes, so these shapes overlap less cleanly than the 3NPS set.
pub static PATTERNS_CAGED: [PatternTemplate; 5] = [
    PatternTemplate {
        name: "C shape",
        frets: [
            &[12, 13, 15],
            &[12, 13, 15],
            &[12, 14],
            &[12, 14, 15],
            &[12, 14, 15],
            &[12, 13, 15],
        ],
        color: "#FF5252",
    },
    PatternTemplate {
        name: "A shape",
        frets: [&[3, 5], &[3, 5, 6], &[2, 4, 5], &[2, 3, 5], &[2, 3, 5], &[3, 5]],
        color: "#FF9800",
    },
    PatternTemplate {
        name: "G shape",
        frets: [&[5, 7, 8], &[5, 6, 8], &[4, 5, 7], &[5, 7], &[5, 7, 8], &[5, 7, 8]],
        color: "#FFC107",
    },
    PatternTemplate {
        name: "E shape",
        frets: [
            &[7, 8, 10],
            &[8, 10],
            &[7, 9, 10],
            &[7, 9, 10],
            &[7, 8, 10],
            &[7, 8, 10],
        ],
        color: "#4CAF50",
    },
    PatternTemplate {
        name: "D shape",
        frets: [
            &[10, 12, 13],
            &[10, 12, 13],
            &[9, 10, 12],
            &[9, 10, 12],
            &[10, 12],
            &[10, 12, 13],
        ],
        color: "#2196F3",
    },
];

/// Notes of one template transposed to `key`, tagged with the template
/// index so the renderer can color them.
///
/// An out-of-range `pattern_index` yields an empty list rather than an
/// error. Transposed frets wrap at the 24-fret boundary; the wrap keeps
/// the pitch class intact (24 frets is two octaves) but can drop a note
/// far below the rest of its shape when a pattern is pushed past the
/// top of the board.
pub fn generate_pattern_notes(
    family: PatternFamily,
    pattern_index: usize,
    key: PitchClass,
) -> Vec<Note> {
    let template = match family.templates().get(pattern_index) {
        Some(template) => template,
        None => return Vec::new(),
    };

    let offset = PitchClass::C.interval_to(key) as usize;
    let mut notes = Vec::new();
    for (string, frets) in template.frets.iter().enumerate() {
        for &template_fret in frets.iter() {
            let mut note = note_at(string, (template_fret + offset) % FRET_COUNT);
            note.pattern_index = Some(pattern_index);
            notes.push(note);
        }
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleKind;

    #[test]
    fn template_tables_are_well_formed() {
        assert_eq!(PATTERNS_3NPS.len(), 7);
        assert_eq!(PATTERNS_CAGED.len(), 5);
        for template in PATTERNS_3NPS.iter().chain(PATTERNS_CAGED.iter()) {
            for frets in template.frets {
                assert!(
                    (2..=3).contains(&frets.len()),
                    "{}: 2 or 3 frets per string",
                    template.name
                );
                for pair in frets.windows(2) {
                    assert!(pair[0] < pair[1], "{}: frets must ascend", template.name);
                }
                assert!(frets.iter().all(|&f| f <= FRET_COUNT));
            }
            assert!(template.color.starts_with('#') && template.color.len() == 7);
        }
    }

    #[test]
    fn every_3nps_string_carries_three_notes() {
        for template in &PATTERNS_3NPS {
            for frets in template.frets {
                assert_eq!(frets.len(), 3, "{}", template.name);
            }
        }
    }

    #[test]
    fn templates_in_c_are_diatonic_to_c_major() {
        use PitchClass::C;
        for (index, template) in PATTERNS_3NPS.iter().enumerate() {
            for note in generate_pattern_notes(PatternFamily::ThreeNotesPerString, index, C) {
                assert!(
                    ScaleKind::Major.contains(C, note.pitch_class),
                    "{}: {} at string {} fret {} is outside C major",
                    template.name,
                    note.pitch_class,
                    note.string,
                    note.fret
                );
            }
        }
    }

    #[test]
    fn key_of_c_reproduces_template_frets() {
        let notes = generate_pattern_notes(PatternFamily::ThreeNotesPerString, 0, PitchClass::C);
        assert_eq!(notes.len(), 18);
        let string0: Vec<usize> = notes.iter().filter(|n| n.string == 0).map(|n| n.fret).collect();
        assert_eq!(string0, vec![3, 5, 7]);
        assert!(notes.iter().all(|n| n.pattern_index == Some(0)));
    }

    #[test]
    fn transposition_shifts_every_fret() {
        let in_c = generate_pattern_notes(PatternFamily::ThreeNotesPerString, 1, PitchClass::C);
        let in_d = generate_pattern_notes(PatternFamily::ThreeNotesPerString, 1, PitchClass::D);
        assert_eq!(in_c.len(), in_d.len());
        for (c_note, d_note) in in_c.iter().zip(in_d.iter()) {
            assert_eq!(d_note.fret, c_note.fret + 2);
            assert_eq!(d_note.string, c_note.string);
            assert_eq!(d_note.pitch_class, c_note.pitch_class.transpose(2));
        }
    }

    #[test]
    fn high_keys_wrap_at_the_board_end() {
        // C shape in B: offset 11 pushes frets 12/13/15 to 23/24/26,
        // and the last two wrap to 0 and 2.
        let notes = generate_pattern_notes(PatternFamily::Caged, 0, PitchClass::B);
        let string0: Vec<usize> = notes.iter().filter(|n| n.string == 0).map(|n| n.fret).collect();
        assert_eq!(string0, vec![23, 0, 2]);
        // Wrapping never changes the sounding pitch class.
        let in_c = generate_pattern_notes(PatternFamily::Caged, 0, PitchClass::C);
        for (b_note, c_note) in notes.iter().zip(in_c.iter()) {
            assert_eq!(b_note.pitch_class, c_note.pitch_class.transpose(11));
        }
    }

    #[test]
    fn out_of_range_index_yields_no_notes() {
        assert!(generate_pattern_notes(PatternFamily::ThreeNotesPerString, 7, PitchClass::C)
            .is_empty());
        assert!(generate_pattern_notes(PatternFamily::Caged, 5, PitchClass::G).is_empty());
        assert!(generate_pattern_notes(PatternFamily::Caged, usize::MAX, PitchClass::G).is_empty());
    }

    #[test]
    fn family_serde_names() {
        assert_eq!(
            serde_json::to_string(&PatternFamily::ThreeNotesPerString).unwrap(),
            "\"3NPS\""
        );
        assert_eq!(serde_json::to_string(&PatternFamily::Caged).unwrap(), "\"CAGED\"");
        let parsed: PatternFamily = serde_json::from_str("\"CAGED\"").unwrap();
        assert_eq!(parsed, PatternFamily::Caged);
    }
}
