//! Pattern generation tests — template tables, transposition and the 24-fret wrap.

use fretlib::{generate_pattern_notes, PatternFamily, PitchClass, ScaleKind, FRET_COUNT};
use pretty_assertions::assert_eq;

#[test]
fn template_names_and_colors() {
    let threes = PatternFamily::ThreeNotesPerString.templates();
    assert_eq!(threes.len(), 7);
    for (index, template) in threes.iter().enumerate() {
        assert_eq!(template.name, format!("Position {}", index + 1));
    }
    let expected_colors = [
        "#FF5252", "#FF9800", "#FFC107", "#4CAF50", "#2196F3", "#673AB7", "#9C27B0",
    ];
    for (template, color) in threes.iter().zip(expected_colors) {
        assert_eq!(template.color, color, "{}", template.name);
    }

    let caged = PatternFamily::Caged.templates();
    let expected_names = ["C shape", "A shape", "G shape", "E shape", "D shape"];
    assert_eq!(caged.len(), 5);
    for (template, name) in caged.iter().zip(expected_names) {
        assert_eq!(template.name, name);
    }
    println!("✓ {} + {} templates named and colored as expected", threes.len(), caged.len());
}

#[test]
fn note_counts_per_template() {
    for index in 0..7 {
        let notes = generate_pattern_notes(PatternFamily::ThreeNotesPerString, index, PitchClass::C);
        assert_eq!(notes.len(), 18, "3NPS position {} is three notes on six strings", index + 1);
    }
    // CAGED shapes drop to two notes on some strings.
    let expected = [17, 16, 17, 17, 17];
    for (index, want) in expected.into_iter().enumerate() {
        let notes = generate_pattern_notes(PatternFamily::Caged, index, PitchClass::C);
        assert_eq!(notes.len(), want, "CAGED template {}", index);
    }
    println!("✓ Note counts per template verified");
}

#[test]
fn all_templates_stay_diatonic_in_every_key() {
    // The fret wrap moves a note exactly two octaves, so the pattern's
    // pitch classes stay inside the transposed major scale for any key.
    for family in [PatternFamily::ThreeNotesPerString, PatternFamily::Caged] {
        for index in 0..family.templates().len() {
            for key in PitchClass::ALL {
                for note in generate_pattern_notes(family, index, key) {
                    assert!(
                        ScaleKind::Major.contains(key, note.pitch_class),
                        "{} template {} in {}: {} at string {} fret {}",
                        if family == PatternFamily::Caged { "CAGED" } else { "3NPS" },
                        index,
                        key,
                        note.pitch_class,
                        note.string,
                        note.fret
                    );
                }
            }
        }
    }
    println!("✓ 12 keys × 12 templates stay diatonic");
}

#[test]
fn transposition_shifts_whole_shapes() {
    // Position 1 in G: offset 7 from the C templates.
    let notes = generate_pattern_notes(PatternFamily::ThreeNotesPerString, 0, PitchClass::G);
    let per_string: Vec<Vec<usize>> = (0..6)
        .map(|s| notes.iter().filter(|n| n.string == s).map(|n| n.fret).collect())
        .collect();
    assert_eq!(per_string[0], vec![10, 12, 14]);
    assert_eq!(per_string[5], vec![8, 10, 12]);

    // The shape's root positions now sound G.
    assert!(notes.iter().any(|n| n.pitch_class == PitchClass::G));
}

#[test]
fn wrapped_frets_stay_on_the_board() {
    for family in [PatternFamily::ThreeNotesPerString, PatternFamily::Caged] {
        for index in 0..family.templates().len() {
            for key in PitchClass::ALL {
                for note in generate_pattern_notes(family, index, key) {
                    // The modulo leaves 0..=23; fret 24 is only ever an
                    // open-string octave, never a pattern note.
                    assert!(note.fret < FRET_COUNT, "fret {} escaped the board", note.fret);
                }
            }
        }
    }
}

#[test]
fn wrap_preserves_pitch_classes_position_by_position() {
    for family in [PatternFamily::ThreeNotesPerString, PatternFamily::Caged] {
        for index in 0..family.templates().len() {
            let in_c = generate_pattern_notes(family, index, PitchClass::C);
            let in_b = generate_pattern_notes(family, index, PitchClass::B);
            assert_eq!(in_c.len(), in_b.len());
            for (c_note, b_note) in in_c.iter().zip(in_b.iter()) {
                assert_eq!(
                    b_note.pitch_class,
                    c_note.pitch_class.transpose(11),
                    "template {} note at string {}",
                    index,
                    c_note.string
                );
                assert_eq!(b_note.string, c_note.string);
            }
        }
    }
    println!("✓ Wrap moves positions, never pitch classes");
}

#[test]
fn out_of_range_template_index_is_empty() {
    assert!(generate_pattern_notes(PatternFamily::ThreeNotesPerString, 7, PitchClass::C).is_empty());
    assert!(generate_pattern_notes(PatternFamily::Caged, 5, PitchClass::C).is_empty());
}
