//! Selection state and note aggregation.
//!
//! A [`Selection`] mirrors the controls of the host UI: what to
//! highlight (one pitch, a whole scale, or a set of patterns) and how
//! to label it. `select_notes` turns a selection into plain notes;
//! `labeled_notes` adds the display data (label, color, root flag) the
//! renderer and the host UI consume.

use serde::{Deserialize, Serialize};

use crate::fretboard::positions_of;
use crate::model::{Note, PitchClass};
use crate::pattern::{generate_pattern_notes, PatternFamily};
use crate::scale::{all_scale_notes, ScaleKind};

/// Fill color for notes that no pattern contributed.
pub const DEFAULT_NOTE_COLOR: &str = "#3b82f6";

/// What a selection highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Every board position of the selected key's pitch class.
    SinglePitch,
    /// Every board position in the selected scale.
    AllScaleNotes,
    /// The selected pattern templates, transposed to the key.
    PatternSet,
}

/// How note labels are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// Letter names, flat-spelled ("Db", "G", …).
    Letters,
    /// Scale degrees relative to the key ("1", "♭3", …).
    Degrees,
}

/// Complete selector state, as posted by the host UI.
///
/// Every field has a default, so partial JSON deserializes to a valid
/// selection; an empty object is the UI's initial state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    /// Key the scale and patterns are built on
    pub key: PitchClass,
    /// What to highlight
    pub mode: SelectionMode,
    /// Scale used for membership and degree labels
    pub scale: ScaleKind,
    /// Pattern family used in pattern-set mode
    pub family: PatternFamily,
    /// Indices into the family's template table; order is preserved
    pub patterns: Vec<usize>,
    /// Label style
    pub notation: Notation,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            key: PitchClass::C,
            mode: SelectionMode::PatternSet,
            scale: ScaleKind::Major,
            family: PatternFamily::ThreeNotesPerString,
            patterns: Vec::new(),
            notation: Notation::Letters,
        }
    }
}

/// A note decorated with everything the display layer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledNote {
    /// Pitch class at this position
    pub pitch_class: PitchClass,
    /// Octave number (display-only)
    pub octave: i32,
    /// String index (0 = thin E)
    pub string: usize,
    /// Fret number (0 = open)
    pub fret: usize,
    /// Contributing pattern template, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_index: Option<usize>,
    /// Letter name or degree string, per the selection's notation
    pub label: String,
    /// Fill color, from the contributing pattern or the default
    pub color: &'static str,
    /// Whether this note sounds the selected key
    pub is_root: bool,
}

/// The notes a selection highlights, as a fresh snapshot.
///
/// Pattern-set mode concatenates the selected templates in order and
/// keeps duplicates: a position shared by two selected patterns yields
/// two notes, each tagged with its own template index.
pub fn select_notes(selection: &Selection) -> Vec<Note> {
    match selection.mode {
        SelectionMode::SinglePitch => positions_of(selection.key),
        SelectionMode::AllScaleNotes => all_scale_notes(selection.key, selection.scale),
        SelectionMode::PatternSet => selection
            .patterns
            .iter()
            .flat_map(|&index| generate_pattern_notes(selection.family, index, selection.key))
            .collect(),
    }
}

/// `select_notes` plus per-note display data.
pub fn labeled_notes(selection: &Selection) -> Vec<LabeledNote> {
    select_notes(selection)
        .into_iter()
        .map(|note| LabeledNote {
            label: match selection.notation {
                Notation::Letters => note.pitch_class.flat_name().to_string(),
                Notation::Degrees => selection.scale.degree_label(selection.key, note.pitch_class),
            },
            color: note_color(selection, &note),
            is_root: note.pitch_class == selection.key,
            pitch_class: note.pitch_class,
            octave: note.octave,
            string: note.string,
            fret: note.fret,
            pattern_index: note.pattern_index,
        })
        .collect()
}

/// Display color for a note: its pattern's color when the note carries
/// a valid template index, otherwise the default blue.
pub fn note_color(selection: &Selection, note: &Note) -> &'static str {
    note.pattern_index
        .and_then(|index| selection.family.templates().get(index))
        .map_or(DEFAULT_NOTE_COLOR, |template| template.color)
}

/// Parse a selection from its JSON form.
pub fn selection_from_json(json: &str) -> Result<Selection, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid selection JSON: {}", e))
}

/// Labeled notes for a selection, as a compact JSON array.
pub fn labeled_notes_json(selection: &Selection) -> Result<String, String> {
    serde_json::to_string(&labeled_notes(selection))
        .map_err(|e| format!("JSON serialization error: {}", e))
}
