//! Data model for the fretboard engine.
//!
//! These structures capture the musical vocabulary shared by the whole
//! crate: the twelve pitch classes and the notes highlighted on the
//! board. Everything here is plain data with small derived helpers;
//! the board geometry lives in `fretboard` and the scale/pattern rules
//! in their own modules.

use serde::{Deserialize, Serialize};

/// One of the twelve equal-tempered pitch classes, in chromatic order
/// starting at C.
///
/// Sharp spellings are canonical: identity, comparison, and `Display`
/// always use them. The five flat spellings exist purely for display
/// (see [`PitchClass::flat_name`]) and as accepted input aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#", alias = "Db")]
    CSharp,
    D,
    #[serde(rename = "D#", alias = "Eb")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#", alias = "Gb")]
    FSharp,
    G,
    #[serde(rename = "G#", alias = "Ab")]
    GSharp,
    A,
    #[serde(rename = "A#", alias = "Bb")]
    ASharp,
    B,
}

impl PitchClass {
    /// All twelve pitch classes in chromatic order (C = 0 … B = 11).
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Chromatic index, 0–11.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class at a chromatic index; wraps modulo 12.
    pub fn from_index(index: u8) -> PitchClass {
        Self::ALL[(index % 12) as usize]
    }

    /// Transpose by a signed number of semitones, wrapping at the octave.
    pub fn transpose(self, semitones: i32) -> PitchClass {
        Self::from_index((self.index() as i32 + semitones).rem_euclid(12) as u8)
    }

    /// Semitones from `self` up to `other`, 0–11.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.index() + 12 - self.index()) % 12
    }

    /// Canonical sharp-spelled name ("C#", "A", …).
    pub const fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat-spelled display name ("Db", "Eb", …); naturals are returned
    /// unchanged. Display-only — never used for identity or comparison.
    pub const fn flat_name(self) -> &'static str {
        match self {
            PitchClass::CSharp => "Db",
            PitchClass::DSharp => "Eb",
            PitchClass::FSharp => "Gb",
            PitchClass::GSharp => "Ab",
            PitchClass::ASharp => "Bb",
            other => other.name(),
        }
    }

    /// Parse a pitch class from its sharp or flat spelling.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        let pc = match name {
            "C" => PitchClass::C,
            "C#" | "Db" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D#" | "Eb" => PitchClass::DSharp,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "Gb" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G#" | "Ab" => PitchClass::GSharp,
            "A" => PitchClass::A,
            "A#" | "Bb" => PitchClass::ASharp,
            "B" => PitchClass::B,
            _ => return None,
        };
        Some(pc)
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single note at a board position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Pitch class sounding at this position
    pub pitch_class: PitchClass,
    /// Octave number. Derived from the open-string index and fret with a
    /// fixed base of 4; only the relative progression is meaningful.
    pub octave: i32,
    /// String index (0 = highest-pitched string, 5 = lowest)
    pub string: usize,
    /// Fret number (0 = open string)
    pub fret: usize,
    /// Index of the pattern template that produced this note, if any.
    /// Drives the display color; a position covered by several selected
    /// patterns keeps one Note per contributing pattern.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_index: Option<usize>,
}
