//! Fretboard renderer — converts a selection into SVG output.
//!
//! The renderer consumes the labeled notes computed by the engine and
//! produces a self-contained SVG string that can be displayed in any
//! SVG-capable view: wooden board, nut, fret lines, strings with their
//! names, inlay markers, then one colored dot per highlighted position.
//! Nothing here feeds back into the engine.

mod constants;
mod svg_builder;

use crate::fretboard::{FRET_COUNT, STANDARD_TUNING, STRING_COUNT};
use crate::selection::{labeled_notes, LabeledNote, Selection};
use constants::*;
use svg_builder::SvgBuilder;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render a selection into a complete SVG string.
///
/// All drawing happens in the fixed 3000×700 viewBox; `page_width` only
/// sets the emitted image width in user units, with the height scaled
/// to keep the board's aspect ratio. Pass `None` (or 0.0 from FFI) to
/// emit at viewBox size. On phones, pass the screen width in points.
pub fn render_selection_to_svg(selection: &Selection, page_width: Option<f64>) -> String {
    let width = match page_width {
        Some(w) if w > 0.0 => w,
        _ => VIEWBOX_WIDTH,
    };
    let height = width * VIEWBOX_HEIGHT / VIEWBOX_WIDTH;

    let mut svg = SvgBuilder::new(VIEWBOX_WIDTH, VIEWBOX_HEIGHT, width, height);

    // 25 equal cells across: the open-string cell, then one per fret.
    let cell_width = VIEWBOX_WIDTH / CELL_COUNT;
    let string_spacing = VIEWBOX_HEIGHT / (STRING_COUNT as f64 + 1.0);

    draw_board(&mut svg, cell_width);
    draw_strings(&mut svg, string_spacing);
    draw_markers(&mut svg, cell_width, string_spacing);
    draw_notes(&mut svg, &labeled_notes(selection), cell_width, string_spacing);

    svg.build()
}

// ═══════════════════════════════════════════════════════════════════════
// Board furniture
// ═══════════════════════════════════════════════════════════════════════

fn draw_board(svg: &mut SvgBuilder, cell_width: f64) {
    svg.rect(0.0, 0.0, VIEWBOX_WIDTH, VIEWBOX_HEIGHT, BOARD_COLOR);
    // The open-string cell is drawn black, like the nut end of a neck.
    svg.rect(0.0, 0.0, cell_width, VIEWBOX_HEIGHT, NUT_COLOR);
    for fret in 1..=FRET_COUNT {
        let x = fret as f64 * cell_width;
        svg.line(x, 0.0, x, VIEWBOX_HEIGHT, FRET_LINE_COLOR, FRET_LINE_WIDTH);
    }
}

fn draw_strings(svg: &mut SvgBuilder, string_spacing: f64) {
    for (index, open) in STANDARD_TUNING.iter().enumerate() {
        let y = (index as f64 + 1.0) * string_spacing;
        svg.line(0.0, y, VIEWBOX_WIDTH, y, STRING_COLOR, STRING_LINE_WIDTH);
        svg.text(
            STRING_NAME_X,
            y,
            open.name(),
            STRING_NAME_SIZE,
            "normal",
            STRING_NAME_COLOR,
            "start",
        );
    }
}

fn draw_markers(svg: &mut SvgBuilder, cell_width: f64, string_spacing: f64) {
    for &fret in MARKER_FRETS.iter() {
        let x = cell_width * fret as f64 + cell_width / 2.0;
        if DOUBLE_MARKER_FRETS.contains(&fret) {
            // Octave frets get two dots, between strings 1–2 and 4–5.
            svg.circle(x, string_spacing * 1.5, MARKER_RADIUS, MARKER_COLOR, "none", 0.0);
            svg.circle(x, string_spacing * 4.5, MARKER_RADIUS, MARKER_COLOR, "none", 0.0);
        } else {
            svg.circle(x, VIEWBOX_HEIGHT / 2.0, MARKER_RADIUS, MARKER_COLOR, "none", 0.0);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Notes
// ═══════════════════════════════════════════════════════════════════════

fn draw_notes(svg: &mut SvgBuilder, notes: &[LabeledNote], cell_width: f64, string_spacing: f64) {
    for string in 0..STRING_COUNT {
        for fret in 0..=FRET_COUNT {
            // When several patterns cover one position, the first
            // contributor's color and label win.
            let note = match notes.iter().find(|n| n.string == string && n.fret == fret) {
                Some(note) => note,
                None => continue,
            };

            let x = cell_width * fret as f64 + cell_width / 2.0;
            let y = (string as f64 + 1.0) * string_spacing;

            if note.is_root {
                let fill = lighten_color(note.color, ROOT_LIGHTEN_FACTOR);
                svg.circle(x, y, NOTE_RADIUS, &fill, ROOT_OUTLINE_COLOR, ROOT_STROKE_WIDTH);
                svg.text(x, y, &note.label, NOTE_LABEL_SIZE, "900", ROOT_TEXT_COLOR, "middle");
            } else {
                svg.circle(x, y, NOTE_RADIUS, note.color, NOTE_OUTLINE_COLOR, NOTE_STROKE_WIDTH);
                svg.text(x, y, &note.label, NOTE_LABEL_SIZE, "bold", NOTE_TEXT_COLOR, "middle");
            }
        }
    }
}

/// Move a hex color toward white by `factor`.
///
/// Accepts "#RGB" or "#RRGGBB" (with or without the hash); emits
/// lowercase "#rrggbb". Unparseable channels read as 0.
fn lighten_color(hex_color: &str, factor: f64) -> String {
    let hex = hex_color.trim_start_matches('#');
    let expanded: String;
    let hex = if hex.len() == 3 {
        expanded = hex.chars().flat_map(|c| [c, c]).collect();
        &expanded
    } else {
        hex
    };

    let channel = |range: std::ops::Range<usize>| -> f64 {
        u8::from_str_radix(hex.get(range).unwrap_or(""), 16).unwrap_or(0) as f64
    };
    let lighten = |c: f64| -> u8 { (c + (255.0 - c) * factor).floor().min(255.0) as u8 };

    format!(
        "#{:02x}{:02x}{:02x}",
        lighten(channel(0..2)),
        lighten(channel(2..4)),
        lighten(channel(4..6))
    )
}
