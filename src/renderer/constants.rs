//! Shared constants for the fretboard renderer (all in SVG user units).

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const VIEWBOX_WIDTH: f64 = 3000.0;
pub(super) const VIEWBOX_HEIGHT: f64 = 700.0;
pub(super) const CELL_COUNT: f64 = 25.0; // open-string cell + 24 fret cells

// ── Line weights & radii ────────────────────────────────────────────
pub(super) const FRET_LINE_WIDTH: f64 = 8.0;
pub(super) const STRING_LINE_WIDTH: f64 = 6.0;
pub(super) const MARKER_RADIUS: f64 = 32.0;
pub(super) const NOTE_RADIUS: f64 = 45.0;
pub(super) const NOTE_STROKE_WIDTH: f64 = 3.0;
pub(super) const ROOT_STROKE_WIDTH: f64 = 5.0;

// ── Text ────────────────────────────────────────────────────────────
pub(super) const STRING_NAME_SIZE: f64 = 20.0;
pub(super) const STRING_NAME_X: f64 = 10.0; // left edge, inside the nut cell
pub(super) const NOTE_LABEL_SIZE: f64 = 38.0;

// ── Inlay markers ───────────────────────────────────────────────────
pub(super) const MARKER_FRETS: [usize; 10] = [3, 5, 7, 9, 12, 15, 17, 19, 21, 24];
pub(super) const DOUBLE_MARKER_FRETS: [usize; 2] = [12, 24]; // two dots, octaves

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BOARD_COLOR: &str = "#8B4513";
pub(super) const NUT_COLOR: &str = "#000000";
pub(super) const FRET_LINE_COLOR: &str = "#000";
pub(super) const STRING_COLOR: &str = "#CCC";
pub(super) const MARKER_COLOR: &str = "#FFF";
pub(super) const STRING_NAME_COLOR: &str = "#FFF";
pub(super) const NOTE_OUTLINE_COLOR: &str = "#000000";
pub(super) const ROOT_OUTLINE_COLOR: &str = "#FFFFFF";
pub(super) const NOTE_TEXT_COLOR: &str = "#FFFFFF";
pub(super) const ROOT_TEXT_COLOR: &str = "#000000";

// ── Root styling ────────────────────────────────────────────────────
pub(super) const ROOT_LIGHTEN_FACTOR: f64 = 0.7; // toward white
