//! fretlib — fretboard note-mapping, scale and pattern library for FretLab.
//!
//! Maps every position of a 24-fret guitar in standard tuning to its
//! pitch, selects notes by pitch, scale, or fingering pattern, and
//! renders the result as SVG.
//!
//! # Example
//! ```
//! use fretlib::{select_notes, PitchClass, Selection, SelectionMode};
//!
//! let selection = Selection {
//!     key: PitchClass::A,
//!     mode: SelectionMode::SinglePitch,
//!     ..Default::default()
//! };
//! let notes = select_notes(&selection);
//! assert_eq!(notes.len(), 13);
//! assert!(notes.iter().all(|n| n.pitch_class == PitchClass::A));
//! ```

pub mod fretboard;
pub mod model;
pub mod pattern;
pub mod renderer;
pub mod scale;
pub mod selection;

#[cfg(target_os = "android")]
pub mod android;

pub use fretboard::{note_at, positions_of, FRET_COUNT, STANDARD_TUNING, STRING_COUNT};
pub use model::*;
pub use pattern::{generate_pattern_notes, PatternFamily, PatternTemplate};
pub use renderer::render_selection_to_svg;
pub use scale::{all_scale_notes, ScaleKind};
pub use selection::{
    labeled_notes, labeled_notes_json, select_notes, selection_from_json, LabeledNote, Notation,
    Selection, SelectionMode,
};

/// Parse a selection from JSON and render it to SVG.
/// Convenience function combining parsing and rendering.
///
/// `page_width` sets the SVG width in user units. Pass `None` to emit at
/// the native 3000×700 size; on phones, pass the screen width in points.
pub fn render_selection_json_to_svg(
    selection_json: &str,
    page_width: Option<f64>,
) -> Result<String, String> {
    let selection = selection_from_json(selection_json)?;
    Ok(render_selection_to_svg(&selection, page_width))
}

/// Parse a selection from JSON and return its labeled notes as JSON.
/// Useful for passing data across FFI boundaries.
pub fn selection_json_to_notes_json(selection_json: &str) -> Result<String, String> {
    let selection = selection_from_json(selection_json)?;
    labeled_notes_json(&selection)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Compute the labeled notes for a selection and return them as a JSON
/// C string. The caller must free the returned string with
/// `fretlib_free_string`.
///
/// # Safety
/// `selection_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_select_notes(selection_json: *const c_char) -> *mut c_char {
    if selection_json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(selection_json) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match selection_json_to_notes_json(json) {
        Ok(notes) => CString::new(notes).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a selection to SVG and return it as a C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// `page_width` sets the SVG width in user units. Pass 0.0 to emit at
/// the native size.
///
/// # Safety
/// `selection_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_svg(
    selection_json: *const c_char,
    page_width: f64,
) -> *mut c_char {
    if selection_json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(selection_json) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let pw = if page_width > 0.0 { Some(page_width) } else { None };

    match render_selection_json_to_svg(json, pw) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
