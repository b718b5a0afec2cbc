//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{render_selection_json_to_svg, selection_json_to_notes_json};

/// Render a selection (as JSON) to SVG.
///
/// Called from Kotlin as:
///   external fun renderSvg(selectionJson: String, pageWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlab_app_FretLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    selection_json: JString,
    page_width: jfloat,
) -> jstring {
    let json: String = match env.get_string(&selection_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let pw = if page_width > 0.0 { Some(page_width as f64) } else { None };

    match render_selection_json_to_svg(&json, pw) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Compute the labeled notes for a selection (as JSON) and return them
/// as a JSON array.
///
/// Called from Kotlin as:
///   external fun selectNotes(selectionJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlab_app_FretLib_selectNotes(
    mut env: JNIEnv,
    _class: JClass,
    selection_json: JString,
) -> jstring {
    let json: String = match env.get_string(&selection_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match selection_json_to_notes_json(&json) {
        Ok(notes) => match env.new_string(&notes) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
