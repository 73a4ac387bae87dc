//! Utility functions for the form builder component.
//!
//! - **User Feedback**: temporary "toast" notifications for save/load results
//!   and rejected edits.
//! - **Dirty tracking**: MD5 of the serialized form, mirrored into the global
//!   `window.app_dirty` flag read by the `beforeunload` handler in `index.html`.
//! - **Input parsing**: the comma separated MIME list of file-upload questions.

use std::collections::BTreeSet;

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use common::model::form::FormDefinition;

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// MD5 hex digest of the form's JSON representation.
///
/// Serialization of a `FormDefinition` cannot fail (string keys only); an
/// empty string is hashed in that case anyway so the caller never panics.
pub fn compute_md5(form: &FormDefinition) -> String {
    let json = serde_json::to_string(form).unwrap_or_default();
    format!("{:x}", md5::compute(json))
}

/// Publishes the dirty state as `window.app_dirty`.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

/// Splits `"image/*, application/pdf"` into a set, dropping blanks.
/// Entries are lower-cased; validity is checked by the store.
pub fn parse_file_types(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|entry| entry.trim().to_ascii_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Inverse of `parse_file_types`, for the input's current value.
pub fn format_file_types(types: &BTreeSet<String>) -> String {
    types.iter().cloned().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_types_are_trimmed_lowercased_and_deduplicated() {
        let types = parse_file_types(" Image/* ,application/pdf,, image/* ");
        assert_eq!(
            types.into_iter().collect::<Vec<_>>(),
            vec!["application/pdf".to_string(), "image/*".to_string()]
        );
    }

    #[test]
    fn formatting_lists_types_in_order() {
        let types = parse_file_types("image/png, application/pdf");
        assert_eq!(format_file_types(&types), "application/pdf, image/png");
        assert_eq!(format_file_types(&BTreeSet::new()), "");
    }

    #[test]
    fn checksum_tracks_form_content() {
        let mut form = FormDefinition::default();
        let before = compute_md5(&form);
        assert_eq!(before, compute_md5(&form.clone()));
        form.set_name("Permiso de obra");
        assert_ne!(before, compute_md5(&form));
    }
}
