use web_sys as web;

const OVERLAY_ID: &str = "overlay";

/// Caption shown once an object has been placed.
pub const ROTATE_HINT: &str = "Drag horizontally to rotate";

/// Set the instruction caption. Pages without the overlay element simply
/// get no caption.
pub fn set_hint(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        el.set_text_content(Some(text));
    }
}
