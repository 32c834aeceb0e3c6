use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wire a click handler to an element by id. A missing element is logged
/// and skipped; whatever needed the element stays inactive.
pub fn wire_click(document: &web::Document, element_id: &str, mut handler: impl FnMut() + 'static) {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::error!("[dom] missing #{element_id}");
        return;
    };
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
