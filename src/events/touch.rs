use crate::gesture::GestureState;
use crate::scene::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level touch listeners feeding the drag state machine.
///
/// The listeners sit on `window` rather than the object's element so a drag
/// that wanders off the object keeps rotating it. Registration and removal
/// are symmetric: the closures stay owned here and the listeners are removed
/// when the bindings drop.
pub struct TouchBindings {
    window: web::Window,
    on_start: Closure<dyn FnMut(web::TouchEvent)>,
    on_move: Closure<dyn FnMut(web::TouchEvent)>,
    on_end: Closure<dyn FnMut(web::TouchEvent)>,
}

pub fn wire_touch_handlers(
    scene: Rc<RefCell<Scene>>,
    gesture: Rc<RefCell<GestureState>>,
) -> Option<TouchBindings> {
    let window = web::window()?;

    let gesture_start = gesture.clone();
    let on_start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = ev.touches();
        let visible = scene.borrow().placed.visible;
        gesture_start.borrow_mut().touch_start(
            touches.length() as usize,
            first_touch_x(&touches),
            visible,
        );
    }) as Box<dyn FnMut(_)>);

    let gesture_move = gesture.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = ev.touches();
        gesture_move
            .borrow_mut()
            .touch_move(touches.length() as usize, first_touch_x(&touches));
    }) as Box<dyn FnMut(_)>);

    let on_end = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        gesture.borrow_mut().touch_end();
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback("touchstart", on_start.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("touchmove", on_move.as_ref().unchecked_ref());
    _ = window.add_event_listener_with_callback("touchend", on_end.as_ref().unchecked_ref());

    Some(TouchBindings {
        window,
        on_start,
        on_move,
        on_end,
    })
}

impl Drop for TouchBindings {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("touchstart", self.on_start.as_ref().unchecked_ref());
        _ = self
            .window
            .remove_event_listener_with_callback("touchmove", self.on_move.as_ref().unchecked_ref());
        _ = self
            .window
            .remove_event_listener_with_callback("touchend", self.on_end.as_ref().unchecked_ref());
    }
}

fn first_touch_x(touches: &web::TouchList) -> f32 {
    touches.get(0).map(|t| t.client_x() as f32).unwrap_or(0.0)
}
