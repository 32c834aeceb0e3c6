use crate::events::touch::TouchBindings;
use crate::gesture::GestureState;
use crate::scene::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state stepped by whichever loop is rendering.
///
/// Two loops drive this: the window `requestAnimationFrame` loop running for
/// the page lifetime, and the XR session loop while immersive mode is
/// active. Damping advances by measured elapsed time, so steps from either
/// loop compose without double-counting.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub gesture: Rc<RefCell<GestureState>>,
    /// Owns the window-level touch listeners; dropping this removes them.
    pub touch: Option<TouchBindings>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Rotation settles only while there is a visible object to rotate.
        let mut scene = self.scene.borrow_mut();
        if !scene.placed.visible {
            return;
        }
        if let Some(yaw) = self.gesture.borrow_mut().step(dt.as_secs_f32()) {
            scene.placed.yaw = yaw;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
