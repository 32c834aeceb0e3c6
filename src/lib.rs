#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod bus;
mod constants;
mod dom;
mod events;
mod frame;
mod gesture;
mod overlay;
mod placement;
mod reticle;
mod scene;
mod session;
mod xr_hittest;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ar-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// The committer trusts the confirmation payload; it never re-reads the
/// reticle. It owns the placed object's position and visibility only, so
/// orientation and yaw pass through untouched.
fn wire_placement(
    document: &web::Document,
    scene: &Rc<RefCell<scene::Scene>>,
    bus: &Rc<RefCell<bus::EventBus>>,
) {
    let scene = scene.clone();
    let document = document.clone();
    bus.borrow_mut().subscribe(move |event| {
        let bus::SceneEvent::SurfaceConfirmed { position, .. } = *event;
        placement::commit(&mut scene.borrow_mut().placed, position);
        overlay::set_hint(&document, overlay::ROTATE_HINT);
        log::info!(
            "[placement] object placed at ({:.2}, {:.2}, {:.2})",
            position.x,
            position.y,
            position.z
        );
    });
}

/// Per-behavior configuration comes from data attributes on the page; the
/// rotation speed factor falls back to the default when absent.
fn rotation_speed(document: &web::Document) -> f32 {
    document
        .get_element_by_id("enter-ar")
        .and_then(|el| el.get_attribute("data-rotation-speed"))
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(constants::DEFAULT_ROTATION_SPEED)
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let scene = Rc::new(RefCell::new(scene::Scene::default()));
    let gesture = Rc::new(RefCell::new(gesture::GestureState::new(rotation_speed(
        &document,
    ))));
    let bus = Rc::new(RefCell::new(bus::EventBus::default()));
    let xr_state = Rc::new(RefCell::new(session::XrState::default()));

    wire_placement(&document, &scene, &bus);

    let touch = events::touch::wire_touch_handlers(scene.clone(), gesture.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        gesture,
        touch,
        last_instant: Instant::now(),
    }));

    session::wire_enter_button(&document, xr_state, scene, bus, frame_ctx.clone());
    frame::start_loop(frame_ctx);

    log::info!("[init] behaviors wired");
    Ok(())
}
