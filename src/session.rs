use crate::bus::EventBus;
use crate::dom;
use crate::frame::FrameContext;
use crate::reticle;
use crate::scene::Scene;
use glam::{Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use crate::xr_hittest::{self, XrHitTestOptionsInit, XrHitTestResult, XrHitTestSource};
use web_sys as web;

/// WebXR handles for one immersive session.
///
/// Everything is optional: the reference spaces and the hit-test source
/// resolve independently after the session starts, and all of it is cleared
/// when the session ends. Hit testing never runs before both the source and
/// the local space are present.
#[derive(Default)]
pub struct XrState {
    pub session: Option<web::XrSession>,
    pub viewer_space: Option<web::XrReferenceSpace>,
    pub local_space: Option<web::XrReferenceSpace>,
    pub hit_source: Option<XrHitTestSource>,
}

/// Entering immersive mode hangs off the page's Enter-AR button.
pub fn wire_enter_button(
    document: &web::Document,
    state: Rc<RefCell<XrState>>,
    scene: Rc<RefCell<Scene>>,
    bus: Rc<RefCell<EventBus>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    dom::wire_click(document, "enter-ar", move || {
        let state = state.clone();
        let scene = scene.clone();
        let bus = bus.clone();
        let frame_ctx = frame_ctx.clone();
        spawn_local(async move {
            begin_session(state, scene, bus, frame_ctx).await;
        });
    });
}

/// Request an immersive-ar session with hit testing and wire it up. Every
/// failure is logged and leaves the corresponding capability inactive; none
/// of them reach the host page.
async fn begin_session(
    state: Rc<RefCell<XrState>>,
    scene: Rc<RefCell<Scene>>,
    bus: Rc<RefCell<EventBus>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    let Some(window) = web::window() else { return };
    let xr = window.navigator().xr();
    if xr.is_undefined() {
        log::error!("[session] WebXR not available in this browser");
        return;
    }

    let session_init = web::XrSessionInit::new();
    let features = [wasm_bindgen::JsValue::from_str("hit-test")];
    session_init.set_required_features(&features);

    let requested =
        JsFuture::from(xr.request_session_with_options(web::XrSessionMode::ImmersiveAr, &session_init))
            .await;
    let session: web::XrSession = match requested {
        Ok(value) => value.unchecked_into(),
        Err(e) => {
            log::error!("[session] immersive-ar session request failed: {:?}", e);
            return;
        }
    };
    log::info!("[session] immersive-ar session started");
    state.borrow_mut().session = Some(session.clone());

    wire_select(&session, scene.clone(), bus);
    wire_end(&session, state.clone());
    request_spaces(&session, state.clone());
    start_xr_loop(&session, state, scene, frame_ctx);
}

/// The two reference spaces resolve as independent fire-and-forget futures.
/// The viewer space anchors the hit-test ray, so the source request chains
/// onto it; the local space expresses resulting poses.
fn request_spaces(session: &web::XrSession, state: Rc<RefCell<XrState>>) {
    let session_viewer = session.clone();
    let state_viewer = state.clone();
    spawn_local(async move {
        let requested =
            JsFuture::from(session_viewer.request_reference_space(web::XrReferenceSpaceType::Viewer))
                .await;
        match requested {
            Ok(value) => {
                let space: web::XrReferenceSpace = value.unchecked_into();
                state_viewer.borrow_mut().viewer_space = Some(space.clone());
                request_hit_source(&session_viewer, &space, state_viewer).await;
            }
            Err(e) => log::error!("[session] viewer reference space request failed: {:?}", e),
        }
    });

    let session_local = session.clone();
    spawn_local(async move {
        let requested =
            JsFuture::from(session_local.request_reference_space(web::XrReferenceSpaceType::Local))
                .await;
        match requested {
            Ok(value) => state.borrow_mut().local_space = Some(value.unchecked_into()),
            Err(e) => log::error!("[session] local reference space request failed: {:?}", e),
        }
    });
}

async fn request_hit_source(
    session: &web::XrSession,
    viewer: &web::XrReferenceSpace,
    state: Rc<RefCell<XrState>>,
) {
    let options = XrHitTestOptionsInit::new(viewer);
    match JsFuture::from(xr_hittest::request_hit_test_source(session, &options)).await {
        Ok(value) => {
            log::info!("[session] hit test source obtained");
            state.borrow_mut().hit_source = Some(value.unchecked_into());
        }
        Err(e) => log::error!("[session] hit test source request failed: {:?}", e),
    }
}

/// A user select over a visible reticle confirms the surface. The reticle
/// pose is snapshotted into the event; an invisible reticle means there is
/// nothing to place, so the select is ignored.
fn wire_select(session: &web::XrSession, scene: Rc<RefCell<Scene>>, bus: Rc<RefCell<EventBus>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::XrInputSourceEvent| {
        let confirmed = reticle::confirmation(&scene.borrow().reticle);
        if let Some(event) = confirmed {
            log::info!("[session] surface confirmed");
            bus.borrow_mut().emit(&event);
        }
    }) as Box<dyn FnMut(_)>);
    _ = session.add_event_listener_with_callback("select", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Session end disables tracking without touching the reticle's own state.
/// The XR loop sees the cleared session and stops rescheduling itself.
fn wire_end(session: &web::XrSession, state: Rc<RefCell<XrState>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::XrSessionEvent| {
        log::info!("[session] session ended");
        let mut s = state.borrow_mut();
        s.hit_source = None;
        s.viewer_space = None;
        s.local_space = None;
        s.session = None;
    }) as Box<dyn FnMut(_)>);
    _ = session.add_event_listener_with_callback("end", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn start_xr_loop(
    session: &web::XrSession,
    state: Rc<RefCell<XrState>>,
    scene: Rc<RefCell<Scene>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64, web::XrFrame)>>>> =
        Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_time: f64, xr_frame: web::XrFrame| {
        if let Some(hit) = sample_hit_test(&xr_frame, &state.borrow()) {
            reticle::update_from_hit(&mut scene.borrow_mut().reticle, hit);
        }
        frame_ctx.borrow_mut().frame();
        if let Some(session) = state.borrow().session.as_ref() {
            _ = session.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut(f64, web::XrFrame)>));
    _ = session.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

/// Query this frame's hit-test results. `None` while the source or the
/// local space has not resolved (sampling inactive, reticle untouched);
/// `Some(None)` on a miss or a null pose (reticle hides); `Some(Some(..))`
/// carries the first result's pose exactly as returned.
fn sample_hit_test(frame: &web::XrFrame, state: &XrState) -> Option<Option<(Vec3, Quat)>> {
    let source = state.hit_source.as_ref()?;
    let local = state.local_space.as_ref()?;

    let results = xr_hittest::get_hit_test_results(frame, source);
    if results.length() == 0 {
        return Some(None);
    }
    let first: XrHitTestResult = results.get(0).unchecked_into();
    let Some(pose) = first.get_pose(local) else {
        return Some(None);
    };
    let transform = pose.transform();
    let p = transform.position();
    let o = transform.orientation();
    Some(Some((
        Vec3::new(p.x() as f32, p.y() as f32, p.z() as f32),
        Quat::from_xyzw(o.x() as f32, o.y() as f32, o.z() as f32, o.w() as f32),
    )))
}
