use glam::{Quat, Vec3};

/// Events routed between behaviors. Payloads are snapshots by value; a
/// subscriber never sees live references into another behavior's state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// The user confirmed placement while the reticle was on a surface.
    SurfaceConfirmed { position: Vec3, orientation: Quat },
}

/// Minimal dispatcher connecting the behaviors. Handlers are injected at
/// wiring time instead of listening on an ambient global surface.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Box<dyn FnMut(&SceneEvent)>>,
}

impl EventBus {
    pub fn subscribe(&mut self, handler: impl FnMut(&SceneEvent) + 'static) {
        self.subscribers.push(Box::new(handler));
    }

    pub fn emit(&mut self, event: &SceneEvent) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(event);
        }
    }
}
