use crate::bus::SceneEvent;
use crate::scene::Entity;
use glam::{Quat, Vec3};

/// Apply one frame's hit-test outcome to the reticle.
///
/// A hit makes the reticle visible and overwrites its pose exactly as the
/// hit test reported it; no smoothing, no outlier rejection. No hit hides
/// the reticle but leaves the last pose in place.
pub fn update_from_hit(reticle: &mut Entity, hit: Option<(Vec3, Quat)>) {
    match hit {
        Some((position, orientation)) => {
            reticle.visible = true;
            reticle.position = position;
            reticle.orientation = orientation;
        }
        None => reticle.visible = false,
    }
}

/// Snapshot the reticle pose for a user confirmation. An invisible reticle
/// means there is no surface under it, so there is nothing to confirm.
pub fn confirmation(reticle: &Entity) -> Option<SceneEvent> {
    reticle.visible.then(|| SceneEvent::SurfaceConfirmed {
        position: reticle.position,
        orientation: reticle.orientation,
    })
}
