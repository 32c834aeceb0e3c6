use crate::scene::Entity;
use glam::Vec3;

/// Copy a confirmed surface position onto the placed object and reveal it.
///
/// The confirmation payload is the single source of truth for the commit.
/// Orientation and yaw belong to other writers and are left untouched.
/// Committing again while already placed just moves the object to the
/// latest confirmed position.
pub fn commit(placed: &mut Entity, position: Vec3) {
    placed.position = position;
    placed.visible = true;
}
