use glam::{Quat, Vec3};

/// Pose-carrying node state shared between the behaviors.
///
/// Each field group has exactly one writer: the surface tracker owns the
/// reticle's pose and visibility, the placement committer owns the placed
/// object's position and visibility, and the gesture rotator owns `yaw`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entity {
    pub visible: bool,
    pub position: Vec3,
    pub orientation: Quat,
    /// Rotation about the vertical axis, in radians.
    pub yaw: f32,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            visible: false,
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            yaw: 0.0,
        }
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub struct Scene {
    pub reticle: Entity,
    pub placed: Entity,
}
