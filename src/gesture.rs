use crate::constants::{
    DEFAULT_ROTATION_SPEED, DRAG_SENSITIVITY_RAD_PER_PX, ROTATION_EPSILON_RAD, ROTATION_TAU_SEC,
};

/// Single-finger drag state driving damped yaw rotation.
///
/// `target_yaw` accumulates while a drag is active; `current_yaw` chases it
/// every frame with first-order exponential smoothing. The drag flag and
/// reference coordinate reset on touch end; the angles persist.
#[derive(Clone, Copy, Debug)]
pub struct GestureState {
    pub dragging: bool,
    pub last_x: f32,
    pub target_yaw: f32,
    pub current_yaw: f32,
    pub speed: f32,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_SPEED)
    }
}

impl GestureState {
    pub fn new(speed: f32) -> Self {
        Self {
            dragging: false,
            last_x: 0.0,
            target_yaw: 0.0,
            current_yaw: 0.0,
            speed,
        }
    }

    /// Touch-start: a drag begins only for a single contact over a visible
    /// object. Anything else leaves the state unchanged.
    pub fn touch_start(&mut self, contacts: usize, x: f32, object_visible: bool) {
        if !object_visible || contacts != 1 {
            return;
        }
        self.dragging = true;
        self.last_x = x;
    }

    /// Touch-move: while dragging with one contact, the horizontal
    /// displacement since the previous sample becomes a target-yaw delta.
    /// Dragging right turns the object left, hence the subtraction. The
    /// reference coordinate resets each sample, so deltas are incremental.
    /// A contact count other than one ends the drag; moves while idle are
    /// ignored.
    pub fn touch_move(&mut self, contacts: usize, x: f32) {
        if !self.dragging {
            return;
        }
        if contacts != 1 {
            self.dragging = false;
            return;
        }
        let dx = x - self.last_x;
        self.target_yaw -= DRAG_SENSITIVITY_RAD_PER_PX * self.speed * dx;
        self.last_x = x;
    }

    /// Touch-end: the drag stops but the target is preserved; the displayed
    /// angle keeps settling toward it.
    pub fn touch_end(&mut self) {
        self.dragging = false;
    }

    /// One damping step. Returns the new displayed yaw when it moved, or
    /// `None` once the error is negligible (no write that frame).
    ///
    /// `alpha < 1` for any positive dt, so the approach is single-sided
    /// exponential decay: monotonic, never overshooting.
    pub fn step(&mut self, dt_sec: f32) -> Option<f32> {
        let error = shortest_arc(self.target_yaw - self.current_yaw);
        if error.abs() <= ROTATION_EPSILON_RAD {
            return None;
        }
        let alpha = 1.0 - (-dt_sec / ROTATION_TAU_SEC).exp();
        self.current_yaw += error * alpha;
        Some(self.current_yaw)
    }
}

/// Wrap an angle difference onto [-PI, PI).
fn shortest_arc(diff: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    (diff + PI).rem_euclid(TAU) - PI
}
