/// Gesture and rotation smoothing tuning constants.
///
/// These express intended behavior (sensitivities, time constants,
/// thresholds) and keep magic numbers out of the code.
// Radians of target-yaw change per CSS pixel of horizontal drag, before the
// per-instance speed factor is applied.
pub const DRAG_SENSITIVITY_RAD_PER_PX: f32 = 0.01;

// Speed factor used when no explicit configuration is given.
pub const DEFAULT_ROTATION_SPEED: f32 = 2.0;

// Yaw errors at or below this are treated as settled; the displayed angle
// stops being written until a new drag perturbs the target.
pub const ROTATION_EPSILON_RAD: f32 = 1e-4;

// Smoothing time constant. One 60 Hz frame covers ~10% of the remaining
// error; slower frames cover proportionally more, so the settling feel is
// frame-rate independent.
pub const ROTATION_TAU_SEC: f32 = 0.158;
