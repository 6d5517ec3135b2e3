/// Accumulated downward drag (px) that must be exceeded for a swipe to dismiss.
pub const SWIPE_DOWN_THRESHOLD: f64 = 200.0;

/// Downward drag (px) at which a one-finger sequence is recognised as a swipe-dismiss.
pub const SWIPE_DOWN_SENSE: f64 = 10.0;

/// Largest horizontal drift (px, exclusive) still allowed for a swipe-dismiss.
pub const SWIPE_DOWN_TOLERANCE: f64 = 5.0;

/// Movement (px) below which a one-finger drag is treated as jitter.
pub const DEAD_ZONE_THRESHOLD: f64 = 5.0;

/// Maximum gap between two taps for them to count as a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 400;

/// Duration of every animated transform transition.
pub const ANIMATION_DURATION_MS: u64 = 150;

/// Scale a double tap zooms to from the resting scale.
pub const DOUBLE_TAP_ZOOM_SCALE: f64 = 2.0;

/// Resting scale a double tap returns to.
pub const RESTING_SCALE: f64 = 1.0;

pub const DEFAULT_MIN_SCALE: f64 = 1.0;

pub const DEFAULT_MAX_SCALE: f64 = 5.0;

/// Pinch damping: pixels of finger-distance change per unit of scale.
/// Larger values make pinch less sensitive.
pub const DEFAULT_ZOOM_VELOCITY: f64 = 150.0;

/// Swipe-dismiss progress at which the host overlay reaches its dimmest opacity.
pub const OVERLAY_PROGRESS_RANGE: f64 = 350.0;

/// Overlay opacity once progress reaches [`OVERLAY_PROGRESS_RANGE`].
pub const OVERLAY_MIN_OPACITY: f64 = 0.4;
