use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{PinchFocus, ViewerConfig};
use crate::consts::{DOUBLE_TAP_ZOOM_SCALE, RESTING_SCALE};
use crate::effects::{TransformUpdate, ViewerEffect};
use crate::geometry::{ImageDisplaySize, ScreenRect, TouchPoint, ViewportBounds};

/// Zoom and offset applied to the displayed image.
///
/// `position_x`/`position_y` are in unscaled image space; the on-screen
/// offset from the viewport center is `position * scale`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub scale: f64,
    pub position_x: f64,
    pub position_y: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformState {
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            position_x: 0.0,
            position_y: 0.0,
        }
    }

    /// On-screen rectangle covered by the image.
    pub fn image_rect(&self, viewport: ViewportBounds, image: ImageDisplaySize) -> ScreenRect {
        let (cx, cy) = viewport.center();
        ScreenRect::from_center_size(
            cx + self.position_x * self.scale,
            cy + self.position_y * self.scale,
            image.display_width * self.scale,
            image.display_height * self.scale,
        )
    }
}

/// Two-finger tracking, reset on every grant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchTracking {
    /// `None` until the first pinch sample of the sequence.
    pub last_distance: Option<f64>,
    pub current_distance: f64,
    /// Finger midpoint relative to the image center.
    pub center_diff_x: f64,
    pub center_diff_y: f64,
}

/// Owns the transform and is the only thing that writes it.
#[derive(Clone, Debug)]
pub struct TransformEngine {
    config: ViewerConfig,
    viewport: ViewportBounds,
    image: ImageDisplaySize,
    state: TransformState,
    pinch: PinchTracking,
    /// Cumulative pan delta seen on the previous sample of this sequence.
    last_pan: Option<(f64, f64)>,
}

impl TransformEngine {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            viewport: ViewportBounds::default(),
            image: ImageDisplaySize::ZERO,
            state: TransformState::identity(),
            pinch: PinchTracking::default(),
            last_pan: None,
        }
    }

    pub fn with_geometry(
        config: ViewerConfig,
        viewport: ViewportBounds,
        image: ImageDisplaySize,
    ) -> Self {
        let mut engine = Self::new(config);
        engine.viewport = viewport;
        engine.image = image;
        engine
    }

    pub fn state(&self) -> TransformState {
        self.state
    }

    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportBounds {
        self.viewport
    }

    pub fn image_size(&self) -> ImageDisplaySize {
        self.image
    }

    pub fn pinch(&self) -> &PinchTracking {
        &self.pinch
    }

    /// Record a new layout measurement. The transform is kept.
    pub fn set_viewport(&mut self, viewport: ViewportBounds) {
        self.viewport = viewport;
    }

    /// Switch to a new image size. The previous transform belonged to the
    /// previous image and is discarded.
    pub fn set_image_size(&mut self, image: ImageDisplaySize) {
        self.image = image;
        self.state = TransformState::identity();
        self.grant();
    }

    /// Start of a claimed touch sequence.
    pub fn grant(&mut self) {
        self.reset_pinch_tracking();
        self.reset_pan_tracking();
    }

    /// Forget the previous finger distance, so the next pinch sample only
    /// records a baseline.
    pub fn reset_pinch_tracking(&mut self) {
        self.pinch = PinchTracking::default();
    }

    /// Forget the previous pan delta, so the next pan sample only records a
    /// baseline.
    pub fn reset_pan_tracking(&mut self) {
        self.last_pan = None;
    }

    pub fn apply_pinch(
        &mut self,
        touch0: &TouchPoint,
        touch1: &TouchPoint,
        effects: &mut Vec<ViewerEffect>,
    ) {
        let center_x = (touch0.page_x + touch1.page_x) / 2.0;
        let center_y = (touch0.page_y + touch1.page_y) / 2.0;
        self.pinch.center_diff_x = center_x - self.image.display_width / 2.0;
        self.pinch.center_diff_y = center_y - self.image.display_height / 2.0;

        let width_distance = (touch0.page_x - touch1.page_x).abs();
        let height_distance = (touch0.page_y - touch1.page_y).abs();
        let distance = round_tenth(width_distance.hypot(height_distance));
        self.pinch.current_distance = distance;

        if let Some(last) = self.pinch.last_distance {
            let before = self.state.scale;
            let target = before + (distance - last) / self.config.zoom_velocity;

            match self.config.pinch_focus {
                PinchFocus::ImageCenter => {
                    self.set_scale(target, None, None, false, effects);
                }
                PinchFocus::TouchCenter => {
                    let after = self.clamp_scale(target);
                    let (vx, vy) = self.viewport.center();
                    let focal_x = center_x - vx;
                    let focal_y = center_y - vy;
                    let shift = (after - before) / (before * after);
                    let x = self.state.position_x - focal_x * shift;
                    let y = self.state.position_y - focal_y * shift;
                    self.set_scale(target, Some(x), Some(y), false, effects);
                }
            }
        }
        self.pinch.last_distance = Some(distance);
    }

    /// Pan by the change in cumulative delta since the previous sample.
    /// The first sample after a grant only records the baseline.
    pub fn apply_pan(&mut self, dx: f64, dy: f64, effects: &mut Vec<ViewerEffect>) {
        if self.state.scale <= self.config.min_scale {
            return;
        }

        let (delta_x, delta_y) = match self.last_pan {
            Some((last_x, last_y)) => (dx - last_x, dy - last_y),
            None => (0.0, 0.0),
        };
        self.last_pan = Some((dx, dy));

        let scale = self.state.scale;
        let x = self.state.position_x + delta_x / scale;
        let y = self.state.position_y + delta_y / scale;
        self.set_scale(scale, Some(x), Some(y), false, effects);
    }

    /// End of a touch sequence: undo any undershoot below the resting scale.
    pub fn release(&mut self, effects: &mut Vec<ViewerEffect>) {
        if self.state.scale < self.config.min_scale {
            debug!(scale = self.state.scale, "Snapping back to minimum scale");
            self.set_scale(self.config.min_scale, Some(0.0), Some(0.0), true, effects);
        }
    }

    /// Toggle between the resting scale and a 2x zoom that keeps the tapped
    /// point fixed on screen.
    pub fn double_tap_at(&mut self, x: f64, y: f64, effects: &mut Vec<ViewerEffect>) {
        if self.state.scale != RESTING_SCALE {
            self.set_scale(RESTING_SCALE, Some(0.0), Some(0.0), true, effects);
            return;
        }

        let before = self.state.scale;
        let after = DOUBLE_TAP_ZOOM_SCALE;
        let diff = after - before;
        let (cx, cy) = self.viewport.center();
        let position_x = (cx - x) * diff / after;
        let position_y = (cy - y) * diff / after;
        self.set_scale(after, Some(position_x), Some(position_y), true, effects);
    }

    /// Write scale (and optionally position), re-applying every bound.
    pub fn set_scale(
        &mut self,
        scale: f64,
        focal_x: Option<f64>,
        focal_y: Option<f64>,
        animated: bool,
        effects: &mut Vec<ViewerEffect>,
    ) -> TransformState {
        let from = self.state;
        let scale = self.clamp_scale(scale);

        let x = focal_x.unwrap_or(self.state.position_x);
        let y = focal_y.unwrap_or(self.state.position_y);
        let next = TransformState {
            scale,
            position_x: clamp_axis(x, self.image.display_width, self.viewport.crop_width, scale),
            position_y: clamp_axis(y, self.image.display_height, self.viewport.crop_height, scale),
        };
        self.state = next;

        let update = if animated {
            TransformUpdate::animated(from, next)
        } else {
            TransformUpdate::immediate(next)
        };
        effects.push(ViewerEffect::Transform(update));
        effects.push(ViewerEffect::ScaleChanged(scale));
        next
    }

    /// Move without touching scale or bounds.
    pub fn pan_to(&mut self, x: f64, y: f64, animated: bool, effects: &mut Vec<ViewerEffect>) {
        let from = self.state;
        self.state.position_x = x;
        self.state.position_y = y;
        let update = if animated {
            TransformUpdate::animated(from, self.state)
        } else {
            TransformUpdate::immediate(self.state)
        };
        effects.push(ViewerEffect::Transform(update));
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        let floor = self.config.scale_floor();
        let clamped = scale.max(floor).min(self.config.max_scale);
        if clamped != scale {
            debug!(requested = scale, clamped, "Scale clamped");
        }
        clamped
    }
}

/// Largest offset (either sign) that keeps the image edge at or beyond the
/// crop edge. Zero when the scaled image fits inside the crop.
pub fn max_offset(display: f64, crop: f64, scale: f64) -> f64 {
    if display * scale <= crop {
        0.0
    } else {
        (display * scale - crop) / 2.0 / scale
    }
}

fn clamp_axis(position: f64, display: f64, crop: f64, scale: f64) -> f64 {
    let max = max_offset(display, crop, scale);
    if max == 0.0 {
        0.0
    } else {
        position.clamp(-max, max)
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
