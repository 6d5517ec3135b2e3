use std::time::Duration;

use crate::consts::ANIMATION_DURATION_MS;
use crate::transform::TransformState;

/// Easing curve applied to animated transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A transition the renderer plays from `from` to `to`.
///
/// The engine's live state is already `to` when this is emitted; the
/// animation only describes how the renderer gets there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformAnimation {
    pub from: TransformState,
    pub to: TransformState,
    pub duration: Duration,
    pub easing: Easing,
}

impl TransformAnimation {
    pub fn new(from: TransformState, to: TransformState) -> Self {
        Self {
            from,
            to,
            duration: Duration::from_millis(ANIMATION_DURATION_MS),
            easing: Easing::default(),
        }
    }

    /// Interpolated state `elapsed` into the transition.
    pub fn sample(&self, elapsed: Duration) -> TransformState {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = self.easing.apply(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        TransformState {
            scale: lerp(self.from.scale, self.to.scale),
            position_x: lerp(self.from.position_x, self.to.position_x),
            position_y: lerp(self.from.position_y, self.to.position_y),
        }
    }
}
