use std::fmt;

use tracing::debug;

use crate::consts::{DEAD_ZONE_THRESHOLD, SWIPE_DOWN_SENSE, SWIPE_DOWN_TOLERANCE};
use crate::geometry::GestureSample;

/// What the current touch sequence has been recognised as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureIntent {
    #[default]
    Idle,
    Panning,
    Pinching,
    SwipeDismissing,
}

impl fmt::Display for GestureIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Panning => write!(f, "Pan"),
            Self::Pinching => write!(f, "Pinch"),
            Self::SwipeDismissing => write!(f, "Swipe dismiss"),
        }
    }
}

/// Outcome of classifying one move sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimDecision {
    pub claim: bool,
    pub intent: GestureIntent,
    /// Set on the sample that commits to swipe-dismiss.
    pub swipe_started: bool,
}

impl ClaimDecision {
    fn reject() -> Self {
        Self {
            claim: false,
            intent: GestureIntent::Idle,
            swipe_started: false,
        }
    }

    fn claim(intent: GestureIntent) -> Self {
        Self {
            claim: true,
            intent,
            swipe_started: false,
        }
    }
}

/// Decides, per move sample, whether the engine owns the touch sequence and
/// what the sequence means.
///
/// Until the sequence is claimed every sample is checked against the full
/// rule table. Once claimed, swipe-dismiss sticks until [`reset`], pinch
/// holds while two or more fingers are down, and pan is re-derived from the
/// scale on every sample.
///
/// [`reset`]: GestureClassifier::reset
#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    intent: GestureIntent,
    claimed: bool,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self) -> GestureIntent {
        self.intent
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Forget the sequence. Called when a touch sequence starts or ends.
    pub fn reset(&mut self) {
        self.intent = GestureIntent::Idle;
        self.claimed = false;
    }

    pub fn classify(&mut self, sample: &GestureSample, scale: f64, min_scale: f64) -> ClaimDecision {
        if self.intent == GestureIntent::SwipeDismissing {
            return ClaimDecision::claim(GestureIntent::SwipeDismissing);
        }

        let decision = if self.claimed {
            ClaimDecision::claim(claimed_intent(sample.touch_count(), scale, min_scale))
        } else if sample.touch_count() <= 1 {
            classify_single(sample.dx, sample.dy, scale, min_scale)
        } else {
            ClaimDecision::claim(GestureIntent::Pinching)
        };

        if decision.intent != self.intent {
            debug!(from = %self.intent, to = %decision.intent, scale, "Gesture intent changed");
        }
        self.intent = decision.intent;
        self.claimed |= decision.claim;
        decision
    }
}

fn claimed_intent(touch_count: usize, scale: f64, min_scale: f64) -> GestureIntent {
    if touch_count > 1 {
        GestureIntent::Pinching
    } else if scale > min_scale {
        GestureIntent::Panning
    } else {
        GestureIntent::Idle
    }
}

fn classify_single(dx: f64, dy: f64, scale: f64, min_scale: f64) -> ClaimDecision {
    if scale <= min_scale && dy >= SWIPE_DOWN_SENSE && dx.abs() < SWIPE_DOWN_TOLERANCE {
        return ClaimDecision {
            claim: true,
            intent: GestureIntent::SwipeDismissing,
            swipe_started: true,
        };
    }

    let in_dead_zone = dx.abs() <= DEAD_ZONE_THRESHOLD && dy.abs() <= DEAD_ZONE_THRESHOLD;
    if in_dead_zone && scale > min_scale {
        return ClaimDecision::reject();
    }

    if scale > min_scale {
        ClaimDecision::claim(GestureIntent::Panning)
    } else {
        ClaimDecision::reject()
    }
}
