use tracing::debug;

use crate::consts::SWIPE_DOWN_THRESHOLD;
use crate::effects::ViewerEffect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipePhase {
    #[default]
    Idle,
    Active,
}

/// How an active swipe-dismiss ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// The drag passed the threshold and the viewer should close.
    Committed,
    /// The drag fell short. `recenter` is set when the image should animate
    /// back to the origin.
    Cancelled { recenter: bool },
}

/// Vertical drag-to-dismiss tracking.
#[derive(Clone, Debug, Default)]
pub struct SwipeDismissController {
    phase: SwipePhase,
    offset: f64,
}

impl SwipeDismissController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SwipePhase::Active
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn begin(&mut self, effects: &mut Vec<ViewerEffect>) {
        if self.is_active() {
            return;
        }
        self.phase = SwipePhase::Active;
        self.offset = 0.0;
        effects.push(ViewerEffect::SwipeDismissStart);
    }

    /// The offset follows the cumulative vertical delta `dy`. Returns it.
    pub fn drag(&mut self, dy: f64, effects: &mut Vec<ViewerEffect>) -> f64 {
        if !self.is_active() {
            return self.offset;
        }
        self.offset = dy;
        effects.push(ViewerEffect::SwipeDismissProgress(self.offset));
        self.offset
    }

    /// Finish the swipe. Returns `None` when no swipe was active.
    pub fn release(&mut self, effects: &mut Vec<ViewerEffect>) -> Option<SwipeOutcome> {
        if !self.is_active() {
            return None;
        }

        let offset = self.offset;
        self.phase = SwipePhase::Idle;
        self.offset = 0.0;

        if offset > SWIPE_DOWN_THRESHOLD {
            debug!(offset, "Swipe dismiss committed");
            effects.push(ViewerEffect::Dismissed);
            return Some(SwipeOutcome::Committed);
        }

        debug!(offset, "Swipe dismiss cancelled");
        effects.push(ViewerEffect::SwipeDismissEnd);
        effects.push(ViewerEffect::SwipeDismissProgress(0.0));
        Some(SwipeOutcome::Cancelled {
            recenter: offset < SWIPE_DOWN_THRESHOLD,
        })
    }
}
