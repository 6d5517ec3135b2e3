use crate::animation::TransformAnimation;
use crate::transform::TransformState;

/// A new transform for the renderer, optionally reached by animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformUpdate {
    pub state: TransformState,
    pub animation: Option<TransformAnimation>,
}

impl TransformUpdate {
    pub fn immediate(state: TransformState) -> Self {
        Self {
            state,
            animation: None,
        }
    }

    pub fn animated(from: TransformState, to: TransformState) -> Self {
        Self {
            state: to,
            animation: Some(TransformAnimation::new(from, to)),
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animation.is_some()
    }
}

/// Side effects produced by the gesture engine, in emission order.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEffect {
    Transform(TransformUpdate),
    /// Final, post-clamp scale after any scale write.
    ScaleChanged(f64),
    SwipeDismissStart,
    /// Accumulated vertical drag while swipe-dismissing. Uncapped.
    SwipeDismissProgress(f64),
    SwipeDismissEnd,
    /// The swipe crossed the threshold; the host should close the viewer.
    Dismissed,
}

/// Receives engine effects. All methods default to no-ops.
pub trait GestureObserver {
    fn on_transform(&mut self, _update: &TransformUpdate) {}

    fn on_scale_changed(&mut self, _scale: f64) {}

    fn on_swipe_dismiss_start(&mut self) {}

    fn on_swipe_dismiss_progress(&mut self, _offset: f64) {}

    fn on_swipe_dismiss_end(&mut self) {}

    fn on_dismiss(&mut self) {}
}

/// Observer that ignores everything.
pub struct NoOpObserver;
impl GestureObserver for NoOpObserver {}

/// Forward effects to an observer in order.
pub fn dispatch<O: GestureObserver + ?Sized>(effects: &[ViewerEffect], observer: &mut O) {
    for effect in effects {
        match effect {
            ViewerEffect::Transform(update) => observer.on_transform(update),
            ViewerEffect::ScaleChanged(scale) => observer.on_scale_changed(*scale),
            ViewerEffect::SwipeDismissStart => observer.on_swipe_dismiss_start(),
            ViewerEffect::SwipeDismissProgress(offset) => {
                observer.on_swipe_dismiss_progress(*offset)
            }
            ViewerEffect::SwipeDismissEnd => observer.on_swipe_dismiss_end(),
            ViewerEffect::Dismissed => observer.on_dismiss(),
        }
    }
}
