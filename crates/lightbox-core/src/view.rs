use tracing::debug;

use crate::classifier::{GestureClassifier, GestureIntent};
use crate::config::ViewerConfig;
use crate::consts::DEAD_ZONE_THRESHOLD;
use crate::double_tap::DoubleTapDetector;
use crate::effects::ViewerEffect;
use crate::error::Result;
use crate::geometry::{GestureSample, ImageDisplaySize, ReleaseSample, ViewportBounds};
use crate::size::{ImageSizeResolver, PendingSize};
use crate::swipe::{SwipeDismissController, SwipeOutcome};
use crate::transform::{TransformEngine, TransformState};

/// One mounted image: routes touch samples through the classifier into the
/// transform engine or the swipe controller, and tracks the image size.
pub struct ZoomView {
    engine: TransformEngine,
    classifier: GestureClassifier,
    swipe: SwipeDismissController,
    double_tap: DoubleTapDetector,
    pending: Option<PendingSize>,
    disposed: bool,
    /// Largest cumulative single-axis delta seen in the current sequence.
    travel: f64,
}

impl ZoomView {
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            engine: TransformEngine::new(config),
            classifier: GestureClassifier::new(),
            swipe: SwipeDismissController::new(),
            double_tap: DoubleTapDetector::new(),
            pending: None,
            disposed: false,
            travel: 0.0,
        })
    }

    pub fn with_geometry(
        config: ViewerConfig,
        viewport: ViewportBounds,
        image: ImageDisplaySize,
    ) -> Result<Self> {
        let mut view = Self::new(config)?;
        view.engine.set_viewport(viewport);
        view.engine.set_image_size(image);
        Ok(view)
    }

    pub fn state(&self) -> TransformState {
        self.engine.state()
    }

    pub fn engine(&self) -> &TransformEngine {
        &self.engine
    }

    pub fn intent(&self) -> GestureIntent {
        self.classifier.intent()
    }

    pub fn swipe(&self) -> &SwipeDismissController {
        &self.swipe
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_viewport(&mut self, viewport: ViewportBounds) {
        self.engine.set_viewport(viewport);
    }

    /// Apply a resolved display size. Ignored once disposed.
    pub fn set_display_size(&mut self, size: ImageDisplaySize) -> bool {
        if self.disposed {
            debug!("Discarding display size for disposed view");
            return false;
        }
        self.engine.set_image_size(size);
        true
    }

    /// Start resolving the display size of a new source. Any lookup still in
    /// flight for the previous source is abandoned.
    pub fn load_source(
        &mut self,
        resolver: &ImageSizeResolver,
        source_id: Option<String>,
        has_default_source: bool,
    ) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        self.pending = Some(resolver.spawn(source_id, has_default_source)?);
        Ok(())
    }

    /// Pick up a finished size lookup, if any.
    pub fn poll_size(&mut self) -> Option<ImageDisplaySize> {
        if self.disposed {
            self.pending = None;
            return None;
        }
        let size = self.pending.as_ref()?.try_take()?;
        self.pending = None;
        self.set_display_size(size);
        Some(size)
    }

    /// Unmount. Late size results are dropped from here on.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = None;
    }

    /// A finger went down on an idle view.
    pub fn touch_start(&mut self) {
        self.classifier.reset();
        self.travel = 0.0;
    }

    pub fn touch_move(&mut self, sample: &GestureSample) -> Vec<ViewerEffect> {
        let mut effects = Vec::new();
        let was_claimed = self.classifier.is_claimed();
        let previous = self.classifier.intent();
        self.travel = self.travel.max(sample.dx.abs()).max(sample.dy.abs());

        let decision = self.classifier.classify(
            sample,
            self.engine.scale(),
            self.engine.config().min_scale,
        );
        if !decision.claim {
            return effects;
        }

        if !was_claimed {
            self.engine.grant();
        } else if decision.intent != previous {
            match decision.intent {
                GestureIntent::Pinching => self.engine.reset_pinch_tracking(),
                GestureIntent::Panning => self.engine.reset_pan_tracking(),
                _ => {}
            }
        }

        if decision.swipe_started {
            self.swipe.begin(&mut effects);
        }

        match decision.intent {
            GestureIntent::Pinching => {
                if let [touch0, touch1, ..] = sample.touches.as_slice() {
                    self.engine.apply_pinch(touch0, touch1, &mut effects);
                }
            }
            GestureIntent::Panning => self.engine.apply_pan(sample.dx, sample.dy, &mut effects),
            GestureIntent::SwipeDismissing => {
                let offset = self.swipe.drag(sample.dy, &mut effects);
                let x = self.engine.state().position_x;
                self.engine.pan_to(x, offset, false, &mut effects);
            }
            GestureIntent::Idle => {}
        }
        effects
    }

    /// All fingers lifted.
    pub fn touch_end(&mut self, release: &ReleaseSample) -> Vec<ViewerEffect> {
        let mut effects = Vec::new();
        let was_claimed = self.classifier.is_claimed();
        let moved = self.travel > DEAD_ZONE_THRESHOLD;
        self.classifier.reset();
        self.travel = 0.0;

        match self.swipe.release(&mut effects) {
            Some(SwipeOutcome::Committed) => return effects,
            Some(SwipeOutcome::Cancelled { recenter: true }) => {
                self.engine.pan_to(0.0, 0.0, true, &mut effects);
            }
            _ => {}
        }

        self.engine.release(&mut effects);

        // A finger that left the dead zone was a drag, even if nothing claimed it.
        if !was_claimed && !moved {
            if let Some(touch) = release.single_touch() {
                let (x, y) = (touch.page_x, touch.page_y);
                if self.double_tap.register_tap(release.timestamp_ms, x, y) {
                    debug!(x, y, "Double tap");
                    self.engine.double_tap_at(x, y, &mut effects);
                }
            }
        }
        effects
    }
}
