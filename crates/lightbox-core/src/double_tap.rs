use crate::consts::DOUBLE_TAP_WINDOW_MS;

/// Where and when the previous tap landed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleTapState {
    pub last_tap_timestamp: Option<u64>,
    pub last_tap_x: f64,
    pub last_tap_y: f64,
}

/// Pairs successive single-finger taps that land within the time window.
#[derive(Clone, Debug, Default)]
pub struct DoubleTapDetector {
    state: DoubleTapState,
}

impl DoubleTapDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DoubleTapState {
        self.state
    }

    /// Register a tap. Returns `true` when it completes a double tap.
    ///
    /// Every tap becomes the new reference, so a third quick tap pairs with
    /// the second.
    pub fn register_tap(&mut self, now_ms: u64, x: f64, y: f64) -> bool {
        let is_double = self
            .state
            .last_tap_timestamp
            .and_then(|last| now_ms.checked_sub(last))
            .is_some_and(|elapsed| elapsed < DOUBLE_TAP_WINDOW_MS);

        self.state = DoubleTapState {
            last_tap_timestamp: Some(now_ms),
            last_tap_x: x,
            last_tap_y: y,
        };
        is_double
    }
}
