#![allow(dead_code)]

use lightbox_core::config::ViewerConfig;
use lightbox_core::effects::{TransformUpdate, ViewerEffect};
use lightbox_core::geometry::{
    GestureSample, ImageDisplaySize, ReleaseSample, TouchPoint, ViewportBounds,
};
use lightbox_core::transform::TransformEngine;
use lightbox_core::view::ZoomView;

/// Portrait phone-like crop rectangle.
pub fn viewport() -> ViewportBounds {
    ViewportBounds::new(400.0, 800.0)
}

/// An image that exactly fills [`viewport`] at scale 1.
pub fn full_image() -> ImageDisplaySize {
    ImageDisplaySize::new(400.0, 800.0)
}

pub fn engine() -> TransformEngine {
    TransformEngine::with_geometry(ViewerConfig::default(), viewport(), full_image())
}

pub fn engine_with(config: ViewerConfig) -> TransformEngine {
    TransformEngine::with_geometry(config, viewport(), full_image())
}

pub fn view() -> ZoomView {
    ZoomView::with_geometry(ViewerConfig::default(), viewport(), full_image()).unwrap()
}

/// Two fingers side by side, `distance` apart, centred on (cx, cy).
pub fn pinch(distance: f64, cx: f64, cy: f64) -> GestureSample {
    GestureSample::new(
        vec![
            TouchPoint::new(0, cx - distance / 2.0, cy),
            TouchPoint::new(1, cx + distance / 2.0, cy),
        ],
        0.0,
        0.0,
    )
}

/// Two-finger touch pair for calling the engine directly.
pub fn finger_pair(distance: f64, cx: f64, cy: f64) -> (TouchPoint, TouchPoint) {
    (
        TouchPoint::new(0, cx - distance / 2.0, cy),
        TouchPoint::new(1, cx + distance / 2.0, cy),
    )
}

/// One finger dragged by a cumulative (dx, dy) from the viewport centre.
pub fn drag(dx: f64, dy: f64) -> GestureSample {
    GestureSample::new(vec![TouchPoint::new(0, 200.0 + dx, 400.0 + dy)], dx, dy)
}

pub fn tap(x: f64, y: f64, timestamp_ms: u64) -> ReleaseSample {
    ReleaseSample::new(vec![TouchPoint::new(0, x, y)], timestamp_ms)
}

/// Release with no single lifted finger reported.
pub fn lift(timestamp_ms: u64) -> ReleaseSample {
    ReleaseSample::new(vec![], timestamp_ms)
}

pub fn scale_events(effects: &[ViewerEffect]) -> Vec<f64> {
    effects
        .iter()
        .filter_map(|e| match e {
            ViewerEffect::ScaleChanged(s) => Some(*s),
            _ => None,
        })
        .collect()
}

pub fn last_transform(effects: &[ViewerEffect]) -> Option<TransformUpdate> {
    effects.iter().rev().find_map(|e| match e {
        ViewerEffect::Transform(update) => Some(*update),
        _ => None,
    })
}
