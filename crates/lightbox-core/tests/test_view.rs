mod common;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use lightbox_core::classifier::GestureIntent;
use lightbox_core::config::ViewerConfig;
use lightbox_core::effects::{dispatch, ViewerEffect};
use lightbox_core::error::{LightboxError, Result};
use lightbox_core::geometry::ImageDisplaySize;
use lightbox_core::host::{HostEvent, ImageEntry, ViewerHost};
use lightbox_core::size::{ImageSizeResolver, SizeSource};
use lightbox_core::transform::TransformState;
use lightbox_core::view::ZoomView;

use common::{drag, last_transform, lift, pinch, scale_events, tap, view, viewport};

struct FixedSource(u32, u32);

impl SizeSource for FixedSource {
    fn intrinsic_size(&self, _source: &str) -> Result<(u32, u32)> {
        Ok((self.0, self.1))
    }
}

fn poll_until_resolved(view: &mut ZoomView) -> Option<ImageDisplaySize> {
    for _ in 0..400 {
        if let Some(size) = view.poll_size() {
            return Some(size);
        }
        thread::sleep(Duration::from_millis(5));
    }
    None
}

// ---------------------------------------------------------------------------
// Pinch scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_pinch_in_then_release_keeps_scale() {
    let mut v = view();
    v.touch_start();
    assert!(v.touch_move(&pinch(100.0, 200.0, 400.0)).is_empty());
    let fx = v.touch_move(&pinch(400.0, 200.0, 400.0));
    assert_eq!(scale_events(&fx), vec![3.0]);
    assert_eq!(v.intent(), GestureIntent::Pinching);

    let fx = v.touch_end(&lift(100));
    assert!(fx.is_empty());
    assert_eq!(v.state().scale, 3.0);
}

#[test]
fn test_pinch_below_floor_clamps_then_snaps_back() {
    let mut v = view();
    v.touch_start();
    v.touch_move(&pinch(100.0, 200.0, 400.0));
    v.touch_move(&pinch(400.0, 200.0, 400.0));
    v.touch_end(&lift(100));

    v.touch_start();
    v.touch_move(&pinch(500.0, 200.0, 400.0));
    let fx = v.touch_move(&pinch(95.0, 200.0, 400.0));
    assert_eq!(scale_events(&fx), vec![0.5]);
    assert_eq!(v.state().scale, 0.5);

    let fx = v.touch_end(&lift(200));
    assert_eq!(v.state(), TransformState::identity());
    assert!(last_transform(&fx).unwrap().is_animated());
    assert_eq!(scale_events(&fx), vec![1.0]);
}

#[test]
fn test_lifting_finger_mid_pinch_does_not_jump() {
    let mut v = view();
    v.touch_start();
    v.touch_move(&pinch(100.0, 200.0, 400.0));
    v.touch_move(&pinch(250.0, 200.0, 400.0));
    assert_eq!(v.state().scale, 2.0);

    v.touch_move(&drag(80.0, 0.0));
    assert_eq!(v.intent(), GestureIntent::Panning);
    assert_eq!(v.state().position_x, 0.0);

    v.touch_move(&drag(90.0, 0.0));
    assert_eq!(v.state().position_x, 5.0);
}

// ---------------------------------------------------------------------------
// Pan
// ---------------------------------------------------------------------------

#[test]
fn test_small_drag_when_zoomed_is_ignored() {
    let mut v = view();
    v.touch_start();
    v.touch_end(&tap(200.0, 400.0, 0));
    v.touch_start();
    v.touch_end(&tap(200.0, 400.0, 100));
    assert_eq!(v.state().scale, 2.0);

    v.touch_start();
    assert!(v.touch_move(&drag(4.0, 4.0)).is_empty());
    assert_eq!(v.intent(), GestureIntent::Idle);
}

#[test]
fn test_drag_when_zoomed_pans() {
    let mut v = view();
    v.touch_start();
    v.touch_end(&tap(100.0, 200.0, 1_000));
    v.touch_start();
    v.touch_end(&tap(100.0, 200.0, 1_300));
    assert_eq!(v.state().position_x, 50.0);

    v.touch_start();
    v.touch_move(&drag(10.0, 0.0));
    v.touch_move(&drag(30.0, 0.0));
    assert_eq!(v.state().position_x, 60.0);
    v.touch_end(&lift(2_000));
    assert_eq!(v.state().scale, 2.0);
}

// ---------------------------------------------------------------------------
// Swipe-dismiss
// ---------------------------------------------------------------------------

#[test]
fn test_swipe_start_moves_image_with_finger() {
    let mut v = view();
    v.touch_start();
    let fx = v.touch_move(&drag(0.0, 12.0));
    assert_eq!(fx[0], ViewerEffect::SwipeDismissStart);
    assert_eq!(fx[1], ViewerEffect::SwipeDismissProgress(12.0));
    assert_eq!(last_transform(&fx).unwrap().state.position_y, 12.0);
    assert_eq!(v.intent(), GestureIntent::SwipeDismissing);
}

#[test]
fn test_short_swipe_recenters() {
    let mut v = view();
    v.touch_start();
    v.touch_move(&drag(0.0, 12.0));
    v.touch_move(&drag(0.0, 150.0));
    let fx = v.touch_end(&lift(10));

    assert_eq!(fx[0], ViewerEffect::SwipeDismissEnd);
    assert_eq!(fx[1], ViewerEffect::SwipeDismissProgress(0.0));
    let update = last_transform(&fx).unwrap();
    assert!(update.is_animated());
    assert_eq!(v.state(), TransformState::identity());
    assert!(!v.swipe().is_active());
}

#[test]
fn test_long_swipe_dismisses() {
    let mut v = view();
    v.touch_start();
    v.touch_move(&drag(0.0, 12.0));
    v.touch_move(&drag(30.0, 201.0));
    let fx = v.touch_end(&tap(230.0, 601.0, 10));
    assert_eq!(fx, vec![ViewerEffect::Dismissed]);
    assert_eq!(v.swipe().offset(), 0.0);
}

#[test]
fn test_swipe_effects_drive_host() {
    let mut host = ViewerHost::new(
        vec![ImageEntry { url: "a.png".into() }],
        0,
        None,
    );
    host.show();
    let mut v = view();

    v.touch_start();
    dispatch(&v.touch_move(&drag(0.0, 12.0)), &mut host);
    assert!(!host.scroll_enabled());
    dispatch(&v.touch_move(&drag(0.0, 350.0)), &mut host);
    assert_eq!(host.overlay_progress(), 350.0);
    dispatch(&v.touch_end(&lift(5)), &mut host);

    assert!(!host.is_visible());
    assert_eq!(host.take_events(), vec![HostEvent::Cancel]);
}

// ---------------------------------------------------------------------------
// Double tap
// ---------------------------------------------------------------------------

#[test]
fn test_double_tap_toggles_zoom() {
    let mut v = view();
    v.touch_start();
    assert!(v.touch_end(&tap(100.0, 200.0, 1_000)).is_empty());
    v.touch_start();
    let fx = v.touch_end(&tap(100.0, 200.0, 1_300));
    assert_eq!(scale_events(&fx), vec![2.0]);
    assert_eq!(
        v.state(),
        TransformState {
            scale: 2.0,
            position_x: 50.0,
            position_y: 100.0,
        }
    );

    // Third quick tap pairs with the second.
    v.touch_start();
    v.touch_end(&tap(100.0, 200.0, 1_600));
    assert_eq!(v.state(), TransformState::identity());
}

#[test]
fn test_slow_taps_do_nothing() {
    let mut v = view();
    v.touch_start();
    v.touch_end(&tap(100.0, 200.0, 1_000));
    v.touch_start();
    assert!(v.touch_end(&tap(100.0, 200.0, 1_400)).is_empty());
    assert_eq!(v.state().scale, 1.0);
}

#[test]
fn test_claimed_release_is_not_a_tap() {
    let mut v = view();
    v.touch_start();
    v.touch_move(&pinch(100.0, 200.0, 400.0));
    v.touch_end(&tap(100.0, 200.0, 100));

    v.touch_start();
    v.touch_end(&tap(100.0, 200.0, 200));
    assert_eq!(v.state().scale, 1.0);
}

#[test]
fn test_horizontal_drags_are_not_taps() {
    // Paging left then right at rest is never claimed, but must not zoom.
    let mut v = view();
    v.touch_start();
    assert!(v.touch_move(&drag(-120.0, 0.0)).is_empty());
    assert!(v.touch_end(&tap(80.0, 400.0, 1_000)).is_empty());

    v.touch_start();
    assert!(v.touch_move(&drag(120.0, 0.0)).is_empty());
    assert!(v.touch_end(&tap(320.0, 400.0, 1_300)).is_empty());
    assert_eq!(v.state().scale, 1.0);
}

#[test]
fn test_drag_that_returns_home_is_not_a_tap() {
    let mut v = view();
    v.touch_start();
    v.touch_end(&tap(200.0, 400.0, 1_000));

    v.touch_start();
    v.touch_move(&drag(60.0, 0.0));
    v.touch_move(&drag(0.0, 0.0));
    v.touch_end(&tap(200.0, 400.0, 1_200));
    assert_eq!(v.state().scale, 1.0);
}

#[test]
fn test_jitter_inside_dead_zone_still_taps() {
    let mut v = view();
    v.touch_start();
    v.touch_move(&drag(3.0, 2.0));
    v.touch_end(&tap(203.0, 402.0, 1_000));

    v.touch_start();
    v.touch_move(&drag(-2.0, 4.0));
    v.touch_end(&tap(198.0, 404.0, 1_300));
    assert_eq!(v.state().scale, 2.0);
}

// ---------------------------------------------------------------------------
// Size resolution and lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_invalid_config_rejected() {
    let config = ViewerConfig {
        zoom_velocity: 0.0,
        ..ViewerConfig::default()
    };
    assert!(matches!(
        ZoomView::new(config),
        Err(LightboxError::InvalidConfig(_))
    ));
}

#[test]
fn test_resolved_size_applied_on_poll() {
    let resolver = ImageSizeResolver::new(Arc::new(FixedSource(1000, 2000)), viewport()).unwrap();
    let mut v = ZoomView::new(ViewerConfig::default()).unwrap();
    v.set_viewport(viewport());
    v.load_source(&resolver, Some("photo".into()), false).unwrap();
    assert!(v.is_loading());

    let size = poll_until_resolved(&mut v).expect("size lookup timed out");
    assert_eq!(size, ImageDisplaySize::new(400.0, 800.0));
    assert_eq!(v.engine().image_size(), size);
    assert!(!v.is_loading());
}

#[test]
fn test_disposed_view_discards_late_size() {
    let resolver = ImageSizeResolver::new(Arc::new(FixedSource(1000, 2000)), viewport()).unwrap();
    let mut v = ZoomView::new(ViewerConfig::default()).unwrap();
    v.load_source(&resolver, Some("photo".into()), false).unwrap();
    v.dispose();

    thread::sleep(Duration::from_millis(20));
    assert_eq!(v.poll_size(), None);
    assert!(!v.set_display_size(ImageDisplaySize::new(10.0, 10.0)));
    assert_eq!(v.engine().image_size(), ImageDisplaySize::ZERO);
    assert!(v.is_disposed());
}

#[test]
fn test_new_size_resets_transform() {
    let mut v = view();
    v.touch_start();
    v.touch_end(&tap(100.0, 200.0, 0));
    v.touch_start();
    v.touch_end(&tap(100.0, 200.0, 10));
    assert_eq!(v.state().scale, 2.0);

    assert!(v.set_display_size(ImageDisplaySize::square(300.0)));
    assert_eq!(v.state(), TransformState::identity());
}
