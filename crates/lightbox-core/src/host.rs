use serde::{Deserialize, Serialize};

use crate::consts::{OVERLAY_MIN_OPACITY, OVERLAY_PROGRESS_RANGE};
use crate::effects::GestureObserver;

/// One entry of the viewer's image list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub url: String,
}

/// Notifications the viewer sends to whoever opened it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Change(usize),
    Cancel,
}

/// State the modal/carousel host keeps in response to engine effects.
///
/// The host itself (paging, overlay drawing) lives outside this crate; this
/// type holds the values it renders from.
#[derive(Clone, Debug)]
pub struct ViewerHost {
    visible: bool,
    index: usize,
    image_urls: Vec<ImageEntry>,
    default_source: Option<String>,
    scroll_enabled: bool,
    overlay_progress: f64,
    events: Vec<HostEvent>,
}

impl ViewerHost {
    pub fn new(image_urls: Vec<ImageEntry>, start_index: usize, default_source: Option<String>) -> Self {
        let index = start_index.min(image_urls.len().saturating_sub(1));
        Self {
            visible: false,
            index,
            image_urls,
            default_source,
            scroll_enabled: true,
            overlay_progress: 0.0,
            events: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn images(&self) -> &[ImageEntry] {
        &self.image_urls
    }

    pub fn current(&self) -> Option<&ImageEntry> {
        self.image_urls.get(self.index)
    }

    pub fn default_source(&self) -> Option<&str> {
        self.default_source.as_deref()
    }

    pub fn has_default_source(&self) -> bool {
        self.default_source.is_some()
    }

    /// Whether the carousel may page between images.
    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn overlay_progress(&self) -> f64 {
        self.overlay_progress
    }

    /// Background opacity for the current swipe progress.
    pub fn overlay_opacity(&self) -> f64 {
        let t = (self.overlay_progress / OVERLAY_PROGRESS_RANGE).clamp(0.0, 1.0);
        1.0 + (OVERLAY_MIN_OPACITY - 1.0) * t
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.scroll_enabled = true;
        self.overlay_progress = 0.0;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.scroll_enabled = true;
    }

    /// Page to another image. Out-of-range indices are ignored.
    pub fn set_index(&mut self, index: usize) -> bool {
        if index >= self.image_urls.len() || index == self.index {
            return false;
        }
        self.index = index;
        self.events.push(HostEvent::Change(index));
        true
    }

    /// Drain queued notifications.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GestureObserver for ViewerHost {
    fn on_scale_changed(&mut self, scale: f64) {
        self.scroll_enabled = scale <= 1.0;
    }

    fn on_swipe_dismiss_start(&mut self) {
        self.scroll_enabled = false;
    }

    fn on_swipe_dismiss_progress(&mut self, offset: f64) {
        self.overlay_progress = offset;
    }

    fn on_swipe_dismiss_end(&mut self) {
        self.scroll_enabled = true;
    }

    fn on_dismiss(&mut self) {
        self.hide();
        self.events.push(HostEvent::Cancel);
    }
}
