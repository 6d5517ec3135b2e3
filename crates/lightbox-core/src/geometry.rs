use serde::{Deserialize, Serialize};

/// The crop rectangle the image is clipped to, as measured by layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub crop_width: f64,
    pub crop_height: f64,
}

impl ViewportBounds {
    pub fn new(crop_width: f64, crop_height: f64) -> Self {
        Self {
            crop_width,
            crop_height,
        }
    }

    pub fn shortest_edge(&self) -> f64 {
        self.crop_width.min(self.crop_height)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.crop_width / 2.0, self.crop_height / 2.0)
    }
}

/// Rendered image size at scale 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageDisplaySize {
    pub display_width: f64,
    pub display_height: f64,
}

impl ImageDisplaySize {
    pub const ZERO: Self = Self {
        display_width: 0.0,
        display_height: 0.0,
    };

    pub fn new(display_width: f64, display_height: f64) -> Self {
        Self {
            display_width,
            display_height,
        }
    }

    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub fn is_empty(&self) -> bool {
        self.display_width <= 0.0 || self.display_height <= 0.0
    }
}

/// One active finger, in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    #[serde(default)]
    pub id: u64,
    pub page_x: f64,
    pub page_y: f64,
    #[serde(default)]
    pub timestamp_ms: u64,
}

impl TouchPoint {
    pub fn new(id: u64, page_x: f64, page_y: f64) -> Self {
        Self {
            id,
            page_x,
            page_y,
            timestamp_ms: 0,
        }
    }
}

/// A touch-move sample: the fingers currently down plus the cumulative
/// gesture delta since the sequence started.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl GestureSample {
    pub fn new(touches: Vec<TouchPoint>, dx: f64, dy: f64) -> Self {
        Self { touches, dx, dy }
    }

    /// Number of fingers down. Samples without explicit touches count as one.
    pub fn touch_count(&self) -> usize {
        self.touches.len().max(1)
    }
}

/// A touch-end sample: the fingers that lifted and when.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSample {
    #[serde(default)]
    pub changed_touches: Vec<TouchPoint>,
    #[serde(default)]
    pub timestamp_ms: u64,
}

impl ReleaseSample {
    pub fn new(changed_touches: Vec<TouchPoint>, timestamp_ms: u64) -> Self {
        Self {
            changed_touches,
            timestamp_ms,
        }
    }

    /// Page position of the lifted finger when exactly one finger lifted.
    pub fn single_touch(&self) -> Option<&TouchPoint> {
        match self.changed_touches.as_slice() {
            [touch] => Some(touch),
            _ => None,
        }
    }
}

/// Axis-aligned rectangle in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub fn from_center_size(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}
