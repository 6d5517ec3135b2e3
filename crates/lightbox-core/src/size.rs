use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{LightboxError, Result};
use crate::geometry::{ImageDisplaySize, ViewportBounds};

/// Looks up the intrinsic pixel size of an image source.
pub trait SizeSource: Send + Sync {
    fn intrinsic_size(&self, source: &str) -> Result<(u32, u32)>;
}

/// Reads dimensions from a local image file header.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileSizeSource;

impl SizeSource for FileSizeSource {
    fn intrinsic_size(&self, source: &str) -> Result<(u32, u32)> {
        let path = source.strip_prefix("file://").unwrap_or(source);
        if path.is_empty() {
            return Err(LightboxError::MissingSource);
        }
        Ok(image::image_dimensions(Path::new(path))?)
    }
}

/// Fit an image of the given intrinsic size into the viewport, preserving
/// aspect ratio.
///
/// Wide images are first narrowed to the viewport width. Portrait images,
/// and anything still taller than the viewport, are then fitted to the
/// viewport height. A final width check keeps both dimensions inside the
/// viewport.
pub fn fit_display_size(
    natural_width: f64,
    natural_height: f64,
    viewport: ViewportBounds,
) -> ImageDisplaySize {
    if natural_width <= 0.0 || natural_height <= 0.0 {
        return ImageDisplaySize::ZERO;
    }

    let aspect_ratio = natural_width / natural_height;
    let mut width = natural_width;
    let mut height = natural_height;

    if natural_width > viewport.crop_width {
        width = viewport.crop_width;
        height = width / aspect_ratio;
    }

    if natural_width < natural_height || height > viewport.crop_height {
        height = viewport.crop_height;
        width = height * aspect_ratio;
    }

    if width > viewport.crop_width {
        width = viewport.crop_width;
        height = width / aspect_ratio;
    }

    ImageDisplaySize::new(width, height)
}

/// Computes the display size for an image source against a fixed viewport.
#[derive(Clone)]
pub struct ImageSizeResolver {
    source: Arc<dyn SizeSource>,
    viewport: ViewportBounds,
}

impl ImageSizeResolver {
    pub fn new(source: Arc<dyn SizeSource>, viewport: ViewportBounds) -> Result<Self> {
        let ViewportBounds {
            crop_width,
            crop_height,
        } = viewport;
        if !crop_width.is_finite() || !crop_height.is_finite() || crop_width < 0.0 || crop_height < 0.0
        {
            return Err(LightboxError::InvalidViewport {
                width: crop_width,
                height: crop_height,
            });
        }
        Ok(Self { source, viewport })
    }

    /// Resolver backed by local files.
    pub fn for_files(viewport: ViewportBounds) -> Result<Self> {
        Self::new(Arc::new(FileSizeSource), viewport)
    }

    pub fn viewport(&self) -> ViewportBounds {
        self.viewport
    }

    /// Resolve on the calling thread. Never fails: a missing source falls
    /// back to the full viewport (with a default image) or to zero size, and
    /// a failed lookup falls back to a square of the shortest viewport edge.
    pub fn resolve(&self, source_id: Option<&str>, has_default_source: bool) -> ImageDisplaySize {
        resolve_with(self.source.as_ref(), self.viewport, source_id, has_default_source)
    }

    /// Resolve on a worker thread.
    pub fn spawn(&self, source_id: Option<String>, has_default_source: bool) -> Result<PendingSize> {
        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let viewport = self.viewport;
        let label = source_id.clone();

        std::thread::Builder::new()
            .name("lightbox-size".into())
            .spawn(move || {
                let size =
                    resolve_with(source.as_ref(), viewport, source_id.as_deref(), has_default_source);
                // The receiver is gone when the view moved on; the result is stale.
                let _ = tx.send(size);
            })?;

        Ok(PendingSize {
            rx,
            source_id: label,
        })
    }
}

fn resolve_with(
    source: &dyn SizeSource,
    viewport: ViewportBounds,
    source_id: Option<&str>,
    has_default_source: bool,
) -> ImageDisplaySize {
    let size = match source_id.filter(|id| !id.is_empty()) {
        None if has_default_source => {
            fit_display_size(viewport.crop_width, viewport.crop_height, viewport)
        }
        None => ImageDisplaySize::ZERO,
        Some(id) => match source.intrinsic_size(id) {
            Ok((width, height)) => fit_display_size(width as f64, height as f64, viewport),
            Err(e) => {
                warn!(source = id, error = %e, "Image size lookup failed, using placeholder");
                ImageDisplaySize::square(viewport.shortest_edge())
            }
        },
    };
    info!(
        width = size.display_width,
        height = size.display_height,
        "Display size resolved"
    );
    size
}

/// A size lookup running on a worker thread.
pub struct PendingSize {
    rx: mpsc::Receiver<ImageDisplaySize>,
    source_id: Option<String>,
}

impl PendingSize {
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Non-blocking check for the result.
    pub fn try_take(&self) -> Option<ImageDisplaySize> {
        self.rx.try_recv().ok()
    }

    /// Block until the worker reports.
    pub fn wait(self) -> Result<ImageDisplaySize> {
        self.rx
            .recv()
            .map_err(|_| LightboxError::Worker("size worker exited without a result".into()))
    }
}
