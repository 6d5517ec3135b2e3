//! Recorded touch scripts, replayed through a [`ZoomView`].

use serde::{Deserialize, Serialize};

use crate::classifier::GestureIntent;
use crate::config::ViewerConfig;
use crate::effects::ViewerEffect;
use crate::error::Result;
use crate::geometry::{GestureSample, ImageDisplaySize, ReleaseSample, ViewportBounds};
use crate::size::ImageSizeResolver;
use crate::transform::TransformState;
use crate::view::ZoomView;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TouchScript {
    pub viewport: ViewportBounds,
    #[serde(default)]
    pub image: ImageSpec,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// Which image the script runs against. An explicit display size wins over
/// a source, which is resolved through the local file lookup.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImageSpec {
    pub display: Option<ImageDisplaySize>,
    pub source: Option<String>,
    #[serde(default)]
    pub default_source: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    Start,
    Move(GestureSample),
    End(ReleaseSample),
}

impl ScriptEvent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Move(_) => "move",
            Self::End(_) => "end",
        }
    }
}

/// What one script event produced.
#[derive(Clone, Debug)]
pub struct ReplayStep {
    pub index: usize,
    pub event: &'static str,
    pub effects: Vec<ViewerEffect>,
    pub intent: GestureIntent,
    pub state: TransformState,
}

#[derive(Clone, Debug)]
pub struct ReplayReport {
    pub display: ImageDisplaySize,
    pub steps: Vec<ReplayStep>,
    pub final_state: TransformState,
    pub dismissed: bool,
}

pub fn replay(script: &TouchScript, config: ViewerConfig) -> Result<ReplayReport> {
    let display = match script.image.display {
        Some(display) => display,
        None => ImageSizeResolver::for_files(script.viewport)?
            .resolve(script.image.source.as_deref(), script.image.default_source),
    };

    let mut view = ZoomView::with_geometry(config, script.viewport, display)?;
    let mut steps = Vec::with_capacity(script.events.len());
    let mut dismissed = false;

    for (index, event) in script.events.iter().enumerate() {
        let effects = match event {
            ScriptEvent::Start => {
                view.touch_start();
                Vec::new()
            }
            ScriptEvent::Move(sample) => view.touch_move(sample),
            ScriptEvent::End(release) => view.touch_end(release),
        };
        dismissed |= effects.contains(&ViewerEffect::Dismissed);
        steps.push(ReplayStep {
            index,
            event: event.label(),
            effects,
            intent: view.intent(),
            state: view.state(),
        });
    }

    Ok(ReplayReport {
        display,
        final_state: view.state(),
        steps,
        dismissed,
    })
}
