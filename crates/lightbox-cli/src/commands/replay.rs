use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lightbox_core::config::PinchFocus;
use lightbox_core::script::{replay, TouchScript};

use super::load_config;
use crate::summary::print_replay_summary;

#[derive(Args)]
pub struct ReplayArgs {
    /// Touch script (TOML)
    pub script: PathBuf,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep the point between the fingers fixed while pinching
    #[arg(long)]
    pub touch_focus: bool,

    /// Only print the final transform
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.touch_focus {
        config.pinch_focus = PinchFocus::TouchCenter;
    }

    let contents = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script: TouchScript = toml::from_str(&contents).context("Invalid touch script")?;

    let report = replay(&script, config.clone())?;
    print_replay_summary(&args.script, &config, &report, args.quiet);

    Ok(())
}
