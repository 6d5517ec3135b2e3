use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lightbox_core::geometry::ViewportBounds;
use lightbox_core::size::ImageSizeResolver;

use super::parse_viewport;

#[derive(Args)]
pub struct SizeArgs {
    /// Image file (omit to size the placeholder)
    pub file: Option<PathBuf>,

    /// Viewport size, e.g. 390x844
    #[arg(long, value_parser = parse_viewport, default_value = "390x844")]
    pub viewport: ViewportBounds,

    /// Treat a missing source as having a default image
    #[arg(long)]
    pub default_source: bool,
}

pub fn run(args: &SizeArgs) -> Result<()> {
    let resolver = ImageSizeResolver::for_files(args.viewport)?;
    let source = args.file.as_ref().map(|p| p.display().to_string());
    let pending = resolver.spawn(source.clone(), args.default_source)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    pb.set_message("Resolving image size");
    pb.enable_steady_tick(Duration::from_millis(80));

    let size = pending.wait()?;
    pb.finish_and_clear();

    println!("Source:      {}", source.as_deref().unwrap_or("(none)"));
    println!(
        "Viewport:    {}x{}",
        args.viewport.crop_width, args.viewport.crop_height
    );
    println!(
        "Display:     {:.1}x{:.1}",
        size.display_width, size.display_height
    );

    Ok(())
}
