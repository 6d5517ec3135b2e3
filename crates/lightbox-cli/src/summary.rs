use std::path::Path;

use console::Style;
use lightbox_core::config::ViewerConfig;
use lightbox_core::effects::ViewerEffect;
use lightbox_core::script::{ReplayReport, ReplayStep};
use lightbox_core::transform::TransformState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    event: Style,
    effect: Style,
    dismissed: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            event: Style::new().green(),
            effect: Style::new().yellow(),
            dismissed: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_replay_summary(script: &Path, config: &ViewerConfig, report: &ReplayReport, quiet: bool) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lightbox Replay"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Script"), s.path.apply_to(script.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scale range"),
        s.value.apply_to(format!("{} .. {}", config.min_scale, config.max_scale))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Zoom velocity"),
        s.value.apply_to(config.zoom_velocity)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Pinch focus"),
        s.value.apply_to(config.pinch_focus)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Display"),
        s.value.apply_to(format!(
            "{:.1}x{:.1}",
            report.display.display_width, report.display.display_height
        ))
    );
    println!();

    if !quiet {
        for step in &report.steps {
            print_step(&s, step);
        }
        println!();
    }

    println!("  {:<14}{}", s.label.apply_to("Final"), s.value.apply_to(format_state(&report.final_state)));
    if report.dismissed {
        println!("  {:<14}{}", s.label.apply_to("Outcome"), s.dismissed.apply_to("dismissed"));
    }
    println!();
}

fn print_step(s: &Styles, step: &ReplayStep) {
    println!(
        "  {:>4} {:<6} {:<14} {}",
        s.label.apply_to(step.index),
        s.event.apply_to(step.event),
        step.intent.to_string(),
        format_state(&step.state)
    );
    for effect in &step.effects {
        println!("              {}", s.effect.apply_to(format_effect(effect)));
    }
}

fn format_state(state: &TransformState) -> String {
    format!(
        "scale {:.3}  x {:.2}  y {:.2}",
        state.scale, state.position_x, state.position_y
    )
}

fn format_effect(effect: &ViewerEffect) -> String {
    match effect {
        ViewerEffect::Transform(update) if update.is_animated() => {
            format!("animate -> {}", format_state(&update.state))
        }
        ViewerEffect::Transform(update) => format!("set -> {}", format_state(&update.state)),
        ViewerEffect::ScaleChanged(scale) => format!("scale changed {scale:.3}"),
        ViewerEffect::SwipeDismissStart => "swipe dismiss start".to_string(),
        ViewerEffect::SwipeDismissProgress(offset) => format!("swipe progress {offset:.1}"),
        ViewerEffect::SwipeDismissEnd => "swipe dismiss end".to_string(),
        ViewerEffect::Dismissed => "dismissed".to_string(),
    }
}
