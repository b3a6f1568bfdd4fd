//! fOS Player - Headless Controls Driver
//!
//! Replays an event script against a video surface and prints the
//! overlay state.
//!
//! Usage: `fos-player [--config controls.json] [script]`
//! Reads the script from stdin when no path is given.

mod script;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use fos_controls::{ControlsConfig, PlaybackUIController, UiEvent};
use fos_media::{HTMLVideoElement, MediaRect, VideoSurface};
use tracing_subscriber::EnvFilter;

use crate::script::{Command, parse_line};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    script: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(path.into());
            }
            flag if flag.starts_with('-') => bail!("unknown flag '{flag}'"),
            path => parsed.script = Some(path.into()),
        }
    }
    Ok(parsed)
}

fn load_config(path: Option<&PathBuf>) -> Result<ControlsConfig> {
    let Some(path) = path else {
        return Ok(ControlsConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = ControlsConfig::from_json(&json)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display())),
        None => {
            let mut script = String::new();
            std::io::stdin()
                .read_to_string(&mut script)
                .context("reading script from stdin")?;
            Ok(script)
        }
    }
}

/// Wrap `video` in a surface and attach controls sized to its frame
fn build_controller(
    video: HTMLVideoElement,
    config: ControlsConfig,
) -> PlaybackUIController<VideoSurface> {
    let frame_width = video.rect.width;
    let mut controller = PlaybackUIController::new(VideoSurface::new(video), config);
    controller.overlay_mut().seek.client_width = frame_width;
    controller.attach();
    controller
}

fn run(controller: &mut PlaybackUIController<VideoSurface>, command: Command) {
    match command {
        Command::Load(duration) => controller.media_mut().load(duration),
        Command::Event(event) => controller.dispatch(&event),
        Command::Tick(elapsed) => {
            controller.media_mut().advance(elapsed);
            controller.pump();
            controller.tick(elapsed);
        }
        Command::Pip(result) => {
            if !controller.media_mut().settle_picture_in_picture(result) {
                tracing::warn!("no picture-in-picture request pending");
            }
        }
        Command::Print => println!("{}\n", *controller.overlay()),
    }
    controller.pump();
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config.as_ref())?;
    let script = read_script(args.script.as_ref())?;

    let mut video = HTMLVideoElement::from_url("demo.mp4");
    video.rect = MediaRect { x: 0.0, width: 640.0 };

    let mut controller = build_controller(video, config);
    controller.dispatch(&UiEvent::content_loaded());

    tracing::info!("Starting fOS Player controls session...");

    for (index, line) in script.lines().enumerate() {
        let command = parse_line(line).with_context(|| format!("script line {}", index + 1))?;
        if let Some(command) = command {
            tracing::debug!(?command, "run");
            run(&mut controller, command);
        }
    }

    println!("{}", *controller.overlay());
    Ok(())
}
