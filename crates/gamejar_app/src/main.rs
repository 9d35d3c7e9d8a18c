//! # sandbox
//!
//! Runs a small world headlessly: lists the display modes on offer, switches
//! to the requested resolution, populates a static and a moving entity, runs
//! the tick loop until the duration elapses or Ctrl-C arrives, then stops the
//! world and logs what was rendered.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gamejar_entity::{Entity, Velocity};
use gamejar_graphics::{Color, DisplayMode, DisplaySurface, RecordingSurface, SolidColor};
use gamejar_world::{World, WorldConfig};

#[derive(Parser)]
#[command(name = "sandbox", about = "Run a gamejar world against a headless surface")]
struct Args {
    /// JSON world configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How long to run before stopping, in seconds
    #[arg(short, long, default_value_t = 5.0)]
    duration_secs: f64,

    /// Physical width of the display mode
    #[arg(long, default_value_t = 1366)]
    width: u32,

    /// Physical height of the display mode
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Hide the debug overlay
    #[arg(long)]
    no_debug: bool,
}

/// The modes the headless surface offers.
fn offered_modes() -> Vec<DisplayMode> {
    vec![
        DisplayMode::new(800, 600, 32, 60),
        DisplayMode::new(1280, 720, 32, 60),
        DisplayMode::new(1366, 768, 32, 60),
    ]
}

fn load_config(path: Option<&Path>) -> Result<WorldConfig> {
    let Some(path) = path else {
        return Ok(WorldConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}

/// The config file's settings with the command-line overrides applied. The
/// overlay is on unless `--no-debug` is given.
fn world_config(args: &Args) -> Result<WorldConfig> {
    let mut config = load_config(args.config.as_deref())?;
    config.debug_overlay = !args.no_debug;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sandbox=info".parse()?)
                .add_directive("gamejar_world=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let modes = offered_modes();
    info!("available display modes:");
    for mode in &modes {
        info!("  {mode}");
    }

    let mut surface = RecordingSurface::new(modes.clone(), modes[0])?;
    surface
        .set_resolution(args.width, args.height)
        .context("selecting display mode")?;

    let mut world = World::new(world_config(&args)?, surface)?;

    let block = Arc::new(SolidColor::new(Color::rgb(200, 160, 40), 64, 64));
    let runner = Arc::new(SolidColor::new(Color::rgb(40, 120, 220), 32, 48));
    world.insert_entity(Entity::new(200.0, 20.0, block, 30).into_ref());
    let mover = Entity::new(30.0, 0.0, runner, 45)
        .with_behavior(Velocity::new(50.0, 0.4))
        .into_ref();
    world.insert_entity(mover.clone());

    world.start()?;

    let duration = Duration::from_secs_f64(args.duration_secs.max(0.0));
    tokio::select! {
        () = tokio::time::sleep(duration) => info!(secs = args.duration_secs, "run time elapsed"),
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("interrupt received");
        }
    }

    world.stop()?;

    let last_fills = world.with_surface(|s| s.last_frame().map_or(0, |f| f.fills().len()));
    info!(
        ticks = world.ticks(),
        frames = world.frames_presented(),
        last_frame_sprites = last_fills,
        mover = %mover.describe(),
        "sandbox finished"
    );
    Ok(())
}
