// SPDX-License-Identifier: MIT OR Apache-2.0
//! `OrdoPlay` animation runner.
//!
//! Loads a scene file, plays it headlessly and logs every element lifecycle
//! hook as it fires. By default time is simulated: each tick advances a manual
//! clock by `--tick-ms`, so a ten second scene finishes instantly. With
//! `--realtime` the wall clock drives playback and the runner sleeps between
//! ticks.

mod scene;

use anyhow::{bail, Result};
use clap::Parser;
use ordoplay_animation::{Clock, ManualClock, MonotonicClock};
use scene::Scene;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "ordoplay_animation")]
#[command(about = "Play an OrdoPlay animation scene and log element lifecycle hooks")]
#[command(version)]
struct Cli {
    /// Scene file (RON)
    scene: PathBuf,

    /// Override the scene's playback speed
    #[arg(long)]
    speed: Option<f64>,

    /// Time between ticks in milliseconds
    #[arg(long, default_value = "16")]
    tick_ms: f64,

    /// Drive playback from the wall clock instead of simulated ticks
    #[arg(long)]
    realtime: bool,

    /// Normalized progress to start from
    #[arg(long, default_value = "0")]
    seek: f64,
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("ordoplay_animation=debug".parse()?)
        .add_directive("ordoplay_animation_cli=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if !(cli.tick_ms.is_finite() && cli.tick_ms > 0.0) {
        bail!("--tick-ms must be a positive number, got {}", cli.tick_ms);
    }

    let scene = Scene::load(&cli.scene)?;
    tracing::info!(
        "Loaded {} ({} timelines, {} elements)",
        cli.scene.display(),
        scene.timelines.len(),
        scene.element_count()
    );

    run(&scene, &cli)
}

fn run(scene: &Scene, cli: &Cli) -> Result<()> {
    let manual_clock = Rc::new(ManualClock::new(0.0));
    let clock: Rc<dyn Clock> = if cli.realtime {
        Rc::new(MonotonicClock::new())
    } else {
        Rc::clone(&manual_clock) as Rc<dyn Clock>
    };

    let mut player = scene.build(clock)?;
    if let Some(speed) = cli.speed {
        player.set_speed(speed)?;
    }
    player.from_progress(cli.seek)?;

    let finished = Rc::new(Cell::new(false));
    let flag = Rc::clone(&finished);
    player.on_finish(move || flag.set(true));

    tracing::info!(
        "Playing {} ms at speed {}",
        player.duration(),
        player.speed()
    );
    player.play();

    let tick = Duration::from_secs_f64(cli.tick_ms / 1000.0);
    let mut ticks: u64 = 0;
    while !finished.get() {
        if cli.realtime {
            std::thread::sleep(tick);
        } else {
            manual_clock.advance(cli.tick_ms);
        }
        player.update();
        ticks += 1;
    }

    tracing::info!(
        "Finished after {} ticks at {} ms",
        ticks,
        player.elapsed_time()
    );
    Ok(())
}
