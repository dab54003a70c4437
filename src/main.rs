use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;

use sphere_hop::core::components::SimRng;
use sphere_hop::{GameConfig, GamePlugin, Simulation};

/// Textured spheres hopping across the screen; hover to grow them.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RON config files, merged in order (later files override earlier keys).
    #[arg(long = "config", default_value = "assets/config/game.ron")]
    configs: Vec<PathBuf>,
    /// Fixed RNG seed for a reproducible layout.
    #[arg(long)]
    seed: Option<u64>,
    /// Override the number of spheres.
    #[arg(long)]
    count: Option<usize>,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let args = Args::parse();
    let (mut cfg, used, errors) = GameConfig::load_layered(&args.configs);
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(count) = args.count {
        cfg.bodies.count = count;
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }

    let sim = Simulation::from_config(&cfg).context("invalid camera configuration")?;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            // Bounds are fixed at startup.
            resizable: false,
            ..default()
        }),
        ..default()
    }));

    // Logging is available once the LogPlugin is in.
    for path in &used {
        info!(target: "config", "loaded {path}");
    }
    for err in &errors {
        warn!(target: "config", "{err}");
    }
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }
    let b = sim.bounds();
    info!(
        min_x = b.min_x,
        max_x = b.max_x,
        height = b.height,
        seed = ?cfg.seed,
        "domain bounds ready"
    );

    app.insert_resource(SimRng::from_seed(cfg.seed))
        .insert_resource(sim)
        .insert_resource(cfg)
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}
