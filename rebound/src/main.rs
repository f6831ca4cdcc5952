//! # Rebound Runtime
//!
//! Entry point for the rebound binary.
//!
//! Spawns a box of randomized balls and drives the frame loop. Built with
//! the `render` feature (the default) it opens a window visualizing the
//! simulation; `--headless` (or a build without the feature) runs a fixed
//! number of fixed-timestep physics steps instead.

mod app;

use anyhow::Result;
use clap::Parser;
use physics::DEFAULT_BALL_COUNT;

/// Command line options for the simulation.
#[derive(Parser, Debug)]
#[command(about = "Bouncing, colliding spheres in a 3D box")]
struct Args {
    /// Number of balls to spawn.
    #[arg(long, default_value_t = DEFAULT_BALL_COUNT)]
    balls: usize,

    /// Seed for the randomized ball parameters; omit for a fresh scene.
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Number of fixed steps to run in headless mode.
    #[arg(long, default_value_t = 1000)]
    steps: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    app::run(&app::Options {
        balls: args.balls,
        seed: args.seed,
        headless: args.headless,
        steps: args.steps,
    })
}
