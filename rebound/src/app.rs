//! # Application Logic
//!
//! Wires the physics core to the renderer and drives the frame loop.
//!
//! Each frame measures one delta from a monotonic clock and feeds it to
//! every moving part in a fixed order: camera controls, light rotation,
//! physics step, scene upload, draw. All motion therefore scales with real
//! elapsed time regardless of the display's refresh rate.
//!
//! Without the `render` feature, or with `--headless`, the loop is replaced
//! by a fixed-timestep run that logs progress and exits.

use anyhow::Result;
use physics::{Bounds, Simulation};

#[cfg(feature = "render")]
use render::Renderer;

/// Runtime options resolved from the command line.
pub struct Options {
    pub balls: usize,
    pub seed: Option<u64>,
    pub headless: bool,
    pub steps: usize,
}

/// Fixed step used when no display clock is driving the loop.
const HEADLESS_DT: f32 = 1.0 / 60.0;

/// Run the simulation with the given options.
///
/// # Errors
///
/// Returns any error produced by the physics setup or the renderer.
pub fn run(opts: &Options) -> Result<()> {
    tracing_subscriber::fmt::init();

    let bounds = Bounds::default();
    let mut sim = Simulation::new(bounds, opts.seed)?;
    sim.populate(opts.balls)?;
    tracing::info!(
        "spawned {} balls in a {} x {} x {} box",
        sim.balls.len(),
        bounds.width,
        bounds.height,
        bounds.depth
    );

    let windowed = cfg!(feature = "render") && !opts.headless;
    if windowed {
        #[cfg(feature = "render")]
        return run_windowed(sim, bounds);
    }
    run_headless(&mut sim, opts.steps);
    Ok(())
}

#[cfg(feature = "render")]
fn run_windowed(mut sim: Simulation, bounds: Bounds) -> Result<()> {
    use std::time::Instant;

    let mut renderer = Renderer::new(bounds, "Rebound")?;
    let mut last_frame = Instant::now();
    let mut frame: u64 = 0;

    loop {
        let now = Instant::now();
        let delta = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        if !renderer.advance_controls(delta) {
            break;
        }
        renderer.rotate_light(delta);
        sim.step(delta);
        renderer.update_scene(&sim.balls);
        renderer.render()?;

        frame += 1;
        if frame % 300 == 0 {
            if let Some(ball) = sim.balls.first() {
                tracing::info!("frame {}: ball 0 at {:?}", frame, ball.pos);
            }
        }
    }

    tracing::info!("window closed after {} frames", frame);
    Ok(())
}

fn run_headless(sim: &mut Simulation, steps: usize) {
    tracing::info!("running {} fixed steps with dt = {}", steps, HEADLESS_DT);
    for i in 0..steps {
        sim.step(HEADLESS_DT);
        if (i + 1) % 50 == 0 {
            if let Some(ball) = sim.balls.first() {
                tracing::info!("step {} complete, ball 0 at {:?}", i + 1, ball.pos);
            }
        }
    }
    if let Some(ball) = sim.balls.first() {
        tracing::info!("final ball 0 position: {:?}", ball.pos);
    }
}
