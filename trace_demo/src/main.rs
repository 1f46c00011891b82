//! Headless bullet trace demo
//!
//! Runs the per-frame host loop without a window: an orbiting camera, an
//! emitter (or a single trace restarted on a timer) and a log line per
//! simulated second describing what would be handed to the batcher.

use std::path::PathBuf;
use std::time::Duration;
use std::result::Result;

use bullet_trace::foundation::logging;
use bullet_trace::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};

/// Errors surfaced by the demo
#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("Frame rate must be positive, got {0}")]
    FrameRate(f32),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate bullet trace streaks and report the generated quads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the frame loop
    Run {
        /// Emitter settings (.toml or .ron); defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of frames to simulate
        #[arg(short, long, default_value_t = 600)]
        frames: u32,

        /// Simulated frames per second
        #[arg(long, default_value_t = 60.0)]
        fps: f32,

        /// Multiplier applied to every frame delta
        #[arg(long, default_value_t = 1.0)]
        time_scale: f32,

        /// Seed for spawn jitter; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// What to drive each frame
        #[arg(long, value_enum, default_value_t = Mode::Emitter)]
        mode: Mode,

        /// Restart period for `--mode single`, in seconds
        #[arg(long, default_value_t = 1.0)]
        reset_interval: f32,
    },
    /// Write the default emitter settings to a file
    DumpConfig {
        /// Output path (.toml or .ron)
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Fixed-rate emitter with jitter and lifetime pruning
    Emitter,
    /// One trace restarted in place on a timer
    Single,
}

/// Camera circling the spawn point so the billboards keep turning
struct OrbitCamera {
    center: Vec3,
    radius: f32,
    height: f32,
    angular_speed: f32,
    angle: f32,
}

impl OrbitCamera {
    fn new(center: Vec3) -> Self {
        Self {
            center,
            radius: 3.0,
            height: 0.5,
            angular_speed: 0.4,
            angle: 0.0,
        }
    }

    fn update(&mut self, delta_time: f32) -> Vec3 {
        self.angle += self.angular_speed * delta_time;
        self.center + Vec3::new(self.radius * self.angle.cos(), self.height, self.radius * self.angle.sin())
    }
}

struct RunSettings {
    frames: u32,
    fps: f32,
    time_scale: f32,
}

fn main() -> Result<(), DemoError> {
    logging::init_with_level(log::LevelFilter::Info);

    let cli = Cli::parse();
    let result = dispatch(cli.command);

    if let Err(e) = &result {
        log::error!("Trace demo failed: {}", e);
    }
    result
}

fn dispatch(command: Commands) -> Result<(), DemoError> {
    match command {
        Commands::Run {
            config,
            frames,
            fps,
            time_scale,
            seed,
            mode,
            reset_interval,
        } => {
            if !(fps.is_finite() && fps > 0.0) {
                return Err(DemoError::FrameRate(fps));
            }
            let config = match config {
                Some(path) => {
                    log::info!("Loading emitter settings from {}", path.display());
                    EmitterConfig::load_from_file(&path)?
                }
                None => EmitterConfig::default(),
            };
            let settings = RunSettings { frames, fps, time_scale };

            match mode {
                Mode::Emitter => run_emitter(config, seed, &settings),
                Mode::Single => run_single(&config, reset_interval, &settings),
            }
        }
        Commands::DumpConfig { output } => {
            EmitterConfig::default().save_to_file(&output)?;
            log::info!("Wrote default emitter settings to {}", output.display());
            Ok(())
        }
    }
}

fn run_emitter(config: EmitterConfig, seed: Option<u64>, settings: &RunSettings) -> Result<(), DemoError> {
    let origin = config.spawn_origin;
    let mut emitter = match seed {
        Some(seed) => Emitter::seeded(config, seed)?,
        None => Emitter::new(config)?,
    };
    let mut camera = OrbitCamera::new(origin);
    let mut timer = FrameTimer::new().with_time_scale(settings.time_scale);
    let frame_duration = Duration::from_secs_f32(1.0 / settings.fps);
    let mut quads = Vec::new();
    let log_every = settings.fps.round().max(1.0) as u64;

    log::info!("Starting emitter demo: {} frames at {} fps", settings.frames, settings.fps);

    for _ in 0..settings.frames {
        let delta_time = timer.advance(frame_duration);
        let camera_position = camera.update(delta_time);
        emitter.update_into(delta_time, &camera_position, &mut quads);

        if timer.frame_count() % log_every == 0 {
            log::info!(
                "t={:.2}s: {} quads this frame, {} spawned so far",
                timer.total_time(),
                quads.len(),
                emitter.total_spawned()
            );
            if let Some(newest) = quads.last() {
                log::debug!("newest {}", newest);
            }
        }
    }

    log::info!(
        "Emitter demo finished: {} traces spawned, {} still active",
        emitter.total_spawned(),
        emitter.trace_count()
    );
    Ok(())
}

fn run_single(config: &EmitterConfig, reset_interval: f32, settings: &RunSettings) -> Result<(), DemoError> {
    let mut trace = Trace::new(config.spawn_origin, config.spawn_axis, config.trace_speed, config.shape)?;
    let mut camera = OrbitCamera::new(config.spawn_origin);
    let mut timer = FrameTimer::new().with_time_scale(settings.time_scale);
    let frame_duration = Duration::from_secs_f32(1.0 / settings.fps);
    let mut since_reset = 0.0_f32;
    let mut resets = 0_u32;

    log::info!("Starting single-trace demo: reset every {}s", reset_interval);

    for _ in 0..settings.frames {
        let delta_time = timer.advance(frame_duration);
        let camera_position = camera.update(delta_time);

        since_reset += delta_time;
        if reset_interval > 0.0 && since_reset >= reset_interval {
            trace.reset();
            since_reset -= reset_interval;
            resets += 1;
        }

        trace.advance(delta_time);
        let frame = trace.frame(&camera_position);
        let quad = frame.to_quad();
        log::trace!("{} (transform column 3: {:?})", quad, frame.billboard_transform().column(3));
    }

    log::info!(
        "Single-trace demo finished after {} resets, tip at {:?}",
        resets,
        trace.leading_edge()
    );
    Ok(())
}
