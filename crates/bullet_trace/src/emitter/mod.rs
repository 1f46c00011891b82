//! Trace emitter
//!
//! Owns a pool of [`Trace`]s. Each frame it adds `dt * spawn_rate` to a
//! running spawn debt and spawns one trace per whole unit owed (so a long
//! frame spawns every trace it owes),
//! advances every live trace, collects their quads in spawn order and then
//! drops traces past their lifetime. Pruning happens after collection, so an
//! expiring trace still draws its last frame.

mod config;

pub use config::EmitterConfig;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Config;
use crate::error::{Result, TraceError};
use crate::foundation::logging::{debug, trace, warn};
use crate::foundation::math::{self, Vec3};
use crate::geometry::QuadGeometry;
use crate::trace::Trace;

/// Fixed-rate spawner and owner of active traces
///
/// The random source used for direction jitter is injected so tests can use
/// a seeded generator.
#[derive(Debug)]
pub struct Emitter<R = StdRng> {
    config: EmitterConfig,
    spawn_axis: Vec3,
    spawn_interval: f32,
    /// Spawns owed but not yet made, always in `[0, 1)` between frames
    spawn_debt: f64,
    active_traces: Vec<Trace>,
    total_spawned: u64,
    rng: R,
}

impl Emitter<StdRng> {
    /// Create an emitter with an entropy-seeded random source
    pub fn new(config: EmitterConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an emitter whose jitter is reproducible from `seed`
    pub fn seeded(config: EmitterConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Emitter<R> {
    /// Create an emitter drawing jitter from `rng`
    ///
    /// Fails if `config` does not validate.
    pub fn with_rng(config: EmitterConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let spawn_axis = math::try_normalize(&config.spawn_axis)
            .ok_or(TraceError::ZeroDirection { what: "spawn_axis" })?;
        let spawn_interval = config.spawn_interval();

        debug!(
            "Emitter created at {:?} along {:?}: {} traces/s, lifetime {}s, jitter {}",
            config.spawn_origin, spawn_axis, config.spawn_rate, config.lifetime_sec, config.jitter_magnitude
        );

        Ok(Self {
            config,
            spawn_axis,
            spawn_interval,
            spawn_debt: 0.0,
            active_traces: Vec::with_capacity(64),
            total_spawned: 0,
            rng,
        })
    }

    /// Advance one frame and return a quad for every trace live this frame
    pub fn update(&mut self, delta_time_sec: f32, viewer_position: &Vec3) -> Vec<QuadGeometry> {
        let mut quads = Vec::with_capacity(self.active_traces.len() + 1);
        self.update_into(delta_time_sec, viewer_position, &mut quads);
        quads
    }

    /// Same as [`update`](Self::update) but writes into a reusable buffer
    ///
    /// `quads` is cleared first.
    pub fn update_into(&mut self, delta_time_sec: f32, viewer_position: &Vec3, quads: &mut Vec<QuadGeometry>) {
        let dt = delta_time_sec.max(0.0);
        quads.clear();

        self.spawn_due(dt);

        quads.extend(
            self.active_traces
                .iter_mut()
                .map(|t| t.advance_and_emit(dt, viewer_position)),
        );

        self.prune_expired();
    }

    /// Spawn one trace per whole interval owed
    ///
    /// The debt is counted in spawns rather than seconds, so the number owed
    /// is one `floor` and a frame of any length terminates.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn spawn_due(&mut self, dt: f32) {
        self.spawn_debt += f64::from(dt) * f64::from(self.config.spawn_rate);
        let owed = self.spawn_debt.floor();
        self.spawn_debt -= owed;

        for _ in 0..owed as u64 {
            self.spawn_one();
        }
    }

    fn spawn_one(&mut self) {
        let jitter = self.sample_jitter();
        let direction = math::try_normalize(&(self.spawn_axis + jitter)).unwrap_or_else(|| {
            warn!("Jittered spawn direction collapsed to zero, firing along the base axis");
            self.spawn_axis
        });

        let spawned = Trace::from_validated(
            self.config.spawn_origin,
            direction,
            self.config.trace_speed,
            self.config.shape,
        );
        self.active_traces.push(spawned);
        self.total_spawned += 1;

        trace!("Spawned trace #{} along {:?}", self.total_spawned, direction);
    }

    /// Independent uniform offset per axis in `[-m/2, m/2]`
    fn sample_jitter(&mut self) -> Vec3 {
        if self.config.jitter_magnitude <= 0.0 {
            return Vec3::zeros();
        }
        let half = self.config.jitter_magnitude * 0.5;
        Vec3::new(
            self.rng.gen_range(-half..=half),
            self.rng.gen_range(-half..=half),
            self.rng.gen_range(-half..=half),
        )
    }

    fn prune_expired(&mut self) {
        let lifetime = self.config.lifetime_sec;
        let before = self.active_traces.len();
        self.active_traces.retain(|t| !t.is_expired(lifetime));

        let removed = before - self.active_traces.len();
        if removed > 0 {
            trace!("Pruned {} expired traces, {} still active", removed, self.active_traces.len());
        }
    }

    /// Drop every trace and clear the spawn debt
    pub fn clear(&mut self) {
        self.active_traces.clear();
        self.spawn_debt = 0.0;
    }

    /// Live traces in spawn order
    pub fn active_traces(&self) -> &[Trace] {
        &self.active_traces
    }

    /// Number of live traces
    pub fn trace_count(&self) -> usize {
        self.active_traces.len()
    }

    /// Time owed toward the next spawn, always below one interval
    #[allow(clippy::cast_possible_truncation)]
    pub fn spawn_accumulator(&self) -> f32 {
        (self.spawn_debt / f64::from(self.config.spawn_rate)) as f32
    }

    /// Seconds between spawns
    pub fn spawn_interval(&self) -> f32 {
        self.spawn_interval
    }

    /// Traces spawned since creation
    pub fn total_spawned(&self) -> u64 {
        self.total_spawned
    }

    /// Normalized base fire direction
    pub fn spawn_axis(&self) -> Vec3 {
        self.spawn_axis
    }

    /// Configuration this emitter was built from
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }
}
