//! # Bullet Trace
//!
//! Animated streaks for fast projectiles: thin quads that grow from a point
//! to a fixed size, then slide forward at constant speed, always turned
//! toward the viewer around their travel axis.
//!
//! ## Features
//!
//! - **Trace**: time-driven growth law producing one oriented quad per frame
//! - **Emitter**: fixed-rate spawning with per-axis direction jitter and
//!   lifetime pruning
//! - **Locked-axis billboards**: quad corners or per-instance transforms
//! - **Config files**: TOML or RON emitter settings via serde
//!
//! The crate performs no GPU work. Feed it the frame time and the camera
//! position; hand the returned quads to whatever batches your draws.
//!
//! ## Quick Start
//!
//! ```rust
//! use bullet_trace::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = EmitterConfig::new(Vec3::zeros(), Vec3::x(), 10.0);
//!     let mut emitter = Emitter::new(config)?;
//!
//!     let camera = Vec3::new(0.0, 0.0, 3.0);
//!     let mut vertices: Vec<f32> = Vec::new();
//!     for _ in 0..60 {
//!         vertices.clear();
//!         for quad in emitter.update(1.0 / 60.0, &camera) {
//!             // upload alongside quad.indices
//!             vertices.extend(quad.flattened_positions());
//!         }
//!     }
//!     assert!(emitter.total_spawned() > 0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod geometry;
pub mod trace;
pub mod emitter;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Result, TraceError};

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        Result, TraceError,
        config::{Config, ConfigError},
        emitter::{Emitter, EmitterConfig},
        foundation::{
            math::{Mat4, Vec3},
            time::FrameTimer,
        },
        geometry::QuadGeometry,
        trace::{Trace, TraceFrame, TraceShape},
    };
}
