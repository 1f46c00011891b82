//! Bullet trace streaks
//!
//! A trace leaves the muzzle infinitely small. Its short axis grows at
//! `speed` until it reaches the shape's `max_size`, with the long axis held
//! at `aspect_ratio` times the short axis. From then on the streak keeps its
//! size and slides forward.
//!
//! While growing, the front tip advances at `aspect_ratio * speed` because
//! the long axis is lengthening from a fixed origin. The forward offset
//! applied after full scale grows at that same rate, so the streak keeps
//! the apparent speed it had while scaling up.

mod frame;
mod shape;

pub use frame::TraceFrame;
pub use shape::TraceShape;

use crate::error::{require_positive, Result, TraceError};
use crate::foundation::math::{self, Vec3};
use crate::geometry::{locked_axis_short_direction, QuadGeometry};

/// One animated streak
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    origin: Vec3,
    direction: Vec3,
    speed: f32,
    age_sec: f32,
    full_scale_age_sec: f32,
    shape: TraceShape,
}

impl Trace {
    /// Create a trace at `origin` travelling along `direction`
    ///
    /// `direction` is normalized here. Fails when it is zero-length, when
    /// `speed` is not positive, or when `shape` is invalid.
    pub fn new(origin: Vec3, direction: Vec3, speed: f32, shape: TraceShape) -> Result<Self> {
        if !math::is_finite(&origin) {
            return Err(TraceError::invalid("origin", "must be finite"));
        }
        let direction =
            math::try_normalize(&direction).ok_or(TraceError::ZeroDirection { what: "direction" })?;
        require_positive("speed", speed)?;
        shape.validate()?;

        Ok(Self::from_validated(origin, direction, speed, shape))
    }

    /// Build from already-validated parts; `direction` must be unit length
    pub(crate) fn from_validated(origin: Vec3, direction: Vec3, speed: f32, shape: TraceShape) -> Self {
        Self {
            origin,
            direction,
            speed,
            age_sec: 0.0,
            full_scale_age_sec: 0.0,
            shape,
        }
    }

    /// Advance by `delta_time_sec` and return this frame's quad
    pub fn advance_and_emit(&mut self, delta_time_sec: f32, viewer_position: &Vec3) -> QuadGeometry {
        self.advance(delta_time_sec);
        self.frame(viewer_position).to_quad()
    }

    /// Advance the trace's clocks by `delta_time_sec`
    ///
    /// Negative deltas are treated as zero so ages never decrease. Once the
    /// short axis has reached `max_size`, the whole delta also counts toward
    /// `full_scale_age_sec`.
    pub fn advance(&mut self, delta_time_sec: f32) {
        let dt = delta_time_sec.max(0.0);

        self.age_sec += dt;

        if self.is_full_scale() {
            self.full_scale_age_sec += dt;
        }
    }

    /// Layout of the quad for the current state, oriented toward `viewer_position`
    ///
    /// `viewer_position` must not coincide with the quad center.
    pub fn frame(&self, viewer_position: &Vec3) -> TraceFrame {
        let center = self.center();
        TraceFrame {
            center,
            travel_dir: self.direction,
            short_dir: locked_axis_short_direction(&self.direction, &center, viewer_position),
            length: self.long_axis(),
            width: self.short_axis(),
        }
    }

    /// Restart the animation in place without reallocating
    pub fn reset(&mut self) {
        self.age_sec = 0.0;
        self.full_scale_age_sec = 0.0;
    }

    /// Restart from a new origin and direction
    pub fn restart_at(&mut self, origin: Vec3, direction: Vec3) -> Result<()> {
        *self = Self::new(origin, direction, self.speed, self.shape)?;
        Ok(())
    }

    /// Short-axis size: `min(age * speed, max_size)`
    pub fn short_axis(&self) -> f32 {
        (self.age_sec * self.speed).min(self.shape.max_size)
    }

    /// Long-axis size: `aspect_ratio * short_axis`
    pub fn long_axis(&self) -> f32 {
        self.shape.aspect_ratio * self.short_axis()
    }

    /// Whether the growth phase has finished
    pub fn is_full_scale(&self) -> bool {
        self.age_sec * self.speed >= self.shape.max_size
    }

    /// Forward translation accrued since reaching full scale
    pub fn offset(&self) -> f32 {
        if self.is_full_scale() {
            self.shape.aspect_ratio * self.full_scale_age_sec * self.speed
        } else {
            0.0
        }
    }

    /// Quad center: half the long axis plus the offset ahead of the origin
    pub fn center(&self) -> Vec3 {
        self.origin + self.direction * (self.long_axis() * 0.5 + self.offset())
    }

    /// Front tip of the streak
    pub fn leading_edge(&self) -> Vec3 {
        self.origin + self.direction * (self.long_axis() + self.offset())
    }

    /// Whether the trace has lived longer than `lifetime_sec`
    pub fn is_expired(&self, lifetime_sec: f32) -> bool {
        self.age_sec > lifetime_sec
    }

    /// Point the streak started from
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Unit travel direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Growth speed in length units per second
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Seconds since creation or the last reset
    pub fn age_sec(&self) -> f32 {
        self.age_sec
    }

    /// Seconds spent at full scale
    pub fn full_scale_age_sec(&self) -> f32 {
        self.full_scale_age_sec
    }

    /// Shape this trace was created with
    pub fn shape(&self) -> &TraceShape {
        &self.shape
    }
}
