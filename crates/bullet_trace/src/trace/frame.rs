//! Per-frame layout of a trace

use crate::foundation::math::{Mat4, Vec3};
use crate::geometry::{build_rectangle, locked_axis_transform, QuadGeometry};

/// Where a trace sits this frame and how it is oriented
///
/// `travel_dir` and `short_dir` are unit length and perpendicular (for a
/// non-degenerate viewer position).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceFrame {
    /// Quad center in world space
    pub center: Vec3,

    /// Long-axis direction (the travel direction)
    pub travel_dir: Vec3,

    /// Short-axis direction, facing the viewer
    pub short_dir: Vec3,

    /// Long-axis size
    pub length: f32,

    /// Short-axis size
    pub width: f32,
}

impl TraceFrame {
    /// Build the indexed rectangle for this frame
    pub fn to_quad(&self) -> QuadGeometry {
        build_rectangle(self.center, self.travel_dir, self.short_dir, self.length, self.width)
    }

    /// Model-to-world transform for drawing from a shared unit quad
    pub fn billboard_transform(&self) -> Mat4 {
        locked_axis_transform(&self.center, &self.travel_dir, &self.short_dir, self.length, self.width)
    }

    /// Front tip of the streak along the travel direction
    pub fn leading_edge(&self) -> Vec3 {
        self.center + self.travel_dir * (self.length * 0.5)
    }
}
