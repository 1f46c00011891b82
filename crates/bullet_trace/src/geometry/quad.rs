//! Rectangle builder
//!
//! Corner order is fixed: top-right, bottom-right, bottom-left, top-left,
//! where "right" points along the long axis and "top" along the short axis.
//! [`RECTANGLE_INDICES`] covers that order with two triangles of the same
//! winding that share the bottom-right/top-left diagonal.

use std::fmt;

use crate::foundation::math::Vec3;

/// Two triangles covering the four corners returned by [`build_rectangle`]
pub const RECTANGLE_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    1, 2, 3, // second triangle
];

/// Indexed positions for one rectangle, ready for a batcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadGeometry {
    /// Triangle list into `positions`
    pub indices: [u32; 6],

    /// Corner positions in world space
    pub positions: [Vec3; 4],
}

impl QuadGeometry {
    /// Center of the rectangle (average of the corners)
    pub fn center(&self) -> Vec3 {
        self.positions.iter().sum::<Vec3>() / 4.0
    }

    /// Extent along the long axis (top-left to top-right)
    pub fn length(&self) -> f32 {
        (self.positions[0] - self.positions[3]).norm()
    }

    /// Extent along the short axis (bottom-right to top-right)
    pub fn width(&self) -> f32 {
        (self.positions[0] - self.positions[1]).norm()
    }

    /// Flat `xyz` list, in corner order, for vertex buffer uploads
    pub fn flattened_positions(&self) -> [f32; 12] {
        let mut out = [0.0; 12];
        for (chunk, p) in out.chunks_exact_mut(3).zip(self.positions.iter()) {
            chunk.copy_from_slice(p.as_slice());
        }
        out
    }
}

impl fmt::Display for QuadGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "quad[")?;
        for (i, p) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({:.4}, {:.4}, {:.4})", p.x, p.y, p.z)?;
        }
        write!(f, "]")
    }
}

/// Build a rectangle centered at `center`
///
/// `long_dir` and `short_dir` are expected to be unit length and
/// perpendicular; `length` is measured along `long_dir` and `width` along
/// `short_dir`. The same inputs always produce the same four points.
pub fn build_rectangle(
    center: Vec3,
    long_dir: Vec3,
    short_dir: Vec3,
    length: f32,
    width: f32,
) -> QuadGeometry {
    let half_long = long_dir * (length * 0.5);
    let half_short = short_dir * (width * 0.5);

    QuadGeometry {
        indices: RECTANGLE_INDICES,
        positions: [
            center + half_long + half_short, // top right
            center + half_long - half_short, // bottom right
            center - half_long - half_short, // bottom left
            center - half_long + half_short, // top left
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn axis_aligned() -> QuadGeometry {
        build_rectangle(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::x(),
            Vec3::y(),
            4.0,
            2.0,
        )
    }

    #[test]
    fn test_corner_layout() {
        let quad = axis_aligned();
        assert_relative_eq!(quad.positions[0], Vec3::new(3.0, 3.0, 3.0));
        assert_relative_eq!(quad.positions[1], Vec3::new(3.0, 1.0, 3.0));
        assert_relative_eq!(quad.positions[2], Vec3::new(-1.0, 1.0, 3.0));
        assert_relative_eq!(quad.positions[3], Vec3::new(-1.0, 3.0, 3.0));
        assert_eq!(quad.indices, RECTANGLE_INDICES);
    }

    #[test]
    fn test_measurements() {
        let quad = axis_aligned();
        assert_relative_eq!(quad.center(), Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(quad.length(), 4.0);
        assert_relative_eq!(quad.width(), 2.0);
    }

    #[test]
    fn test_triangles_share_diagonal() {
        // Both triangles reference the 1-3 diagonal and together touch every corner
        let first = &RECTANGLE_INDICES[..3];
        let second = &RECTANGLE_INDICES[3..];
        assert!(first.contains(&1) && first.contains(&3));
        assert!(second.contains(&1) && second.contains(&3));
        for corner in 0..4 {
            assert!(RECTANGLE_INDICES.contains(&corner));
        }
    }

    #[test]
    fn test_flattened_positions_follow_corner_order() {
        let flat = axis_aligned().flattened_positions();
        assert_eq!(&flat[..3], &[3.0, 3.0, 3.0]);
        assert_eq!(&flat[9..], &[-1.0, 3.0, 3.0]);
    }

    #[test]
    fn test_display() {
        let quad = build_rectangle(Vec3::zeros(), Vec3::x(), Vec3::y(), 2.0, 2.0);
        assert_eq!(
            quad.to_string(),
            "quad[(1.0000, 1.0000, 0.0000), (1.0000, -1.0000, 0.0000), \
             (-1.0000, -1.0000, 0.0000), (-1.0000, 1.0000, 0.0000)]"
        );
    }
}
