//! Locked-axis billboard orientation
//!
//! A locked-axis billboard keeps its long axis on a fixed direction (here,
//! the travel direction) and only spins around that axis to face the viewer.
//! Unlike a screen-aligned billboard it never tilts the streak off its path.

use crate::foundation::math::{Mat4, Vec3};

/// Short-axis direction for a quad whose long axis is locked to `travel_dir`
///
/// Returns `normalize(travel_dir x normalize(center - viewer))`, which is
/// perpendicular to both the travel direction and the line of sight.
///
/// The result is undefined (non-finite) when `viewer` coincides with
/// `center` or looks exactly along `travel_dir`; avoiding that is up to the
/// caller.
pub fn locked_axis_short_direction(travel_dir: &Vec3, center: &Vec3, viewer: &Vec3) -> Vec3 {
    let view_axis = (center - viewer).normalize();
    travel_dir.cross(&view_axis).normalize()
}

/// Transformation matrix mapping the unit quad onto a locked-axis rectangle
///
/// The unit quad spans `[-0.5, 0.5]` on X and Y in model space. X is
/// stretched to `length` along `travel_dir`, Y to `width` along `short_dir`,
/// and Z becomes the quad normal. This is the per-instance transform for
/// drawing every trace from one shared unit-quad mesh.
pub fn locked_axis_transform(
    center: &Vec3,
    travel_dir: &Vec3,
    short_dir: &Vec3,
    length: f32,
    width: f32,
) -> Mat4 {
    let normal = travel_dir.cross(short_dir);

    let right = travel_dir * length;
    let up = short_dir * width;

    // Mat4::new takes row-major arguments; columns are [right | up | normal | center]
    Mat4::new(
        right.x, up.x, normal.x, center.x,
        right.y, up.y, normal.y, center.y,
        right.z, up.z, normal.z, center.z,
        0.0, 0.0, 0.0, 1.0,
    )
}
