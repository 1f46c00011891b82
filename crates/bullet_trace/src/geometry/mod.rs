//! Quad geometry for trace rendering
//!
//! `quad` turns a center, two axes and two lengths into four corner
//! positions plus the fixed two-triangle index list. `billboard` computes
//! the locked-axis orientation that keeps a streak's long axis on its travel
//! direction while its face turns toward the viewer.

pub mod quad;
pub mod billboard;

pub use quad::{build_rectangle, QuadGeometry, RECTANGLE_INDICES};
pub use billboard::{locked_axis_short_direction, locked_axis_transform};
