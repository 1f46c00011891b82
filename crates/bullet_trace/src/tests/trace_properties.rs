//! Frame-by-frame properties of the growth law and the emitter pool

use crate::emitter::{Emitter, EmitterConfig};
use crate::foundation::math::Vec3;
use crate::trace::{Trace, TraceShape};
use approx::assert_relative_eq;

fn uneven_deltas() -> Vec<f32> {
    vec![0.016, 0.033, 0.0, 0.1, 0.007, 0.25, 0.016, 0.5, 0.02, 1.3, 0.016, 0.0]
}

#[test]
fn test_short_axis_grows_then_caps() {
    let shape = TraceShape::new(0.3, 10.0);
    let mut trace = Trace::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 0.0), 0.7, shape).unwrap();

    let mut previous = 0.0_f32;
    let mut capped = false;
    for dt in uneven_deltas() {
        trace.advance(dt);
        let size = trace.short_axis();
        assert!(size >= previous);
        assert!(size <= shape.max_size);
        if capped {
            assert_eq!(size, shape.max_size);
        }
        capped |= size == shape.max_size;
        previous = size;
    }
    assert!(capped);
}

#[test]
fn test_leading_edge_keeps_growth_rate_after_full_scale() {
    // Full scale is reached at t = 1.0, in the middle of the fourth frame
    let shape = TraceShape::new(1.0, 16.0);
    let mut trace = Trace::new(Vec3::zeros(), Vec3::z(), 1.0, shape).unwrap();
    let dt = 0.3;
    let growth_step = shape.aspect_ratio * trace.speed() * dt;
    // The whole transition frame counts toward the offset, including the
    // 0.1 s spent growing
    let transition_step = growth_step + shape.aspect_ratio * trace.speed() * 0.1;

    let mut previous = trace.leading_edge();
    for frame in 0..10 {
        trace.advance(dt);
        let edge = trace.leading_edge();
        let step = (edge - previous).dot(&trace.direction());
        let expected = if frame == 3 { transition_step } else { growth_step };
        assert_relative_eq!(step, expected, epsilon = 1e-4);
        assert_eq!(trace.is_full_scale(), frame >= 3);
        previous = edge;
    }
}

#[test]
fn test_billboard_axis_perpendicular_to_travel_and_view() {
    let viewers = [
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(-4.0, 2.0, 1.0),
        Vec3::new(5.0, -6.0, -2.0),
    ];
    let mut trace = Trace::new(
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.3, 0.9, -0.2),
        1.0,
        TraceShape::default(),
    )
    .unwrap();

    for viewer in &viewers {
        trace.advance(0.02);
        let frame = trace.frame(viewer);
        let view_axis = (frame.center - viewer).normalize();

        assert_relative_eq!(frame.short_dir.norm(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(frame.short_dir.dot(&trace.direction()), 0.0, epsilon = 1e-5);
        assert_relative_eq!(frame.short_dir.dot(&view_axis), 0.0, epsilon = 1e-5);
    }
}

#[test]
fn test_spawn_catch_up_single_large_step() {
    let config = EmitterConfig::new(Vec3::zeros(), Vec3::x(), 10.0);
    let mut emitter = Emitter::seeded(config, 3).unwrap();

    let quads = emitter.update(0.35, &Vec3::new(0.0, 0.0, 3.0));

    assert_eq!(emitter.total_spawned(), 3);
    assert_eq!(quads.len(), 3);
    assert_relative_eq!(emitter.spawn_accumulator(), 0.05, epsilon = 1e-5);
}

#[test]
fn test_expired_trace_drawn_once_more_then_pruned() {
    // One spawn every ten seconds
    let config = EmitterConfig::new(Vec3::zeros(), Vec3::x(), 0.1)
        .with_jitter(0.0)
        .with_lifetime(5.0);
    let mut emitter = Emitter::seeded(config, 3).unwrap();
    let viewer = Vec3::new(0.0, 0.0, 3.0);

    emitter.update(5.0, &viewer);
    emitter.update(5.0, &viewer);
    assert_eq!(emitter.trace_count(), 1);
    assert_relative_eq!(emitter.active_traces()[0].age_sec(), 5.0);

    // Age 5.1 passes the lifetime: still drawn this frame, gone afterwards
    let quads = emitter.update(0.1, &viewer);
    assert_eq!(quads.len(), 1);
    assert_eq!(emitter.trace_count(), 0);
}

#[test]
fn test_trace_older_than_lifetime_at_birth_draws_one_frame() {
    let config = EmitterConfig::new(Vec3::zeros(), Vec3::x(), 0.1)
        .with_jitter(0.0)
        .with_lifetime(5.0);
    let mut emitter = Emitter::seeded(config, 3).unwrap();

    let quads = emitter.update(10.0, &Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(quads.len(), 1);
    assert_eq!(emitter.trace_count(), 0);
}

#[test]
fn test_runs_without_jitter_are_identical() {
    let config = EmitterConfig::default().with_jitter(0.0);
    let viewer = Vec3::new(0.0, 0.5, 3.0);

    let mut first = Emitter::seeded(config.clone(), 1).unwrap();
    let mut second = Emitter::seeded(config, 99).unwrap();

    for dt in uneven_deltas() {
        assert_eq!(first.update(dt, &viewer), second.update(dt, &viewer));
    }
    assert!(first.total_spawned() > 0);
}

#[test]
fn test_single_trace_reuse_by_reset() {
    let mut trace = Trace::new(Vec3::zeros(), Vec3::x(), 1.0, TraceShape::default()).unwrap();
    let viewer = Vec3::new(0.0, 0.0, 3.0);

    let first = trace.advance_and_emit(0.02, &viewer);
    trace.advance_and_emit(0.5, &viewer);
    trace.reset();
    let again = trace.advance_and_emit(0.02, &viewer);

    assert_eq!(first, again);
}
