#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]

use lissajous::{
    fit, sample, AxisLayout, AxisScale, LinearScale, Point, Rewind, SimulationParameters,
    SimulationState, SpringGeometry, StepCount, TrajectoryBuffer, SPRING_POINT_COUNT,
};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = SimulationParameters> {
    (
        -20.0f64..20.0,
        -20.0f64..20.0,
        0.01f64..10.0,
        0.01f64..10.0,
        -2.0f64..2.0,
        -2.0f64..2.0,
        -2.0f64..2.0,
        1u32..500,
    )
        .prop_map(|(xf, yf, xm, ym, xd, yd, phase, interval)| {
            SimulationParameters {
                x_frequency: xf,
                y_frequency: yf,
                x_magnitude: xm,
                y_magnitude: ym,
                x_damping: xd,
                y_damping: yd,
                phase_difference: phase,
                ..SimulationParameters::default()
            }
            .with_step_interval_ms(interval)
            .unwrap()
        })
}

// =============================================================================
// Oscillator properties
// =============================================================================

proptest! {
    #[test]
    fn undamped_motion_stays_in_envelope(
        params in params_strategy(),
        step in 0u64..1_000_000,
    ) {
        let params = SimulationParameters { x_damping: 0.0, y_damping: 0.0, ..params };
        let p = sample(step, &params);
        prop_assert!(
            p.x.abs() <= params.x_magnitude + 1e-12,
            "x={} mag={}",
            p.x,
            params.x_magnitude
        );
        prop_assert!(
            p.y.abs() <= params.y_magnitude + 1e-12,
            "y={} mag={}",
            p.y,
            params.y_magnitude
        );
    }

    #[test]
    fn positive_damping_stays_in_decaying_envelope(
        params in params_strategy(),
        step in 0u64..10_000,
    ) {
        let params = SimulationParameters {
            x_damping: params.x_damping.abs(),
            y_damping: params.y_damping.abs(),
            ..params
        };
        let t = lissajous::elapsed(step, &params);
        let p = sample(step, &params);
        let x_env = params.x_magnitude * (-params.x_damping * t).exp();
        let y_env = params.y_magnitude * (-params.y_damping * t).exp();
        prop_assert!(p.x.abs() <= x_env * (1.0 + 1e-12) + 1e-300);
        prop_assert!(p.y.abs() <= y_env * (1.0 + 1e-12) + 1e-300);
    }

    #[test]
    fn sample_is_deterministic(
        params in params_strategy(),
        step in 0u64..100_000,
    ) {
        let a = sample(step, &params);
        let b = sample(step, &params);
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

// =============================================================================
// Trajectory properties
// =============================================================================

proptest! {
    #[test]
    fn append_then_rewind_restores_state(
        params in params_strategy(),
        initial in 1usize..200,
        extra in 1usize..200,
    ) {
        let mut state = SimulationState::new();
        state.forward(StepCount::new(initial).unwrap(), &params);
        let before = state.clone();

        state.forward(StepCount::new(extra).unwrap(), &params);
        let outcome = state.rewind(StepCount::new(extra).unwrap());

        prop_assert_eq!(outcome, Rewind::Removed(extra));
        prop_assert_eq!(state, before);
    }

    #[test]
    fn rewind_past_history_clears(
        len in 0usize..100,
        over in 0usize..50,
    ) {
        let params = SimulationParameters::default();
        let mut state = SimulationState::new();
        if let Some(n) = StepCount::new(len) {
            state.forward(n, &params);
        }

        let outcome = state.rewind(StepCount::new(len + over + 1).unwrap_or(StepCount::ONE));

        prop_assert_eq!(outcome, Rewind::Cleared);
        prop_assert_eq!(state.step_count(), 0);
        prop_assert!(state.trajectory().is_empty());
    }

    #[test]
    fn bounded_buffer_never_exceeds_bound(
        bound in 1usize..64,
        appends in 0usize..300,
    ) {
        let mut buf = TrajectoryBuffer::bounded(bound);
        for i in 0..appends {
            buf.append(Point::new(i as f64, 0.0));
            prop_assert!(buf.len() <= bound);
        }
        // FIFO: the retained window is the newest `bound` points in order.
        let expected: Vec<f64> = (appends.saturating_sub(bound)..appends)
            .map(|i| i as f64)
            .collect();
        let actual: Vec<f64> = buf.iter().map(|p| p.x).collect();
        prop_assert_eq!(actual, expected);
    }
}

// =============================================================================
// Viewport properties
// =============================================================================

proptest! {
    #[test]
    fn fit_is_bounded_and_centered(
        width in 1.0f64..10_000.0,
        height in 1.0f64..10_000.0,
    ) {
        let area = fit(width, height);
        prop_assert!(area.width <= 96.0 + 1e-9);
        prop_assert!(area.height <= 96.0 + 1e-9);
        prop_assert!(area.x >= 0.0 && area.y >= 0.0);
        prop_assert!(area.x + area.width <= 100.0 + 1e-9);
        prop_assert!(area.y + area.height <= 100.0 + 1e-9);
        prop_assert!((area.center_x() - 50.0).abs() < 1e-9);
        prop_assert!((area.center_y() - 50.0).abs() < 1e-9);

        let (_, _, pw, ph) = area.to_pixels(width, height);
        prop_assert!((pw - ph).abs() < 1e-6 * pw.max(ph), "pw={} ph={}", pw, ph);
    }
}

// =============================================================================
// Spring geometry properties
// =============================================================================

proptest! {
    #[test]
    fn spring_connects_anchor_to_point(
        px in -1.0f64..1.0,
        py in -1.0f64..1.0,
        ax in -1.0f64..1.0,
        ay in -1.0f64..1.0,
        width in 50.0f64..2000.0,
        height in 50.0f64..2000.0,
    ) {
        let layout = AxisLayout::for_magnitude(1.0, 1);
        let x_axis = layout.scale(0.0, width);
        let y_axis = layout.scale(height, 0.0);
        let geometry = SpringGeometry::new(1.0, 1.0);
        let point = Point::new(px, py);
        let anchor = Point::new(ax, ay);

        let spring = geometry.build(point, anchor, &x_axis, &y_axis);

        prop_assert_eq!(spring.len(), SPRING_POINT_COUNT);
        let tol = 1e-6 * width.max(height);
        prop_assert!((spring[0].x - x_axis.value_to_pixel(ax)).abs() < tol);
        prop_assert!((spring[0].y - y_axis.value_to_pixel(ay)).abs() < tol);
        prop_assert!((spring[52].x - x_axis.value_to_pixel(px)).abs() < tol);
        prop_assert!((spring[52].y - y_axis.value_to_pixel(py)).abs() < tol);
    }

    #[test]
    fn coincident_point_degenerates_to_anchor(
        ax in -5.0f64..5.0,
        ay in -5.0f64..5.0,
        x_mag in 0.0f64..5.0,
        y_mag in 0.0f64..5.0,
    ) {
        let x_axis = LinearScale::new(-6.0, 6.0, 0.0, 600.0);
        let y_axis = LinearScale::new(-6.0, 6.0, 600.0, 0.0);
        let anchor = Point::new(ax, ay);

        let spring = SpringGeometry::new(x_mag, y_mag).build(anchor, anchor, &x_axis, &y_axis);

        let expected = Point::new(x_axis.value_to_pixel(ax), y_axis.value_to_pixel(ay));
        for p in &spring {
            prop_assert!((p.x - expected.x).abs() < 1e-9 && (p.y - expected.y).abs() < 1e-9);
        }
    }

    #[test]
    fn spring_output_is_finite(
        params in params_strategy(),
        step in 0u64..200,
    ) {
        let layout = AxisLayout::for_parameters(&params, 1);
        let x_axis = layout.scale(0.0, 800.0);
        let y_axis = layout.scale(800.0, 0.0);
        let point = sample(step, &params);

        let springs =
            lissajous::SpringOverlay::build_all(point, &params, &layout, &x_axis, &y_axis);
        for spring in &springs {
            prop_assert!(spring.points.iter().all(Point::is_finite));
        }
    }
}
