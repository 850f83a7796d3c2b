use std::f64::consts::TAU;

use proptest::prelude::*;
use radar_rs::core::{
    AxisSet, MissingValuePolicy, PlotPoint, Series, axis_angle, build_grid_ring,
    compute_label_anchor, compute_scale_max, project_point,
};

proptest! {
    #[test]
    fn angle_step_is_constant(axis_count in 2usize..128, index_seed in 0usize..1024) {
        let index = index_seed % (axis_count - 1);
        let current = axis_angle(index, axis_count).expect("angle");
        let next = axis_angle(index + 1, axis_count).expect("angle");
        prop_assert!((next - current - TAU / axis_count as f64).abs() <= 1e-12);
    }

    #[test]
    fn projected_distance_is_linear_in_value(
        axis_count in 1usize..64,
        index_seed in 0usize..1024,
        value in 0.0f64..1_000.0,
        max_value in 0.001f64..1_000.0,
        radius in 0.5f64..500.0
    ) {
        let index = index_seed % axis_count;
        let center = PlotPoint::new(radius, radius);
        let point = project_point(index, axis_count, value, max_value, radius).expect("project");
        let expected = radius * value / max_value;
        prop_assert!((point.distance_to(center) - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn ring_points_match_scaled_projection(
        axis_count in 1usize..32,
        max_value in 0.1f64..500.0,
        fraction in 0.01f64..1.5
    ) {
        let ring = build_grid_ring(axis_count, max_value, 50.0, fraction).expect("ring");
        prop_assert_eq!(ring.len(), axis_count);
        for (index, point) in ring.iter().enumerate() {
            let direct = project_point(index, axis_count, max_value * fraction, max_value, 50.0)
                .expect("project");
            prop_assert_eq!(*point, direct);
        }
    }

    #[test]
    fn label_anchor_is_scaled_reference_point(
        axis_count in 1usize..64,
        index_seed in 0usize..1024,
        ratio in 1.01f64..3.0
    ) {
        let index = index_seed % axis_count;
        let data_radius = 50.0;
        let anchor = compute_label_anchor(index, axis_count, data_radius * ratio, data_radius)
            .expect("anchor");
        let outer = project_point(index, axis_count, 1.0, 1.0, data_radius).expect("project");

        let expected_x = data_radius + (outer.x - data_radius) * ratio;
        let expected_y = data_radius + (outer.y - data_radius) * ratio;
        prop_assert!((anchor.x - expected_x).abs() <= 1e-9);
        prop_assert!((anchor.y - expected_y).abs() <= 1e-9);
    }

    #[test]
    fn scale_max_never_below_floor_or_data(
        values in prop::collection::vec(-100.0f64..100.0, 1..12),
        floor in 0.001f64..50.0
    ) {
        let names: Vec<String> = (0..values.len()).map(|i| format!("axis-{i}")).collect();
        let axes = AxisSet::new(names.clone()).expect("axes");
        let series = Series::from_pairs("s", names.into_iter().zip(values.iter().copied()))
            .expect("series");

        let max = compute_scale_max(&[series], &axes, floor, MissingValuePolicy::default())
            .expect("scale");
        prop_assert!(max >= floor);
        prop_assert!(values.iter().all(|value| *value <= max));
        prop_assert!(max.is_finite() && max > 0.0);
    }
}
