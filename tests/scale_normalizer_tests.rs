use radar_rs::core::{
    AxisSet, DEFAULT_SCALE_FLOOR, MissingValuePolicy, ScaleMode, Series, compute_scale_max,
    observed_max,
};

fn dimension_axes() -> AxisSet {
    AxisSet::new([
        "intellectual",
        "physical",
        "financial",
        "environmental",
        "vocational",
        "social",
        "emotional",
        "spiritual",
    ])
    .expect("axes")
}

fn series_with_levels(levels: [f64; 8]) -> Series {
    let axes = dimension_axes();
    Series::from_pairs("levels", axes.names().map(str::to_owned).zip(levels)).expect("series")
}

#[test]
fn empty_series_returns_floor() {
    let max = compute_scale_max(&[], &dimension_axes(), 10.0, MissingValuePolicy::default())
        .expect("scale");
    assert_eq!(max, 10.0);
}

#[test]
fn small_values_are_lifted_to_floor() {
    let series = series_with_levels([3.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    let max = compute_scale_max(&[series], &dimension_axes(), 10.0, MissingValuePolicy::default())
        .expect("scale");
    assert_eq!(max, 10.0);
}

#[test]
fn values_above_floor_set_the_scale() {
    let series = series_with_levels([3.0, 15.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    let max = compute_scale_max(&[series], &dimension_axes(), 10.0, MissingValuePolicy::default())
        .expect("scale");
    assert_eq!(max, 15.0);
}

#[test]
fn character_card_example_scales_to_ten() {
    let series = series_with_levels([3.0, 7.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    let max = compute_scale_max(
        &[series],
        &dimension_axes(),
        DEFAULT_SCALE_FLOOR,
        MissingValuePolicy::default(),
    )
    .expect("scale");
    assert_eq!(max, 10.0);
}

#[test]
fn scale_is_shared_across_series() {
    let axes = AxisSet::new(["a", "b"]).expect("axes");
    let current = Series::from_pairs("current", [("a", 12.0), ("b", 4.0)]).expect("series");
    let baseline = Series::from_pairs("baseline", [("a", 2.0), ("b", 18.0)]).expect("series");

    let max = compute_scale_max(&[current, baseline], &axes, 10.0, MissingValuePolicy::default())
        .expect("scale");
    assert_eq!(max, 18.0);
}

#[test]
fn missing_values_count_as_policy_default() {
    let axes = AxisSet::new(["a", "b"]).expect("axes");
    let series = Series::from_pairs("s", [("a", 2.0)]).expect("series");
    let policy = MissingValuePolicy::new(25.0).expect("policy");

    assert_eq!(observed_max(&[series.clone()], &axes, policy), Some(25.0));
    assert_eq!(
        compute_scale_max(&[series], &axes, 10.0, policy).expect("scale"),
        25.0
    );
}

#[test]
fn values_on_unknown_axes_are_ignored() {
    let axes = AxisSet::new(["a"]).expect("axes");
    let series = Series::from_pairs("s", [("a", 2.0), ("zzz", 99.0)]).expect("series");
    let max = compute_scale_max(&[series], &axes, 10.0, MissingValuePolicy::default())
        .expect("scale");
    assert_eq!(max, 10.0);
}

#[test]
fn non_positive_floor_is_rejected() {
    let axes = dimension_axes();
    assert!(compute_scale_max(&[], &axes, 0.0, MissingValuePolicy::default()).is_err());
    assert!(compute_scale_max(&[], &axes, -1.0, MissingValuePolicy::default()).is_err());
    assert!(compute_scale_max(&[], &axes, f64::NAN, MissingValuePolicy::default()).is_err());
}

#[test]
fn fixed_scale_must_cover_observed_values() {
    let axes = AxisSet::new(["a", "b"]).expect("axes");
    let series = vec![Series::from_pairs("s", [("a", 12.0), ("b", 4.0)]).expect("series")];
    let missing = MissingValuePolicy::default();

    assert_eq!(
        ScaleMode::Fixed { max: 20.0 }
            .resolve(&series, &axes, missing)
            .expect("fixed"),
        20.0
    );
    assert!(ScaleMode::Fixed { max: 11.0 }
        .resolve(&series, &axes, missing)
        .is_err());
    assert!(ScaleMode::Fixed { max: 0.0 }
        .resolve(&series, &axes, missing)
        .is_err());
}

#[test]
fn fixed_scale_is_not_lifted_to_default_floor() {
    let axes = AxisSet::new(["a", "b"]).expect("axes");
    let series = vec![Series::from_pairs("s", [("a", 4.0), ("b", 5.0)]).expect("series")];
    let missing = MissingValuePolicy::default();

    let fixed = ScaleMode::Fixed { max: 5.0 }
        .resolve(&series, &axes, missing)
        .expect("fixed");
    assert_eq!(fixed, 5.0);
    assert!(fixed < DEFAULT_SCALE_FLOOR);
    assert_eq!(
        ScaleMode::default()
            .resolve(&series, &axes, missing)
            .expect("auto"),
        DEFAULT_SCALE_FLOOR
    );
}

#[test]
fn default_scale_mode_is_auto_with_floor_ten() {
    assert_eq!(ScaleMode::default(), ScaleMode::Auto { floor: 10.0 });
}
