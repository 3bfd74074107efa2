use super::*;

#[test]
fn linear_midpoint() {
    let v = interpolate(10.0, &[0.0, 20.0], &[0.0, 1.0], InterpOpts::clamped()).unwrap();
    assert_eq!(v, 0.5);
}

#[test]
fn domain_points_map_exactly_to_range_points() {
    let domain = [0.0, 2.4, 9.6, 12.0];
    let range = [0.0, 1.0, 1.0, 0.0];
    for ease in Ease::ALL {
        for (d, r) in domain.iter().zip(range) {
            let v = interpolate(*d, &domain, &range, InterpOpts::eased(ease)).unwrap();
            assert_eq!(v, r, "{ease:?} at {d}");
        }
    }
}

#[test]
fn clamp_holds_boundary_values() {
    let domain = [0.0, 5.0, 10.0];
    let range = [0.5, 1.15, 1.0];
    for x in [-100.0, -0.001, f64::MIN] {
        let v = interpolate(x, &domain, &range, InterpOpts::clamped()).unwrap();
        assert_eq!(v, 0.5);
    }
    for x in [10.001, 1e9] {
        let v = interpolate(x, &domain, &range, InterpOpts::clamped()).unwrap();
        assert_eq!(v, 1.0);
    }
}

#[test]
fn identity_and_extend_policies() {
    let domain = [0.0, 10.0];
    let range = [0.0, 20.0];
    let ident = InterpOpts::clamped()
        .with_left(Extrapolate::Identity)
        .with_right(Extrapolate::Identity);
    assert_eq!(interpolate(-3.0, &domain, &range, ident).unwrap(), -3.0);
    assert_eq!(interpolate(42.0, &domain, &range, ident).unwrap(), 42.0);

    let ext = InterpOpts::clamped()
        .with_left(Extrapolate::Extend)
        .with_right(Extrapolate::Extend);
    assert_eq!(interpolate(-5.0, &domain, &range, ext).unwrap(), -10.0);
    assert_eq!(interpolate(15.0, &domain, &range, ext).unwrap(), 30.0);
}

#[test]
fn easing_applies_per_segment() {
    let domain = [0.0, 10.0, 20.0];
    let range = [0.0, 1.0, 0.0];
    let v = interpolate(5.0, &domain, &range, InterpOpts::eased(Ease::OutCubic)).unwrap();
    assert!((v - Ease::OutCubic.apply(0.5)).abs() < 1e-12);
    let w = interpolate(15.0, &domain, &range, InterpOpts::eased(Ease::OutCubic)).unwrap();
    assert!((w - (1.0 - Ease::OutCubic.apply(0.5))).abs() < 1e-12);
}

#[test]
fn repeated_evaluation_is_identical() {
    let it = Interpolator::new(vec![0.0, 3.0, 8.0], vec![1.5, 0.95, 1.0])
        .unwrap()
        .ease(Ease::OutCubic);
    for i in 0..=90 {
        let x = f64::from(i) / 10.0;
        assert_eq!(it.sample(x).to_bits(), it.sample(x).to_bits());
    }
}

#[test]
fn degenerate_specs_are_rejected() {
    let opts = InterpOpts::clamped();
    for (domain, range) in [
        (vec![0.0], vec![1.0]),
        (vec![], vec![]),
        (vec![0.0, 1.0], vec![1.0]),
        (vec![0.0, 0.0], vec![0.0, 1.0]),
        (vec![2.0, 1.0], vec![0.0, 1.0]),
        (vec![0.0, f64::NAN], vec![0.0, 1.0]),
        (vec![0.0, 1.0], vec![0.0, f64::INFINITY]),
    ] {
        let err = interpolate(0.5, &domain, &range, opts).unwrap_err();
        assert!(
            matches!(err, MotionError::InvalidInterpolationSpec(_)),
            "{domain:?} -> {err}"
        );
        assert!(Interpolator::new(domain, range).is_err());
    }
}
