use glam::IVec2;
use limacon_canvas::curve::{CurveDrawer, CurveProfile, PROFILES};
use limacon_canvas::math;
use std::collections::HashSet;

fn drawer(initial: CurveProfile) -> CurveDrawer {
    CurveDrawer::new(initial, 0.001, std::f64::consts::PI / 60.0)
}

#[test]
fn boundary_is_nonempty_and_deduplicated() {
    for descriptor in PROFILES {
        let points = drawer(descriptor.profile).trace(480, 480);
        assert!(
            !points.is_empty(),
            "{:?} produced no points",
            descriptor.profile
        );
        let unique: HashSet<IVec2> = points.iter().copied().collect();
        assert_eq!(
            unique.len(),
            points.len(),
            "{:?} produced duplicate pixels",
            descriptor.profile
        );
    }
}

#[test]
fn trace_is_deterministic() {
    let d = drawer(CurveProfile::Dimpled);
    assert_eq!(d.trace(480, 480), d.trace(480, 480));
}

#[test]
fn profile_switch_cycles_in_table_order() {
    let mut d = drawer(CurveProfile::InnerLoop);
    assert_eq!(d.switch_profile(), CurveProfile::Convex);
    assert_eq!(d.switch_profile(), CurveProfile::Dimpled);
    assert_eq!(d.switch_profile(), CurveProfile::InnerLoop);
}

#[test]
fn switching_once_per_profile_returns_to_start() {
    for descriptor in PROFILES {
        let mut d = drawer(descriptor.profile);
        for _ in 0..PROFILES.len() {
            d.switch_profile();
        }
        assert_eq!(d.profile(), descriptor.profile);
    }
}

#[test]
fn rotation_round_trip_restores_points() {
    let mut d = drawer(CurveProfile::InnerLoop);
    let before: HashSet<IVec2> = d.trace(480, 480).into_iter().collect();

    d.rotate_left();
    let rotated: HashSet<IVec2> = d.trace(480, 480).into_iter().collect();
    assert_ne!(before, rotated, "one rotation step must move the curve");

    d.rotate_right();
    let after: HashSet<IVec2> = d.trace(480, 480).into_iter().collect();
    assert_eq!(before, after);
}

#[test]
fn rotation_angle_wraps_within_full_turn() {
    let mut d = drawer(CurveProfile::Convex);
    for _ in 0..1000 {
        d.rotate_right();
    }
    assert!(d.angle() >= 0.0 && d.angle() < std::f64::consts::TAU);
}

// The normalization `a = R / (0.5 + ratio)` puts the curve's rightmost reach
// exactly one inscribed radius from the surface center, for every profile.
#[test]
fn rightmost_reach_matches_inscribed_radius() {
    for descriptor in PROFILES {
        let points = drawer(descriptor.profile).trace(480, 480);
        let (min, max) = math::bounding_box(&points).unwrap();
        assert!(
            (max.x - 240 - 240).abs() <= 1,
            "{:?}: rightmost x {} should sit one radius right of center",
            descriptor.profile,
            max.x
        );
        assert!(
            max.x - min.x <= 481,
            "{:?}: extent {} overflows the surface",
            descriptor.profile,
            max.x - min.x
        );
        assert!(
            max.y - min.y <= 481,
            "{:?}: vertical extent {} overflows the surface",
            descriptor.profile,
            max.y - min.y
        );
    }
}

#[test]
fn end_to_end_inner_loop_640x480() {
    let mut d = drawer(CurveProfile::InnerLoop);
    let points = d.trace(640, 480);

    let unique: HashSet<IVec2> = points.iter().copied().collect();
    assert_eq!(unique.len(), points.len());

    // InnerLoop at 640x480: R = 240, a = 240. The curve is symmetric about
    // the equator and reaches x = 320 + R on the right.
    let (min, max) = math::bounding_box(&points).unwrap();
    assert!(((min.y + max.y) / 2 - 240).abs() <= 1);
    assert!((max.x - 560).abs() <= 1);

    // One switch moves to the next table entry (wrapping to Convex), which
    // changes the traced geometry on the very next call.
    d.switch_profile();
    assert_eq!(d.profile(), CurveProfile::Convex);
    let switched = d.trace(640, 480);
    let (switched_min, _) = math::bounding_box(&switched).unwrap();
    assert_ne!(points, switched);
    assert!(
        switched_min.x < min.x,
        "Convex reaches further left than InnerLoop"
    );
}
