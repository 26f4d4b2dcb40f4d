use glam::{DVec2, IVec2};
use std::collections::BTreeMap;

/// Rotates `v` around the origin by `theta` radians.
pub fn rotate(v: DVec2, theta: f64) -> DVec2 {
    let (sin, cos) = theta.sin_cos();
    DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Groups the y coordinates of `points` by their x coordinate.
///
/// Keys iterate in ascending x order; each column's y values are sorted ascending.
pub fn columns_by_x(points: &[IVec2]) -> BTreeMap<i32, Vec<i32>> {
    let mut columns: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for p in points {
        columns.entry(p.x).or_default().push(p.y);
    }
    for ys in columns.values_mut() {
        ys.sort_unstable();
    }
    columns
}

/// Axis-aligned bounding box of a point set, or `None` for an empty set.
pub fn bounding_box(points: &[IVec2]) -> Option<(IVec2, IVec2)> {
    let first = *points.first()?;
    let mut min = first;
    let mut max = first;
    for p in points {
        min = min.min(*p);
        max = max.max(*p);
    }
    Some((min, max))
}
