use nalgebra::{Point3, Vector3};

/// Arithmetic mean of a set of points; `None` for an empty set.
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Some(Point3::from(sum / points.len() as f64))
}

/// Smallest squared distance from `target` to any of `points`.
pub fn min_distance_squared<'a, I>(points: I, target: &Point3<f64>) -> Option<f64>
where
    I: IntoIterator<Item = &'a Point3<f64>>,
{
    points
        .into_iter()
        .map(|p| nalgebra::distance_squared(p, target))
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}
