use super::error::BoundingBoxError;
use super::structs::{BoundingBox, NormalizedPoint};

/// Folds points into the smallest axis-aligned box that contains all of them.
///
/// The running minimum starts at `+inf` and the running maximum at `-inf`, so boxes lying
/// entirely in negative coordinates come out right. An empty input is reported as
/// [`BoundingBoxError::Empty`] rather than a box made of the infinite start values.
pub fn bounding_box(points: &[NormalizedPoint]) -> Result<BoundingBox, BoundingBoxError> {
    if points.is_empty() {
        return Err(BoundingBoxError::Empty);
    }

    let start = BoundingBox {
        min: NormalizedPoint::new(f64::INFINITY, f64::INFINITY),
        max: NormalizedPoint::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    Ok(points.iter().fold(start, |bbox, p| BoundingBox {
        min: NormalizedPoint::new(bbox.min.x.min(p.x), bbox.min.y.min(p.y)),
        max: NormalizedPoint::new(bbox.max.x.max(p.x), bbox.max.y.max(p.y)),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_signs() {
        let points = [
            NormalizedPoint::new(1.0, 1.0),
            NormalizedPoint::new(-5.0, 3.0),
            NormalizedPoint::new(2.0, -9.0),
        ];

        let bbox = bounding_box(&points).unwrap();

        assert_eq!(bbox.min, NormalizedPoint::new(-5.0, -9.0));
        assert_eq!(bbox.max, NormalizedPoint::new(2.0, 3.0));
    }

    #[test]
    fn test_entirely_negative_coordinates() {
        // Buenos Aires area: every coordinate is negative on both axes.
        let points = [
            NormalizedPoint::new(-58.38, -34.6),
            NormalizedPoint::new(-58.45, -34.55),
            NormalizedPoint::new(-58.37, -34.62),
        ];

        let bbox = bounding_box(&points).unwrap();

        assert_eq!(bbox.min, NormalizedPoint::new(-58.45, -34.62));
        assert_eq!(bbox.max, NormalizedPoint::new(-58.37, -34.55));
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let point = NormalizedPoint::new(4.9, 52.37);
        let bbox = bounding_box(&[point]).unwrap();

        assert_eq!(bbox.min, point);
        assert_eq!(bbox.max, point);
        assert!(bbox.is_degenerate());
    }

    #[test]
    fn test_empty_input_is_reported() {
        assert_eq!(bounding_box(&[]), Err(BoundingBoxError::Empty));
    }

    #[test]
    fn test_box_contains_every_input_point() {
        let points: Vec<_> = (0..50)
            .map(|i| {
                let t = f64::from(i);
                NormalizedPoint::new((t * 3.7).sin() * 170.0, (t * 1.3).cos() * 80.0)
            })
            .collect();

        let bbox = bounding_box(&points).unwrap();

        assert!(bbox.min.x <= bbox.max.x);
        assert!(bbox.min.y <= bbox.max.y);
        assert!(points.iter().all(|p| bbox.contains(p)));
        assert!(points.iter().any(|p| p.x == bbox.min.x));
        assert!(points.iter().any(|p| p.y == bbox.max.y));
    }
}
