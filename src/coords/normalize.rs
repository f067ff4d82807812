use super::structs::{DecimalCoordinate, NormalizedPoint};

/// Two decimal places, roughly 1.1 km at the equator.
pub const DEFAULT_PRECISION: u32 = 2;

/// Finest supported rounding. Ten places is ~11 micrometres, far below what EXIF
/// positions carry; beyond it values are returned as is.
pub const MAX_PRECISION: u32 = 10;

/// Above this the scaled value no longer has a fractional part that survives the
/// multiply/divide round trip exactly.
const MAX_EXACT_SCALED: f64 = 4_503_599_627_370_496.0 / 10.0;

/// Turns decoded coordinates into map points.
///
/// `None` entries and entries with a non-finite component are dropped; the survivors keep
/// their relative order and duplicates are preserved. Each survivor is flipped to
/// `(x, y) = (longitude, latitude)` and rounded with [`round_to`].
pub fn normalize(coords: &[Option<DecimalCoordinate>], precision: u32) -> Vec<NormalizedPoint> {
    coords
        .iter()
        .flatten()
        .filter(|c| c.latitude.is_finite() && c.longitude.is_finite())
        .map(|c| {
            NormalizedPoint::new(
                round_to(c.longitude, precision),
                round_to(c.latitude, precision),
            )
        })
        .collect()
}

/// Re-rounds points that are already in `(x, y)` order.
pub fn normalize_points(points: &[NormalizedPoint], precision: u32) -> Vec<NormalizedPoint> {
    points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .map(|p| NormalizedPoint::new(round_to(p.x, precision), round_to(p.y, precision)))
        .collect()
}

/// Rounds to `precision` decimal places, ties away from zero (`0.125` -> `0.13`).
///
/// Rounding is done on the scaled binary value, so a decimal literal that is not exactly
/// representable (`1.005`) rounds according to its nearest `f64`.
///
/// Above [`MAX_PRECISION`], or when `value * 10^precision` reaches 2^52 / 10, the value is
/// returned as is. Both cases keep rounding idempotent: `round_to(round_to(v, p), p)` equals
/// `round_to(v, p)` for every `p`.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if precision > MAX_PRECISION {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_SCALED {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_missing_and_flips_axes() {
        let coords = [
            Some(DecimalCoordinate::new(1.0, 2.0)),
            None,
            Some(DecimalCoordinate::new(3.0, 4.0)),
        ];

        let points = normalize(&coords, DEFAULT_PRECISION);

        assert_eq!(
            points,
            vec![NormalizedPoint::new(2.0, 1.0), NormalizedPoint::new(4.0, 3.0)]
        );
    }

    #[test]
    fn test_drops_non_finite_components() {
        let coords = [
            Some(DecimalCoordinate::new(f64::NAN, 2.0)),
            Some(DecimalCoordinate::new(10.0, f64::INFINITY)),
            Some(DecimalCoordinate::new(-33.868_82, 151.209_29)),
        ];

        let points = normalize(&coords, DEFAULT_PRECISION);

        assert_eq!(points, vec![NormalizedPoint::new(151.21, -33.87)]);
    }

    #[test]
    fn test_preserves_duplicates_and_order() {
        let a = Some(DecimalCoordinate::new(48.8566, 2.3522));
        let b = Some(DecimalCoordinate::new(51.5072, -0.1276));
        let points = normalize(&[a, b, a], DEFAULT_PRECISION);

        assert_eq!(
            points,
            vec![
                NormalizedPoint::new(2.35, 48.86),
                NormalizedPoint::new(-0.13, 51.51),
                NormalizedPoint::new(2.35, 48.86),
            ]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(normalize(&[], DEFAULT_PRECISION).is_empty());
        assert!(normalize(&[None, None], DEFAULT_PRECISION).is_empty());
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_custom_precision() {
        assert_eq!(round_to(40.446_111, 4), 40.4461);
        assert_eq!(round_to(40.446_111, 0), 40.0);
        assert_eq!(round_to(40.446_111, 1), 40.4);
    }

    #[test]
    fn test_huge_precision_leaves_value_unchanged() {
        assert_eq!(round_to(179.999, 400), 179.999);
        assert_eq!(round_to(-44.397_729_4, MAX_PRECISION + 4), -44.397_729_4);
    }

    #[test]
    fn test_huge_values_are_not_rescaled() {
        assert_eq!(round_to(1e300, 2), 1e300);
        assert_eq!(round_to(4.5e14, 1), 4.5e14);
    }

    #[test]
    fn test_round_to_is_idempotent_at_fine_precisions() {
        for i in -2000..2000 {
            let value = f64::from(i) * 0.091_731_1 + 0.000_123;
            for precision in [10, 12, 14, 16, 18, 20, 25, 300] {
                let once = round_to(value, precision);
                assert_eq!(
                    round_to(once, precision),
                    once,
                    "value {value} at precision {precision}"
                );
            }
        }
    }

    #[test]
    fn test_normalizing_twice_is_a_no_op() {
        let coords: Vec<_> = (0..200)
            .map(|i| {
                let t = f64::from(i);
                Some(DecimalCoordinate::new(
                    (t * 0.731).sin() * 89.9,
                    (t * 1.917).cos() * 179.9,
                ))
            })
            .collect();

        for precision in 0..=20 {
            let once = normalize(&coords, precision);
            let twice = normalize_points(&once, precision);
            assert_eq!(once, twice, "precision {precision} should be idempotent");
        }
    }

    #[test]
    fn test_round_to_is_idempotent() {
        for i in -1000..1000 {
            let value = f64::from(i) * 0.123_456_7;
            for precision in 0..=20 {
                let once = round_to(value, precision);
                assert_eq!(
                    round_to(once, precision),
                    once,
                    "value {value} at precision {precision}"
                );
            }
        }
    }
}
