//! Circular-orbit math: angular speed from period, orbit path sampling.
//!
//! Angles are in degrees throughout, matching the canvas `rotate` contract.

use glam::Vec2;

/// Samples in one orbit path loop.
pub const ORBIT_SEGMENTS: usize = 1440;

/// Degrees per unit of elapsed time for a body completing one orbit in
/// `period` units. Non-positive periods mean the body does not orbit.
pub fn angular_speed(period: f32) -> f32 {
    if period > 0.0 {
        360.0 / period
    } else {
        0.0
    }
}

/// Points of a closed loop approximating a circle of radius `distance`
/// around the local origin in the XY plane. The loop is closed implicitly:
/// the last point connects back to the first.
pub fn orbit_path(distance: f32, segments: usize) -> Vec<Vec2> {
    let n = segments as f64;
    let d = distance as f64;
    (0..segments)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n;
            Vec2::new((d * theta.cos()) as f32, (d * theta.sin()) as f32)
        })
        .collect()
}

/// Fold an angle into `[0, 360)`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_full_turn_over_period() {
        assert_eq!(angular_speed(36.0), 10.0);
        assert_eq!(angular_speed(360.0), 1.0);
        assert_eq!(angular_speed(365.0), 360.0 / 365.0);
    }

    #[test]
    fn non_positive_period_is_stationary() {
        assert_eq!(angular_speed(0.0), 0.0);
        assert_eq!(angular_speed(-5.0), 0.0);
    }

    #[test]
    fn orbit_path_has_fixed_segment_count() {
        let path = orbit_path(10.0, ORBIT_SEGMENTS);
        assert_eq!(path.len(), ORBIT_SEGMENTS);
    }

    #[test]
    fn orbit_path_samples_circle_of_distance() {
        let path = orbit_path(10.0, 96);
        for p in &path {
            assert!((p.length() - 10.0).abs() < 1e-4, "point {p} off circle");
        }
        assert!((path[0] - Vec2::new(10.0, 0.0)).length() < 1e-6);
        // A quarter of the way round sits on +Y
        assert!((path[24] - Vec2::new(0.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn zero_distance_collapses_to_origin() {
        let path = orbit_path(0.0, 8);
        assert!(path.iter().all(|p| *p == Vec2::ZERO));
    }

    #[test]
    fn wrap_degrees_folds_into_range() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert_eq!(wrap_degrees(45.0), 45.0);
    }
}
