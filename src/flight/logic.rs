//! Flight controller: turns the latest tilt sample into aircraft motion.

use super::types::{AircraftState, Vec3};
use crate::core::constants::*;
use crate::sensor::OrientationSample;

/// Linear interpolation with the factor clamped to `[0, 1]`.
///
/// Frame-scaled factors like `8 * dt` exceed 1 on long frames; clamping makes
/// that case land on the target instead of overshooting past it.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    from * (1.0 - t) + to * t
}

/// Advance the aircraft by `dt` seconds under `sample` tilt.
///
/// The target is one tilt-scaled step away from the current position,
/// clamped to the flight box, and the position eases toward it with a
/// smoothing factor proportional to `dt`. Forward speed is constant.
///
/// A step with no positive finite `dt`, or with a non-finite sample, leaves
/// the aircraft where it is.
pub fn advance(dt: f64, sample: OrientationSample, state: &AircraftState) -> AircraftState {
    if !(dt > 0.0 && dt.is_finite()) || !sample.is_finite() {
        return *state;
    }
    let move_x = f64::from(sample.x) * TILT_GAIN;
    let move_y = f64::from(sample.y) * TILT_GAIN;

    let pos = state.position;
    let target_x = (pos.x + move_x * dt * TARGET_STEP_SCALE).clamp(MIN_X, MAX_X);
    let target_y = (pos.y + move_y * dt * TARGET_STEP_SCALE).clamp(MIN_Y, MAX_Y);

    AircraftState {
        position: Vec3::new(
            lerp(pos.x, target_x, SMOOTHING_X * dt),
            lerp(pos.y, target_y, SMOOTHING_Y * dt),
            pos.z + FORWARD_SPEED * dt,
        ),
        rotation_z: lerp(state.rotation_z, -move_x * ROLL_GAIN, ROLL_SMOOTHING * dt),
        rotation_x: lerp(state.rotation_x, move_y * PITCH_GAIN, PITCH_SMOOTHING * dt),
    }
}

/// Where the chase camera sits for a given aircraft: above and behind it.
pub fn camera_follow(aircraft: &AircraftState) -> Vec3 {
    let p = aircraft.position;
    Vec3::new(p.x, p.y + CAMERA_HEIGHT, p.z - CAMERA_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample(x: f32, y: f32) -> OrientationSample {
        OrientationSample { x, y }
    }

    fn run(mut state: AircraftState, s: OrientationSample, dt: f64, steps: u32) -> AircraftState {
        for _ in 0..steps {
            state = advance(dt, s, &state);
        }
        state
    }

    #[test]
    fn test_lerp_basic() {
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < EPS);
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn test_lerp_factor_clamped() {
        assert_eq!(lerp(0.0, 8.0, 8.0), 8.0);
        assert_eq!(lerp(2.0, 8.0, -1.0), 2.0);
    }

    #[test]
    fn test_zero_tilt_only_moves_forward() {
        let start = AircraftState::at(Vec3::new(1.5, -0.5, 4.0));
        let next = advance(0.1, OrientationSample::ZERO, &start);
        assert!((next.position.x - 1.5).abs() < EPS);
        assert!((next.position.y + 0.5).abs() < EPS);
        assert!((next.position.z - 4.6).abs() < EPS);
    }

    #[test]
    fn test_single_step_matches_formula() {
        let start = AircraftState::new();
        let next = advance(0.02, sample(1.0, 0.5), &start);
        // target_x = 0 + 3 * 0.02 * 10 = 0.6, factor 0.16
        assert!((next.position.x - 0.096).abs() < EPS);
        // target_y = 0 + 1.5 * 0.02 * 10 = 0.3, factor 0.12
        assert!((next.position.y - 0.036).abs() < EPS);
        assert!((next.position.z - 0.12).abs() < EPS);
        // roll target -75 at factor 0.12, pitch target 15 at factor 0.08
        assert!((next.rotation_z + 9.0).abs() < EPS);
        assert!((next.rotation_x - 1.2).abs() < EPS);
    }

    #[test]
    fn test_tilt_direction() {
        let next = advance(0.05, sample(1.0, -1.0), &AircraftState::new());
        assert!(next.position.x > 0.0);
        assert!(next.position.y < 0.0);
        // Rolling right banks negative around z.
        assert!(next.rotation_z < 0.0);
        assert!(next.rotation_x < 0.0);
    }

    #[test]
    fn test_position_stays_in_flight_box() {
        let dts = [0.0, 0.001, 0.016, 0.05, 0.1, 0.5, 1.0, 5.0];
        let tilts = [-100.0f32, -3.0, -0.4, 0.0, 0.7, 2.5, 100.0];
        let starts = [
            Vec3::new(MIN_X, MIN_Y, 0.0),
            Vec3::new(MAX_X, MAX_Y, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(7.9, -1.9, 12.0),
        ];
        for &dt in &dts {
            for &tx in &tilts {
                for &ty in &tilts {
                    for &start in &starts {
                        let end = run(AircraftState::at(start), sample(tx, ty), dt, 20);
                        let p = end.position;
                        assert!(p.x >= MIN_X - EPS && p.x <= MAX_X + EPS, "x={} dt={dt}", p.x);
                        assert!(p.y >= MIN_Y - EPS && p.y <= MAX_Y + EPS, "y={} dt={dt}", p.y);
                    }
                }
            }
        }
    }

    #[test]
    fn test_sustained_tilt_converges_to_bound_at_any_rate() {
        let fast = run(AircraftState::new(), sample(2.0, 2.0), 1.0 / 120.0, 1200);
        let slow = run(AircraftState::new(), sample(2.0, 2.0), 1.0 / 30.0, 300);
        assert!((fast.position.x - MAX_X).abs() < 1e-3);
        assert!((slow.position.x - MAX_X).abs() < 1e-3);
        assert!((fast.position.y - MAX_Y).abs() < 1e-3);
        assert!((slow.position.y - MAX_Y).abs() < 1e-3);
        assert!((fast.position.z - slow.position.z).abs() < 1e-6);
    }

    #[test]
    fn test_half_steps_track_full_step() {
        let start = AircraftState::new();
        let s = sample(1.0, 1.0);
        let full = advance(0.02, s, &start);
        let halves = advance(0.01, s, &advance(0.01, s, &start));

        assert!((full.position.z - halves.position.z).abs() < EPS);
        // Fixed-target smoothing: both land near the same fraction of the way.
        assert!((full.rotation_z - halves.rotation_z).abs() < 0.5);
        assert!((full.rotation_x - halves.rotation_x).abs() < 0.5);
        // Neither overshoots its target.
        assert!(full.position.x <= 0.6 && halves.position.x <= 0.6);
    }

    #[test]
    fn test_forward_motion_is_monotonic() {
        let mut state = AircraftState::new();
        let mut last_z = state.position.z;
        for dt in [0.016, 0.0, 0.033, 0.1, 0.0005] {
            state = advance(dt, sample(-1.0, 0.3), &state);
            assert!(state.position.z >= last_z);
            last_z = state.position.z;
        }
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let start = AircraftState::at(Vec3::new(1.0, 1.0, 10.0));
        let next = advance(-0.5, sample(3.0, 3.0), &start);
        assert_eq!(next, start);
    }

    #[test]
    fn test_zero_dt_with_infinite_tilt_holds_position() {
        let start = AircraftState::at(Vec3::new(-3.0, 2.0, 7.0));
        let inf = sample(f32::NEG_INFINITY, f32::INFINITY);
        assert_eq!(advance(0.0, inf, &start), start);
        assert_eq!(advance(0.0, sample(1.0, 1.0), &start), start);
    }

    #[test]
    fn test_non_finite_input_never_poisons_state() {
        let mut state = AircraftState::new();
        let bad = [
            (0.2, sample(f32::INFINITY, 0.0)),
            (0.2, sample(0.0, f32::NAN)),
            (f64::INFINITY, sample(0.0, 0.0)),
            (f64::NAN, sample(1.0, 1.0)),
        ];
        for (dt, s) in bad {
            state = advance(dt, s, &state);
            let p = state.position;
            assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
            assert!(state.rotation_x.is_finite() && state.rotation_z.is_finite());
            assert!((MIN_X..=MAX_X).contains(&p.x));
            assert!((MIN_Y..=MAX_Y).contains(&p.y));
        }
        assert_eq!(state, AircraftState::new());

        // Good input afterwards flies normally.
        let next = advance(0.02, sample(1.0, 0.5), &state);
        assert!((next.rotation_z + 9.0).abs() < EPS);
    }

    #[test]
    fn test_camera_follow() {
        let aircraft = AircraftState::at(Vec3::new(2.0, 1.0, 50.0));
        assert_eq!(camera_follow(&aircraft), Vec3::new(2.0, 9.0, 20.0));
    }
}
