//! Corrected-error to actuator command arithmetic.

use crate::types::DriveCommand;

/// Decodable states across one array; scales a corrected error to percent.
const ERROR_SCALE: f32 = 16.0;

/// Degrees of translation angle per unit of corrected back error.
const DEGREES_PER_STATE: f32 = 180.0 / 16.0;

/// Convert corrected front/back errors into a bounded compound move.
///
/// Front error eats into translation speed, and whatever translation gives
/// up goes to rotation; back error steers the translation direction. Speeds
/// are percent of maximum in [0, 100], the angle is wrapped into [0, 360).
pub fn translate(front_error: f32, back_error: f32) -> DriveCommand {
    let translate_speed = (100.0 - front_error / ERROR_SCALE).clamp(0.0, 100.0);
    let rotate_speed = (100.0 - translate_speed).clamp(0.0, 100.0);
    let translate_angle = (back_error * DEGREES_PER_STATE).rem_euclid(360.0);

    DriveCommand {
        translate_speed,
        rotate_speed,
        translate_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_errors_full_speed_ahead() {
        let cmd = translate(0.0, 0.0);
        assert_eq!(cmd.translate_speed, 100.0);
        assert_eq!(cmd.rotate_speed, 0.0);
        assert_eq!(cmd.translate_angle, 0.0);
    }

    #[test]
    fn test_speed_clamps_low() {
        let cmd = translate(1600.0, 0.0);
        assert_eq!(cmd.translate_speed, 0.0);
        assert_eq!(cmd.rotate_speed, 100.0);
    }

    #[test]
    fn test_speed_clamps_high() {
        let cmd = translate(-1600.0, 0.0);
        assert_eq!(cmd.translate_speed, 100.0);
        assert_eq!(cmd.rotate_speed, 0.0);
    }

    #[test]
    fn test_rotation_complements_translation() {
        let cmd = translate(160.0, 0.0);
        assert_eq!(cmd.translate_speed, 90.0);
        assert_eq!(cmd.rotate_speed, 10.0);
    }

    #[test]
    fn test_negative_angle_wraps_up() {
        let cmd = translate(0.0, -8.0);
        assert_eq!(cmd.translate_angle, 270.0);
    }

    #[test]
    fn test_positive_angle_unwrapped() {
        let cmd = translate(0.0, 8.0);
        assert_eq!(cmd.translate_angle, 90.0);
    }

    #[test]
    fn test_angle_stays_in_range_for_large_errors() {
        for back_error in [-1600.0, -33.0, 33.0, 1600.0] {
            let angle = translate(0.0, back_error).translate_angle;
            assert!(
                (0.0..360.0).contains(&angle),
                "angle {} out of range for back error {}",
                angle,
                back_error
            );
        }
    }
}
