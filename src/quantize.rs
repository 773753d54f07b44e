//! Bit-exact wire numeric conventions shared with the codec: fixed-point
//! positions, byte angles, 16-bit velocities and the relative-move window.

use glam::DVec3;

/// Fixed-point units per block, per axis.
pub const POSITION_SCALE: f64 = 4096.0;

/// Velocity units per block-per-tick.
pub const VELOCITY_SCALE: f64 = 8000.0;

/// Quantizes one coordinate to 1/4096-block fixed point. The intermediate is
/// 64-bit so world-scale coordinates cannot overflow.
pub fn quantize_coord(coord: f64) -> i64 {
    (coord * POSITION_SCALE).floor() as i64
}

pub fn dequantize_coord(quantized: i64) -> f64 {
    quantized as f64 / POSITION_SCALE
}

pub fn quantize_position(position: DVec3) -> [i64; 3] {
    [
        quantize_coord(position.x),
        quantize_coord(position.y),
        quantize_coord(position.z),
    ]
}

pub fn dequantize_position(quantized: [i64; 3]) -> DVec3 {
    DVec3::new(
        dequantize_coord(quantized[0]),
        dequantize_coord(quantized[1]),
        dequantize_coord(quantized[2]),
    )
}

/// Scales one velocity component by 8000 and clamps into the 16-bit signed
/// range.
pub fn quantize_velocity_coord(velocity: f64) -> i16 {
    (velocity * VELOCITY_SCALE).clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

pub fn quantize_velocity(velocity: DVec3) -> [i16; 3] {
    [
        quantize_velocity_coord(velocity.x),
        quantize_velocity_coord(velocity.y),
        quantize_velocity_coord(velocity.z),
    ]
}

/// Per-axis delta between two quantized positions, if every axis fits the
/// 16-bit signed window of a relative-move message. `None` means the move
/// must be sent as an absolute teleport instead.
///
/// Deltas are taken in quantized integer space, so repeated relative moves
/// never accumulate floating-point drift.
pub fn move_delta(from: [i64; 3], to: [i64; 3]) -> Option<[i16; 3]> {
    let mut delta = [0i16; 3];
    for axis in 0..3 {
        let d = to[axis] - from[axis];
        if d < i64::from(i16::MIN) || d > i64::from(i16::MAX) {
            return None;
        }
        delta[axis] = d as i16;
    }
    Some(delta)
}

/// A full rotation packed into one byte, 256 steps per 360 degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Angle(u8);

impl Angle {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u8) -> Self {
        Self(value)
    }

    /// Wraps into [0, 360) before conversion, so negative and oversized
    /// headings land on the same byte as their canonical angle.
    pub fn from_degrees(degrees: f32) -> Self {
        let wrapped = degrees.rem_euclid(360.0);
        Self((wrapped * 256.0 / 360.0) as u8)
    }

    pub fn to_degrees(self) -> f32 {
        f32::from(self.0) * 360.0 / 256.0
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiples_round_trip() {
        for quantized in [0i64, 1, -1, 4096, -4096, 12345, -987654] {
            let coord = quantized as f64 / POSITION_SCALE;
            assert_eq!(quantize_coord(coord), quantized);
            assert_eq!(dequantize_coord(quantize_coord(coord)), coord);
        }
    }

    #[test]
    fn arbitrary_coords_quantize_within_one_step() {
        for coord in [0.1, -0.1, 3.14159, -2.71828, 1000.0001, -99999.99] {
            let back = dequantize_coord(quantize_coord(coord));
            assert!((coord - back).abs() < 1.0 / POSITION_SCALE);
        }
    }

    #[test]
    fn angles_wrap_before_conversion() {
        assert_eq!(Angle::from_degrees(0.0), Angle::from_degrees(360.0));
        assert_eq!(Angle::from_degrees(370.0), Angle::from_degrees(10.0));
        assert_eq!(Angle::from_degrees(-90.0), Angle::from_degrees(270.0));
        assert_eq!(Angle::from_degrees(90.0).value(), 64);
        assert_eq!(Angle::from_degrees(180.0).value(), 128);
    }

    #[test]
    fn velocity_clamps_to_i16() {
        assert_eq!(quantize_velocity_coord(0.0), 0);
        assert_eq!(quantize_velocity_coord(1.0), 8000);
        assert_eq!(quantize_velocity_coord(-1.0), -8000);
        assert_eq!(quantize_velocity_coord(100.0), i16::MAX);
        assert_eq!(quantize_velocity_coord(-100.0), i16::MIN);
    }

    #[test]
    fn move_delta_window_boundary() {
        let from = [0i64; 3];
        assert_eq!(
            move_delta(from, [32767, 0, 0]),
            Some([32767, 0, 0])
        );
        assert_eq!(move_delta(from, [32768, 0, 0]), None);
        assert_eq!(
            move_delta(from, [-32768, 0, 0]),
            Some([-32768, 0, 0])
        );
        assert_eq!(move_delta(from, [-32769, 0, 0]), None);
        assert_eq!(move_delta(from, [0, 40000, 0]), None);
    }
}
