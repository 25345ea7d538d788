//! Conversions between the amplifier's raw volume scale, decibels and percent.
//!
//! The amplifier counts volume in half-decibel steps from 0 (-80.5 dB) to
//! 161 (0.0 dB). Every conversion producing an integer rounds half-up, i.e.
//! `floor(x + 0.5)`, including for negative intermediates.

use std::fmt;

/// Lowest raw volume the amplifier accepts
pub const MIN_RAW: i32 = 0;

/// Highest raw volume the amplifier accepts
pub const MAX_RAW: i32 = 161;

/// Decibels per raw step
pub const DB_STEP: f64 = 0.5;

/// Decibel value of raw volume 0
pub const DB_FLOOR: f64 = -80.5;

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamp any integer into the raw range
pub fn clamp_raw(value: i32) -> i32 {
    value.clamp(MIN_RAW, MAX_RAW)
}

/// Raw volume to decibels. Callers must clamp first for a meaningful result.
pub fn to_db(raw: i32) -> f64 {
    raw as f64 * DB_STEP + DB_FLOOR
}

/// Raw volume to percent of full scale
pub fn to_percent(raw: i32) -> i32 {
    round_half_up(raw as f64 / MAX_RAW as f64 * 100.0) as i32
}

/// Decibels to the nearest raw volume. NaN maps to 0.
pub fn from_db(db: f64) -> i32 {
    let raw = round_half_up((db - DB_FLOOR) / DB_STEP);
    if raw.is_nan() {
        return MIN_RAW;
    }
    raw.clamp(MIN_RAW as f64, MAX_RAW as f64) as i32
}

/// Percent of full scale to the nearest raw volume
pub fn from_percent(percent: i32) -> i32 {
    let raw = round_half_up(percent as f64 / 100.0 * MAX_RAW as f64);
    raw.clamp(MIN_RAW as f64, MAX_RAW as f64) as i32
}

/// Display form for decibels, one decimal place
pub fn format_db(db: f64) -> String {
    format!("{:.1}", db)
}

/// A raw volume that is always within [`MIN_RAW`, `MAX_RAW`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VolumeRaw(u8);

impl VolumeRaw {
    pub const MIN: VolumeRaw = VolumeRaw(MIN_RAW as u8);
    pub const MAX: VolumeRaw = VolumeRaw(MAX_RAW as u8);
    /// Assumed level (-30.5 dB) before the amplifier has reported one
    pub const FALLBACK: VolumeRaw = VolumeRaw(100);

    /// Build from any integer, clamping into range
    pub fn new(value: i32) -> Self {
        VolumeRaw(clamp_raw(value) as u8)
    }

    pub fn from_db(db: f64) -> Self {
        Self::new(from_db(db))
    }

    pub fn from_percent(percent: i32) -> Self {
        Self::new(from_percent(percent))
    }

    pub fn value(&self) -> i32 {
        self.0 as i32
    }

    pub fn db(&self) -> f64 {
        to_db(self.value())
    }

    pub fn percent(&self) -> i32 {
        to_percent(self.value())
    }

    /// Step by a signed amount, saturating at the range ends
    pub fn offset(&self, delta: i32) -> Self {
        Self::new(self.value().saturating_add(delta))
    }
}

impl From<VolumeRaw> for i32 {
    fn from(volume: VolumeRaw) -> Self {
        volume.value()
    }
}

impl fmt::Display for VolumeRaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} dB ({}%)", format_db(self.db()), self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_db_fixed_points() {
        assert_eq!(to_db(0), -80.5);
        assert_eq!(to_db(161), 0.0);
        assert_eq!(to_db(100), -30.5);
        assert_eq!(to_db(1), -80.0);
    }

    #[test]
    fn test_to_percent_fixed_points() {
        assert_eq!(to_percent(0), 0);
        assert_eq!(to_percent(161), 100);
        // 8 / 161 * 100 = 4.97
        assert_eq!(to_percent(8), 5);
        // 80.5 would be exactly 50, 80 is 49.69
        assert_eq!(to_percent(80), 50);
    }

    #[test]
    fn test_db_round_trip_is_exact() {
        for raw in MIN_RAW..=MAX_RAW {
            assert_eq!(from_db(to_db(raw)), raw, "raw {}", raw);
        }
    }

    #[test]
    fn test_percent_round_trip_within_one_step() {
        for raw in MIN_RAW..=MAX_RAW {
            let back = from_percent(to_percent(raw));
            assert!((back - raw).abs() <= 1, "raw {} came back as {}", raw, back);
        }
    }

    #[test]
    fn test_from_db_rounds_half_up() {
        // -30.25 dB sits halfway between raw 100 and 101
        assert_eq!(from_db(-30.25), 101);
        assert_eq!(from_db(-30.3), 100);
        // -80.25 dB is halfway between 0 and 1
        assert_eq!(from_db(-80.25), 1);
    }

    #[test]
    fn test_from_db_clamps() {
        assert_eq!(from_db(12.0), MAX_RAW);
        assert_eq!(from_db(-120.0), MIN_RAW);
        assert_eq!(from_db(f64::INFINITY), MAX_RAW);
        assert_eq!(from_db(f64::NEG_INFINITY), MIN_RAW);
        assert_eq!(from_db(f64::NAN), MIN_RAW);
    }

    #[test]
    fn test_from_percent_clamps_and_rounds() {
        assert_eq!(from_percent(0), 0);
        assert_eq!(from_percent(100), 161);
        assert_eq!(from_percent(50), 81); // 80.5 rounds up
        assert_eq!(from_percent(150), MAX_RAW);
        assert_eq!(from_percent(-10), MIN_RAW);
    }

    #[test]
    fn test_clamp_raw() {
        assert_eq!(clamp_raw(999), 161);
        assert_eq!(clamp_raw(-5), 0);
        assert_eq!(clamp_raw(42), 42);
    }

    #[test]
    fn test_format_db() {
        assert_eq!(format_db(-30.5), "-30.5");
        assert_eq!(format_db(0.0), "0.0");
        assert_eq!(format_db(-80.0), "-80.0");
    }

    #[test]
    fn test_volume_raw_clamps_on_construction() {
        assert_eq!(VolumeRaw::new(999), VolumeRaw::MAX);
        assert_eq!(VolumeRaw::new(-5), VolumeRaw::MIN);
        assert_eq!(VolumeRaw::new(120).value(), 120);
    }

    #[test]
    fn test_volume_raw_derived_views() {
        let volume = VolumeRaw::new(100);
        assert_eq!(volume.db(), -30.5);
        assert_eq!(volume.percent(), 62);
        assert_eq!(volume.to_string(), "-30.5 dB (62%)");
    }

    #[test]
    fn test_volume_raw_offset_saturates() {
        assert_eq!(VolumeRaw::new(160).offset(5), VolumeRaw::MAX);
        assert_eq!(VolumeRaw::new(2).offset(-5), VolumeRaw::MIN);
        assert_eq!(VolumeRaw::new(50).offset(1).value(), 51);
    }

    #[test]
    fn test_volume_raw_from_units() {
        assert_eq!(VolumeRaw::from_db(-30.5).value(), 100);
        assert_eq!(VolumeRaw::from_percent(100), VolumeRaw::MAX);
    }
}
