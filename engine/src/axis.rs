//! Joystick axis mapping.
//!
//! Raw 12-bit ADC samples are turned into a tri-state [`Signal`] per axis for
//! movement, or into an 8-bit intensity for LED feedback.

use crate::config::{X_AXIS, Y_AXIS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Negative,
    Neutral,
    Positive,
}

impl Signal {
    pub fn is_neutral(self) -> bool {
        self == Signal::Neutral
    }

    /// -1, 0 or 1.
    pub fn delta(self) -> i32 {
        match self {
            Signal::Negative => -1,
            Signal::Neutral => 0,
            Signal::Positive => 1,
        }
    }
}

/// One sample of both joystick channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisReading {
    pub x: u16,
    pub y: u16,
}

impl AxisReading {
    pub fn new(x: u16, y: u16) -> Self {
        AxisReading { x, y }
    }

    /// A reading with the stick at rest.
    pub fn centered() -> Self {
        AxisReading {
            x: X_AXIS.center,
            y: Y_AXIS.center,
        }
    }
}

pub trait AxisSource {
    fn read_axes(&mut self) -> AxisReading;
}

/// Fixed calibration for one joystick axis.
///
/// `min` and `max` are the measured extremes, `center` the resting value.
/// Readings strictly outside `low_threshold..=high_threshold` count as a
/// deflection; everything in between is the dead-zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCalibration {
    pub center: u16,
    pub min: u16,
    pub max: u16,
    pub low_threshold: u16,
    pub high_threshold: u16,
}

impl AxisCalibration {
    pub const fn new(
        center: u16,
        min: u16,
        max: u16,
        low_threshold: u16,
        high_threshold: u16,
    ) -> Self {
        assert!(
            min < low_threshold
                && low_threshold < center
                && center < high_threshold
                && high_threshold < max,
            "thresholds must lie between the extremes and outside the dead-zone"
        );
        AxisCalibration {
            center,
            min,
            max,
            low_threshold,
            high_threshold,
        }
    }

    pub fn classify(&self, raw: u16) -> Signal {
        if raw > self.high_threshold {
            Signal::Positive
        } else if raw < self.low_threshold {
            Signal::Negative
        } else {
            Signal::Neutral
        }
    }

    /// Distance from the centre scaled to 0..=255. Each half is scaled to its
    /// own extreme. Readings past an extreme saturate.
    pub fn intensity(&self, raw: u16) -> u8 {
        let raw = raw.clamp(self.min, self.max);
        let (distance, span) = if raw < self.center {
            (self.center - raw, self.center - self.min)
        } else {
            (raw - self.center, self.max - self.center)
        };
        (u32::from(distance) * 255 / u32::from(span)) as u8
    }
}

/// Both axes classified with the board calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoystickSignals {
    pub x: Signal,
    pub y: Signal,
}

impl JoystickSignals {
    pub fn from_reading(reading: AxisReading) -> Self {
        JoystickSignals {
            x: X_AXIS.classify(reading.x),
            y: Y_AXIS.classify(reading.y),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.x.is_neutral() && self.y.is_neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_dead_zone() {
        for raw in [1000, 1001, 1500, X_AXIS.center, 2999, 3000] {
            assert_eq!(X_AXIS.classify(raw), Signal::Neutral, "raw={}", raw);
        }
    }

    #[test]
    fn test_classify_deflection() {
        assert_eq!(X_AXIS.classify(3001), Signal::Positive);
        assert_eq!(X_AXIS.classify(4095), Signal::Positive);
        assert_eq!(X_AXIS.classify(999), Signal::Negative);
        assert_eq!(X_AXIS.classify(0), Signal::Negative);
    }

    #[test]
    fn test_axes_calibrated_independently() {
        assert_ne!(X_AXIS.center, Y_AXIS.center);
        assert_eq!(X_AXIS.intensity(X_AXIS.center), 0);
        assert_eq!(Y_AXIS.intensity(Y_AXIS.center), 0);
        // The Y centre is lower, so the same raw value is further above it.
        assert!(Y_AXIS.intensity(2500) > X_AXIS.intensity(2500));
    }

    #[test]
    fn test_intensity_piecewise() {
        assert_eq!(X_AXIS.intensity(16), 255);
        assert_eq!(X_AXIS.intensity(4083), 255);
        // Half way down and half way up map to about half brightness even
        // though the two halves have different spans.
        let below = X_AXIS.intensity(2038 - (2038 - 16) / 2);
        let above = X_AXIS.intensity(2038 + (4083 - 2038) / 2);
        assert!((126..=128).contains(&below), "below={}", below);
        assert!((126..=128).contains(&above), "above={}", above);
    }

    #[test]
    fn test_intensity_saturates() {
        assert_eq!(X_AXIS.intensity(0), 255);
        assert_eq!(X_AXIS.intensity(4095), 255);
        assert_eq!(Y_AXIS.intensity(0), 255);
        assert_eq!(Y_AXIS.intensity(u16::MAX), 255);
    }

    #[test]
    fn test_intensity_monotonic() {
        let mut last = 0;
        for raw in X_AXIS.center..=X_AXIS.max {
            let v = X_AXIS.intensity(raw);
            assert!(v >= last);
            last = v;
        }
        last = 0;
        for raw in (X_AXIS.min..=X_AXIS.center).rev() {
            let v = X_AXIS.intensity(raw);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_joystick_signals() {
        let signals = JoystickSignals::from_reading(AxisReading::new(3500, 500));
        assert_eq!(signals.x, Signal::Positive);
        assert_eq!(signals.y, Signal::Negative);
        assert!(JoystickSignals::from_reading(AxisReading::centered()).is_neutral());
    }
}
