// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Linear range mapping between normalized values and device units.
//!
//! Device dimmer and color temperature registers use asymmetric integer
//! ranges: offset floors, vendor-specific ceilings, and sometimes an
//! inverted direction (`min > max` means raising brightness lowers the
//! register value). These helpers keep the full normalized [0, 1] span
//! mapped onto the inclusive device range in both directions.

use crate::error::ConfigError;

/// Inclusive integer device range, possibly inverted (`min > max`).
///
/// # Examples
///
/// ```
/// use dplight::range::DeviceRange;
///
/// let range = DeviceRange::new(25, 1000).unwrap();
/// assert_eq!(range.normalize(512), (512.0 - 25.0) / 975.0);
/// assert_eq!(range.denormalize(1.0), 1000);
///
/// // Inverted: raising brightness lowers the register value
/// let inverted = DeviceRange::new(1000, 0).unwrap();
/// assert_eq!(inverted.denormalize(1.0), 0);
/// assert_eq!(inverted.denormalize(0.0), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeviceRange {
    min: i32,
    max: i32,
}

impl DeviceRange {
    /// Creates a new device range.
    ///
    /// `min > max` is valid and selects the inverted direction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyBrightnessRange` if `min == max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, ConfigError> {
        if min == max {
            return Err(ConfigError::EmptyBrightnessRange(min));
        }
        Ok(Self { min, max })
    }

    /// Returns the configured `min` endpoint (device units).
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Returns the configured `max` endpoint (device units).
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Returns the numerically lower bound regardless of direction.
    #[must_use]
    pub const fn lower(&self) -> i32 {
        if self.min < self.max { self.min } else { self.max }
    }

    /// Returns the numerically upper bound regardless of direction.
    #[must_use]
    pub const fn upper(&self) -> i32 {
        if self.min > self.max { self.min } else { self.max }
    }

    /// Returns the absolute width of the range in device units.
    #[must_use]
    pub const fn span(&self) -> i32 {
        self.upper() - self.lower()
    }

    /// Maps a raw device value to a normalized fraction.
    ///
    /// The raw value is first clipped into the numeric bounds, then
    /// normalized against the *unclipped* `min`/`max` so the inversion
    /// direction is preserved: an inverted range maps its `min` endpoint
    /// to 0.0 and its `max` endpoint to 1.0 just like an ordinary one.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn normalize(&self, raw: u32) -> f32 {
        let value = (raw.min(i32::MAX as u32) as i32).clamp(self.lower(), self.upper());
        (value - self.min) as f32 / (self.max - self.min) as f32
    }

    /// Maps a normalized fraction to a raw device value, rounding up.
    ///
    /// Ceiling rounding keeps a barely-on light from being written back
    /// as the floor value and visually turning off.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn denormalize(&self, fraction: f32) -> u32 {
        let raw = (fraction * (self.max - self.min) as f32 + self.min as f32).ceil();
        if raw < 0.0 { 0 } else { raw as u32 }
    }
}

/// Inclusive mired range of a color temperature channel.
///
/// `cold` is the mired value reported at device fraction 0.0 and `warm`
/// the value at fraction 1.0.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MiredRange {
    cold: f32,
    warm: f32,
}

impl MiredRange {
    /// Creates a new mired range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyMiredRange` if both endpoints are equal.
    pub fn new(cold: f32, warm: f32) -> Result<Self, ConfigError> {
        if (cold - warm).abs() < f32::EPSILON {
            return Err(ConfigError::EmptyMiredRange(cold));
        }
        Ok(Self { cold, warm })
    }

    /// Returns the cold-white endpoint in mireds.
    #[must_use]
    pub const fn cold(&self) -> f32 {
        self.cold
    }

    /// Returns the warm-white endpoint in mireds.
    #[must_use]
    pub const fn warm(&self) -> f32 {
        self.warm
    }

    /// Maps a device fraction [0, 1] to mireds.
    #[must_use]
    pub fn from_fraction(&self, fraction: f32) -> f32 {
        self.cold + (self.warm - self.cold) * fraction
    }

    /// Maps a mired value to a device fraction, clamped to [0, 1].
    #[must_use]
    pub fn to_fraction(&self, mireds: f32) -> f32 {
        ((mireds - self.cold) / (self.warm - self.cold)).clamp(0.0, 1.0)
    }
}

/// Inverts a raw device value within [0, max].
///
/// Self-inverse for any `raw` in range: `invert(invert(x, max), max) == x`.
#[must_use]
pub const fn invert(raw: u32, max: u32) -> u32 {
    max.saturating_sub(raw)
}

/// Applies inverse gamma correction to a normalized brightness.
///
/// Device dimmers report gamma-corrected output; the logical light state
/// stores the perceptual value, so inbound readings are raised to the
/// reciprocal exponent. A non-positive gamma disables correction.
#[must_use]
pub fn inverse_gamma(brightness: f32, gamma: f32) -> f32 {
    if gamma <= 0.0 {
        brightness
    } else {
        brightness.powf(1.0 / gamma)
    }
}
