// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Committed channel values of a logical light.

use crate::range::MiredRange;
use crate::types::Rgb;

/// One consistent set of logical light channel values.
///
/// All channels are normalized floats except the color temperature, which
/// is kept in mireds. The state holder keeps two of these: the committed
/// `current` values and the transition-target `remote` values; while they
/// differ the light is mid-transition.
///
/// # Examples
///
/// ```
/// use dplight::state::LightColorValues;
///
/// let mut values = LightColorValues::default();
/// values.is_on = true;
/// values.brightness = 0.5;
/// assert_eq!(values.as_brightness(), 0.5);
///
/// values.is_on = false;
/// assert_eq!(values.as_brightness(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LightColorValues {
    /// Whether the light is on.
    pub is_on: bool,
    /// Master brightness (0.0-1.0).
    pub brightness: f32,
    /// Red channel (0.0-1.0).
    pub red: f32,
    /// Green channel (0.0-1.0).
    pub green: f32,
    /// Blue channel (0.0-1.0).
    pub blue: f32,
    /// Color temperature in mireds.
    pub color_temperature: f32,
}

impl Default for LightColorValues {
    fn default() -> Self {
        Self {
            is_on: false,
            brightness: 1.0,
            red: 1.0,
            green: 1.0,
            blue: 1.0,
            color_temperature: 0.0,
        }
    }
}

impl LightColorValues {
    /// Returns the effective master brightness, 0.0 when the light is off.
    #[must_use]
    pub fn as_brightness(&self) -> f32 {
        if self.is_on { self.brightness } else { 0.0 }
    }

    /// Returns the RGB channels.
    #[must_use]
    pub fn as_rgb(&self) -> (f32, f32, f32) {
        (self.red, self.green, self.blue)
    }

    /// Returns the RGB channels plus the white channel value.
    ///
    /// Lights without a dedicated white channel drive white from the
    /// master brightness, so that is what the fourth component carries.
    #[must_use]
    pub fn as_rgbw(&self) -> (f32, f32, f32, f32) {
        (self.red, self.green, self.blue, self.as_brightness())
    }

    /// Returns the color temperature as a device fraction plus brightness.
    #[must_use]
    pub fn as_ct(&self, mireds: &MiredRange) -> (f32, f32) {
        (mireds.to_fraction(self.color_temperature), self.as_brightness())
    }

    /// Returns RGB, color temperature fraction and brightness together.
    #[must_use]
    pub fn as_rgbct(&self, mireds: &MiredRange) -> (f32, f32, f32, f32, f32) {
        (
            self.red,
            self.green,
            self.blue,
            mireds.to_fraction(self.color_temperature),
            self.as_brightness(),
        )
    }

    /// Returns the color channels as an [`Rgb`] value, clamped.
    #[must_use]
    pub fn rgb(&self) -> Rgb {
        Rgb::clamped(self.red, self.green, self.blue)
    }
}
