// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Normalized RGB and HSV color types.
//!
//! The light state expresses color as red/green/blue floats in [0, 1];
//! Tuya-style devices expect either 8-bit RGB channels or HSV fields in a
//! hex wire string. This module provides the normalized representations
//! and the conversions between them.

use std::fmt;

use crate::error::ValueError;

/// RGB color with normalized float channels (0.0-1.0).
///
/// # Examples
///
/// ```
/// use dplight::types::Rgb;
///
/// let orange = Rgb::new(1.0, 0.5, 0.0).unwrap();
/// assert_eq!(orange.red(), 1.0);
///
/// // 8-bit device channels
/// let (r, g, b) = orange.to_bytes();
/// assert_eq!((r, g, b), (255, 128, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    red: f32,
    green: f32,
    blue: f32,
}

impl Rgb {
    /// Creates a new RGB color from normalized channels.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfUnitRange` if any channel is outside
    /// [0.0, 1.0].
    pub fn new(red: f32, green: f32, blue: f32) -> Result<Self, ValueError> {
        for channel in [red, green, blue] {
            if !(0.0..=1.0).contains(&channel) {
                return Err(ValueError::OutOfUnitRange { actual: channel });
            }
        }
        Ok(Self { red, green, blue })
    }

    /// Creates a new RGB color, clamping each channel into [0.0, 1.0].
    #[must_use]
    pub fn clamped(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red: red.clamp(0.0, 1.0),
            green: green.clamp(0.0, 1.0),
            blue: blue.clamp(0.0, 1.0),
        }
    }

    /// Creates an RGB color from 8-bit device channels.
    #[must_use]
    pub fn from_bytes(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: f32::from(red) / 255.0,
            green: f32::from(green) / 255.0,
            blue: f32::from(blue) / 255.0,
        }
    }

    /// Returns the normalized red channel.
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.red
    }

    /// Returns the normalized green channel.
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.green
    }

    /// Returns the normalized blue channel.
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.blue
    }

    /// Returns the color as 8-bit device channels, rounded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_bytes(&self) -> (u8, u8, u8) {
        (
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
        )
    }

    /// Converts this color to HSV.
    ///
    /// Note: due to rounding, converting RGB to HSV and back may not
    /// produce bit-identical channel values.
    #[must_use]
    pub fn to_hsv(&self) -> Hsv {
        let max = self.red.max(self.green).max(self.blue);
        let min = self.red.min(self.green).min(self.blue);
        let delta = max - min;

        let value = max;
        let saturation = if max <= 0.0 { 0.0 } else { delta / max };

        let hue = if delta < f32::EPSILON {
            0.0
        } else if (max - self.red).abs() < f32::EPSILON {
            let h = 60.0 * (((self.green - self.blue) / delta) % 6.0);
            if h < 0.0 { h + 360.0 } else { h }
        } else if (max - self.green).abs() < f32::EPSILON {
            60.0 * (((self.blue - self.red) / delta) + 2.0)
        } else {
            60.0 * (((self.red - self.green) / delta) + 4.0)
        };

        Hsv {
            hue,
            saturation,
            value,
        }
    }

    /// Creates an RGB color from an HSV color.
    #[must_use]
    pub fn from_hsv(hsv: &Hsv) -> Self {
        let c = hsv.value * hsv.saturation;
        let x = c * (1.0 - ((hsv.hue / 60.0) % 2.0 - 1.0).abs());
        let m = hsv.value - c;

        let (r, g, b) = if hsv.hue < 60.0 {
            (c, x, 0.0)
        } else if hsv.hue < 120.0 {
            (x, c, 0.0)
        } else if hsv.hue < 180.0 {
            (0.0, c, x)
        } else if hsv.hue < 240.0 {
            (0.0, x, c)
        } else if hsv.hue < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::clamped(r + m, g + m, b + m)
    }

    /// Creates a pure red color.
    #[must_use]
    pub const fn red_color() -> Self {
        Self {
            red: 1.0,
            green: 0.0,
            blue: 0.0,
        }
    }

    /// Creates a pure green color.
    #[must_use]
    pub const fn green_color() -> Self {
        Self {
            red: 0.0,
            green: 1.0,
            blue: 0.0,
        }
    }

    /// Creates a pure blue color.
    #[must_use]
    pub const fn blue_color() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 1.0,
        }
    }

    /// Creates a white color.
    #[must_use]
    pub const fn white() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }

    /// Creates a black color.
    #[must_use]
    pub const fn black() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
        }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_bytes();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

/// HSV color with hue in degrees (0-360) and normalized saturation/value.
///
/// # Examples
///
/// ```
/// use dplight::types::{Hsv, Rgb};
///
/// let hsv = Hsv::new(120.0, 1.0, 1.0).unwrap();
/// let rgb = Rgb::from_hsv(&hsv);
/// assert_eq!(rgb.to_bytes(), (0, 255, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsv {
    /// Hue in degrees (0-360).
    pub hue: f32,
    /// Saturation (0.0-1.0).
    pub saturation: f32,
    /// Value (0.0-1.0).
    pub value: f32,
}

impl Hsv {
    /// Creates a new HSV color.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidHue` if the hue is outside [0, 360],
    /// or `ValueError::OutOfUnitRange` if saturation or value is outside
    /// [0.0, 1.0].
    pub fn new(hue: f32, saturation: f32, value: f32) -> Result<Self, ValueError> {
        if !(0.0..=360.0).contains(&hue) {
            return Err(ValueError::InvalidHue(hue));
        }
        for channel in [saturation, value] {
            if !(0.0..=1.0).contains(&channel) {
                return Err(ValueError::OutOfUnitRange { actual: channel });
            }
        }
        Ok(Self {
            hue,
            saturation,
            value,
        })
    }
}
