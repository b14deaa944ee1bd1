// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Atomic mutation requests against a light state.

use crate::types::Rgb;

use super::LightColorValues;

/// A batched light-state mutation, committed as one transition.
///
/// Unset channels keep their previous value. Normalized channels are
/// clamped into [0.0, 1.0] at set time so a call can never commit an
/// out-of-range value.
///
/// # Examples
///
/// ```
/// use dplight::state::{LightCall, LightColorValues};
///
/// let call = LightCall::new().with_state(true).with_brightness(0.5);
///
/// let mut values = LightColorValues::default();
/// call.apply_to(&mut values);
/// assert!(values.is_on);
/// assert_eq!(values.brightness, 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightCall {
    state: Option<bool>,
    brightness: Option<f32>,
    color_temperature: Option<f32>,
    rgb: Option<Rgb>,
}

impl LightCall {
    /// Creates an empty call.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests an on/off state change.
    #[must_use]
    pub const fn with_state(mut self, on: bool) -> Self {
        self.state = Some(on);
        self
    }

    /// Requests a master brightness change, clamped into [0.0, 1.0].
    #[must_use]
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = Some(brightness.clamp(0.0, 1.0));
        self
    }

    /// Requests a color temperature change in mireds.
    #[must_use]
    pub const fn with_color_temperature(mut self, mireds: f32) -> Self {
        self.color_temperature = Some(mireds);
        self
    }

    /// Requests an RGB color change.
    #[must_use]
    pub const fn with_rgb(mut self, rgb: Rgb) -> Self {
        self.rgb = Some(rgb);
        self
    }

    /// Returns whether the call carries no channel changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.state.is_none()
            && self.brightness.is_none()
            && self.color_temperature.is_none()
            && self.rgb.is_none()
    }

    /// Returns the requested on/off state, if any.
    #[must_use]
    pub const fn state(&self) -> Option<bool> {
        self.state
    }

    /// Returns the requested brightness, if any.
    #[must_use]
    pub const fn brightness(&self) -> Option<f32> {
        self.brightness
    }

    /// Returns the requested color temperature in mireds, if any.
    #[must_use]
    pub const fn color_temperature(&self) -> Option<f32> {
        self.color_temperature
    }

    /// Returns the requested RGB color, if any.
    #[must_use]
    pub const fn rgb(&self) -> Option<Rgb> {
        self.rgb
    }

    /// Applies the carried changes to a value set.
    ///
    /// State holder implementations use this to share the commit logic.
    pub fn apply_to(&self, values: &mut LightColorValues) {
        if let Some(on) = self.state {
            values.is_on = on;
        }
        if let Some(brightness) = self.brightness {
            values.brightness = brightness;
        }
        if let Some(mireds) = self.color_temperature {
            values.color_temperature = mireds;
        }
        if let Some(rgb) = self.rgb {
            values.red = rgb.red();
            values.green = rgb.green();
            values.blue = rgb.blue();
        }
    }
}
