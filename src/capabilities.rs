// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Capability negotiation for datapoint lights.
//!
//! The set of bound datapoint channels, together with the color interlock
//! flag, determines which color modes the light can offer to the host.
//! Missing bindings are never an error; they simply narrow the supported
//! modes, degrading all the way down to plain on/off.

use crate::range::MiredRange;

/// A color mode the light can be driven in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// On/off only.
    OnOff,
    /// Master brightness only.
    Brightness,
    /// Brightness plus a separate white channel.
    White,
    /// Tunable white (mired color temperature) plus brightness.
    ColorTemperature,
    /// RGB color.
    Rgb,
    /// RGB color plus a separate white channel.
    RgbWhite,
    /// RGB color plus tunable white.
    RgbColorTemperature,
}

/// The set of datapoint channels bound on a light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ChannelSet {
    /// A switch datapoint is bound.
    pub switch: bool,
    /// A dimmer datapoint is bound.
    pub dimmer: bool,
    /// A color datapoint is bound.
    pub color: bool,
    /// A color temperature datapoint is bound.
    pub color_temperature: bool,
}

/// Declared capabilities of a datapoint light.
///
/// # Examples
///
/// ```
/// use dplight::capabilities::{ChannelSet, ColorMode, LightTraits};
///
/// let channels = ChannelSet {
///     dimmer: true,
///     color: true,
///     ..ChannelSet::default()
/// };
/// let traits = LightTraits::negotiate(channels, true, None);
/// assert!(traits.supports(ColorMode::Rgb));
/// assert!(traits.supports(ColorMode::White));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LightTraits {
    supported_modes: Vec<ColorMode>,
    mireds: Option<MiredRange>,
}

impl LightTraits {
    /// Computes the supported color modes from the bound channels.
    ///
    /// The rule table is evaluated in priority order, first match wins:
    ///
    /// 1. color temperature + dimmer + color: `{Rgb, ColorTemperature}`
    ///    under interlock, `{RgbColorTemperature, ColorTemperature}`
    ///    otherwise
    /// 2. color temperature + dimmer: `{ColorTemperature}`
    /// 3. color + dimmer: `{Rgb, White}` under interlock, `{RgbWhite}`
    ///    otherwise
    /// 4. color only: `{Rgb}`
    /// 5. dimmer only: `{Brightness}`
    /// 6. anything else: `{OnOff}`
    ///
    /// The mired bounds are attached whenever the color temperature
    /// channel is active (rules 1 and 2).
    #[must_use]
    pub fn negotiate(channels: ChannelSet, interlock: bool, mireds: Option<MiredRange>) -> Self {
        if channels.color_temperature && channels.dimmer {
            let supported_modes = if channels.color {
                if interlock {
                    vec![ColorMode::Rgb, ColorMode::ColorTemperature]
                } else {
                    vec![ColorMode::RgbColorTemperature, ColorMode::ColorTemperature]
                }
            } else {
                vec![ColorMode::ColorTemperature]
            };
            return Self {
                supported_modes,
                mireds,
            };
        }

        let supported_modes = if channels.color {
            if channels.dimmer {
                if interlock {
                    vec![ColorMode::Rgb, ColorMode::White]
                } else {
                    vec![ColorMode::RgbWhite]
                }
            } else {
                vec![ColorMode::Rgb]
            }
        } else if channels.dimmer {
            vec![ColorMode::Brightness]
        } else {
            vec![ColorMode::OnOff]
        };

        Self {
            supported_modes,
            mireds: None,
        }
    }

    /// Returns the supported color modes in declaration order.
    #[must_use]
    pub fn supported_modes(&self) -> &[ColorMode] {
        &self.supported_modes
    }

    /// Returns whether the given mode is supported.
    #[must_use]
    pub fn supports(&self, mode: ColorMode) -> bool {
        self.supported_modes.contains(&mode)
    }

    /// Returns the coldest supported color temperature in mireds.
    #[must_use]
    pub fn min_mireds(&self) -> Option<f32> {
        self.mireds.map(|m| m.cold())
    }

    /// Returns the warmest supported color temperature in mireds.
    #[must_use]
    pub fn max_mireds(&self) -> Option<f32> {
        self.mireds.map(|m| m.warm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mireds() -> Option<MiredRange> {
        Some(MiredRange::new(153.0, 500.0).unwrap())
    }

    #[test]
    fn full_rgbct_without_interlock() {
        let channels = ChannelSet {
            dimmer: true,
            color: true,
            color_temperature: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, false, mireds());
        assert_eq!(
            traits.supported_modes(),
            [ColorMode::RgbColorTemperature, ColorMode::ColorTemperature]
        );
        assert_eq!(traits.min_mireds(), Some(153.0));
        assert_eq!(traits.max_mireds(), Some(500.0));
    }

    #[test]
    fn full_rgbct_with_interlock() {
        let channels = ChannelSet {
            dimmer: true,
            color: true,
            color_temperature: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, true, mireds());
        assert_eq!(
            traits.supported_modes(),
            [ColorMode::Rgb, ColorMode::ColorTemperature]
        );
    }

    #[test]
    fn tunable_white_only() {
        // Brightness + color temperature and no color channel must offer
        // ColorTemperature alone, not RgbColorTemperature.
        let channels = ChannelSet {
            dimmer: true,
            color_temperature: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, false, mireds());
        assert_eq!(traits.supported_modes(), [ColorMode::ColorTemperature]);
        assert_eq!(traits.min_mireds(), Some(153.0));
    }

    #[test]
    fn rgb_with_dimmer_interlocked() {
        let channels = ChannelSet {
            dimmer: true,
            color: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, true, None);
        assert_eq!(traits.supported_modes(), [ColorMode::Rgb, ColorMode::White]);
        assert_eq!(traits.min_mireds(), None);
    }

    #[test]
    fn rgb_with_dimmer_combined() {
        let channels = ChannelSet {
            dimmer: true,
            color: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, false, None);
        assert_eq!(traits.supported_modes(), [ColorMode::RgbWhite]);
    }

    #[test]
    fn color_only() {
        let channels = ChannelSet {
            color: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, false, None);
        assert_eq!(traits.supported_modes(), [ColorMode::Rgb]);
    }

    #[test]
    fn dimmer_only() {
        let channels = ChannelSet {
            dimmer: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, false, None);
        assert_eq!(traits.supported_modes(), [ColorMode::Brightness]);
    }

    #[test]
    fn nothing_bound_degrades_to_on_off() {
        let traits = LightTraits::negotiate(ChannelSet::default(), false, None);
        assert_eq!(traits.supported_modes(), [ColorMode::OnOff]);
    }

    #[test]
    fn color_temperature_without_dimmer_falls_through() {
        // Rules 1 and 2 require both channels; a lone color temperature
        // binding does not unlock tunable white.
        let channels = ChannelSet {
            color_temperature: true,
            color: true,
            ..ChannelSet::default()
        };
        let traits = LightTraits::negotiate(channels, false, mireds());
        assert_eq!(traits.supported_modes(), [ColorMode::Rgb]);
        assert_eq!(traits.min_mireds(), None);
    }
}
