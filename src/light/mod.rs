// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The datapoint-to-state adapter.
//!
//! [`DatapointLight`] owns the mapping from logical light channels to
//! protocol datapoints and translates in both directions:
//!
//! - **Inbound**: a datapoint change notification becomes a light-state
//!   mutation request ([`DatapointLight::handle_datapoint`]).
//! - **Outbound**: a committed light-state change becomes one or more
//!   datapoint writes ([`DatapointLight::write_state`]).
//!
//! The adapter is single-threaded and event-driven: the host event loop
//! delivers datapoint notifications and state commits serially, and every
//! entry point is pure computation plus synchronous port writes.
//!
//! # Echo suppression
//!
//! An inbound switch or dimmer change is applied to the local light state,
//! which in turn triggers an outbound pass. Without suppression that pass
//! would echo the device's own report straight back to it, causing visible
//! flicker. The adapter therefore sets a transient flag when an inbound
//! change performs a local apply, and the very next outbound pass clears
//! the flag and writes nothing.
//!
//! # Examples
//!
//! ```
//! use dplight::light::{DatapointLight, LightConfig};
//! use dplight::state::{BasicLightState, LightState};
//! use dplight::types::{Datapoint, DatapointId};
//!
//! let config = LightConfig::new()
//!     .with_switch(DatapointId::new(1))
//!     .with_dimmer(DatapointId::new(2));
//! let mut light = DatapointLight::new(config).unwrap();
//!
//! let mut state = BasicLightState::default();
//! light.handle_datapoint(&mut state, &Datapoint::boolean(DatapointId::new(1), true));
//! assert!(state.current_values().is_on);
//! ```

mod inbound;
mod outbound;

use crate::capabilities::{ChannelSet, LightTraits};
use crate::encoding::ColorEncoding;
use crate::error::{ConfigError, Error};
use crate::protocol::DatapointPort;
use crate::range::{DeviceRange, MiredRange};
use crate::types::DatapointId;

/// Logical light channel a datapoint can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// On/off switch channel.
    Switch,
    /// Brightness (dimmer) channel.
    Dimmer,
    /// Color temperature channel.
    ColorTemperature,
    /// Color channel (hex wire string).
    Color,
}

/// Configuration of a datapoint light.
///
/// Every channel binding is optional; absent bindings narrow the declared
/// capabilities (see [`LightTraits::negotiate`]). Range parameters are
/// only consulted for the channels that are actually bound.
///
/// # Examples
///
/// ```
/// use dplight::light::LightConfig;
/// use dplight::types::DatapointId;
///
/// let config = LightConfig::new()
///     .with_switch(DatapointId::new(1))
///     .with_dimmer(DatapointId::new(2))
///     .with_brightness_range(25, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Datapoint of the on/off switch channel.
    pub switch_id: Option<DatapointId>,
    /// Datapoint of the dimmer channel.
    pub dimmer_id: Option<DatapointId>,
    /// Datapoint of the color channel.
    pub color_id: Option<DatapointId>,
    /// Datapoint of the color temperature channel.
    pub color_temperature_id: Option<DatapointId>,
    /// Datapoint the device expects the dimmer floor to be reported to.
    pub min_value_datapoint_id: Option<DatapointId>,
    /// Wire layout of the color datapoint.
    pub color_encoding: ColorEncoding,
    /// Dimmer device value at brightness 0.0. May exceed `max_value`,
    /// which selects the inverted direction.
    pub min_value: i32,
    /// Dimmer device value at brightness 1.0.
    pub max_value: i32,
    /// Device unit ceiling of the color temperature channel.
    pub color_temperature_max_value: u32,
    /// Mireds reported at color temperature device value 0.
    pub cold_white_temperature: f32,
    /// Mireds reported at the color temperature ceiling.
    pub warm_white_temperature: f32,
    /// Inverts the color temperature channel direction.
    pub color_temperature_invert: bool,
    /// Makes color and white/temperature outputs mutually exclusive.
    pub color_interlock: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            switch_id: None,
            dimmer_id: None,
            color_id: None,
            color_temperature_id: None,
            min_value_datapoint_id: None,
            color_encoding: ColorEncoding::Rgb,
            min_value: 0,
            max_value: 255,
            color_temperature_max_value: 255,
            cold_white_temperature: 153.0,
            warm_white_temperature: 500.0,
            color_temperature_invert: false,
            color_interlock: false,
        }
    }
}

impl LightConfig {
    /// Creates a configuration with no channels bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the document cannot be deserialized.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Binds the switch channel.
    #[must_use]
    pub const fn with_switch(mut self, id: DatapointId) -> Self {
        self.switch_id = Some(id);
        self
    }

    /// Binds the dimmer channel.
    #[must_use]
    pub const fn with_dimmer(mut self, id: DatapointId) -> Self {
        self.dimmer_id = Some(id);
        self
    }

    /// Binds the color channel with the given wire encoding.
    #[must_use]
    pub const fn with_color(mut self, id: DatapointId, encoding: ColorEncoding) -> Self {
        self.color_id = Some(id);
        self.color_encoding = encoding;
        self
    }

    /// Binds the color temperature channel.
    #[must_use]
    pub const fn with_color_temperature(mut self, id: DatapointId, max_value: u32) -> Self {
        self.color_temperature_id = Some(id);
        self.color_temperature_max_value = max_value;
        self
    }

    /// Binds the datapoint the dimmer floor is reported to on setup.
    #[must_use]
    pub const fn with_min_value_datapoint(mut self, id: DatapointId) -> Self {
        self.min_value_datapoint_id = Some(id);
        self
    }

    /// Sets the dimmer device range. `min > max` selects inversion.
    #[must_use]
    pub const fn with_brightness_range(mut self, min: i32, max: i32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Sets the mired endpoints of the color temperature channel.
    #[must_use]
    pub const fn with_mired_range(mut self, cold: f32, warm: f32) -> Self {
        self.cold_white_temperature = cold;
        self.warm_white_temperature = warm;
        self
    }

    /// Inverts the color temperature channel direction.
    #[must_use]
    pub const fn with_color_temperature_invert(mut self, invert: bool) -> Self {
        self.color_temperature_invert = invert;
        self
    }

    /// Makes color and white/temperature outputs mutually exclusive.
    #[must_use]
    pub const fn with_color_interlock(mut self, interlock: bool) -> Self {
        self.color_interlock = interlock;
        self
    }
}

/// Bidirectional adapter between a logical light state and datapoints.
///
/// See the [module documentation](self) for the translation semantics.
#[derive(Debug, Clone)]
pub struct DatapointLight {
    config: LightConfig,
    brightness_range: Option<DeviceRange>,
    mireds: Option<MiredRange>,
    inhibit_next_send: bool,
}

impl DatapointLight {
    /// Builds an adapter from a configuration.
    ///
    /// Range parameters are validated only for the channels that are
    /// bound: an unbound dimmer tolerates an empty brightness range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a bound channel's range parameters cannot
    /// describe a usable device.
    pub fn new(config: LightConfig) -> Result<Self, ConfigError> {
        let brightness_range = match config.dimmer_id {
            Some(_) => Some(DeviceRange::new(config.min_value, config.max_value)?),
            None => None,
        };
        let mireds = match config.color_temperature_id {
            Some(_) => {
                if config.color_temperature_max_value == 0 {
                    return Err(ConfigError::ZeroColorTemperatureMax);
                }
                Some(MiredRange::new(
                    config.cold_white_temperature,
                    config.warm_white_temperature,
                )?)
            }
            None => None,
        };

        Ok(Self {
            config,
            brightness_range,
            mireds,
            inhibit_next_send: false,
        })
    }

    /// Returns the configuration this adapter was built from.
    #[must_use]
    pub const fn config(&self) -> &LightConfig {
        &self.config
    }

    /// Returns which channels are bound.
    #[must_use]
    pub const fn channels(&self) -> ChannelSet {
        ChannelSet {
            switch: self.config.switch_id.is_some(),
            dimmer: self.config.dimmer_id.is_some(),
            color: self.config.color_id.is_some(),
            color_temperature: self.config.color_temperature_id.is_some(),
        }
    }

    /// Returns the declared capabilities of this light.
    #[must_use]
    pub fn traits(&self) -> LightTraits {
        LightTraits::negotiate(self.channels(), self.config.color_interlock, self.mireds)
    }

    /// Returns the channel a datapoint is bound to, if any.
    #[must_use]
    pub fn channel_for(&self, id: DatapointId) -> Option<Channel> {
        if self.config.switch_id == Some(id) {
            Some(Channel::Switch)
        } else if self.config.dimmer_id == Some(id) {
            Some(Channel::Dimmer)
        } else if self.config.color_temperature_id == Some(id) {
            Some(Channel::ColorTemperature)
        } else if self.config.color_id == Some(id) {
            Some(Channel::Color)
        } else {
            None
        }
    }

    /// Returns all bound datapoints, for listener registration.
    #[must_use]
    pub fn bound_datapoints(&self) -> Vec<DatapointId> {
        [
            self.config.switch_id,
            self.config.dimmer_id,
            self.config.color_temperature_id,
            self.config.color_id,
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Performs one-time device setup.
    ///
    /// Logs the configured bindings and, when a `min_value_datapoint_id`
    /// is configured, reports the dimmer floor to the device.
    #[allow(clippy::cast_sign_loss)]
    pub fn setup<P: DatapointPort>(&self, port: &mut P) {
        tracing::debug!(
            switch = ?self.config.switch_id,
            dimmer = ?self.config.dimmer_id,
            color = ?self.config.color_id,
            color_temperature = ?self.config.color_temperature_id,
            interlock = self.config.color_interlock,
            "Datapoint light configured"
        );
        if let Some(id) = self.config.min_value_datapoint_id {
            port.set_integer(id, self.config.min_value.max(0) as u32);
        }
    }
}
