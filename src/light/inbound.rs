// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound translation: datapoint changes into light-state mutations.

use crate::range::{invert, inverse_gamma};
use crate::state::{LightCall, LightState};
use crate::types::Datapoint;

use super::{Channel, DatapointLight};

impl DatapointLight {
    /// Handles a datapoint change notification from the device.
    ///
    /// Unknown datapoints, value-kind mismatches and malformed color
    /// strings are discarded silently; nothing here is fatal. While the
    /// light is mid-transition every change is ignored, since device
    /// reports arriving then are stale feedback of the transition itself
    /// rather than operator action.
    pub fn handle_datapoint<S: LightState>(&mut self, state: &mut S, datapoint: &Datapoint) {
        let Some(channel) = self.channel_for(datapoint.id) else {
            tracing::debug!(id = %datapoint.id, "Datapoint not bound to a light channel, ignoring");
            return;
        };

        if state.current_values() != state.remote_values() {
            tracing::debug!(id = %datapoint.id, "Light is transitioning, datapoint change ignored");
            return;
        }

        match channel {
            Channel::Switch => self.handle_switch(state, datapoint),
            Channel::Dimmer => self.handle_dimmer(state, datapoint),
            Channel::ColorTemperature => self.handle_color_temperature(state, datapoint),
            Channel::Color => self.handle_color(state, datapoint),
        }
    }

    fn handle_switch<S: LightState>(&mut self, state: &mut S, datapoint: &Datapoint) {
        let Some(on) = datapoint.as_bool() else {
            tracing::debug!(id = %datapoint.id, "Switch datapoint carried a non-boolean value, ignoring");
            return;
        };

        self.inhibit_next_send = true;
        tracing::trace!(on, "Received switch");
        state.perform(LightCall::new().with_state(on));
    }

    // Exact zero compare is intentional: only a clipped-to-floor reading
    // gamma-corrects to exactly 0.0.
    #[allow(clippy::float_cmp, clippy::cast_precision_loss)]
    fn handle_dimmer<S: LightState>(&mut self, state: &mut S, datapoint: &Datapoint) {
        let Some(raw) = datapoint.as_integer() else {
            tracing::debug!(id = %datapoint.id, "Dimmer datapoint carried a non-integer value, ignoring");
            return;
        };

        // Ignore dimmer values received while the light is off, such as
        // during a switch-off fade out. This keeps the present brightness
        // restorable on the next switch-on.
        if !state.current_values().is_on {
            tracing::debug!(raw, "Light is off, dimmer change ignored");
            return;
        }

        let Some(range) = self.brightness_range else {
            return;
        };

        self.inhibit_next_send = true;

        let mut brightness = inverse_gamma(range.normalize(raw), state.gamma_correct());

        // The device may report a value just above the floor for a
        // brightness we sent near it. Rounding that to 0.0 would make the
        // light appear off, so substitute the smallest nonzero step.
        if range.lower() > 0 && brightness == 0.0 {
            brightness = 1.0 / range.span() as f32;
        }

        tracing::trace!(raw, brightness, "Received brightness");
        state.perform(LightCall::new().with_brightness(brightness));
    }

    #[allow(clippy::cast_precision_loss)]
    fn handle_color_temperature<S: LightState>(&mut self, state: &mut S, datapoint: &Datapoint) {
        let Some(raw) = datapoint.as_integer() else {
            tracing::debug!(id = %datapoint.id, "Color temperature datapoint carried a non-integer value, ignoring");
            return;
        };
        let Some(mireds) = self.mireds else {
            return;
        };

        let max = self.config.color_temperature_max_value;
        let raw = if self.config.color_temperature_invert {
            invert(raw, max)
        } else {
            raw
        };

        let fraction = raw as f32 / max as f32;
        let value = mireds.from_fraction(fraction);

        tracing::trace!(raw, value, "Received color temperature");
        state.perform(LightCall::new().with_color_temperature(value));
    }

    fn handle_color<S: LightState>(&mut self, state: &mut S, datapoint: &Datapoint) {
        let Some(wire) = datapoint.as_text() else {
            tracing::debug!(id = %datapoint.id, "Color datapoint carried a non-text value, ignoring");
            return;
        };

        let Some(color) = self.config.color_encoding.decode(wire) else {
            tracing::debug!(wire, "Malformed color string, ignoring");
            return;
        };

        tracing::trace!(%color, "Received color");
        state.perform(LightCall::new().with_rgb(color));
    }
}

#[cfg(test)]
mod tests {
    use crate::encoding::ColorEncoding;
    use crate::light::{DatapointLight, LightConfig};
    use crate::state::{BasicLightState, LightColorValues, LightState};
    use crate::types::{Datapoint, DatapointId};

    const SWITCH: DatapointId = DatapointId::new(1);
    const DIMMER: DatapointId = DatapointId::new(2);
    const CT: DatapointId = DatapointId::new(4);
    const COLOR: DatapointId = DatapointId::new(5);

    fn on_state() -> BasicLightState {
        let mut state = BasicLightState::new(1.0);
        let values = LightColorValues {
            is_on: true,
            brightness: 1.0,
            ..LightColorValues::default()
        };
        state.set_current_values(values);
        state.set_remote_values(values);
        state
    }

    fn dimmer_light(min: i32, max: i32) -> DatapointLight {
        DatapointLight::new(
            LightConfig::new()
                .with_switch(SWITCH)
                .with_dimmer(DIMMER)
                .with_brightness_range(min, max),
        )
        .unwrap()
    }

    #[test]
    fn switch_change_applies_state() {
        let mut light = dimmer_light(0, 1000);
        let mut state = on_state();

        light.handle_datapoint(&mut state, &Datapoint::boolean(SWITCH, false));
        assert!(!state.current_values().is_on);
    }

    #[test]
    fn dimmer_change_normalizes_brightness() {
        let mut light = dimmer_light(0, 1000);
        let mut state = on_state();

        light.handle_datapoint(&mut state, &Datapoint::integer(DIMMER, 512));
        assert!((state.current_values().brightness - 0.512).abs() < 1e-4);
    }

    #[test]
    fn dimmer_change_applies_inverse_gamma() {
        let mut light = dimmer_light(0, 1000);
        let mut state = BasicLightState::new(2.0);
        let values = LightColorValues {
            is_on: true,
            brightness: 1.0,
            ..LightColorValues::default()
        };
        state.set_current_values(values);
        state.set_remote_values(values);

        light.handle_datapoint(&mut state, &Datapoint::integer(DIMMER, 250));
        // 0.25^(1/2) = 0.5
        assert!((state.current_values().brightness - 0.5).abs() < 1e-4);
    }

    #[test]
    fn dimmer_change_honors_inverted_range() {
        let mut light = dimmer_light(1000, 0);
        let mut state = on_state();

        light.handle_datapoint(&mut state, &Datapoint::integer(DIMMER, 250));
        assert!((state.current_values().brightness - 0.75).abs() < 1e-4);
    }

    #[test]
    fn dimmer_change_while_off_is_discarded() {
        let mut light = dimmer_light(0, 1000);
        let mut state = BasicLightState::new(1.0);
        let before = *state.current_values();

        light.handle_datapoint(&mut state, &Datapoint::integer(DIMMER, 512));
        assert_eq!(state.current_values(), &before);
    }

    #[test]
    fn dimmer_at_nonzero_floor_never_yields_zero_brightness() {
        let mut light = dimmer_light(25, 255);
        let mut state = on_state();

        light.handle_datapoint(&mut state, &Datapoint::integer(DIMMER, 10));
        let brightness = state.current_values().brightness;
        assert!(brightness > 0.0);
        assert!((brightness - 1.0 / 230.0).abs() < 1e-6);
    }

    #[test]
    fn transition_guard_discards_changes() {
        let mut light = dimmer_light(0, 1000);
        let mut state = on_state();
        state.set_remote_values(LightColorValues {
            brightness: 0.1,
            ..*state.remote_values()
        });
        let before = *state.current_values();

        light.handle_datapoint(&mut state, &Datapoint::integer(DIMMER, 512));
        light.handle_datapoint(&mut state, &Datapoint::boolean(SWITCH, false));
        assert_eq!(state.current_values(), &before);
    }

    #[test]
    fn unknown_datapoint_is_ignored() {
        let mut light = dimmer_light(0, 1000);
        let mut state = on_state();
        let before = *state.current_values();

        light.handle_datapoint(&mut state, &Datapoint::integer(DatapointId::new(42), 7));
        assert_eq!(state.current_values(), &before);
    }

    #[test]
    fn value_kind_mismatch_is_ignored() {
        let mut light = dimmer_light(0, 1000);
        let mut state = on_state();
        let before = *state.current_values();

        light.handle_datapoint(&mut state, &Datapoint::text(DIMMER, "512"));
        light.handle_datapoint(&mut state, &Datapoint::integer(SWITCH, 1));
        assert_eq!(state.current_values(), &before);
    }

    #[test]
    fn color_temperature_maps_into_mireds() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_dimmer(DIMMER)
                .with_color_temperature(CT, 1000)
                .with_mired_range(153.0, 500.0),
        )
        .unwrap();
        let mut state = on_state();

        light.handle_datapoint(&mut state, &Datapoint::integer(CT, 500));
        let ct = state.current_values().color_temperature;
        assert!((ct - 326.5).abs() < 1e-3);
    }

    #[test]
    fn color_temperature_inversion() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_dimmer(DIMMER)
                .with_color_temperature(CT, 1000)
                .with_mired_range(153.0, 500.0)
                .with_color_temperature_invert(true),
        )
        .unwrap();
        let mut state = on_state();

        // Inverted: raw 0 means the warm end of the range.
        light.handle_datapoint(&mut state, &Datapoint::integer(CT, 0));
        let ct = state.current_values().color_temperature;
        assert!((ct - 500.0).abs() < 1e-3);
    }

    #[test]
    fn rgb_color_applies() {
        let mut light = DatapointLight::new(
            LightConfig::new().with_color(COLOR, ColorEncoding::Rgb),
        )
        .unwrap();
        let mut state = on_state();

        light.handle_datapoint(&mut state, &Datapoint::text(COLOR, "FF8000"));
        assert_eq!(state.current_values().rgb().to_bytes(), (255, 128, 0));
    }

    #[test]
    fn hsv_color_applies() {
        let mut light = DatapointLight::new(
            LightConfig::new().with_color(COLOR, ColorEncoding::Hsv),
        )
        .unwrap();
        let mut state = on_state();

        light.handle_datapoint(&mut state, &Datapoint::text(COLOR, "007803E803E8"));
        assert_eq!(state.current_values().rgb().to_bytes(), (0, 255, 0));
    }

    #[test]
    fn malformed_color_is_discarded() {
        let mut light = DatapointLight::new(
            LightConfig::new().with_color(COLOR, ColorEncoding::Rgb),
        )
        .unwrap();
        let mut state = on_state();
        let before = *state.current_values();

        light.handle_datapoint(&mut state, &Datapoint::text(COLOR, "GG0000"));
        light.handle_datapoint(&mut state, &Datapoint::text(COLOR, "FF80"));
        assert_eq!(state.current_values(), &before);
    }
}
