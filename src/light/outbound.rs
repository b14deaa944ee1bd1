// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound translation: committed light state into datapoint writes.

use crate::protocol::DatapointPort;
use crate::range::invert;
use crate::state::LightState;
use crate::types::Rgb;

use super::DatapointLight;

impl DatapointLight {
    /// Writes the committed light state out to the device.
    ///
    /// Call this whenever the light state commits a new value set. When
    /// the commit was itself caused by an inbound datapoint change, the
    /// pending echo-suppression flag is cleared and nothing is written.
    ///
    /// With the color interlock enabled, the white/temperature group and
    /// the color group are never both written: brightness above zero
    /// selects the white group, brightness at zero selects color.
    #[allow(clippy::float_cmp, clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn write_state<S: LightState, P: DatapointPort>(&mut self, state: &S, port: &mut P) {
        if self.inhibit_next_send {
            self.inhibit_next_send = false;
            tracing::trace!("Skipping outbound write echoing an inbound change");
            return;
        }

        let values = *state.current_values();

        let (mut red, mut green, mut blue) = (0.0f32, 0.0f32, 0.0f32);
        let mut color_temperature = 0.0f32;
        let mut brightness = 0.0f32;

        if self.config.color_id.is_some() {
            if let Some(mireds) = self.mireds {
                (red, green, blue, color_temperature, brightness) = values.as_rgbct(&mireds);
            } else if self.brightness_range.is_some() {
                (red, green, blue, brightness) = values.as_rgbw();
            } else {
                (red, green, blue) = values.as_rgb();
            }
        } else if let Some(mireds) = self.mireds {
            (color_temperature, brightness) = values.as_ct(&mireds);
        } else {
            brightness = values.as_brightness();
        }

        // The device retains its last color and brightness across power
        // cycles, so turning off is a single switch write.
        if !values.is_on
            && let Some(switch_id) = self.config.switch_id
        {
            port.set_boolean(switch_id, false);
            return;
        }

        let is_on = brightness != 0.0;

        if brightness > 0.0 || !self.config.color_interlock {
            if let Some(ct_id) = self.config.color_temperature_id {
                let max = self.config.color_temperature_max_value;
                let mut raw = (color_temperature * max as f32).round() as u32;
                if self.config.color_temperature_invert {
                    raw = invert(raw, max);
                }
                tracing::trace!(color_temperature, raw, "Setting color temperature");
                port.set_integer(ct_id, raw);
            }

            if let Some(dimmer_id) = self.config.dimmer_id
                && let Some(range) = self.brightness_range
            {
                let raw = if is_on { range.denormalize(brightness) } else { 0 };
                tracing::trace!(brightness, raw, "Setting brightness");
                port.set_integer(dimmer_id, raw);
            }
        }

        if let Some(color_id) = self.config.color_id
            && (brightness == 0.0 || !self.config.color_interlock)
        {
            let wire = self
                .config
                .color_encoding
                .encode(&Rgb::clamped(red, green, blue));
            tracing::trace!(wire, "Setting color");
            port.set_string(color_id, &wire);
        }

        if let Some(switch_id) = self.config.switch_id {
            tracing::trace!(is_on, "Setting switch");
            port.set_boolean(switch_id, is_on);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::encoding::ColorEncoding;
    use crate::light::testutil::{RecordingPort, Write};
    use crate::light::{DatapointLight, LightConfig};
    use crate::state::{BasicLightState, LightCall, LightColorValues, LightState};
    use crate::types::{Datapoint, DatapointId, Rgb};

    const SWITCH: DatapointId = DatapointId::new(1);
    const DIMMER: DatapointId = DatapointId::new(2);
    const CT: DatapointId = DatapointId::new(4);
    const COLOR: DatapointId = DatapointId::new(5);

    fn committed(call: LightCall) -> BasicLightState {
        let mut state = BasicLightState::new(1.0);
        state.perform(call);
        state
    }

    #[test]
    fn off_light_writes_single_switch_off() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_switch(SWITCH)
                .with_dimmer(DIMMER)
                .with_brightness_range(0, 1000),
        )
        .unwrap();
        let state = committed(LightCall::new().with_state(false).with_brightness(0.5));

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(port.writes, vec![Write::Bool(SWITCH, false)]);
    }

    #[test]
    fn brightness_written_with_ceiling_rounding() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_switch(SWITCH)
                .with_dimmer(DIMMER)
                .with_brightness_range(0, 1000),
        )
        .unwrap();
        let state = committed(LightCall::new().with_state(true).with_brightness(0.5115));

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(
            port.writes,
            vec![Write::Int(DIMMER, 512), Write::Bool(SWITCH, true)]
        );
    }

    #[test]
    fn inverted_brightness_range() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_dimmer(DIMMER)
                .with_brightness_range(1000, 0),
        )
        .unwrap();
        let state = committed(LightCall::new().with_state(true).with_brightness(1.0));

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(port.writes, vec![Write::Int(DIMMER, 0)]);
    }

    #[test]
    fn color_temperature_written_rounded_and_inverted() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_dimmer(DIMMER)
                .with_brightness_range(0, 1000)
                .with_color_temperature(CT, 1000)
                .with_mired_range(153.0, 500.0)
                .with_color_temperature_invert(true),
        )
        .unwrap();
        // Halfway mireds -> fraction 0.5 -> raw 500 -> inverted 500
        let state = committed(
            LightCall::new()
                .with_state(true)
                .with_brightness(1.0)
                .with_color_temperature(326.5),
        );

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(
            port.writes,
            vec![Write::Int(CT, 500), Write::Int(DIMMER, 1000)]
        );
    }

    #[test]
    fn color_written_in_configured_encoding() {
        let mut light = DatapointLight::new(
            LightConfig::new().with_color(COLOR, ColorEncoding::Rgb),
        )
        .unwrap();
        let state = committed(
            LightCall::new()
                .with_state(true)
                .with_rgb(Rgb::from_bytes(255, 128, 0)),
        );

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(port.writes, vec![Write::Str(COLOR, "FF8000".to_string())]);
    }

    #[test]
    fn interlock_suppresses_color_while_bright() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_dimmer(DIMMER)
                .with_brightness_range(0, 1000)
                .with_color(COLOR, ColorEncoding::Rgb)
                .with_color_interlock(true),
        )
        .unwrap();
        let state = committed(LightCall::new().with_state(true).with_brightness(0.8));

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(port.writes, vec![Write::Int(DIMMER, 800)]);
    }

    #[test]
    fn interlock_selects_color_at_zero_brightness() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_dimmer(DIMMER)
                .with_brightness_range(0, 1000)
                .with_color(COLOR, ColorEncoding::Rgb)
                .with_color_interlock(true),
        )
        .unwrap();
        let state = committed(
            LightCall::new()
                .with_state(true)
                .with_brightness(0.0)
                .with_rgb(Rgb::red_color()),
        );

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(port.writes, vec![Write::Str(COLOR, "FF0000".to_string())]);
    }

    #[test]
    fn without_interlock_both_groups_written() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_dimmer(DIMMER)
                .with_brightness_range(0, 1000)
                .with_color(COLOR, ColorEncoding::Rgb),
        )
        .unwrap();
        let state = committed(
            LightCall::new()
                .with_state(true)
                .with_brightness(0.5)
                .with_rgb(Rgb::white()),
        );

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert_eq!(
            port.writes,
            vec![
                Write::Int(DIMMER, 500),
                Write::Str(COLOR, "FFFFFF".to_string())
            ]
        );
    }

    #[test]
    fn echo_suppression_skips_exactly_one_pass() {
        let mut light = DatapointLight::new(
            LightConfig::new()
                .with_switch(SWITCH)
                .with_dimmer(DIMMER)
                .with_brightness_range(0, 1000),
        )
        .unwrap();
        let mut state = BasicLightState::new(1.0);
        state.perform(LightCall::new().with_state(true).with_brightness(1.0));

        // Inbound dimmer change sets the suppression flag.
        light.handle_datapoint(&mut state, &Datapoint::integer(DIMMER, 512));

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert!(port.writes.is_empty(), "echoed write must be suppressed");

        // The following pass resumes normal writes.
        light.write_state(&state, &mut port);
        assert_eq!(
            port.writes,
            vec![Write::Int(DIMMER, 512), Write::Bool(SWITCH, true)]
        );
    }

    #[test]
    fn nothing_bound_writes_nothing() {
        // Nothing bound at all: the outbound pass has no datapoints to
        // drive and must not panic.
        let mut light = DatapointLight::new(LightConfig::new()).unwrap();
        let state = committed(LightCall::new().with_state(true));

        let mut port = RecordingPort::default();
        light.write_state(&state, &mut port);
        assert!(port.writes.is_empty());
    }
}
