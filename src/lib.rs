// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `dplight` - A Rust library to bridge datapoint lights.
//!
//! Tuya-style MCUs expose lights as a handful of discrete registers
//! ("datapoints"): a boolean switch, an integer dimmer, an integer color
//! temperature and a hex-string color. This library keeps those registers
//! and a logical light state (normalized on/off, brightness, RGB and
//! mired values) consistent in both directions without feedback loops.
//!
//! # Supported Features
//!
//! - **Capability negotiation**: supported color modes derived from the
//!   configured channel bindings, degrading gracefully to on/off
//! - **Inbound translation**: datapoint changes become light-state
//!   mutation requests, with transition guarding and echo suppression
//! - **Outbound translation**: committed light state becomes datapoint
//!   writes, honoring inverted ranges, gamma and the color interlock
//! - **Color encodings**: RGB, HSV and combined RGB+HSV wire strings
//!
//! # Quick Start
//!
//! ```
//! use dplight::light::{DatapointLight, LightConfig};
//! use dplight::encoding::ColorEncoding;
//! use dplight::protocol::DatapointPort;
//! use dplight::state::{BasicLightState, LightCall, LightState};
//! use dplight::types::{Datapoint, DatapointId};
//!
//! struct NullPort;
//!
//! impl DatapointPort for NullPort {
//!     fn set_boolean(&mut self, _: DatapointId, _: bool) {}
//!     fn set_integer(&mut self, _: DatapointId, _: u32) {}
//!     fn set_string(&mut self, _: DatapointId, _: &str) {}
//! }
//!
//! # fn main() -> dplight::Result<()> {
//! let config = LightConfig::new()
//!     .with_switch(DatapointId::new(1))
//!     .with_dimmer(DatapointId::new(2))
//!     .with_brightness_range(25, 1000)
//!     .with_color(DatapointId::new(5), ColorEncoding::Rgb);
//! let mut light = DatapointLight::new(config)?;
//!
//! let mut state = BasicLightState::new(1.0);
//! let mut port = NullPort;
//! light.setup(&mut port);
//!
//! // Device reports the switch turning on.
//! light.handle_datapoint(&mut state, &Datapoint::boolean(DatapointId::new(1), true));
//! assert!(state.current_values().is_on);
//!
//! // Host commits a brightness change; the adapter writes datapoints.
//! state.perform(LightCall::new().with_brightness(0.5));
//! light.write_state(&state, &mut port);
//! # Ok(())
//! # }
//! ```
//!
//! # Event Flow
//!
//! The adapter is single-threaded and event-driven. The host event loop
//! registers the datapoints returned by
//! [`DatapointLight::bound_datapoints`] with its transport, feeds change
//! notifications to [`DatapointLight::handle_datapoint`], and calls
//! [`DatapointLight::write_state`] after every light-state commit. The
//! transport and the transition-animating state holder are host concerns,
//! specified by the [`protocol::DatapointPort`] and [`state::LightState`]
//! traits.

pub mod capabilities;
pub mod encoding;
pub mod error;
pub mod light;
pub mod protocol;
pub mod range;
pub mod state;
pub mod types;

pub use capabilities::{ChannelSet, ColorMode, LightTraits};
pub use encoding::ColorEncoding;
pub use error::{ConfigError, Error, Result, ValueError};
pub use light::{Channel, DatapointLight, LightConfig};
pub use protocol::DatapointPort;
pub use state::{BasicLightState, LightCall, LightColorValues, LightState};
pub use types::{Datapoint, DatapointId, DatapointValue, Hsv, Rgb};
