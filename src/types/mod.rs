// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for datapoint light control.
//!
//! # Types
//!
//! - [`DatapointId`] - Numbered device register identifier
//! - [`Datapoint`] / [`DatapointValue`] - Change notification payloads
//! - [`Rgb`] - Normalized RGB color with 8-bit channel conversion
//! - [`Hsv`] - HSV color (hue 0-360, saturation/value 0-1)

mod datapoint;
mod rgb;

pub use datapoint::{Datapoint, DatapointId, DatapointValue};
pub use rgb::{Hsv, Rgb};
