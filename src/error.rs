// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `dplight` library.
//!
//! This module provides the error hierarchy for the two places where
//! failures are reported: value validation and adapter configuration.
//!
//! Inbound datapoint noise (malformed color strings, unexpected value
//! kinds) is deliberately *not* an error: the adapter treats it as
//! "ignore this update" and continues (see [`crate::light`]).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while building an adapter configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// JSON deserialization of a configuration failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A normalized channel value is outside [0.0, 1.0].
    #[error("channel value {actual} is out of range [0, 1]")]
    OutOfUnitRange {
        /// The actual value that was provided.
        actual: f32,
    },

    /// A hue value is outside the valid range (0-360).
    #[error("hue value {0} is out of range [0, 360]")]
    InvalidHue(f32),
}

/// Errors related to adapter configuration.
///
/// These errors are reported when [`LightConfig`](crate::LightConfig) is
/// turned into an adapter and the configured parameters cannot describe a
/// usable device.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Brightness range is empty (`min_value == max_value`).
    #[error("brightness range is empty: min and max are both {0}")]
    EmptyBrightnessRange(i32),

    /// Color temperature device ceiling is zero.
    #[error("color temperature max value must be nonzero")]
    ZeroColorTemperatureMax,

    /// Mired endpoints describe an empty color temperature range.
    #[error("mired range is empty: cold and warm are both {0}")]
    EmptyMiredRange(f32),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
