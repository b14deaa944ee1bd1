// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Datapoint types for the vendor protocol link.
//!
//! Tuya-style MCUs expose device features as numbered registers called
//! datapoints. Each datapoint carries one of a small set of value kinds;
//! the light adapter only ever deals with boolean (switch), integer
//! (dimmer, color temperature) and text (color) payloads.

use std::fmt;

/// Identifier of a device datapoint (0-255).
///
/// # Examples
///
/// ```
/// use dplight::types::DatapointId;
///
/// let dimmer = DatapointId::new(2);
/// assert_eq!(dimmer.value(), 2);
/// assert_eq!(dimmer.to_string(), "DP2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DatapointId(u8);

impl DatapointId {
    /// Creates a new datapoint identifier.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for DatapointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DP{}", self.0)
    }
}

impl From<u8> for DatapointId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// Payload of a datapoint change notification.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DatapointValue {
    /// Boolean payload (switch datapoints).
    Bool(bool),
    /// Unsigned integer payload (dimmer and color temperature datapoints).
    Integer(u32),
    /// Text payload (color datapoints, hex-encoded).
    Text(String),
}

/// A datapoint change notification delivered by the transport.
///
/// # Examples
///
/// ```
/// use dplight::types::{Datapoint, DatapointId};
///
/// let dp = Datapoint::integer(DatapointId::new(2), 512);
/// assert_eq!(dp.as_integer(), Some(512));
/// assert_eq!(dp.as_bool(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Datapoint {
    /// The datapoint that changed.
    pub id: DatapointId,
    /// The reported value.
    pub value: DatapointValue,
}

impl Datapoint {
    /// Creates a boolean datapoint notification.
    #[must_use]
    pub const fn boolean(id: DatapointId, value: bool) -> Self {
        Self {
            id,
            value: DatapointValue::Bool(value),
        }
    }

    /// Creates an integer datapoint notification.
    #[must_use]
    pub const fn integer(id: DatapointId, value: u32) -> Self {
        Self {
            id,
            value: DatapointValue::Integer(value),
        }
    }

    /// Creates a text datapoint notification.
    #[must_use]
    pub fn text(id: DatapointId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: DatapointValue::Text(value.into()),
        }
    }

    /// Returns the boolean payload, or `None` for other value kinds.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self.value {
            DatapointValue::Bool(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the integer payload, or `None` for other value kinds.
    #[must_use]
    pub const fn as_integer(&self) -> Option<u32> {
        match self.value {
            DatapointValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the text payload, or `None` for other value kinds.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            DatapointValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datapoint_id_display() {
        assert_eq!(DatapointId::new(7).to_string(), "DP7");
    }

    #[test]
    fn datapoint_id_from_u8() {
        let id: DatapointId = 3.into();
        assert_eq!(id.value(), 3);
    }

    #[test]
    fn boolean_accessor() {
        let dp = Datapoint::boolean(DatapointId::new(1), true);
        assert_eq!(dp.as_bool(), Some(true));
        assert_eq!(dp.as_integer(), None);
        assert_eq!(dp.as_text(), None);
    }

    #[test]
    fn integer_accessor() {
        let dp = Datapoint::integer(DatapointId::new(2), 1000);
        assert_eq!(dp.as_integer(), Some(1000));
        assert_eq!(dp.as_bool(), None);
    }

    #[test]
    fn text_accessor() {
        let dp = Datapoint::text(DatapointId::new(5), "FF8000");
        assert_eq!(dp.as_text(), Some("FF8000"));
        assert_eq!(dp.as_integer(), None);
    }

    #[test]
    fn serde_roundtrip() {
        let dp = Datapoint::integer(DatapointId::new(2), 512);
        let json = serde_json::to_string(&dp).unwrap();
        let back: Datapoint = serde_json::from_str(&json).unwrap();
        assert_eq!(dp, back);
    }
}
