// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport contract for datapoint writes.
//!
//! The transport layer (MCU serial link, wire encoding, retries,
//! reconnects) is not part of this crate. The adapter only needs a sink
//! for datapoint writes; delivery is fire-and-forget and failure handling
//! belongs to the transport implementation.
//!
//! Inbound datapoint change notifications travel the other way: the host
//! event loop feeds them to
//! [`DatapointLight::handle_datapoint`](crate::DatapointLight::handle_datapoint)
//! as [`Datapoint`](crate::types::Datapoint) values.

use crate::types::DatapointId;

/// Sink for datapoint writes toward the device.
pub trait DatapointPort {
    /// Writes a boolean datapoint value.
    fn set_boolean(&mut self, id: DatapointId, value: bool);

    /// Writes an unsigned integer datapoint value.
    fn set_integer(&mut self, id: DatapointId, value: u32);

    /// Writes a text datapoint value.
    fn set_string(&mut self, id: DatapointId, value: &str);
}
