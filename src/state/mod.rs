// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical light state holder contract.
//!
//! The adapter does not own the light state; it talks to a host-provided
//! holder through the [`LightState`] trait. The holder stores the
//! committed [`LightColorValues`], interpolates transitions toward a
//! target value set, and accepts [`LightCall`] mutation requests.
//!
//! [`BasicLightState`] is a minimal in-memory implementation without
//! transition animation, suitable for hosts that switch instantly and
//! for tests.

mod color_values;
mod light_call;

pub use color_values::LightColorValues;
pub use light_call::LightCall;

/// Contract for the host-owned light state holder.
pub trait LightState {
    /// Returns the committed channel values.
    fn current_values(&self) -> &LightColorValues;

    /// Returns the transition-target channel values.
    ///
    /// While these differ from [`current_values`](Self::current_values)
    /// the light is mid-transition and inbound datapoint changes are
    /// assumed to be stale device feedback.
    fn remote_values(&self) -> &LightColorValues;

    /// Returns the gamma correction exponent applied to outputs.
    fn gamma_correct(&self) -> f32;

    /// Commits a mutation request as one atomic state transition.
    fn perform(&mut self, call: LightCall);
}

/// In-memory light state without transition animation.
///
/// Calls are applied immediately, so `current` and `remote` values are
/// always equal after a commit.
///
/// # Examples
///
/// ```
/// use dplight::state::{BasicLightState, LightCall, LightState};
///
/// let mut state = BasicLightState::new(2.8);
/// state.perform(LightCall::new().with_state(true).with_brightness(0.25));
/// assert!(state.current_values().is_on);
/// assert_eq!(state.current_values().brightness, 0.25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLightState {
    current: LightColorValues,
    remote: LightColorValues,
    gamma: f32,
}

impl BasicLightState {
    /// Creates a new state holder with the given gamma exponent.
    #[must_use]
    pub fn new(gamma: f32) -> Self {
        Self {
            current: LightColorValues::default(),
            remote: LightColorValues::default(),
            gamma,
        }
    }

    /// Overwrites the committed values directly.
    pub fn set_current_values(&mut self, values: LightColorValues) {
        self.current = values;
    }

    /// Overwrites the target values directly, e.g. to simulate a
    /// transition in progress.
    pub fn set_remote_values(&mut self, values: LightColorValues) {
        self.remote = values;
    }
}

impl Default for BasicLightState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl LightState for BasicLightState {
    fn current_values(&self) -> &LightColorValues {
        &self.current
    }

    fn remote_values(&self) -> &LightColorValues {
        &self.remote
    }

    fn gamma_correct(&self) -> f32 {
        self.gamma
    }

    fn perform(&mut self, call: LightCall) {
        call.apply_to(&mut self.current);
        self.remote = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perform_applies_to_both_value_sets() {
        let mut state = BasicLightState::new(1.0);
        state.perform(LightCall::new().with_state(true).with_brightness(0.5));

        assert_eq!(state.current_values(), state.remote_values());
        assert!(state.current_values().is_on);
    }

    #[test]
    fn remote_values_can_diverge_for_transitions() {
        let mut state = BasicLightState::new(1.0);
        let target = LightColorValues {
            is_on: true,
            brightness: 1.0,
            ..LightColorValues::default()
        };
        state.set_remote_values(target);

        assert_ne!(state.current_values(), state.remote_values());
    }

    #[test]
    fn gamma_is_exposed() {
        let state = BasicLightState::new(2.8);
        assert_eq!(state.gamma_correct(), 2.8);
    }
}
