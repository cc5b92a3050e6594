// SPDX-License-Identifier: MPL-2.0
//! Damped-spring animated value.
//!
//! Each animated scalar of the overlay is a spring driven toward a target.
//! Springs are stepped from the host's tick subscription and report
//! settling explicitly, which is how transition completions surface to the
//! caller as effects instead of hidden callbacks.

use std::time::Duration;

/// Displacement below which a spring can come to rest.
const REST_DISPLACEMENT: f32 = 0.001;

/// Speed below which a spring can come to rest.
const REST_VELOCITY: f32 = 0.001;

/// Upper bound on a single integration sub-step, for numeric stability.
const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Upper bound on the wall-clock delta consumed per tick. Longer gaps
/// (a stalled event loop, a suspended machine) are truncated rather than
/// integrated, so the spring cannot explode.
const MAX_FRAME_DELTA: f32 = 0.25;

/// Tuning parameters for a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Restoring force per unit displacement.
    pub stiffness: f32,
    /// Opposing force per unit velocity.
    pub damping: f32,
    /// Virtual mass of the animated value.
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        // Slightly under-damped: a soft overshoot that settles in ~0.6s.
        Self {
            stiffness: 180.0,
            damping: 22.0,
            mass: 1.0,
        }
    }
}

/// A scalar animated by a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    /// Creates a spring resting at `value`.
    #[must_use]
    pub fn resting_at(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            at_rest: true,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current target.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// True while the spring still has distance or momentum to spend.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.at_rest
    }

    /// Snaps the value, zeroing velocity and putting the spring at rest.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.velocity = 0.0;
        self.target = value;
        self.at_rest = true;
    }

    /// Redirects the spring toward a new target, preserving the current
    /// value and velocity. This is the preemption primitive: a transition
    /// requested mid-flight continues from wherever the value is now.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        if (self.value - target).abs() >= REST_DISPLACEMENT || self.velocity.abs() >= REST_VELOCITY
        {
            self.at_rest = false;
        }
    }

    /// Advances the simulation by `dt`. Returns true exactly once per
    /// transition, on the step where the spring settles; settling snaps the
    /// value to the target.
    pub fn step(&mut self, dt: Duration, params: SpringParams) -> bool {
        if self.at_rest {
            return false;
        }

        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_DELTA);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let displacement = self.value - self.target;
            let acceleration =
                (-params.stiffness * displacement - params.damping * self.velocity) / params.mass;
            // Semi-implicit Euler: velocity first, then position.
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_VELOCITY
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
            return true;
        }
        false
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::resting_at(0.0)
    }
}
