// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Spring-damper model for a light fading between off and on.

pub use office_config::PdConfig;

/// Largest time step integrated at once.  Longer frames are split into substeps.
const MAX_STEP: f32 = 1.0 / 120.0;

/// Below this distance from the target, at rest, the light counts as settled.
const SETTLE_EPSILON: f32 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightState {
    /// 0 for off, 1 for on.
    pub target: f32,
    pub intensity: f32,
    pub velocity: f32,
}

impl LightState {
    /// A light resting fully on or fully off.
    pub fn settled(on: bool) -> Self {
        let level = if on { 1.0 } else { 0.0 };
        Self {
            target: level,
            intensity: level,
            velocity: 0.0,
        }
    }

    pub fn set_target(&mut self, on: bool) {
        self.target = if on { 1.0 } else { 0.0 };
    }

    /// Jumps straight to the target.
    pub fn snap(&mut self) {
        self.intensity = self.target;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.target - self.intensity).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_EPSILON
    }

    /// Advances the spring by `dt` seconds using semi-implicit Euler integration.
    pub fn step(&mut self, gains: PdConfig, dt: f32) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let acceleration = gains.kp * (self.target - self.intensity) - gains.kd * self.velocity;
            self.velocity += acceleration * h;
            self.intensity += self.velocity * h;
            remaining -= h;
        }
        if self.is_settled() {
            self.snap();
        }
    }
}


// End of File
