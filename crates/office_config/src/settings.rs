// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use serde::{Deserialize, Serialize};

/// Camera rig and orbit controller settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Fraction of the remaining distance the rig covers each frame while locked.
    pub lerp_fraction: f32,
    /// Vertical field of view, in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Polar angle limits measured from straight up, in radians.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    /// Limits on the distance between the camera and its look-at point.
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    /// Inertia applied to user input while in free view.
    pub damping_factor: f32,
    /// Pointer travel, in logical pixels, beyond which a press-release no longer counts as a
    /// click.
    pub click_drag_tolerance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            lerp_fraction: 0.05,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            min_polar_angle: 0.0,
            max_polar_angle: std::f32::consts::PI / 1.9,
            min_distance: 20.0,
            max_distance: 300.0,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            damping_factor: 0.05,
            click_drag_tolerance: 4.0,
        }
    }
}

/// Proportional-derivative gains for a spring-damper animation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PdConfig {
    pub kp: f32,
    pub kd: f32,
}

impl Default for PdConfig {
    /// Critically damped for a unit mass: `kd = 2 * sqrt(kp)`.
    fn default() -> Self {
        Self { kp: 100.0, kd: 20.0 }
    }
}

/// How the lamp bulb's glow follows the switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GlowResponse {
    /// The glow jumps straight to its new level.
    #[default]
    Snap,
    /// The glow is driven toward its new level by a spring-damper.
    Damped(PdConfig),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LampSettings {
    pub starts_on: bool,
    /// Emissive intensity of the bulb when fully on.
    pub bulb_intensity: f32,
    pub glow: GlowResponse,
    /// Spotlight luminous power, in lumens.
    pub spot_intensity: f32,
    pub spot_range: f32,
    /// Outer cone half-angle, in radians.
    pub spot_angle: f32,
    /// Fraction of the cone that fades out toward the edge.
    pub spot_penumbra: f32,
}

impl Default for LampSettings {
    fn default() -> Self {
        Self {
            starts_on: true,
            bulb_intensity: 4.0,
            glow: GlowResponse::Snap,
            spot_intensity: 1.2e8,
            spot_range: 120.0,
            spot_angle: 0.7,
            spot_penumbra: 0.4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordPlayerSettings {
    /// Disc angular speed while playing, in radians per second.
    pub spin_rate: f32,
    /// Tone-arm pivot angle over the record.
    pub playing_arm_angle: f32,
    /// Tone-arm pivot angle on its rest.
    pub rest_arm_angle: f32,
    /// Rate at which the tone arm closes on its target angle.
    pub arm_speed: f32,
    pub volume: f32,
}

impl Default for RecordPlayerSettings {
    fn default() -> Self {
        Self {
            spin_rate: 2.0,
            playing_arm_angle: -0.55,
            rest_arm_angle: 0.0,
            arm_speed: 3.0,
            volume: 0.4,
        }
    }
}

/// Asset paths, relative to the asset root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub screen_texture: String,
    pub soundtrack: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            screen_texture: "textures/monitor_screen.png".into(),
            soundtrack: "audio/lofi_loop.wav".into(),
        }
    }
}

// End of File
