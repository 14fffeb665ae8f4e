// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Mouse-driven orbit camera.
//!
//! The camera circles a look-at target on a sphere.  Primary drag rotates, the wheel zooms and,
//! when enabled, secondary drag pans the target.  Input is accumulated into deltas which
//! [`OrbitController::sync`] folds into the camera position once per frame, after the camera rig
//! has moved things, so the rig and the user share a single code path for clamping.

use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    picking::hover::HoverMap,
    prelude::*,
    window::PrimaryWindow,
};
use office_config::{CameraSettings, OfficeConfig};
use std::f32::consts::{PI, TAU};

use crate::view::CameraMode;

/// Keeps the polar angle away from the poles, where the look-at basis degenerates.
const POLE_EPSILON: f32 = 1e-4;

/// Scale applied per wheel notch at a zoom speed of one.
const ZOOM_STEP: f32 = 0.95;

/// Pixel-unit wheel deltas (trackpads, browsers) per notch.
const PIXELS_PER_NOTCH: f32 = 100.0;

#[derive(Component, Clone, Debug, PartialEq)]
pub struct OrbitController {
    /// Point the camera looks at and orbits around.
    pub target: Vec3,
    pub enable_pan: bool,
    /// Carries input over several frames instead of applying it at once.
    pub enable_damping: bool,
    theta_delta: f32,
    phi_delta: f32,
    scale: f32,
    pan_offset: Vec3,
}

impl OrbitController {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enable_pan: false,
            enable_damping: false,
            theta_delta: 0.0,
            phi_delta: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    /// Orbits around the vertical axis.
    pub fn rotate_left(&mut self, angle: f32) {
        self.theta_delta -= angle;
    }

    /// Tilts toward or away from the vertical axis.
    pub fn rotate_up(&mut self, angle: f32) {
        self.phi_delta -= angle;
    }

    /// Moves toward the target by `notches` wheel steps; negative values move away.
    pub fn zoom(&mut self, notches: f32, zoom_speed: f32) {
        self.scale *= ZOOM_STEP.powf(zoom_speed * notches);
    }

    /// Queues a target translation.  Ignored unless panning is enabled.
    pub fn pan(&mut self, offset: Vec3) {
        if self.enable_pan {
            self.pan_offset += offset;
        }
    }

    /// True when there is no pending input left to apply.
    pub fn is_idle(&self) -> bool {
        self.theta_delta == 0.0
            && self.phi_delta == 0.0
            && self.scale == 1.0
            && self.pan_offset == Vec3::ZERO
    }

    /// Applies pending input and the orbit limits to a camera at `eye`, returning the new eye
    /// position.  The camera must then be pointed at [`OrbitController::target`].
    pub fn sync(&mut self, eye: Vec3, settings: &CameraSettings) -> Vec3 {
        let offset = eye - self.target;
        let mut radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        let step = if self.enable_damping {
            settings.damping_factor
        } else {
            1.0
        };

        theta += self.theta_delta * step;
        phi += self.phi_delta * step;
        phi = phi
            .clamp(settings.min_polar_angle, settings.max_polar_angle)
            .clamp(POLE_EPSILON, PI - POLE_EPSILON);

        radius = (radius * self.scale).clamp(settings.min_distance, settings.max_distance);
        self.target += self.pan_offset * step;

        if self.enable_damping {
            self.theta_delta *= 1.0 - settings.damping_factor;
            self.phi_delta *= 1.0 - settings.damping_factor;
            self.pan_offset *= 1.0 - settings.damping_factor;
        } else {
            self.theta_delta = 0.0;
            self.phi_delta = 0.0;
            self.pan_offset = Vec3::ZERO;
        }
        self.scale = 1.0;

        let offset = Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );
        self.target + offset
    }
}

/// Whether any pointer currently rests on an overlay node.  The overlay sits above the canvas
/// and keeps drags and wheel input that start on it away from the camera.
pub fn pointer_over_overlay(hovered: &HoverMap, nodes: &Query<(), With<Node>>) -> bool {
    hovered
        .values()
        .flat_map(|hits| hits.keys())
        .any(|entity| nodes.contains(*entity))
}

/// Enables panning and damping only while the camera roams freely.
pub fn apply_camera_mode(mode: Res<CameraMode>, mut controllers: Query<&mut OrbitController>) {
    for mut controller in &mut controllers {
        controller.enable_pan = mode.is_free();
        controller.enable_damping = mode.is_free();
        if !controller.enable_pan {
            controller.pan_offset = Vec3::ZERO;
        }
    }
}

pub fn gather_orbit_input(
    config: Res<OfficeConfig>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: MessageReader<MouseMotion>,
    mut wheel: MessageReader<MouseWheel>,
    hovered: Option<Res<HoverMap>>,
    nodes: Query<(), With<Node>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cameras: Query<(&mut OrbitController, &Transform, &Projection)>,
) {
    let delta: Vec2 = motion.read().map(|motion| motion.delta).sum();
    let notches: f32 = wheel
        .read()
        .map(|wheel| match wheel.unit {
            MouseScrollUnit::Line => wheel.y,
            MouseScrollUnit::Pixel => wheel.y / PIXELS_PER_NOTCH,
        })
        .sum();

    if hovered.is_some_and(|hovered| pointer_over_overlay(&hovered, &nodes)) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let height = window.height().max(1.0);
    let settings = &config.camera;

    for (mut controller, transform, projection) in &mut cameras {
        if buttons.pressed(MouseButton::Left) && delta != Vec2::ZERO {
            controller.rotate_left(TAU * delta.x / height * settings.rotate_speed);
            controller.rotate_up(TAU * delta.y / height * settings.rotate_speed);
        }
        if buttons.pressed(MouseButton::Right) && delta != Vec2::ZERO && controller.enable_pan {
            let fov = match projection {
                Projection::Perspective(perspective) => perspective.fov,
                _ => settings.fov_degrees.to_radians(),
            };
            // World units covered by one pixel at the target's depth.
            let span = (transform.translation - controller.target).length() * (fov / 2.0).tan();
            let per_pixel = 2.0 * span / height * settings.pan_speed;
            let offset = (transform.up() * delta.y - transform.right() * delta.x) * per_pixel;
            controller.pan(offset);
        }
        if notches != 0.0 {
            controller.zoom(notches, settings.zoom_speed);
        }
    }
}

/// Folds pending input into each orbit camera and points it at its target.
pub fn sync_orbit_camera(
    config: Res<OfficeConfig>,
    mut cameras: Query<(&mut OrbitController, &mut Transform)>,
) {
    for (mut controller, mut transform) in &mut cameras {
        let eye = controller.sync(transform.translation, &config.camera);
        transform.translation = eye;
        transform.look_at(controller.target, Vec3::Y);
    }
}


// End of File
