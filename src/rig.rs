// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The camera rig: while locked, pulls the camera and its orbit target toward the current view.

use bevy::{light::ShadowFilteringMethod, prelude::*};
use office_config::OfficeConfig;

use crate::orbit::{OrbitController, apply_camera_mode, gather_orbit_input, sync_orbit_camera};
use crate::view::{CameraMode, ViewState};

/// Clear colour and fog colour of the room.
pub const BACKGROUND: Color = Color::srgb_u8(0xd4, 0xd4, 0xd8);

/// Marks the one camera the rig drives.
#[derive(Component)]
pub struct OfficeCamera;

/// Camera systems run in this order every frame.
#[derive(SystemSet, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraSystems {
    Input,
    Rig,
    Sync,
}

pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (CameraSystems::Input, CameraSystems::Rig, CameraSystems::Sync).chain(),
        )
        .add_systems(Startup, spawn_camera)
        .add_systems(
            Update,
            (
                apply_camera_mode
                    .run_if(resource_changed::<CameraMode>)
                    .in_set(CameraSystems::Input),
                gather_orbit_input
                    .after(apply_camera_mode)
                    .in_set(CameraSystems::Input),
                drive_camera_rig.in_set(CameraSystems::Rig),
                sync_orbit_camera.in_set(CameraSystems::Sync),
            ),
        );
    }
}

/// One rig step: moves `current` the fraction `f` of the way to `target`.
///
/// The result never overshoots for `f` in `(0, 1]`, so repeated steps approach the target
/// asymptotically.
pub fn approach(current: Vec3, target: Vec3, f: f32) -> Vec3 {
    current.lerp(target, f)
}

fn drive_camera_rig(
    mode: Res<CameraMode>,
    views: Res<ViewState>,
    config: Res<OfficeConfig>,
    mut cameras: Query<(&mut Transform, &mut OrbitController), With<OfficeCamera>>,
) {
    if mode.is_free() {
        return;
    }
    let view = views.current();
    let f = config.camera.lerp_fraction;
    for (mut transform, mut controller) in &mut cameras {
        transform.translation = approach(transform.translation, view.position, f);
        controller.target = approach(controller.target, view.look_at, f);
    }
}

fn spawn_camera(mut commands: Commands, views: Res<ViewState>, config: Res<OfficeConfig>) {
    let view = views.current();
    let settings = &config.camera;
    debug!("Spawning office camera at {}", view.name);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Transform::from_translation(view.position).looking_at(view.look_at, Vec3::Y),
        // Soft edges on the shadows that ground the furniture on the carpet.
        ShadowFilteringMethod::Gaussian,
        DistanceFog {
            color: BACKGROUND,
            falloff: FogFalloff::Linear {
                start: 50.0,
                end: 500.0,
            },
            ..default()
        },
        OrbitController::new(view.look_at),
        OfficeCamera,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{DESK, ViewPlugin};
    use bevy::ecs::system::RunSystemOnce;

    fn rig_app(mode: CameraMode) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(ViewPlugin)
            .insert_resource(OfficeConfig::default())
            .insert_resource(mode)
            .add_systems(Update, (drive_camera_rig, sync_orbit_camera).chain());
        app
    }

    fn spawn_rig_camera(app: &mut App, eye: Vec3, target: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(eye).looking_at(target, Vec3::Y),
                OrbitController::new(target),
                OfficeCamera,
            ))
            .id()
    }

    #[test]
    fn camera_starts_at_the_overview_with_soft_shadows() {
        let mut world = World::new();
        world.init_resource::<ViewState>();
        world.insert_resource(OfficeConfig::default());
        world.run_system_once(spawn_camera).unwrap();

        let (transform, filtering, controller) = world
            .query_filtered::<
                (&Transform, &ShadowFilteringMethod, &OrbitController),
                With<OfficeCamera>,
            >()
            .single(&world)
            .unwrap();
        assert_eq!(transform.translation, Vec3::new(0.0, 110.0, 180.0));
        assert!(matches!(filtering, ShadowFilteringMethod::Gaussian));
        assert_eq!(controller.target, Vec3::new(0.0, 40.0, 0.0));
    }

    #[test]
    fn approach_strictly_shrinks_the_gap() {
        let target = Vec3::new(0.0, 130.0, 90.0);
        let mut camera = Vec3::new(0.0, 110.0, 180.0);
        let mut gap = camera.distance(target);
        for _ in 0..150 {
            camera = approach(camera, target, 0.05);
            let next = camera.distance(target);
            assert!(next >= 0.0);
            assert!(next < gap || next == 0.0);
            gap = next;
        }
        assert!(gap < 0.1);
    }

    #[test]
    fn approach_never_overshoots() {
        let target = Vec3::new(10.0, 0.0, 0.0);
        let mut camera = Vec3::ZERO;
        for _ in 0..100 {
            camera = approach(camera, target, 0.05);
            assert!(camera.x <= target.x);
        }
    }

    #[test]
    fn locked_rig_pulls_camera_toward_view() {
        let mut app = rig_app(CameraMode::Locked);
        let eye = Vec3::new(0.0, 110.0, 180.0);
        let look = Vec3::new(0.0, 40.0, 0.0);
        let camera = spawn_rig_camera(&mut app, eye, look);
        app.world_mut()
            .resource_mut::<ViewState>()
            .focus(&mut CameraMode::Locked, DESK.view());

        let mut gap = eye.distance(DESK.position);
        for _ in 0..30 {
            app.update();
            let position = app.world().get::<Transform>(camera).unwrap().translation;
            let next = position.distance(DESK.position);
            assert!(next < gap);
            gap = next;
        }
        let controller = app.world().get::<OrbitController>(camera).unwrap();
        assert!(controller.target.distance(DESK.look_at) < look.distance(DESK.look_at));
    }

    #[test]
    fn free_rig_leaves_camera_alone() {
        let mut app = rig_app(CameraMode::Free);
        let eye = Vec3::new(30.0, 90.0, 120.0);
        let look = Vec3::new(0.0, 40.0, 0.0);
        let camera = spawn_rig_camera(&mut app, eye, look);
        app.world_mut().get_mut::<OrbitController>(camera).unwrap().enable_damping = true;

        app.update();
        let settled = *app.world().get::<Transform>(camera).unwrap();
        for _ in 0..50 {
            app.update();
            let transform = app.world().get::<Transform>(camera).unwrap();
            assert!(transform.translation.distance(settled.translation) < 1e-3);
            assert_eq!(
                app.world().get::<OrbitController>(camera).unwrap().target,
                look
            );
        }
    }
}

// End of File
