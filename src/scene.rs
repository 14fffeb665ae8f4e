// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Assembles the office: furniture, clickable groups, the floor trigger and the lights.

use bevy::prelude::*;
use office_config::OfficeConfig;
use std::f32::consts::FRAC_PI_2;

use crate::AppState;
use crate::assets::OfficeAssets;
use crate::picking::{ClickAction, Scenery};
use crate::props::{self, Finish, PropKit, at, euler, group, hex};
use crate::rig::BACKGROUND;
use crate::view::{
    ACCESSORIES, CHAIR, COMPUTER, DESK, DESK_HEIGHT, FocusTarget, KEYBOARD, LAMP, PLANT,
    RECORD_PLAYER,
};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 400.0,
                ..default()
            })
            .add_systems(OnEnter(AppState::Office), (spawn_office, spawn_lights));
    }
}

/// A group that moves the camera to `target` when anything inside it is clicked.
fn focus_group(target: FocusTarget, transform: Transform) -> impl Bundle {
    (
        group(transform),
        ClickAction::Focus(target),
        Name::new(target.name),
    )
}

fn placed(x: f32, y: f32, z: f32, turn: f32) -> Transform {
    at(x, y, z).with_rotation(Quat::from_rotation_y(turn))
}

pub fn spawn_office(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    assets: Res<OfficeAssets>,
    config: Res<OfficeConfig>,
) {
    let mut kit = PropKit::new(&mut meshes, &mut materials);
    let carpet = kit.finish(0x334155, Finish::rough(0.9));
    let floor = kit.material(StandardMaterial {
        base_color: hex(0xffffff),
        unlit: true,
        ..default()
    });

    commands
        .spawn((Scenery, group(Transform::IDENTITY), Name::new("Office")))
        .with_children(|office| {
            office.spawn((
                kit.part(
                    Cuboid::new(360.0, 0.5, 200.0),
                    carpet,
                    at(-20.0, 0.25, 50.0),
                ),
                Name::new("Carpet"),
            ));

            office
                .spawn(focus_group(DESK, Transform::IDENTITY))
                .with_children(|desk| props::spawn_desk(desk, &mut kit));

            office
                .spawn(focus_group(
                    CHAIR,
                    placed(45.0, 0.0, 75.0, -0.4).with_scale(Vec3::splat(1.3)),
                ))
                .with_children(|chair| props::spawn_chair(chair, &mut kit));

            office
                .spawn((
                    group(at(0.0, DESK_HEIGHT, 0.0)),
                    Name::new("Desktop"),
                ))
                .with_children(|desktop| {
                    desktop
                        .spawn(focus_group(ACCESSORIES, placed(-75.0, 0.0, -5.0, 0.1)))
                        .with_children(|clutter| props::spawn_accessories(clutter, &mut kit));
                    desktop
                        .spawn(focus_group(COMPUTER, at(0.0, 0.0, -15.0)))
                        .with_children(|computer| {
                            props::spawn_monitor(computer, &mut kit, assets.screen.clone());
                        });
                    desktop
                        .spawn(focus_group(KEYBOARD, at(0.0, 0.0, 28.0)))
                        .with_children(|keyboard| props::spawn_keyboard(keyboard, &mut kit));
                    desktop
                        .spawn(focus_group(LAMP, placed(75.0, 0.0, -5.0, -0.4)))
                        .with_children(|lamp| {
                            props::spawn_lamp(lamp, &mut kit, &config.lamp);
                        });
                });

            office
                .spawn(focus_group(RECORD_PLAYER, placed(-140.0, 0.0, 20.0, 0.4)))
                .with_children(|table| {
                    props::spawn_record_player(
                        table,
                        &mut kit,
                        assets.soundtrack.clone(),
                        &config.record_player,
                    );
                });

            office
                .spawn(focus_group(
                    PLANT,
                    placed(130.0, 0.0, -50.0, -0.2).with_scale(Vec3::splat(1.4)),
                ))
                .with_children(|plant| props::spawn_plant(plant, &mut kit));

            // Catches clicks that miss every prop.  Hidden meshes are still ray cast.
            office.spawn((
                kit.part(
                    Rectangle::new(1000.0, 1000.0),
                    floor,
                    at(0.0, -0.1, 0.0).with_rotation(euler(-FRAC_PI_2, 0.0, 0.0)),
                ),
                Visibility::Hidden,
                ClickAction::ResetView,
                Name::new("Floor trigger"),
            ));
        });

    info!("Office scene spawned");
}

fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            color: hex(0xffffb3),
            illuminance: 4000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(80.0, 120.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Key light"),
    ));
    commands.spawn((
        DirectionalLight {
            color: hex(0xeeeeff),
            illuminance: 1500.0,
            ..default()
        },
        Transform::from_xyz(-100.0, 60.0, -60.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Fill light"),
    ));
}


// End of File
