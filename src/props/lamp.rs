// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use office_config::LampSettings;
use std::f32::consts::FRAC_PI_2;

use super::{PropKit, at, euler, group, hex, open_cone};
use crate::indicator::Indicator;
use crate::lamp::{Lamp, LampBulb, SpotlightMount};
use crate::picking::ClickAction;

const METAL: u32 = 0xcbd5e1;

/// The desk lamp's spotlight hangs above the lamp and points at the middle of the desk.
const SPOT_POSITION: Vec3 = Vec3::new(75.0, 120.0, 0.0);
const SPOT_AIM: Vec3 = Vec3::new(0.0, 75.0, 10.0);

/// Articulated desk lamp.  The returned entity carries the [`Lamp`] state and toggles it when
/// clicked.
pub fn spawn_lamp(
    parent: &mut ChildSpawnerCommands<'_>,
    kit: &mut PropKit,
    settings: &LampSettings,
) -> Entity {
    let base = kit.paint(0x475569);
    let metal = kit.paint(METAL);
    let switch_on = kit.paint(0x22c55e);
    let switch_off = kit.paint(0x94a3b8);
    let shade = kit.material(StandardMaterial {
        base_color: hex(0x334155),
        cull_mode: None,
        double_sided: true,
        ..default()
    });
    let bulb = kit.material(StandardMaterial {
        base_color: Color::WHITE,
        ..default()
    });

    parent
        .spawn((
            group(Transform::IDENTITY),
            Lamp::new(settings.starts_on),
            ClickAction::ToggleLamp,
            SpotlightMount {
                position: SPOT_POSITION,
                aim: SPOT_AIM,
            },
            Name::new("Lamp"),
        ))
        .with_children(|lamp| {
            let owner = lamp.target_entity();

            lamp.spawn(kit.part(
                ConicalFrustum {
                    radius_top: 9.0,
                    radius_bottom: 10.0,
                    height: 3.0,
                },
                base,
                at(0.0, 1.5, 0.0),
            ));
            let lit = if settings.starts_on { &switch_on } else { &switch_off };
            lamp.spawn((
                kit.part(
                    Cuboid::new(2.0, 1.0, 3.0),
                    lit.clone(),
                    at(0.0, 3.0, 5.0).with_rotation(euler(0.4, 0.0, 0.0)),
                ),
                Indicator {
                    owner,
                    on: switch_on.clone(),
                    off: switch_off.clone(),
                },
            ));

            lamp.spawn(group(at(0.0, 3.0, 0.0))).with_children(|arm| {
                arm.spawn(kit.part(
                    Cylinder::new(2.0, 6.0),
                    metal.clone(),
                    Transform::from_rotation(euler(0.0, 0.0, FRAC_PI_2)),
                ));
                arm.spawn(group(Transform::from_rotation(euler(0.4, 0.0, 0.0))))
                    .with_children(|lower| {
                        for x in [-1.5, 1.5] {
                            lower.spawn(kit.part(
                                Cylinder::new(0.6, 24.0),
                                metal.clone(),
                                at(x, 12.0, 0.0),
                            ));
                        }
                        lower
                            .spawn(group(at(0.0, 24.0, 0.0)))
                            .with_children(|elbow| {
                                spawn_upper_arm(elbow, kit, owner, &metal, &shade, bulb);
                            });
                    });
            });
        })
        .id()
}

fn spawn_upper_arm(
    elbow: &mut ChildSpawnerCommands<'_>,
    kit: &mut PropKit,
    lamp: Entity,
    metal: &Handle<StandardMaterial>,
    shade: &Handle<StandardMaterial>,
    bulb: Handle<StandardMaterial>,
) {
    elbow.spawn(kit.part(
        Cylinder::new(2.0, 6.0),
        metal.clone(),
        Transform::from_rotation(euler(0.0, 0.0, FRAC_PI_2)),
    ));
    elbow
        .spawn(group(Transform::from_rotation(euler(1.2, 0.0, 0.0))))
        .with_children(|upper| {
            upper.spawn(kit.part(Cylinder::new(0.8, 20.0), metal.clone(), at(0.0, 10.0, 0.0)));
            upper
                .spawn(group(
                    at(0.0, 20.0, 0.0).with_rotation(euler(-1.6, 0.0, 0.0)),
                ))
                .with_children(|joint| {
                    joint.spawn(kit.part(
                        Cylinder::new(1.5, 4.0),
                        metal.clone(),
                        Transform::from_rotation(euler(0.0, 0.0, FRAC_PI_2)),
                    ));
                    joint
                        .spawn(group(at(0.0, 4.0, 0.0)))
                        .with_children(|head| {
                            head.spawn(kit.part(
                                open_cone(4.0, 8.0, 10.0, 32),
                                shade.clone(),
                                Transform::IDENTITY,
                            ));
                            head.spawn(kit.part(
                                Sphere::new(4.0),
                                shade.clone(),
                                at(0.0, 5.0, 0.0).with_scale(Vec3::new(1.0, 0.5, 1.0)),
                            ));
                            head.spawn((
                                kit.part(Sphere::new(3.0), bulb, Transform::IDENTITY),
                                LampBulb { lamp },
                                Name::new("Bulb"),
                            ));
                        });
                });
        });
}

// End of File
