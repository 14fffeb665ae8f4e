// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use office_config::RecordPlayerSettings;
use std::f32::consts::FRAC_PI_2;

use super::{Finish, PropKit, at, euler, group, hex};
use crate::indicator::Indicator;
use crate::picking::ClickAction;
use crate::record_player::{PlayState, RecordPlayer, Soundtrack, ToneArm, Turntable, VinylDisc};

const WOOD: u32 = 0x78350f;
const DARK: u32 = 0x111111;

/// Cabinet on legs with a turntable on top.  The returned entity is the turntable, which
/// carries the [`RecordPlayer`] state and toggles it when clicked.
pub fn spawn_record_player(
    parent: &mut ChildSpawnerCommands<'_>,
    kit: &mut PropKit,
    soundtrack: Handle<AudioSource>,
    settings: &RecordPlayerSettings,
) -> Entity {
    let wood = kit.paint(WOOD);
    let cabinet = kit.finish(WOOD, Finish::rough(0.6));
    let storage = kit.paint(0x3f2e24);

    for x in [-20.0, 20.0] {
        for z in [-20.0, 20.0] {
            parent.spawn(kit.part(Cuboid::new(4.0, 35.0, 4.0), wood.clone(), at(x, 17.5, z)));
        }
    }
    parent.spawn(kit.part(Cuboid::new(50.0, 25.0, 50.0), cabinet, at(0.0, 47.5, 0.0)));
    for x in [-12.0, 12.0] {
        parent.spawn(kit.part(
            Rectangle::new(20.0, 20.0),
            storage.clone(),
            at(x, 47.5, 25.1),
        ));
    }

    let player = RecordPlayer::default();
    parent
        .spawn((
            group(at(0.0, 60.0, 0.0)),
            player,
            Turntable {
                disc_angle: 0.0,
                arm_angle: settings.rest_arm_angle,
            },
            ClickAction::ToggleRecordPlayer,
            Name::new("Record player"),
        ))
        .with_children(|unit| {
            let owner = unit.target_entity();
            spawn_deck(unit, kit, owner, settings);
            spawn_status_light(unit, kit, owner, player.state);
            unit.spawn(Soundtrack::bundle(owner, soundtrack, settings));
        })
        .id()
}

fn spawn_deck(
    unit: &mut ChildSpawnerCommands<'_>,
    kit: &mut PropKit,
    player: Entity,
    settings: &RecordPlayerSettings,
) {
    let plinth = kit.paint(0xe5e5e5);
    let platter = kit.paint(0x404040);
    let vinyl = kit.finish(DARK, Finish::rough(0.2));
    let grooves = kit.material(StandardMaterial {
        base_color: hex(0x222222).with_alpha(0.5),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    let label = kit.paint(0xef4444);
    let white = kit.paint(0xffffff);
    let dark = kit.paint(DARK);
    let chrome = kit.material(StandardMaterial {
        base_color: hex(0x94a3b8),
        metallic: 0.8,
        perceptual_roughness: 0.2,
        ..default()
    });
    let weight = kit.paint(0x525252);
    let knob = kit.paint(0xd4d4d8);
    let sideways = euler(0.0, 0.0, FRAC_PI_2);

    unit.spawn(kit.part(Cuboid::new(42.0, 4.0, 36.0), plinth, at(0.0, 2.0, 0.0)));
    unit.spawn(kit.part(Cylinder::new(14.0, 0.5), platter, at(-5.0, 4.2, 0.0)));

    unit.spawn((group(at(-5.0, 4.6, 0.0)), VinylDisc { player }))
        .with_children(|disc| {
            disc.spawn(kit.part(Cylinder::new(13.8, 0.2), vinyl, Transform::IDENTITY));
            disc.spawn(kit.part(
                Annulus::new(5.0, 13.0),
                grooves,
                at(0.0, 0.11, 0.0).with_rotation(euler(-FRAC_PI_2, 0.0, 0.0)),
            ));
            disc.spawn(kit.part(Cylinder::new(4.5, 0.1), label, at(0.0, 0.12, 0.0)));
            disc.spawn(kit.part(Cylinder::new(0.3, 0.2), white, at(0.0, 0.13, 0.0)));
        });

    unit.spawn(group(at(15.0, 4.0, 10.0))).with_children(|mount| {
        mount.spawn(kit.part(
            ConicalFrustum {
                radius_top: 2.5,
                radius_bottom: 3.0,
                height: 2.0,
            },
            dark.clone(),
            at(0.0, 1.0, 0.0),
        ));
        mount
            .spawn((
                group(at(0.0, 2.0, 0.0).with_rotation(Quat::from_rotation_y(settings.rest_arm_angle))),
                ToneArm { player },
            ))
            .with_children(|arm| {
                arm.spawn(kit.part(
                    Cylinder::new(0.4, 18.0),
                    chrome,
                    at(-8.0, 0.0, 0.0).with_rotation(sideways),
                ));
                arm.spawn(kit.part(
                    Cylinder::new(1.2, 2.5),
                    weight,
                    at(2.0, 0.0, 0.0).with_rotation(sideways),
                ));
                arm.spawn(kit.part(
                    Cuboid::new(2.5, 1.2, 1.5),
                    dark.clone(),
                    at(-17.5, 0.0, 0.5).with_rotation(Quat::from_rotation_y(0.2)),
                ));
            });
        mount.spawn(kit.part(Cylinder::new(0.5, 3.0), dark, at(-3.0, 1.5, 2.0)));
    });

    unit.spawn(group(at(15.0, 4.2, -10.0))).with_children(|controls| {
        for z in [0.0, 4.0] {
            controls.spawn(kit.part(Cylinder::new(1.5, 0.5), knob.clone(), at(0.0, 0.0, z)));
        }
    });
}

fn spawn_status_light(
    unit: &mut ChildSpawnerCommands<'_>,
    kit: &mut PropKit,
    player: Entity,
    state: PlayState,
) {
    let on = kit.material(glowing(0x10b981, 2.0));
    let off = kit.material(glowing(0xef4444, 2.0));
    let current = match state {
        PlayState::Playing => on.clone(),
        PlayState::Stopped => off.clone(),
    };
    unit.spawn((
        kit.part(Sphere::new(0.6), current, at(18.0, 4.1, 15.0)),
        Indicator {
            owner: player,
            on,
            off,
        },
    ));
}

/// Material that glows in its own colour.
fn glowing(rgb: u32, strength: f32) -> StandardMaterial {
    let color = hex(rgb);
    let glow = LinearRgba::from(color);
    StandardMaterial {
        base_color: color,
        emissive: LinearRgba::rgb(glow.red * strength, glow.green * strength, glow.blue * strength),
        ..default()
    }
}

// End of File
