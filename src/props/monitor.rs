// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::{Finish, PropKit, at, euler, group};

const CASE: Vec3 = Vec3::new(46.0, 10.0, 42.0);
const CRT: Vec3 = Vec3::new(40.0, 34.0, 38.0);

/// Brightness of the screen image.
const SCREEN_GLOW: f32 = 1.5;

/// Desktop computer case with a 4:3 CRT stacked on top.  `screen` is shown on the tube.
pub fn spawn_monitor(
    parent: &mut ChildSpawnerCommands<'_>,
    kit: &mut PropKit,
    screen: Handle<Image>,
) {
    let plastic = kit.paint(0xe5e5e5);
    let case_plastic = kit.finish(0xe5e5e5, Finish::rough(0.6));
    let slot = kit.paint(0x333333);
    let button = kit.paint(0x404040);
    let badge = kit.paint(0xa8a29e);
    let bezel = kit.paint(0xd4d4d8);
    let screen = kit.material(StandardMaterial {
        base_color: Color::WHITE,
        base_color_texture: Some(screen.clone()),
        emissive: LinearRgba::rgb(SCREEN_GLOW, SCREEN_GLOW, SCREEN_GLOW),
        emissive_texture: Some(screen),
        ..default()
    });

    parent
        .spawn(group(at(0.0, CASE.y / 2.0, 0.0)))
        .with_children(|case| {
            case.spawn(kit.part(
                Cuboid::from_size(CASE),
                case_plastic,
                Transform::IDENTITY,
            ));

            // Drive slot, power button and badge on the front.
            let front = CASE.z / 2.0 + 0.2;
            case.spawn(kit.part(
                Cuboid::new(14.0, 0.6, 0.2),
                slot,
                at(12.0, 1.5, front),
            ));
            case.spawn(kit.part(
                Cylinder::new(1.5, 0.6),
                button,
                at(-16.0, 0.0, front).with_rotation(euler(FRAC_PI_2, 0.0, 0.0)),
            ));
            case.spawn(kit.part(
                Rectangle::new(10.0, 0.3),
                badge,
                at(-6.0, -1.5, front),
            ));
        });

    parent
        .spawn(group(at(0.0, CASE.y, 0.0)))
        .with_children(|crt| {
            crt.spawn(kit.part(
                ConicalFrustum {
                    radius_top: 14.0,
                    radius_bottom: 16.0,
                    height: 3.0,
                },
                plastic.clone(),
                at(0.0, 1.5, 0.0),
            ));

            crt.spawn(group(at(0.0, 1.5 + CRT.y / 2.0, 0.0)))
                .with_children(|tube| {
                    tube.spawn(kit.part(Cuboid::from_size(CRT), plastic.clone(), Transform::IDENTITY));
                    tube.spawn(kit.part(
                        Cuboid::new(CRT.x - 8.0, CRT.y - 12.0, 12.0),
                        plastic,
                        at(0.0, 0.0, -CRT.z / 2.0 - 6.0),
                    ));

                    let face = CRT.z / 2.0 + 0.1;
                    tube.spawn(kit.part(
                        Cuboid::new(CRT.x - 4.0, CRT.y - 4.0, 1.0),
                        bezel,
                        at(0.0, 0.0, face),
                    ));
                    tube.spawn(kit.part(
                        Rectangle::new(CRT.x - 8.0, CRT.y - 8.0),
                        screen,
                        at(0.0, 0.0, face + 0.6),
                    ));
                });
        });
}

// End of File
