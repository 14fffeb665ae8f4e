// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::{Finish, PropKit, at, euler, group};

const TRAY: u32 = 0xa8a29e;
const PAPER: u32 = 0xffffff;

/// Binder spine colours, left to right.
const BINDERS: [u32; 3] = [0x78350f, 0x0f172a, 0x7f1d1d];

/// Stacked letter trays, a row of binders and a mug of coffee.
pub fn spawn_accessories(parent: &mut ChildSpawnerCommands<'_>, kit: &mut PropKit) {
    let tray = kit.paint(TRAY);
    let paper = kit.paint(PAPER);

    parent
        .spawn(group(at(-10.0, 0.0, 0.0)))
        .with_children(|trays| {
            for y in [0.0, 6.0] {
                spawn_tray(trays, kit, tray.clone(), y);
            }
            trays.spawn(kit.part(
                Cuboid::new(22.0, 0.8, 30.0),
                paper.clone(),
                at(0.0, 0.5, 0.0).with_rotation(Quat::from_rotation_y(0.05)),
            ));
            trays.spawn(kit.part(
                Cuboid::new(22.0, 1.2, 30.0),
                paper.clone(),
                at(0.0, 6.5, 0.0).with_rotation(Quat::from_rotation_y(-0.05)),
            ));
        });

    parent
        .spawn(group(
            at(25.0, 0.0, -10.0).with_rotation(Quat::from_rotation_y(-0.2)),
        ))
        .with_children(|shelf| {
            for (i, rgb) in BINDERS.into_iter().enumerate() {
                let cover = kit.finish(rgb, Finish::rough(0.7));
                shelf
                    .spawn(group(at(i as f32 * 7.0, 15.0, 0.0)))
                    .with_children(|binder| {
                        binder.spawn(kit.part(
                            Cuboid::new(6.0, 30.0, 24.0),
                            cover,
                            Transform::IDENTITY,
                        ));
                        binder.spawn(kit.part(
                            Cuboid::new(4.0, 8.0, 0.1),
                            paper.clone(),
                            at(0.0, 5.0, 12.1),
                        ));
                    });
            }
        });

    let ceramic = kit.paint(0xf5f5f5);
    let coffee = kit.paint(0x3f2e24);
    parent
        .spawn(group(at(35.0, 0.0, 20.0)))
        .with_children(|mug| {
            mug.spawn(kit.part(Cylinder::new(3.5, 8.0), ceramic.clone(), at(0.0, 4.0, 0.0)));
            mug.spawn(kit.part(
                Circle::new(3.0),
                coffee,
                at(0.0, 7.5, 0.0).with_rotation(euler(-FRAC_PI_2, 0.0, 0.0)),
            ));
            // The inner half of the ring is buried in the mug wall.
            mug.spawn(kit.part(
                Torus::new(1.5, 2.5),
                ceramic,
                at(3.5, 4.0, 0.0).with_rotation(euler(FRAC_PI_2, 0.0, 0.0)),
            ));
        });
}

fn spawn_tray(
    parent: &mut ChildSpawnerCommands<'_>,
    kit: &mut PropKit,
    material: Handle<StandardMaterial>,
    y: f32,
) {
    parent.spawn(group(at(0.0, y, 0.0))).with_children(|tray| {
        tray.spawn(kit.part(
            Cuboid::new(26.0, 0.5, 34.0),
            material.clone(),
            at(0.0, 0.25, 0.0),
        ));
        for x in [-12.5, 12.5] {
            tray.spawn(kit.part(
                Cuboid::new(1.0, 5.0, 34.0),
                material.clone(),
                at(x, 2.5, 0.0),
            ));
        }
        tray.spawn(kit.part(
            Cuboid::new(26.0, 5.0, 1.0),
            material,
            at(0.0, 2.5, -16.5),
        ));
    });
}

// End of File
