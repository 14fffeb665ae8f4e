// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::{PropKit, at, euler, group};

const BEIGE: u32 = 0xdedbd2;
const KEYCAP: u32 = 0xeceae4;
const CABLE: u32 = 0x57534e;

/// Key rows from the function row down: `(keys, key width, depth offset)`.
const KEY_ROWS: [(usize, f32, f32); 4] = [(12, 2.6, -5.0), (12, 2.6, -2.0), (11, 2.8, 1.0), (10, 3.0, 4.0)];

/// Beige keyboard and a two-button mouse to its right.
pub fn spawn_keyboard(parent: &mut ChildSpawnerCommands<'_>, kit: &mut PropKit) {
    let beige = kit.paint(BEIGE);
    let keycap = kit.paint(KEYCAP);
    let cable = kit.paint(CABLE);
    let key_bed = kit.paint(0xa8a29e);

    parent
        .spawn(group(Transform::from_rotation(euler(0.1, 0.0, 0.0))))
        .with_children(|keyboard| {
            keyboard.spawn(kit.part(
                Cuboid::new(48.0, 1.6, 20.0),
                beige.clone(),
                at(0.0, 0.8, 0.0),
            ));
            keyboard.spawn(kit.part(
                Cuboid::new(44.0, 0.2, 16.0),
                key_bed,
                at(0.0, 1.7, -1.0),
            ));

            for (count, width, z) in KEY_ROWS {
                let pitch = width + 0.4;
                let key = kit.mesh(Cuboid::new(width, 0.6, 2.4));
                for i in 0..count {
                    let x = (i as f32 - (count - 1) as f32 / 2.0) * pitch;
                    keyboard.spawn((
                        Mesh3d(key.clone()),
                        MeshMaterial3d(keycap.clone()),
                        at(x, 2.0, z),
                    ));
                }
            }
            keyboard.spawn(kit.part(
                Cuboid::new(20.0, 0.6, 2.4),
                keycap.clone(),
                at(0.0, 2.0, 7.0),
            ));

            keyboard.spawn(kit.part(
                Cylinder::new(0.25, 8.0),
                cable.clone(),
                at(0.0, 0.5, -10.0).with_rotation(euler(FRAC_PI_2, 0.0, 0.0)),
            ));
        });

    parent
        .spawn(group(
            at(35.0, 0.0, 5.0).with_rotation(Quat::from_rotation_y(-0.3)),
        ))
        .with_children(|mouse| {
            mouse.spawn(kit.part(Cuboid::new(8.0, 3.0, 12.0), beige, at(0.0, 1.5, 0.0)));
            for x in [-2.0, 2.0] {
                mouse.spawn(kit.part(
                    Cuboid::new(3.5, 0.2, 5.0),
                    keycap.clone(),
                    at(x, 3.1, -2.0),
                ));
            }
            mouse.spawn(kit.part(
                Cylinder::new(0.15, 8.0),
                cable,
                at(0.0, 0.2, -6.0).with_rotation(euler(FRAC_PI_2, 0.0, 0.0)),
            ));
        });
}

// End of File
