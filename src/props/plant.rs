// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::{Finish, PropKit, at, euler, group, hex};

/// `(height on the stem, turn about the stem, size)` of each leaf.
const LEAVES: [(f32, f32, f32); 5] = [
    (10.0, 0.0, 1.0),
    (20.0, 2.0, 1.1),
    (30.0, 4.0, 0.9),
    (38.0, 1.0, 0.8),
    (45.0, 3.0, 0.7),
];

/// Potted plant with broad, slightly glossy leaves.
pub fn spawn_plant(parent: &mut ChildSpawnerCommands<'_>, kit: &mut PropKit) {
    let pot = kit.finish(0xfafafa, Finish::rough(0.2));
    let soil = kit.paint(0x1a1a1a);
    let wood = kit.paint(0x4d3528);
    let sheen = LinearRgba::from(hex(0x064e3b));
    let leaf = kit.material(StandardMaterial {
        base_color: hex(0x1e3a8a),
        emissive: LinearRgba::rgb(sheen.red * 0.2, sheen.green * 0.2, sheen.blue * 0.2),
        perceptual_roughness: 0.3,
        ..default()
    });

    parent.spawn(kit.part(
        ConicalFrustum {
            radius_top: 12.0,
            radius_bottom: 10.0,
            height: 24.0,
        },
        pot,
        at(0.0, 12.0, 0.0),
    ));
    parent.spawn(kit.part(
        Circle::new(11.0),
        soil,
        at(0.0, 22.0, 0.0).with_rotation(euler(-FRAC_PI_2, 0.0, 0.0)),
    ));

    parent
        .spawn(group(at(0.0, 22.0, 0.0)))
        .with_children(|stem| {
            stem.spawn(kit.part(
                ConicalFrustum {
                    radius_top: 1.5,
                    radius_bottom: 2.0,
                    height: 50.0,
                },
                wood.clone(),
                at(0.0, 25.0, 0.0),
            ));
            for (y, turn, size) in LEAVES {
                stem.spawn(group(at(0.0, y, 0.0).with_rotation(euler(0.0, turn, 0.5))))
                    .with_children(|branch| {
                        branch.spawn(kit.part(
                            Sphere::new(8.0 * size),
                            leaf.clone(),
                            at(8.0, 0.0, 0.0).with_rotation(euler(0.0, 0.0, -0.2)),
                        ));
                        branch.spawn(kit.part(
                            ConicalFrustum {
                                radius_top: 0.3,
                                radius_bottom: 0.5,
                                height: 8.0,
                            },
                            wood.clone(),
                            at(4.0, 0.0, 0.0).with_rotation(euler(0.0, 0.0, FRAC_PI_2)),
                        ));
                    });
            }
        });
}

// End of File
