// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::{Finish, PropKit, at, euler, group};

const LEGS: usize = 5;

/// Swivel office chair on a five-star base.
pub fn spawn_chair(parent: &mut ChildSpawnerCommands<'_>, kit: &mut PropKit) {
    let leather = kit.finish(0x854d0e, Finish::rough(0.6));
    let metal = kit.paint(0x333333);
    let chrome = kit.finish(
        0x333333,
        Finish {
            roughness: 0.3,
            metallic: 0.6,
        },
    );
    let plastic = kit.paint(0x111111);

    parent.spawn(kit.part(Cylinder::new(4.0, 4.0), plastic.clone(), at(0.0, 6.0, 0.0)));
    for leg in 0..LEGS {
        let angle = leg as f32 * TAU / LEGS as f32;
        parent
            .spawn(group(Transform::from_rotation(Quat::from_rotation_y(angle))))
            .with_children(|leg| {
                leg.spawn(kit.part(
                    Cuboid::new(3.0, 2.0, 22.0),
                    plastic.clone(),
                    at(0.0, 5.0, 12.0).with_rotation(euler(0.2, 0.0, 0.0)),
                ));
                leg.spawn(kit.part(
                    Cylinder::new(2.0, 1.5),
                    metal.clone(),
                    at(0.0, 2.0, 22.0).with_rotation(euler(FRAC_PI_2, 0.0, 0.0)),
                ));
            });
    }

    // Gas lift and seat mechanism
    parent.spawn(kit.part(Cylinder::new(2.5, 20.0), chrome, at(0.0, 16.0, 0.0)));
    parent.spawn(kit.part(
        Cuboid::new(15.0, 3.0, 15.0),
        metal,
        at(0.0, 26.5, 0.0),
    ));

    parent.spawn(kit.part(
        Cuboid::new(32.0, 6.0, 30.0),
        leather.clone(),
        at(0.0, 31.0, 0.0),
    ));
    parent.spawn(kit.part(
        Cuboid::new(8.0, 20.0, 2.0),
        plastic.clone(),
        at(0.0, 42.0, -14.0).with_rotation(euler(0.2, 0.0, 0.0)),
    ));
    parent.spawn(kit.part(
        Cuboid::new(28.0, 22.0, 5.0),
        leather,
        at(0.0, 48.0, -16.0).with_rotation(euler(0.1, 0.0, 0.0)),
    ));

    for x in [-18.0, 18.0] {
        parent.spawn(kit.part(
            Cuboid::new(2.0, 8.0, 16.0),
            plastic.clone(),
            at(x, 37.0, 0.0),
        ));
    }
}

// End of File
