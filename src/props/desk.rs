// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::prelude::*;

use super::{Finish, PropKit, at, group};
use crate::view::DESK_HEIGHT;

const WIDTH: f32 = 200.0;
const DEPTH: f32 = 90.0;
const TOP_THICKNESS: f32 = 4.0;
const LEG_WIDTH: f32 = 6.0;

/// Writing desk with a drawer cabinet on the left and a panel leg on the right.
pub fn spawn_desk(parent: &mut ChildSpawnerCommands<'_>, kit: &mut PropKit) {
    let top = kit.finish(0x3f3f46, Finish::rough(0.6));
    let body = kit.paint(0xe4e4e7);
    let handle = kit.paint(0x71717a);
    let body_height = DESK_HEIGHT - TOP_THICKNESS;

    parent.spawn(kit.part(
        Cuboid::new(WIDTH, TOP_THICKNESS, DEPTH),
        top,
        at(0.0, DESK_HEIGHT - TOP_THICKNESS / 2.0, 0.0),
    ));

    parent
        .spawn(group(at(-WIDTH / 2.0 + 25.0, body_height / 2.0, 0.0)))
        .with_children(|cabinet| {
            cabinet.spawn(kit.part(
                Cuboid::new(45.0, body_height, DEPTH - 10.0),
                body.clone(),
                Transform::IDENTITY,
            ));
            for y in [18.0, 0.0, -18.0] {
                let front_z = (DEPTH - 10.0) / 2.0 + 0.5;
                cabinet.spawn(kit.part(
                    Cuboid::new(40.0, 15.0, 1.5),
                    body.clone(),
                    at(0.0, y, front_z),
                ));
                cabinet.spawn(kit.part(
                    Cuboid::new(15.0, 1.0, 1.0),
                    handle.clone(),
                    at(0.0, y, front_z + 1.0),
                ));
            }
        });

    parent.spawn(kit.part(
        Cuboid::new(LEG_WIDTH, body_height, DEPTH - 10.0),
        body.clone(),
        at(WIDTH / 2.0 - LEG_WIDTH / 2.0 - 10.0, body_height / 2.0, 0.0),
    ));

    // Modesty panel
    parent.spawn(kit.part(
        Cuboid::new(WIDTH - 60.0, 30.0, 2.0),
        body,
        at(0.0, DESK_HEIGHT - 25.0, -DEPTH / 2.0 + 5.0),
    ));
}

// End of File
