// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Small lights and switches whose colour follows an on/off component elsewhere in the scene.

use bevy::prelude::*;

/// Something with a binary on/off state that an [`Indicator`] can mirror.
pub trait Switch: Component {
    fn is_on(&self) -> bool;
}

/// Swaps a mesh between two materials as the `owner`'s [`Switch`] flips.
#[derive(Component, Clone, Debug)]
pub struct Indicator {
    pub owner: Entity,
    pub on: Handle<StandardMaterial>,
    pub off: Handle<StandardMaterial>,
}

impl Indicator {
    pub fn material(&self, on: bool) -> &Handle<StandardMaterial> {
        if on { &self.on } else { &self.off }
    }
}

pub fn sync_indicators<T: Switch>(
    owners: Query<&T, Changed<T>>,
    mut indicators: Query<(&Indicator, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    for (indicator, mut material) in &mut indicators {
        let Ok(owner) = owners.get(indicator.owner) else {
            continue;
        };
        let wanted = indicator.material(owner.is_on());
        if material.0 != *wanted {
            material.0 = wanted.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Component)]
    struct Breaker(bool);

    impl Switch for Breaker {
        fn is_on(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn indicator_follows_its_owner() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<StandardMaterial>>()
            .add_systems(Update, sync_indicators::<Breaker>);

        let (on, off) = {
            let mut materials = app.world_mut().resource_mut::<Assets<StandardMaterial>>();
            (
                materials.add(StandardMaterial::default()),
                materials.add(StandardMaterial::default()),
            )
        };
        let breaker = app.world_mut().spawn(Breaker(false)).id();
        let light = app
            .world_mut()
            .spawn((
                Indicator {
                    owner: breaker,
                    on: on.clone(),
                    off: off.clone(),
                },
                MeshMaterial3d(on.clone()),
            ))
            .id();

        app.update();
        let material = app.world().get::<MeshMaterial3d<StandardMaterial>>(light).unwrap();
        assert_eq!(material.0, off);

        app.world_mut().get_mut::<Breaker>(breaker).unwrap().0 = true;
        app.update();
        let material = app.world().get::<MeshMaterial3d<StandardMaterial>>(light).unwrap();
        assert_eq!(material.0, on);
    }
}

// End of File
