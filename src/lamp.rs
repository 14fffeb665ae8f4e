// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The desk lamp: on/off state, bulb glow and the spotlight it casts onto the desk.

use bevy::prelude::*;
use office_config::{GlowResponse, LampSettings, OfficeConfig};

use crate::glow::LightState;
use crate::indicator::{Switch, sync_indicators};

/// Warm white of the bulb and its light.
pub const LAMP_LIGHT: Color = Color::srgb_u8(0xff, 0xec, 0xb3);

#[derive(Component, Clone, Debug, PartialEq)]
pub struct Lamp {
    pub on: bool,
    /// Bulb brightness as a fraction of full, following `on`.
    pub glow: LightState,
}

impl Lamp {
    pub fn new(on: bool) -> Self {
        Self {
            on,
            glow: LightState::settled(on),
        }
    }

    pub fn toggle(&mut self, response: &GlowResponse) {
        self.on = !self.on;
        self.glow.set_target(self.on);
        if *response == GlowResponse::Snap {
            self.glow.snap();
        }
    }

    /// Emissive intensity of the bulb given the intensity at full brightness.
    pub fn emissive_intensity(&self, full: f32) -> f32 {
        self.glow.intensity.max(0.0) * full
    }
}

impl Switch for Lamp {
    fn is_on(&self) -> bool {
        self.on
    }
}

/// The glowing bulb mesh of a lamp.  Owns its material.
#[derive(Component, Clone, Debug)]
pub struct LampBulb {
    pub lamp: Entity,
}

/// Where a lamp's spotlight hangs and the point it aims at, in world space.
#[derive(Component, Clone, Copy, Debug)]
pub struct SpotlightMount {
    pub position: Vec3,
    pub aim: Vec3,
}

/// The light cast by a lamp.  Spawned and despawned with the lamp's state.
#[derive(Component, Clone, Copy, Debug)]
pub struct LampSpotlight {
    pub lamp: Entity,
}

pub struct LampPlugin;

impl Plugin for LampPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                animate_lamp_glow,
                (apply_bulb_glow, sync_spotlights, sync_indicators::<Lamp>),
            )
                .chain(),
        );
    }
}

fn animate_lamp_glow(config: Res<OfficeConfig>, time: Res<Time>, mut lamps: Query<&mut Lamp>) {
    let GlowResponse::Damped(gains) = config.lamp.glow else {
        return;
    };
    for mut lamp in &mut lamps {
        if !lamp.glow.is_settled() {
            lamp.glow.step(gains, time.delta_secs());
        }
    }
}

fn apply_bulb_glow(
    config: Res<OfficeConfig>,
    lamps: Query<&Lamp, Changed<Lamp>>,
    bulbs: Query<(&LampBulb, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (bulb, material) in &bulbs {
        let Ok(lamp) = lamps.get(bulb.lamp) else {
            continue;
        };
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        let glow = LinearRgba::from(LAMP_LIGHT);
        let k = lamp.emissive_intensity(config.lamp.bulb_intensity);
        material.emissive = LinearRgba::rgb(glow.red * k, glow.green * k, glow.blue * k);
    }
}

fn sync_spotlights(
    mut commands: Commands,
    config: Res<OfficeConfig>,
    lamps: Query<(Entity, &Lamp, &SpotlightMount), Changed<Lamp>>,
    spotlights: Query<(Entity, &LampSpotlight)>,
) {
    for (lamp_entity, lamp, mount) in &lamps {
        let existing: Vec<Entity> = spotlights
            .iter()
            .filter(|(_, spotlight)| spotlight.lamp == lamp_entity)
            .map(|(entity, _)| entity)
            .collect();
        match (lamp.on, existing.is_empty()) {
            (true, true) => {
                debug!("Spawning spotlight for lamp {lamp_entity}");
                commands.spawn(spotlight_bundle(lamp_entity, mount, &config.lamp));
            }
            (false, false) => {
                for entity in existing {
                    debug!("Despawning spotlight {entity}");
                    commands.entity(entity).despawn();
                }
            }
            _ => {}
        }
    }
}

fn spotlight_bundle(
    lamp: Entity,
    mount: &SpotlightMount,
    settings: &LampSettings,
) -> impl Bundle + use<> {
    (
        SpotLight {
            color: LAMP_LIGHT,
            intensity: settings.spot_intensity,
            range: settings.spot_range,
            outer_angle: settings.spot_angle,
            inner_angle: settings.spot_angle * (1.0 - settings.spot_penumbra),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(mount.position).looking_at(mount.aim, Vec3::Y),
        LampSpotlight { lamp },
        Name::new("Lamp spotlight"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use office_config::PdConfig;

    fn lamp_app(glow: GlowResponse) -> App {
        let mut config = OfficeConfig::default();
        config.lamp.glow = glow;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(config)
            .add_plugins(LampPlugin);
        app
    }

    fn spawn_lamp(app: &mut App, on: bool) -> (Entity, Entity) {
        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let lamp = app
            .world_mut()
            .spawn((
                Lamp::new(on),
                SpotlightMount {
                    position: Vec3::new(75.0, 120.0, 0.0),
                    aim: Vec3::new(0.0, 75.0, 10.0),
                },
            ))
            .id();
        let bulb = app
            .world_mut()
            .spawn((LampBulb { lamp }, MeshMaterial3d(material)))
            .id();
        (lamp, bulb)
    }

    fn spotlight_count(app: &mut App) -> usize {
        app.world_mut()
            .query::<&LampSpotlight>()
            .iter(app.world())
            .count()
    }

    fn bulb_emissive(app: &App, bulb: Entity) -> LinearRgba {
        let handle = &app
            .world()
            .get::<MeshMaterial3d<StandardMaterial>>(bulb)
            .unwrap()
            .0;
        app.world()
            .resource::<Assets<StandardMaterial>>()
            .get(handle)
            .unwrap()
            .emissive
    }

    #[test]
    fn toggle_snaps_intensity() {
        let mut lamp = Lamp::new(true);
        assert_eq!(lamp.emissive_intensity(4.0), 4.0);
        lamp.toggle(&GlowResponse::Snap);
        assert!(!lamp.on);
        assert_eq!(lamp.emissive_intensity(4.0), 0.0);
        lamp.toggle(&GlowResponse::Snap);
        assert_eq!(lamp.emissive_intensity(4.0), 4.0);
    }

    #[test]
    fn damped_toggle_starts_from_current_glow() {
        let mut lamp = Lamp::new(true);
        lamp.toggle(&GlowResponse::Damped(PdConfig::default()));
        assert!(!lamp.on);
        assert_eq!(lamp.emissive_intensity(4.0), 4.0);
        assert_eq!(lamp.glow.target, 0.0);
    }

    #[test]
    fn lamp_starts_lit_with_a_spotlight() {
        let mut app = lamp_app(GlowResponse::Snap);
        let (_, bulb) = spawn_lamp(&mut app, true);
        app.update();
        assert_eq!(spotlight_count(&mut app), 1);
        assert_ne!(bulb_emissive(&app, bulb), LinearRgba::BLACK);
    }

    #[test]
    fn switching_off_darkens_bulb_and_removes_spotlight() {
        let mut app = lamp_app(GlowResponse::Snap);
        let (lamp, bulb) = spawn_lamp(&mut app, true);
        app.update();

        app.world_mut()
            .get_mut::<Lamp>(lamp)
            .unwrap()
            .toggle(&GlowResponse::Snap);
        assert_eq!(
            app.world().get::<Lamp>(lamp).unwrap().emissive_intensity(4.0),
            0.0
        );

        app.update();
        assert_eq!(spotlight_count(&mut app), 0);
        let emissive = bulb_emissive(&app, bulb);
        assert_eq!((emissive.red, emissive.green, emissive.blue), (0.0, 0.0, 0.0));

        app.world_mut()
            .get_mut::<Lamp>(lamp)
            .unwrap()
            .toggle(&GlowResponse::Snap);
        app.update();
        assert_eq!(spotlight_count(&mut app), 1);
    }

    #[test]
    fn repeated_updates_do_not_duplicate_spotlights() {
        let mut app = lamp_app(GlowResponse::Snap);
        let (lamp, _) = spawn_lamp(&mut app, true);
        for _ in 0..5 {
            app.update();
            app.world_mut().get_mut::<Lamp>(lamp).unwrap().set_changed();
        }
        assert_eq!(spotlight_count(&mut app), 1);
    }
}

// End of File
