// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The record player: play state, the spinning disc, the tone arm and the looping soundtrack.

use bevy::{
    audio::{AudioSinkPlayback, Volume},
    ecs::component::Mutable,
    prelude::*,
};
use office_config::{OfficeConfig, RecordPlayerSettings};
use std::f32::consts::TAU;

use crate::indicator::{Switch, sync_indicators};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
}

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecordPlayer {
    pub state: PlayState,
}

impl RecordPlayer {
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Flips between playing and stopped, returning the new state.
    pub fn toggle(&mut self) -> PlayState {
        self.state = match self.state {
            PlayState::Stopped => PlayState::Playing,
            PlayState::Playing => PlayState::Stopped,
        };
        self.state
    }
}

impl Switch for RecordPlayer {
    fn is_on(&self) -> bool {
        self.is_playing()
    }
}

/// Animated pose of a record player, kept next to [`RecordPlayer`].
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Turntable {
    /// Disc rotation about its spindle, in radians.
    pub disc_angle: f32,
    /// Tone-arm rotation about its pivot, in radians.
    pub arm_angle: f32,
}

impl Turntable {
    pub fn advance(&mut self, state: PlayState, settings: &RecordPlayerSettings, dt: f32) {
        let target = match state {
            PlayState::Playing => {
                self.disc_angle = (self.disc_angle - settings.spin_rate * dt).rem_euclid(TAU);
                settings.playing_arm_angle
            }
            PlayState::Stopped => settings.rest_arm_angle,
        };
        let t = (dt * settings.arm_speed).min(1.0);
        self.arm_angle += (target - self.arm_angle) * t;
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct VinylDisc {
    pub player: Entity,
}

#[derive(Component, Clone, Copy, Debug)]
pub struct ToneArm {
    pub player: Entity,
}

/// The audio source entity playing a record player's music.
#[derive(Component, Clone, Copy, Debug)]
pub struct Soundtrack {
    pub player: Entity,
}

impl Soundtrack {
    /// Looping, initially paused playback of `clip` for `player`.
    pub fn bundle(
        player: Entity,
        clip: Handle<AudioSource>,
        settings: &RecordPlayerSettings,
    ) -> impl Bundle + use<> {
        (
            AudioPlayer::new(clip),
            PlaybackSettings {
                paused: true,
                volume: Volume::Linear(settings.volume),
                ..PlaybackSettings::LOOP
            },
            Soundtrack { player },
            Name::new("Soundtrack"),
        )
    }
}

pub struct RecordPlayerPlugin;

impl Plugin for RecordPlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                advance_turntables,
                (
                    pose_turntables,
                    sync_soundtrack::<AudioSink>,
                    sync_indicators::<RecordPlayer>,
                ),
            )
                .chain(),
        );
    }
}

fn advance_turntables(
    config: Res<OfficeConfig>,
    time: Res<Time>,
    mut players: Query<(&RecordPlayer, &mut Turntable)>,
) {
    for (player, mut turntable) in &mut players {
        turntable.advance(player.state, &config.record_player, time.delta_secs());
    }
}

fn pose_turntables(
    turntables: Query<&Turntable>,
    mut discs: Query<(&VinylDisc, &mut Transform), Without<ToneArm>>,
    mut arms: Query<(&ToneArm, &mut Transform), Without<VinylDisc>>,
) {
    for (disc, mut transform) in &mut discs {
        if let Ok(turntable) = turntables.get(disc.player) {
            transform.rotation = Quat::from_rotation_y(turntable.disc_angle);
        }
    }
    for (arm, mut transform) in &mut arms {
        if let Ok(turntable) = turntables.get(arm.player) {
            transform.rotation = Quat::from_rotation_y(turntable.arm_angle);
        }
    }
}

/// The part of an audio sink the soundtrack sync drives.
pub trait SinkControl: Component<Mutability = Mutable> {
    fn apply_play_state(&mut self, state: PlayState);
}

impl SinkControl for AudioSink {
    fn apply_play_state(&mut self, state: PlayState) {
        match state {
            PlayState::Playing => self.play(),
            PlayState::Stopped => self.pause(),
        }
    }
}

/// Plays or pauses each soundtrack with its player.
///
/// The sink only exists once the clip has loaded.  Requests made before then are reported and
/// the player keeps its state; the sink is brought in line as soon as it appears.
fn sync_soundtrack<S: SinkControl>(
    players: Query<(Entity, Ref<RecordPlayer>)>,
    mut sinks: Query<(&Soundtrack, &mut S)>,
) {
    for (soundtrack, mut sink) in &mut sinks {
        let Ok((_, player)) = players.get(soundtrack.player) else {
            continue;
        };
        if sink.is_added() || player.is_changed() {
            sink.apply_play_state(player.state);
        }
    }
    for (entity, player) in &players {
        if player.is_changed()
            && player.is_playing()
            && !sinks.iter().any(|(soundtrack, _)| soundtrack.player == entity)
        {
            warn!("Soundtrack for record player {entity} is not ready; playing silently");
        }
    }
}


// End of File
