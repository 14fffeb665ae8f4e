// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Turns pointer clicks on the scene into focus changes and prop toggles.
//!
//! Props carry a [`ClickAction`] on the group that should react.  A click is handled by the
//! closest ancestor-or-self of the mesh that was hit which carries an action; outer actions never
//! see it.  Scenery without any action in its ancestry behaves like the invisible floor trigger
//! underneath it and returns the camera to the overview.

use bevy::{
    ecs::system::SystemParam,
    prelude::*,
    window::{CursorIcon, PrimaryWindow, SystemCursorIcon},
};
use office_config::OfficeConfig;

use crate::lamp::Lamp;
use crate::record_player::RecordPlayer;
use crate::view::{Focus, FocusTarget, OVERVIEW};

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub enum ClickAction {
    Focus(FocusTarget),
    ToggleLamp,
    ToggleRecordPlayer,
    ResetView,
}

impl ClickAction {
    /// Toggles flip a prop in place and show a hand cursor while hovered.
    pub fn is_toggle(&self) -> bool {
        matches!(self, ClickAction::ToggleLamp | ClickAction::ToggleRecordPlayer)
    }
}

/// Root of the 3D scene.  Clicks on entities outside it (the overlay) are never resolved.
#[derive(Component, Default)]
pub struct Scenery;

/// What the resolver needs to know about one entity in the hit's ancestry.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickLink {
    pub action: Option<ClickAction>,
    pub parent: Option<Entity>,
    pub scenery: bool,
}

/// The entity whose action handles a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handled {
    pub entity: Entity,
    pub action: ClickAction,
}

/// Walks up from `hit` to find the innermost handler.
pub fn resolve_click(hit: Entity, link: impl Fn(Entity) -> Option<ClickLink>) -> Option<Handled> {
    let mut current = Some(hit);
    let mut root = None;
    while let Some(entity) = current {
        let Some(node) = link(entity) else {
            break;
        };
        if let Some(action) = node.action {
            return Some(Handled { entity, action });
        }
        if node.scenery {
            root = Some(entity);
        }
        current = node.parent;
    }
    root.map(|entity| Handled {
        entity,
        action: ClickAction::ResetView,
    })
}

type Links<'w, 's> = Query<
    'w,
    's,
    (
        Option<&'static ClickAction>,
        Option<&'static ChildOf>,
        Has<Scenery>,
    ),
>;

fn resolve_hit(links: &Links, hit: Entity) -> Option<Handled> {
    resolve_click(hit, |entity| {
        links
            .get(entity)
            .ok()
            .map(|(action, parent, scenery)| ClickLink {
                action: action.copied(),
                parent: parent.map(ChildOf::parent),
                scenery,
            })
    })
}

/// Where the primary button last went down, in logical pixels.
///
/// Recorded by the press observer in the same picking pass that later emits the click, so a
/// press and release within one frame is measured against its own press.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PressOrigin(Option<Vec2>);

impl PressOrigin {
    pub fn record(&mut self, position: Vec2) {
        self.0 = Some(position);
    }

    /// Whether a release at `release` ends a drag rather than a click.
    pub fn is_drag(&self, release: Vec2, tolerance: f32) -> bool {
        self.0
            .is_some_and(|origin| origin.distance(release) > tolerance)
    }
}

/// A button release over a pickable entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneClick {
    pub entity: Entity,
    pub button: PointerButton,
    pub position: Vec2,
}

/// Everything a click may read or change.
#[derive(SystemParam)]
pub struct ClickHandlers<'w, 's> {
    links: Links<'w, 's>,
    origin: Res<'w, PressOrigin>,
    config: Res<'w, OfficeConfig>,
    focus: Focus<'w>,
    lamps: Query<'w, 's, &'static mut Lamp>,
    players: Query<'w, 's, &'static mut RecordPlayer>,
}

impl ClickHandlers<'_, '_> {
    /// Runs the handler for `click`, if any, and returns it.
    pub fn handle(&mut self, click: SceneClick) -> Option<Handled> {
        if click.button != PointerButton::Primary {
            return None;
        }
        if self
            .origin
            .is_drag(click.position, self.config.camera.click_drag_tolerance)
        {
            trace!("Ignoring click at the end of a drag");
            return None;
        }

        let handled = resolve_hit(&self.links, click.entity)?;
        let Handled { entity, action } = handled;
        match action {
            ClickAction::Focus(target) => self.focus.focus(target.view()),
            ClickAction::ResetView => self.focus.focus(OVERVIEW.view()),
            ClickAction::ToggleLamp => match self.lamps.get_mut(entity) {
                Ok(mut lamp) => {
                    lamp.toggle(&self.config.lamp.glow);
                    info!("Lamp switched {}", if lamp.on { "on" } else { "off" });
                }
                Err(err) => warn!("Lamp toggle on {entity} without a lamp: {err}"),
            },
            ClickAction::ToggleRecordPlayer => match self.players.get_mut(entity) {
                Ok(mut player) => {
                    let state = player.toggle();
                    info!("Record player {state:?}");
                }
                Err(err) => warn!("Record player toggle on {entity} without a player: {err}"),
            },
        }
        Some(handled)
    }
}

/// Cursor shown while the pointer rests on whatever `handled` resolved to.
pub fn hover_cursor(handled: Option<Handled>) -> SystemCursorIcon {
    match handled {
        Some(handled) if handled.action.is_toggle() => SystemCursorIcon::Pointer,
        _ => SystemCursorIcon::Default,
    }
}

fn show_cursor(
    commands: &mut Commands,
    windows: &Query<Entity, With<PrimaryWindow>>,
    icon: SystemCursorIcon,
) {
    for window in windows {
        commands.entity(window).insert(CursorIcon::System(icon));
    }
}

pub struct ClickPlugin;

impl Plugin for ClickPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PressOrigin>()
            .add_observer(on_pointer_press)
            .add_observer(on_pointer_click)
            .add_observer(on_pointer_over)
            .add_observer(on_pointer_out);
    }
}

// The observers below are global, so each stops propagation; bubbling would re-run them for
// every ancestor of the hit.

fn on_pointer_press(mut press: On<Pointer<Press>>, mut origin: ResMut<PressOrigin>) {
    press.propagate(false);
    let pointer = press.event();
    if pointer.button == PointerButton::Primary {
        origin.record(pointer.pointer_location.position);
    }
}

fn on_pointer_click(mut click: On<Pointer<Click>>, mut handlers: ClickHandlers) {
    click.propagate(false);
    let pointer = click.event();
    handlers.handle(SceneClick {
        entity: pointer.entity,
        button: pointer.button,
        position: pointer.pointer_location.position,
    });
}

fn on_pointer_over(
    mut over: On<Pointer<Over>>,
    mut commands: Commands,
    links: Links,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    over.propagate(false);
    let icon = hover_cursor(resolve_hit(&links, over.event().entity));
    show_cursor(&mut commands, &windows, icon);
}

fn on_pointer_out(
    mut out: On<Pointer<Out>>,
    mut commands: Commands,
    windows: Query<Entity, With<PrimaryWindow>>,
) {
    out.propagate(false);
    show_cursor(&mut commands, &windows, SystemCursorIcon::Default);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{CameraMode, DESK, FocusChanged, RECORD_PLAYER, ViewState};
    use bevy::ecs::system::RunSystemOnce;

    fn resolve_in(world: &World, hit: Entity) -> Option<Handled> {
        resolve_click(hit, |entity| {
            let entity = world.get_entity(entity).ok()?;
            Some(ClickLink {
                action: entity.get::<ClickAction>().copied(),
                parent: entity.get::<ChildOf>().map(ChildOf::parent),
                scenery: entity.contains::<Scenery>(),
            })
        })
    }

    struct Office {
        world: World,
        root: Entity,
        desk_leg: Entity,
        lamp: Entity,
        bulb: Entity,
        table_leg: Entity,
        player: Entity,
        platter: Entity,
        carpet: Entity,
        floor: Entity,
        button: Entity,
    }

    fn office() -> Office {
        let mut world = World::new();
        world.insert_resource(OfficeConfig::default());
        world.init_resource::<PressOrigin>();
        world.init_resource::<ViewState>();
        world.init_resource::<CameraMode>();
        world.init_resource::<Messages<FocusChanged>>();

        let root = world.spawn(Scenery).id();
        let floor = world.spawn((ClickAction::ResetView, ChildOf(root))).id();
        let carpet = world.spawn(ChildOf(root)).id();

        let desk = world
            .spawn((ClickAction::Focus(DESK), ChildOf(root)))
            .id();
        let desk_leg = world.spawn(ChildOf(desk)).id();
        let lamp = world
            .spawn((ClickAction::ToggleLamp, Lamp::new(true), ChildOf(desk)))
            .id();
        let head = world.spawn(ChildOf(lamp)).id();
        let bulb = world.spawn(ChildOf(head)).id();

        let side_table = world
            .spawn((ClickAction::Focus(RECORD_PLAYER), ChildOf(root)))
            .id();
        let table_leg = world.spawn(ChildOf(side_table)).id();
        let player = world
            .spawn((
                ClickAction::ToggleRecordPlayer,
                RecordPlayer::default(),
                ChildOf(side_table),
            ))
            .id();
        let platter = world.spawn(ChildOf(player)).id();

        let panel = world.spawn_empty().id();
        let button = world.spawn(ChildOf(panel)).id();

        Office {
            world,
            root,
            desk_leg,
            lamp,
            bulb,
            table_leg,
            player,
            platter,
            carpet,
            floor,
            button,
        }
    }

    fn primary(entity: Entity, position: Vec2) -> SceneClick {
        SceneClick {
            entity,
            button: PointerButton::Primary,
            position,
        }
    }

    fn click(world: &mut World, click: SceneClick) -> Option<Handled> {
        world
            .run_system_once(move |mut handlers: ClickHandlers| handlers.handle(click))
            .unwrap()
    }

    fn press(world: &mut World, position: Vec2) {
        world.resource_mut::<PressOrigin>().record(position);
    }

    fn view_name(world: &World) -> &str {
        &world.resource::<ViewState>().current().name
    }

    #[test]
    fn nested_handler_wins_over_ancestors() {
        let office = office();
        assert_eq!(
            resolve_in(&office.world, office.bulb),
            Some(Handled {
                entity: office.lamp,
                action: ClickAction::ToggleLamp
            })
        );
        assert_eq!(
            resolve_in(&office.world, office.platter),
            Some(Handled {
                entity: office.player,
                action: ClickAction::ToggleRecordPlayer
            })
        );
    }

    #[test]
    fn outer_handler_catches_its_own_children() {
        let office = office();
        let handled = resolve_in(&office.world, office.desk_leg).unwrap();
        assert_eq!(handled.action, ClickAction::Focus(DESK));
        let handled = resolve_in(&office.world, office.table_leg).unwrap();
        assert_eq!(handled.action, ClickAction::Focus(RECORD_PLAYER));
    }

    #[test]
    fn background_and_bare_scenery_reset_the_view() {
        let office = office();
        assert_eq!(
            resolve_in(&office.world, office.floor),
            Some(Handled {
                entity: office.floor,
                action: ClickAction::ResetView
            })
        );
        assert_eq!(
            resolve_in(&office.world, office.carpet),
            Some(Handled {
                entity: office.root,
                action: ClickAction::ResetView
            })
        );
    }

    #[test]
    fn overlay_clicks_resolve_to_nothing() {
        let office = office();
        assert_eq!(resolve_in(&office.world, office.button), None);
    }

    #[test]
    fn despawned_hit_resolves_to_nothing() {
        let mut office = office();
        let gone = office.world.spawn_empty().id();
        office.world.despawn(gone);
        assert_eq!(resolve_in(&office.world, gone), None);
    }

    #[test]
    fn clicking_the_bulb_toggles_the_lamp_without_focusing() {
        let mut office = office();
        let at = Vec2::new(200.0, 150.0);
        press(&mut office.world, at);
        let handled = click(&mut office.world, primary(office.bulb, at));

        assert_eq!(handled.map(|h| h.entity), Some(office.lamp));
        assert!(!office.world.get::<Lamp>(office.lamp).unwrap().on);
        assert_eq!(view_name(&office.world), "Overview");
        assert!(office.world.resource::<Messages<FocusChanged>>().is_empty());
    }

    #[test]
    fn clicking_the_platter_toggles_the_player_without_focusing() {
        let mut office = office();
        let at = Vec2::new(50.0, 60.0);
        press(&mut office.world, at);
        click(&mut office.world, primary(office.platter, at));

        assert!(
            office
                .world
                .get::<RecordPlayer>(office.player)
                .unwrap()
                .is_playing()
        );
        assert_eq!(view_name(&office.world), "Overview");
    }

    #[test]
    fn clicking_a_prop_focuses_and_locks() {
        let mut office = office();
        office.world.insert_resource(CameraMode::Free);
        let at = Vec2::new(10.0, 10.0);
        press(&mut office.world, at);
        click(&mut office.world, primary(office.table_leg, at));

        assert_eq!(view_name(&office.world), "Record Player");
        assert_eq!(*office.world.resource::<CameraMode>(), CameraMode::Locked);
    }

    #[test]
    fn secondary_button_does_nothing() {
        let mut office = office();
        let at = Vec2::new(10.0, 10.0);
        press(&mut office.world, at);
        let handled = click(
            &mut office.world,
            SceneClick {
                entity: office.desk_leg,
                button: PointerButton::Secondary,
                position: at,
            },
        );
        assert_eq!(handled, None);
        assert_eq!(view_name(&office.world), "Overview");

        click(
            &mut office.world,
            SceneClick {
                entity: office.bulb,
                button: PointerButton::Middle,
                position: at,
            },
        );
        assert!(office.world.get::<Lamp>(office.lamp).unwrap().on);
    }

    #[test]
    fn release_at_the_end_of_a_drag_is_ignored() {
        let mut office = office();
        press(&mut office.world, Vec2::new(100.0, 100.0));
        let handled = click(&mut office.world, primary(office.desk_leg, Vec2::new(300.0, 120.0)));
        assert_eq!(handled, None);
        assert_eq!(view_name(&office.world), "Overview");
    }

    #[test]
    fn quick_click_after_a_drag_still_focuses() {
        let mut office = office();
        // An orbit drag ends far from where it started.
        press(&mut office.world, Vec2::new(100.0, 100.0));
        click(&mut office.world, primary(office.floor, Vec2::new(300.0, 120.0)));

        // Press and release land in one picking pass with no frame in between.
        press(&mut office.world, Vec2::new(400.0, 300.0));
        let handled = click(&mut office.world, primary(office.desk_leg, Vec2::new(401.0, 301.0)));

        assert_eq!(handled.map(|h| h.action), Some(ClickAction::Focus(DESK)));
        assert_eq!(view_name(&office.world), "Desk");
    }

    #[test]
    fn small_jitter_is_still_a_click() {
        let origin = PressOrigin(Some(Vec2::new(10.0, 10.0)));
        assert!(!origin.is_drag(Vec2::new(13.0, 10.0), 4.0));
        assert!(origin.is_drag(Vec2::new(20.0, 10.0), 4.0));
        assert!(!PressOrigin::default().is_drag(Vec2::new(500.0, 500.0), 4.0));
    }

    #[test]
    fn hand_cursor_only_over_toggles() {
        let office = office();
        let cursor = |hit| hover_cursor(resolve_in(&office.world, hit));
        assert_eq!(cursor(office.bulb), SystemCursorIcon::Pointer);
        assert_eq!(cursor(office.platter), SystemCursorIcon::Pointer);
        assert_eq!(cursor(office.table_leg), SystemCursorIcon::Default);
        assert_eq!(cursor(office.carpet), SystemCursorIcon::Default);
        assert_eq!(cursor(office.button), SystemCursorIcon::Default);
    }

    #[test]
    fn cursor_is_set_on_the_primary_window() {
        let mut world = World::new();
        let window = world.spawn(PrimaryWindow).id();
        world
            .run_system_once(
                |mut commands: Commands, windows: Query<Entity, With<PrimaryWindow>>| {
                    show_cursor(&mut commands, &windows, SystemCursorIcon::Pointer);
                },
            )
            .unwrap();
        assert!(matches!(
            world.get::<CursorIcon>(window),
            Some(CursorIcon::System(SystemCursorIcon::Pointer))
        ));
    }
}

// End of File
