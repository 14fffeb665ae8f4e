// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! The heads-up overlay: title, current focus panel and the free view toggle.

use bevy::{picking::Pickable, prelude::*};

use crate::view::{CameraMode, FocusChanged, ViewState};

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayColors>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(
                Update,
                (
                    click_mode_toggle,
                    show_focus_name,
                    show_camera_mode.run_if(resource_changed::<CameraMode>),
                )
                    .chain(),
            );
    }
}

#[derive(Resource)]
struct OverlayColors {
    ink: Color,
    muted: Color,
    faint: Color,
    panel: Color,
    panel_border: Color,
    button: Color,
    button_hovered: Color,
    locked_fill: Color,
    locked_ink: Color,
    locked_border: Color,
    free_fill: Color,
    free_ink: Color,
    free_border: Color,
}

impl Default for OverlayColors {
    fn default() -> Self {
        OverlayColors {
            ink: Color::srgb_u8(0x11, 0x18, 0x27),
            muted: Color::srgb_u8(0x6b, 0x72, 0x80),
            faint: Color::srgb_u8(0x9c, 0xa3, 0xaf),
            panel: Color::srgba(1.0, 1.0, 1.0, 0.9),
            panel_border: Color::srgb_u8(0xe5, 0xe7, 0xeb),
            button: Color::srgb_u8(0x11, 0x18, 0x27),
            button_hovered: Color::BLACK,
            locked_fill: Color::srgb_u8(0xfa, 0xfa, 0xf9),
            locked_ink: Color::srgb_u8(0x57, 0x53, 0x4e),
            locked_border: Color::srgb_u8(0xe7, 0xe5, 0xe4),
            free_fill: Color::srgb_u8(0xef, 0xf6, 0xff),
            free_ink: Color::srgb_u8(0x1e, 0x40, 0xaf),
            free_border: Color::srgb_u8(0xbf, 0xdb, 0xfe),
        }
    }
}

/// Overlay text that changes at runtime.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
enum OverlayText {
    FocusName,
    Badge,
    Hint,
    ToggleLabel,
}

#[derive(Component)]
struct ModeBadge;

#[derive(Component)]
struct ModeToggle;

pub fn badge_label(mode: CameraMode) -> &'static str {
    match mode {
        CameraMode::Locked => "Locked",
        CameraMode::Free => "Free Roam",
    }
}

pub fn hint_text(mode: CameraMode) -> &'static str {
    match mode {
        CameraMode::Locked => "Camera locked. Click background to return to Overview.",
        CameraMode::Free => "Pan to explore. Scroll to zoom. Select an object to focus.",
    }
}

pub fn toggle_label(mode: CameraMode) -> &'static str {
    match mode {
        CameraMode::Locked => "Free View",
        CameraMode::Free => "Reset Camera",
    }
}

fn spawn_overlay(
    mut commands: Commands,
    colors: Res<OverlayColors>,
    views: Res<ViewState>,
    mode: Res<CameraMode>,
) {
    let mode = *mode;
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(24.0),
                left: Val::Px(24.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            Pickable::IGNORE,
            Name::new("Overlay"),
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("LEO OFFICE"),
                TextFont::from_font_size(36.0),
                TextColor(colors.ink),
                Pickable::IGNORE,
            ));
            overlay.spawn((
                Text::new("DIGITAL WORKSPACE"),
                TextFont::from_font_size(13.0),
                TextColor(colors.muted),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
                Pickable::IGNORE,
            ));

            overlay
                .spawn((
                    Node {
                        width: Val::Px(256.0),
                        flex_direction: FlexDirection::Column,
                        padding: UiRect::all(Val::Px(20.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        margin: UiRect::bottom(Val::Px(12.0)),
                        ..default()
                    },
                    BackgroundColor(colors.panel),
                    BorderColor::all(colors.panel_border),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|panel| {
                    spawn_focus_panel(panel, &colors, &views.current().name, mode);
                });

            overlay
                .spawn((
                    Button,
                    ModeToggle,
                    Node {
                        width: Val::Px(256.0),
                        padding: UiRect::axes(Val::Px(20.0), Val::Px(12.0)),
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(colors.button),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new(toggle_label(mode)),
                        TextFont::from_font_size(13.0),
                        TextColor(Color::WHITE),
                        OverlayText::ToggleLabel,
                        Pickable::IGNORE,
                    ));
                });
        });
}

fn spawn_focus_panel(
    panel: &mut ChildSpawnerCommands<'_>,
    colors: &OverlayColors,
    focus_name: &str,
    mode: CameraMode,
) {
    let small = TextFont::from_font_size(10.0);

    panel
        .spawn(Node {
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(12.0)),
            ..default()
        })
        .with_children(|header| {
            header.spawn((
                Text::new("CURRENT FOCUS"),
                small.clone(),
                TextColor(colors.faint),
            ));
            header
                .spawn((
                    ModeBadge,
                    Node {
                        padding: UiRect::axes(Val::Px(8.0), Val::Px(2.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(colors.locked_fill),
                    BorderColor::all(colors.locked_border),
                    BorderRadius::all(Val::Px(2.0)),
                ))
                .with_children(|badge| {
                    badge.spawn((
                        Text::new(badge_label(mode).to_uppercase()),
                        small.clone(),
                        TextColor(colors.locked_ink),
                        OverlayText::Badge,
                    ));
                });
        });

    panel.spawn((
        Text::new(focus_name),
        TextFont::from_font_size(24.0),
        TextColor(colors.ink),
        OverlayText::FocusName,
        Node {
            margin: UiRect::bottom(Val::Px(4.0)),
            ..default()
        },
    ));
    panel.spawn((
        Text::new(hint_text(mode)),
        TextFont::from_font_size(11.0),
        TextColor(colors.muted),
        OverlayText::Hint,
    ));

    panel
        .spawn(Node {
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(12.0),
            margin: UiRect::top(Val::Px(24.0)),
            padding: UiRect::top(Val::Px(20.0)),
            border: UiRect::top(Val::Px(1.0)),
            ..default()
        })
        .insert(BorderColor::all(colors.panel_border))
        .with_children(|hints| {
            hints.spawn((
                Text::new("Interactions"),
                small.clone(),
                TextColor(colors.faint),
            ));
            for label in ["Toggle Desk Lamp", "Play Vinyl Record"] {
                hints
                    .spawn(Node {
                        align_items: AlignItems::Center,
                        column_gap: Val::Px(12.0),
                        ..default()
                    })
                    .with_children(|row| {
                        row.spawn((
                            Node {
                                width: Val::Px(24.0),
                                height: Val::Px(1.0),
                                ..default()
                            },
                            BackgroundColor(colors.faint),
                        ));
                        row.spawn((
                            Text::new(label),
                            TextFont::from_font_size(12.0),
                            TextColor(colors.locked_ink),
                        ));
                    });
            }
        });
}

fn click_mode_toggle(
    colors: Res<OverlayColors>,
    mut mode: ResMut<CameraMode>,
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ModeToggle>),
    >,
) {
    for (interaction, mut color) in &mut interaction_query {
        match *interaction {
            Interaction::Pressed => {
                *mode = mode.toggled();
                info!("Camera mode is now {:?}", *mode);
            }
            Interaction::Hovered => {
                *color = colors.button_hovered.into();
            }
            Interaction::None => {
                *color = colors.button.into();
            }
        }
    }
}

fn show_focus_name(
    mut focus_changed: MessageReader<FocusChanged>,
    mut texts: Query<(&OverlayText, &mut Text)>,
) {
    let Some(FocusChanged { name }) = focus_changed.read().last() else {
        return;
    };
    for (role, mut text) in &mut texts {
        if *role == OverlayText::FocusName {
            text.0.clone_from(name);
        }
    }
}

fn show_camera_mode(
    mode: Res<CameraMode>,
    colors: Res<OverlayColors>,
    mut texts: Query<(&OverlayText, &mut Text, &mut TextColor)>,
    mut badges: Query<(&mut BackgroundColor, &mut BorderColor), With<ModeBadge>>,
) {
    let mode = *mode;
    let (fill, ink, border) = match mode {
        CameraMode::Locked => (colors.locked_fill, colors.locked_ink, colors.locked_border),
        CameraMode::Free => (colors.free_fill, colors.free_ink, colors.free_border),
    };
    for (role, mut text, mut color) in &mut texts {
        match role {
            OverlayText::Badge => {
                text.0 = badge_label(mode).to_uppercase();
                color.0 = ink;
            }
            OverlayText::Hint => text.0 = hint_text(mode).to_owned(),
            OverlayText::ToggleLabel => text.0 = toggle_label(mode).to_owned(),
            OverlayText::FocusName => {}
        }
    }
    for (mut background, mut border_color) in &mut badges {
        background.0 = fill;
        *border_color = BorderColor::all(border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{FOCUS_TARGETS, Focus, ViewPlugin};
    use bevy::ecs::system::RunSystemOnce;

    fn overlay_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(ViewPlugin)
            .init_resource::<OverlayColors>()
            .add_systems(
                Update,
                (
                    click_mode_toggle,
                    show_focus_name,
                    show_camera_mode.run_if(resource_changed::<CameraMode>),
                )
                    .chain(),
            );
        app
    }

    fn text_of(app: &mut App, role: OverlayText) -> String {
        app.world_mut()
            .query::<(&OverlayText, &Text)>()
            .iter(app.world())
            .find(|(r, _)| **r == role)
            .map(|(_, text)| text.0.clone())
            .unwrap()
    }

    fn spawn_texts(app: &mut App) {
        for role in [
            OverlayText::FocusName,
            OverlayText::Badge,
            OverlayText::Hint,
            OverlayText::ToggleLabel,
        ] {
            app.world_mut()
                .spawn((role, Text::default(), TextColor::default()));
        }
    }

    #[test]
    fn labels_follow_the_mode() {
        assert_eq!(toggle_label(CameraMode::Locked), "Free View");
        assert_eq!(toggle_label(CameraMode::Free), "Reset Camera");
        assert_eq!(badge_label(CameraMode::Locked), "Locked");
        assert_eq!(badge_label(CameraMode::Free), "Free Roam");
        assert_eq!(
            hint_text(CameraMode::Locked),
            "Camera locked. Click background to return to Overview."
        );
        assert_eq!(
            hint_text(CameraMode::Free),
            "Pan to explore. Scroll to zoom. Select an object to focus."
        );
    }

    #[test]
    fn pressing_the_toggle_frees_the_camera() {
        let mut app = overlay_app();
        spawn_texts(&mut app);
        let button = app
            .world_mut()
            .spawn((
                Button,
                ModeToggle,
                Interaction::Pressed,
                BackgroundColor::default(),
            ))
            .id();

        app.update();
        assert_eq!(*app.world().resource::<CameraMode>(), CameraMode::Free);
        assert_eq!(text_of(&mut app, OverlayText::ToggleLabel), "Reset Camera");
        assert_eq!(text_of(&mut app, OverlayText::Badge), "FREE ROAM");

        app.world_mut().entity_mut(button).insert(Interaction::None);
        app.update();
        assert_eq!(*app.world().resource::<CameraMode>(), CameraMode::Free);

        app.world_mut().entity_mut(button).insert(Interaction::Pressed);
        app.update();
        assert_eq!(*app.world().resource::<CameraMode>(), CameraMode::Locked);
        assert_eq!(text_of(&mut app, OverlayText::ToggleLabel), "Free View");
    }

    #[test]
    fn focus_name_tracks_the_latest_focus() {
        let mut app = overlay_app();
        spawn_texts(&mut app);
        app.insert_resource(CameraMode::Free);

        app.world_mut()
            .run_system_once(|mut focus: Focus| {
                focus.focus(FOCUS_TARGETS[1].view());
                focus.focus(FOCUS_TARGETS[2].view());
            })
            .unwrap();
        app.update();

        assert_eq!(text_of(&mut app, OverlayText::FocusName), "Chair");
        assert_eq!(
            text_of(&mut app, OverlayText::Hint),
            hint_text(CameraMode::Locked)
        );
    }
}

// End of File
