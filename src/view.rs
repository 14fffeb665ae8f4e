// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Named camera destinations and the focus state that selects between them.

use bevy::{ecs::system::SystemParam, prelude::*};

/// Height of the desktop surface above the floor.
pub const DESK_HEIGHT: f32 = 75.0;

/// A camera destination: where the camera sits and the point it looks at.
///
/// Views are never edited in place.  A focus change swaps in a whole new value.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub position: Vec3,
    pub look_at: Vec3,
    pub name: String,
}

/// A named view attached to a clickable prop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusTarget {
    pub name: &'static str,
    pub position: Vec3,
    pub look_at: Vec3,
}

impl FocusTarget {
    pub const fn new(name: &'static str, position: Vec3, look_at: Vec3) -> Self {
        Self {
            name,
            position,
            look_at,
        }
    }

    pub fn view(&self) -> View {
        View {
            position: self.position,
            look_at: self.look_at,
            name: self.name.to_owned(),
        }
    }
}

pub const OVERVIEW: FocusTarget = FocusTarget::new(
    "Overview",
    Vec3::new(0.0, 110.0, 180.0),
    Vec3::new(0.0, 40.0, 0.0),
);
pub const DESK: FocusTarget = FocusTarget::new(
    "Desk",
    Vec3::new(0.0, 130.0, 90.0),
    Vec3::new(0.0, DESK_HEIGHT, 0.0),
);
pub const CHAIR: FocusTarget = FocusTarget::new(
    "Chair",
    Vec3::new(90.0, 70.0, 110.0),
    Vec3::new(45.0, 45.0, 75.0),
);
/// Looks down onto the turntable, which sits on a table roughly 60 units tall.
pub const RECORD_PLAYER: FocusTarget = FocusTarget::new(
    "Record Player",
    Vec3::new(-140.0, 100.0, 40.0),
    Vec3::new(-140.0, 60.0, 20.0),
);
pub const ACCESSORIES: FocusTarget = FocusTarget::new(
    "Accessories",
    Vec3::new(-75.0, DESK_HEIGHT + 45.0, 35.0),
    Vec3::new(-75.0, DESK_HEIGHT + 10.0, -5.0),
);
/// Eye level with the monitor screen.
pub const COMPUTER: FocusTarget = FocusTarget::new(
    "Computer",
    Vec3::new(0.0, 103.0, 60.0),
    Vec3::new(0.0, 103.0, -15.0),
);
pub const KEYBOARD: FocusTarget = FocusTarget::new(
    "Keyboard",
    Vec3::new(0.0, DESK_HEIGHT + 35.0, 45.0),
    Vec3::new(0.0, DESK_HEIGHT, 28.0),
);
pub const LAMP: FocusTarget = FocusTarget::new(
    "Lamp",
    Vec3::new(85.0, DESK_HEIGHT + 40.0, 30.0),
    Vec3::new(75.0, DESK_HEIGHT + 15.0, -5.0),
);
pub const PLANT: FocusTarget = FocusTarget::new(
    "Plant",
    Vec3::new(170.0, 60.0, 0.0),
    Vec3::new(130.0, 40.0, -50.0),
);

/// Every named view in the office, overview first.
pub const FOCUS_TARGETS: [FocusTarget; 9] = [
    OVERVIEW,
    DESK,
    CHAIR,
    RECORD_PLAYER,
    ACCESSORIES,
    COMPUTER,
    KEYBOARD,
    LAMP,
    PLANT,
];

/// Looks up a registered view by name.
pub fn focus_target(name: &str) -> Option<&'static FocusTarget> {
    FOCUS_TARGETS.iter().find(|target| target.name == name)
}

/// Whether the camera rig pulls the camera toward the current view.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    /// The rig owns the camera.  User rotation and zoom are pulled back toward the view.
    #[default]
    Locked,
    /// The rig is idle and the user may also pan.
    Free,
}

impl CameraMode {
    pub fn is_free(self) -> bool {
        self == CameraMode::Free
    }

    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Locked => CameraMode::Free,
            CameraMode::Free => CameraMode::Locked,
        }
    }
}

/// The single current view.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct ViewState {
    current: View,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current: OVERVIEW.view(),
        }
    }
}

impl ViewState {
    pub fn current(&self) -> &View {
        &self.current
    }

    /// Replaces the current view and returns the camera to locked mode.
    ///
    /// Free mode is left regardless of its previous value; the camera does not jump, the rig
    /// simply starts pulling from wherever the camera sits.
    pub fn focus(&mut self, mode: &mut CameraMode, view: View) -> &View {
        *mode = CameraMode::Locked;
        self.current = view;
        &self.current
    }
}

/// Published after every focus transition, for observers such as the overlay.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct FocusChanged {
    pub name: String,
}

/// System parameter bundling everything a focus transition touches.
#[derive(SystemParam)]
pub struct Focus<'w> {
    views: ResMut<'w, ViewState>,
    mode: ResMut<'w, CameraMode>,
    changed: MessageWriter<'w, FocusChanged>,
}

impl Focus<'_> {
    pub fn focus(&mut self, view: View) {
        let name = self.views.focus(&mut self.mode, view).name.clone();
        info!("Camera focusing on {name}");
        self.changed.write(FocusChanged { name });
    }

    pub fn current(&self) -> &View {
        self.views.current()
    }
}

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewState>()
            .init_resource::<CameraMode>()
            .add_message::<FocusChanged>();
    }
}


// End of File
