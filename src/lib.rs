// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::picking::mesh_picking::{MeshPickingPlugin, MeshPickingSettings, ray_cast::RayCastVisibility};
use bevy::prelude::*;

mod assets;
pub mod glow;
pub mod indicator;
pub mod lamp;
mod loading;
pub mod orbit;
mod overlay;
pub mod picking;
mod platform;
mod platform_impl;
pub mod props;
pub mod record_player;
pub mod rig;
mod scene;
mod start;
pub mod view;

pub use assets::{AssetLibrary, OfficeAssets};
pub use lamp::LampPlugin;
pub use loading::LoadingPlugin;
pub use overlay::OverlayPlugin;
pub use picking::ClickPlugin;
pub use platform::PlatformTweaks;
pub use record_player::RecordPlayerPlugin;
pub use rig::CameraRigPlugin;
pub use scene::ScenePlugin;
pub use start::start;
pub use view::ViewPlugin;

pub const APP_NAME: &str = "Leo Office";

#[derive(States, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppState {
    /// Waiting on the assets the scene cannot open without.
    #[default]
    Loading,
    Office,
}

/// Everything but the window, logging and configuration.
pub struct OfficePlugin;

impl Plugin for OfficePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_plugins(MeshPickingPlugin)
            // The floor trigger is hidden but must still be hit.
            .insert_resource(MeshPickingSettings {
                require_markers: false,
                ray_cast_visibility: RayCastVisibility::Any,
            })
            .add_plugins((
                ViewPlugin,
                CameraRigPlugin,
                ClickPlugin,
                LampPlugin,
                RecordPlayerPlugin,
                OverlayPlugin,
                LoadingPlugin,
                ScenePlugin,
            ));
    }
}

// End of File
