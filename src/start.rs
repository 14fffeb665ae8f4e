// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::{APP_NAME, OfficePlugin, PlatformTweaks};
use bevy::{
    asset::AssetMetaCheck,
    log::{DEFAULT_FILTER, LogPlugin},
    prelude::*,
    window::PresentMode,
};
use office_config::OfficeConfigPlugin;

pub fn start() -> AppExit {
    let asset_plugin = AssetPlugin {
        // On the web every meta lookup is a 404.
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: APP_NAME.into(),
            present_mode: PresentMode::AutoNoVsync,
            canvas: Some("#bevy".to_owned()), // For web; no effect elewhere.
            prevent_default_event_handling: true,
            ..default()
        }),
        ..default()
    };

    let log_plugin = LogPlugin {
        filter: format!(
            "{DEFAULT_FILTER},{}=debug,leo_office_config=debug",
            env!("CARGO_CRATE_NAME")
        ),
        ..default()
    };

    let default_plugins = DefaultPlugins
        .set(asset_plugin)
        .set(window_plugin)
        .set(log_plugin);

    App::new()
        .add_plugins(default_plugins)
        .add_plugins(PlatformTweaks)
        .add_plugins(OfficeConfigPlugin::default())
        .add_plugins(OfficePlugin)
        .run()
}

// End of File
