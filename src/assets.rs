// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::asset::LoadState;
use bevy::prelude::*;
use office_config::{AssetSettings, OfficeConfig};

/// A trait for asset libraries that can be loaded and checked
pub trait AssetLibrary: Resource {
    /// Start loading every asset in this library
    fn load(asset_server: &AssetServer, settings: &AssetSettings) -> Self;

    /// Check if the assets the scene cannot do without are loaded
    fn all_loaded(&self, asset_server: &AssetServer) -> bool;

    /// Paths of required assets that failed to load
    fn failed(&self, asset_server: &AssetServer) -> Vec<String>;
}

/// The texture and music the office needs.
#[derive(Resource, Clone, Default)]
pub struct OfficeAssets {
    /// Shown on the monitor, as both base colour and emissive map.
    pub screen: Handle<Image>,
    /// Played by the record player.  Not waited for: the scene opens without it.
    pub soundtrack: Handle<AudioSource>,
}

impl AssetLibrary for OfficeAssets {
    fn load(asset_server: &AssetServer, settings: &AssetSettings) -> Self {
        OfficeAssets {
            screen: asset_server.load(settings.screen_texture.clone()),
            soundtrack: asset_server.load(settings.soundtrack.clone()),
        }
    }

    fn all_loaded(&self, asset_server: &AssetServer) -> bool {
        matches!(
            asset_server.get_load_state(&self.screen),
            Some(LoadState::Loaded)
        )
    }

    fn failed(&self, asset_server: &AssetServer) -> Vec<String> {
        let mut failed = Vec::new();
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(&self.screen) {
            failed.push(err.to_string());
        }
        failed
    }
}

/// Generic system to load assets using the AssetLibrary trait
pub fn load_assets<T: AssetLibrary>(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<OfficeConfig>,
) {
    let assets = T::load(&asset_server, &config.assets);
    commands.insert_resource(assets);
}

// End of File
