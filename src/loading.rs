// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use crate::AppState;
use crate::assets::{AssetLibrary, OfficeAssets, load_assets};
use bevy::app::App;
use bevy::prelude::*;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize asset loading when entering the Loading state
            .add_systems(OnEnter(AppState::Loading), load_assets::<OfficeAssets>)
            // Continuously check if assets are ready while in the Loading state
            .add_systems(
                Update,
                check_asset_loading::<OfficeAssets>.run_if(in_state(AppState::Loading)),
            );
    }
}

/// Opens the office once the required assets are in.  A failed load keeps the scene closed and
/// is reported once.
fn check_asset_loading<T: AssetLibrary>(
    mut next_state: ResMut<NextState<AppState>>,
    mut reported: Local<bool>,
    asset_server: Res<AssetServer>,
    library: Res<T>,
) {
    if library.all_loaded(&asset_server) {
        info!("Office assets loaded, opening the office");
        next_state.set(AppState::Office);
        return;
    }

    if !*reported {
        let failed = library.failed(&asset_server);
        if !failed.is_empty() {
            for err in &failed {
                error!("Failed to load office asset: {err}");
            }
            *reported = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use office_config::AssetSettings;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A library whose load state is set by hand.
    #[derive(Resource, Default)]
    struct Checklist {
        loaded: bool,
        errors: Vec<String>,
        failure_checks: Arc<AtomicUsize>,
    }

    impl AssetLibrary for Checklist {
        fn load(_asset_server: &AssetServer, _settings: &AssetSettings) -> Self {
            Checklist::default()
        }

        fn all_loaded(&self, _asset_server: &AssetServer) -> bool {
            self.loaded
        }

        fn failed(&self, _asset_server: &AssetServer) -> Vec<String> {
            self.failure_checks.fetch_add(1, Ordering::SeqCst);
            self.errors.clone()
        }
    }

    fn loading_app(checklist: Checklist) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
            .init_state::<AppState>()
            .insert_resource(checklist)
            .add_systems(
                Update,
                check_asset_loading::<Checklist>.run_if(in_state(AppState::Loading)),
            );
        app
    }

    fn state(app: &App) -> AppState {
        *app.world().resource::<State<AppState>>().get()
    }

    #[test]
    fn waits_until_the_library_is_loaded() {
        let mut app = loading_app(Checklist::default());
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::Loading);

        app.world_mut().resource_mut::<Checklist>().loaded = true;
        app.update();
        app.update();
        assert_eq!(state(&app), AppState::Office);
    }

    #[test]
    fn failure_keeps_the_office_closed_and_is_reported_once() {
        let checks = Arc::new(AtomicUsize::new(0));
        let mut app = loading_app(Checklist {
            loaded: false,
            errors: vec!["textures/monitor_screen.png: not found".to_string()],
            failure_checks: checks.clone(),
        });
        for _ in 0..5 {
            app.update();
        }
        assert_eq!(state(&app), AppState::Loading);
        assert_eq!(checks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failures_are_polled_until_one_shows_up() {
        let checks = Arc::new(AtomicUsize::new(0));
        let mut app = loading_app(Checklist {
            failure_checks: checks.clone(),
            ..default()
        });
        app.update();
        app.update();
        assert_eq!(checks.load(Ordering::SeqCst), 2);

        app.world_mut()
            .resource_mut::<Checklist>()
            .errors
            .push("audio/lofi_loop.wav: bad header".to_string());
        app.update();
        app.update();
        assert_eq!(checks.load(Ordering::SeqCst), 3);
    }
}

// End of File
