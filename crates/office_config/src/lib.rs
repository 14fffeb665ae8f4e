// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Tunable settings for the office scene.
//!
//! Every value has a default matching the shipped look and feel, so a missing or partial
//! `office.json` is never an error.  On desktop platforms the file is looked up in the
//! per-user configuration directory; on the web the defaults are always used.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

mod error;
pub use error::ConfigError;

mod settings;
pub use settings::{
    AssetSettings, CameraSettings, GlowResponse, LampSettings, PdConfig, RecordPlayerSettings,
};

/// File name of the user configuration, relative to the platform config directory.
pub const CONFIG_FILE_NAME: &str = "office.json";

/// All runtime settings, inserted as a resource by [`OfficeConfigPlugin`].
#[derive(Resource, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    pub camera: CameraSettings,
    pub lamp: LampSettings,
    pub record_player: RecordPlayerSettings,
    pub assets: AssetSettings,
}

impl OfficeConfig {
    /// Parses and validates a JSON document.  Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: OfficeConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config at `path`.  A file that does not exist yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Rejects values the camera and animation systems cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        if !(camera.lerp_fraction > 0.0 && camera.lerp_fraction <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "camera.lerp_fraction",
                reason: "must lie in (0, 1]",
            });
        }
        if camera.min_distance <= 0.0 || camera.min_distance > camera.max_distance {
            return Err(ConfigError::Invalid {
                field: "camera.min_distance",
                reason: "must be positive and not exceed camera.max_distance",
            });
        }
        if camera.min_polar_angle < 0.0 || camera.min_polar_angle > camera.max_polar_angle {
            return Err(ConfigError::Invalid {
                field: "camera.min_polar_angle",
                reason: "must be non-negative and not exceed camera.max_polar_angle",
            });
        }
        if !(0.0..=1.0).contains(&camera.damping_factor) {
            return Err(ConfigError::Invalid {
                field: "camera.damping_factor",
                reason: "must lie in [0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.record_player.volume) {
            return Err(ConfigError::Invalid {
                field: "record_player.volume",
                reason: "must lie in [0, 1]",
            });
        }
        Ok(())
    }
}

/// Location of the user config file, if the platform has a config directory.
#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("org", "leo-office", "LeoOffice")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn default_config_path() -> Option<PathBuf> {
    None
}

/// Loads [`OfficeConfig`] and inserts it as a resource.
///
/// Problems with the file are logged and the defaults are used instead; the scene is always
/// able to start.
#[derive(Default)]
pub struct OfficeConfigPlugin {
    /// Overrides the platform config location.
    pub path: Option<PathBuf>,
}

impl Plugin for OfficeConfigPlugin {
    fn build(&self, app: &mut App) {
        let path = self.path.clone().or_else(default_config_path);
        let config = match path {
            Some(path) => match OfficeConfig::load_from(&path) {
                Ok(config) => {
                    info!("Using office config from {}", path.display());
                    config
                }
                Err(err) => {
                    error!("{err}");
                    warn!("Falling back to default office config.");
                    OfficeConfig::default()
                }
            },
            None => {
                debug!("No config directory on this platform, using default office config.");
                OfficeConfig::default()
            }
        };
        app.insert_resource(config);
    }
}


// End of File
