// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read office config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("office config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("office config field `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

// End of File
