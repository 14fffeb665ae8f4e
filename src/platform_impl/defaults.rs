// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Native windows are sized by the window manager, so there is nothing to adjust.

use bevy::app::App;

pub(crate) fn tweak_bevy_app(app: &mut App) {
    let _ = app;
}

// End of File
