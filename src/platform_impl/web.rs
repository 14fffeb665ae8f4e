// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use bevy::{prelude::*, window::PrimaryWindow};

/// Keeps the `#bevy` canvas filling the browser viewport as the page is resized.
pub(crate) fn tweak_bevy_app(app: &mut App) {
    app.init_resource::<ViewportSize>()
        .add_systems(PreUpdate, fit_canvas_to_viewport);
}

/// Browser inner size as of the last resize, or `None` before the first frame.
#[derive(Resource, Default, PartialEq)]
struct ViewportSize(Option<(f32, f32)>);

fn fit_canvas_to_viewport(
    mut window: Query<&mut Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    let _ = (|| {
        let mut window = window.single_mut().ok()?;
        let browser_window = web_sys::window()?;
        let width = (browser_window.inner_width().ok()?.as_f64()? as f32).clamp(
            window.resize_constraints.min_width,
            window.resize_constraints.max_width,
        );
        let height = (browser_window.inner_height().ok()?.as_f64()? as f32).clamp(
            window.resize_constraints.min_height,
            window.resize_constraints.max_height,
        );
        // Resizing reallocates the framebuffers, so only do it on an actual change.
        if viewport.0 != Some((width, height)) {
            debug!("Browser viewport is now {width}x{height}");
            window.resolution.set(width, height);
            viewport.0 = Some((width, height));
        }
        Some(())
    })();
}

// End of File
